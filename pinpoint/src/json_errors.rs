/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::{
    BadRequestException, ForbiddenException, InternalServerErrorException,
    MethodNotAllowedException, NotFoundException, ServiceException, TooManyRequestsException,
};
use crate::json_deser::deser_exception;
use bytes::Bytes;
use http::header::HeaderMap;
use serde_json::Value;

/// An error response, split by how much of it could be understood
#[derive(Debug)]
pub(crate) enum ParsedError {
    /// The error code named a modeled exception
    Modeled(ServiceException, smithy_types::Error),
    /// The error code was missing or unknown
    Generic(smithy_types::Error),
    /// The error code named a modeled exception but its body could not be deserialized
    Malformed(serde_json::Error, smithy_types::Error),
}

fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn code_for_status(status: u16) -> Option<&'static str> {
    match status {
        400 => Some("BadRequestException"),
        403 => Some("ForbiddenException"),
        404 => Some("NotFoundException"),
        405 => Some("MethodNotAllowedException"),
        429 => Some("TooManyRequestsException"),
        500 => Some("InternalServerErrorException"),
        _ => None,
    }
}

fn body_str<'a>(body: Option<&'a Value>, keys: &[&str]) -> Option<&'a str> {
    let body = body?;
    keys.iter().find_map(|key| body.get(key).and_then(Value::as_str))
}

fn header_str<'a>(headers: &'a HeaderMap, key: &str) -> Option<&'a str> {
    headers.get(key).and_then(|value| value.to_str().ok())
}

/// Extract the error code, message and request ID from an error response
///
/// The code comes from the `x-amzn-ErrorType` header, then the `code` or `__type` body members,
/// then the HTTP status.
pub(crate) fn parse_generic_error(
    status: u16,
    headers: &HeaderMap,
    body: Option<&Value>,
) -> smithy_types::Error {
    let mut err_builder = smithy_types::Error::builder();
    let code = std::iter::once(header_str(headers, "x-amzn-errortype"))
        .chain(["code", "__type"].iter().map(|key| body_str(body, &[*key])))
        .flatten()
        .map(sanitize_error_code)
        .find(|code| !code.is_empty())
        .or_else(|| code_for_status(status));
    if let Some(code) = code {
        err_builder.code(code);
    }
    if let Some(message) = body_str(body, &["Message", "message", "errorMessage"]) {
        err_builder.message(message);
    }
    let request_id =
        header_str(headers, "x-amzn-requestid").or_else(|| body_str(body, &["RequestID"]));
    if let Some(request_id) = request_id {
        err_builder.request_id(request_id);
    }
    err_builder.build()
}

pub(crate) fn parse_error(response: &http::Response<Bytes>) -> ParsedError {
    // Bodies that aren't JSON (e.g. from a proxy) still carry a status and headers
    let body: Option<Value> = serde_json::from_slice(response.body()).ok();
    let body = body.as_ref();
    let meta = parse_generic_error(response.status().as_u16(), response.headers(), body);
    let exception = match meta.code() {
        Some("BadRequestException") => deser_exception::<BadRequestException>(body)
            .map(|e| ServiceException::BadRequest(e.with_meta(&meta))),
        Some("ForbiddenException") => deser_exception::<ForbiddenException>(body)
            .map(|e| ServiceException::Forbidden(e.with_meta(&meta))),
        Some("InternalServerErrorException") => {
            deser_exception::<InternalServerErrorException>(body)
                .map(|e| ServiceException::InternalServerError(e.with_meta(&meta)))
        }
        Some("MethodNotAllowedException") => deser_exception::<MethodNotAllowedException>(body)
            .map(|e| ServiceException::MethodNotAllowed(e.with_meta(&meta))),
        Some("NotFoundException") => deser_exception::<NotFoundException>(body)
            .map(|e| ServiceException::NotFound(e.with_meta(&meta))),
        Some("TooManyRequestsException") => deser_exception::<TooManyRequestsException>(body)
            .map(|e| ServiceException::TooManyRequests(e.with_meta(&meta))),
        _ => {
            tracing::debug!(code = ?meta.code(), status = %response.status(), "unmodeled error response");
            return ParsedError::Generic(meta);
        }
    };
    match exception {
        Ok(exception) => ParsedError::Modeled(exception, meta),
        Err(err) => ParsedError::Malformed(err, meta),
    }
}

#[cfg(test)]
mod test {
    use crate::error::ServiceException;
    use crate::json_errors::{parse_error, parse_generic_error, sanitize_error_code, ParsedError};
    use bytes::Bytes;
    use http::header::HeaderMap;
    use http::Response;
    use serde_json::json;

    #[test]
    fn error_code_from_header() {
        let response = Response::builder()
            .status(400)
            .header("X-Amzn-Errortype", "NotFoundException:http://internal.amazon.com/coral/")
            .header("x-amzn-requestid", "req-1")
            .body(Bytes::from_static(br#"{"Message": "Resource not found"}"#))
            .unwrap();
        match parse_error(&response) {
            ParsedError::Modeled(ServiceException::NotFound(exception), meta) => {
                assert_eq!(exception.message(), Some("Resource not found"));
                assert_eq!(exception.request_id(), Some("req-1"));
                assert_eq!(meta.code(), Some("NotFoundException"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn error_code_from_body() {
        let body = json!({"__type": "com.amazonaws.pinpoint#ForbiddenException", "message": "denied"});
        let meta = parse_generic_error(418, &HeaderMap::new(), Some(&body));
        assert_eq!(meta.code(), Some("ForbiddenException"));
        assert_eq!(meta.message(), Some("denied"));
        assert_eq!(meta.request_id(), None);
    }

    #[test]
    fn empty_header_code_falls_back_to_body() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-amzn-errortype",
            ":http://internal.amazon.com/coral/".parse().unwrap(),
        );
        let body = json!({"__type": "com.amazonaws.pinpoint#NotFoundException"});
        let meta = parse_generic_error(400, &headers, Some(&body));
        assert_eq!(meta.code(), Some("NotFoundException"));
    }

    #[test]
    fn empty_code_member_falls_back_to_type() {
        let body = json!({"code": "", "__type": "NotFoundException"});
        let meta = parse_generic_error(400, &HeaderMap::new(), Some(&body));
        assert_eq!(meta.code(), Some("NotFoundException"));
    }

    #[test]
    fn error_code_from_status() {
        let body = json!({"Message": "Slow down", "RequestID": "req-9"});
        let meta = parse_generic_error(429, &HeaderMap::new(), Some(&body));
        assert_eq!(meta.code(), Some("TooManyRequestsException"));
        assert_eq!(meta.request_id(), Some("req-9"));

        let meta = parse_generic_error(502, &HeaderMap::new(), None);
        assert_eq!(meta.code(), None);
    }

    #[test]
    fn unknown_code_is_generic() {
        let response = Response::builder()
            .status(400)
            .header("x-amzn-ErrorType", "PayloadTooLargeException")
            .body(Bytes::from_static(b"{}"))
            .unwrap();
        match parse_error(&response) {
            ParsedError::Generic(meta) => assert_eq!(meta.code(), Some("PayloadTooLargeException")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn non_json_body_uses_status() {
        let response = Response::builder()
            .status(500)
            .body(Bytes::from_static(b"<html>oops</html>"))
            .unwrap();
        assert!(matches!(
            parse_error(&response),
            ParsedError::Modeled(ServiceException::InternalServerError(_), _)
        ));
    }

    #[test]
    fn mistyped_exception_body_is_malformed() {
        let response = Response::builder()
            .status(400)
            .body(Bytes::from_static(br#"{"Message": ["not", "a", "string"]}"#))
            .unwrap();
        assert!(matches!(parse_error(&response), ParsedError::Malformed(_, _)));
    }

    #[test]
    fn sanitize_namespace_and_url() {
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(
            sanitize_error_code("FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code(
                "aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"
            ),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }
}
