/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! This modules defines the core, framework agnostic, HTTP middleware interface
//! used by the SDK

use crate::operation;
use crate::response::ParseHttpResponse;
use crate::result::{SdkError, SdkSuccess};
use bytes::{Buf, Bytes};
use std::error::Error;
use tracing::trace;

type BoxError = Box<dyn Error + Send + Sync>;

/// [`MapRequest`] defines a synchronous middleware that transforms an [`operation::Request`].
///
/// Typically, these middleware will read configuration from the `PropertyBag` and use it to
/// augment the request. Endpoint resolution is expressed as `MapRequest`.
///
/// ```rust
/// # use smithy_http::middleware::MapRequest;
/// # use std::convert::Infallible;
/// # use smithy_http::operation;
/// use http::header::{HeaderName, HeaderValue};
/// struct AddHeader(HeaderName, HeaderValue);
/// /// Signaling struct added to the request property bag if a header should be added
/// struct NeedsHeader;
/// impl MapRequest for AddHeader {
///     type Error = Infallible;
///     fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
///         request.augment(|mut request, properties| {
///             if properties.get::<NeedsHeader>().is_some() {
///                 request.headers_mut().append(
///                     self.0.clone(),
///                     self.1.clone(),
///                 );
///             }
///             Ok(request)
///         })
///     }
/// }
/// ```
pub trait MapRequest {
    /// The Error type returned by this operation.
    ///
    /// If this middleware never fails use [std::convert::Infallible] or similar.
    type Error: Into<BoxError>;

    /// Apply this middleware to a request.
    ///
    /// Typically, implementations will use [`request.augment`](crate::operation::Request::augment)
    /// to be able to transform an owned `http::Request`.
    fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error>;
}

/// Load a response using `handler` to parse the results.
///
/// This function is intended to be used on the response side of a middleware chain.
///
/// Success and failure will be split and mapped into `SdkSuccess` and `SdkError`.
/// Generic Parameters:
/// - `B`: The Response Body
/// - `O`: The Http response handler that returns `Result<T, E>`
/// - `T`/`E`: `Result<T, E>` returned by `handler`.
pub async fn load_response<B, T, E, O>(
    mut response: http::Response<B>,
    handler: &O,
) -> Result<SdkSuccess<T>, SdkError<E>>
where
    B: http_body::Body + Unpin,
    B::Error: Into<BoxError>,
    O: ParseHttpResponse<B, Output = Result<T, E>>,
{
    if let Some(parsed_response) = handler.parse_unloaded(&mut response) {
        trace!(response = ?response.status(), "parsed response without loading the body");
        return sdk_result(parsed_response, response.map(|_| Bytes::new()));
    }

    let body = match read_body(response.body_mut()).await {
        Ok(body) => body,
        Err(err) => {
            return Err(SdkError::ResponseError {
                raw: response.map(|_| ()),
                err: err.into(),
            });
        }
    };

    let response = response.map(|_| Bytes::from(body));
    trace!(response = ?response, "read HTTP response body");
    let parsed = handler.parse_loaded(&response);
    sdk_result(parsed, response)
}

async fn read_body<B: http_body::Body + Unpin>(mut body: B) -> Result<Vec<u8>, B::Error> {
    let mut output = Vec::new();
    while let Some(buf) = body.data().await {
        let mut buf = buf?;
        while buf.has_remaining() {
            output.extend_from_slice(buf.chunk());
            buf.advance(buf.chunk().len())
        }
    }
    Ok(output)
}

/// Convert a `Result<T, E>` into an `SdkResult` that includes the raw HTTP response
fn sdk_result<T, E>(
    parsed: Result<T, E>,
    raw: http::Response<Bytes>,
) -> Result<SdkSuccess<T>, SdkError<E>> {
    match parsed {
        Ok(parsed) => Ok(SdkSuccess { raw, parsed }),
        Err(err) => Err(SdkError::ServiceError { raw, err }),
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::middleware::{load_response, MapRequest};
    use crate::operation;
    use crate::response::ParseStrictResponse;
    use crate::result::SdkError;
    use bytes::Bytes;
    use http::{HeaderValue, Response};
    use std::convert::Infallible;

    struct BodyAsString;
    impl ParseStrictResponse for BodyAsString {
        type Output = Result<String, u16>;
        fn parse(&self, response: &Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(String::from_utf8_lossy(response.body()).into_owned())
            } else {
                Err(response.status().as_u16())
            }
        }
    }

    #[tokio::test]
    async fn loads_and_parses_success() {
        let response = Response::builder()
            .status(200)
            .body(SdkBody::from("{\"Id\":\"abc\"}"))
            .unwrap();
        let success = load_response(response, &BodyAsString)
            .await
            .expect("2xx parses as success");
        assert_eq!(success.parsed, "{\"Id\":\"abc\"}");
        assert_eq!(success.raw.body().as_ref(), b"{\"Id\":\"abc\"}");
    }

    #[tokio::test]
    async fn service_errors_keep_raw_response() {
        let response = Response::builder()
            .status(404)
            .body(SdkBody::from("{}"))
            .unwrap();
        match load_response(response, &BodyAsString).await {
            Err(SdkError::ServiceError { raw, err }) => {
                assert_eq!(err, 404);
                assert_eq!(raw.status(), 404);
            }
            other => panic!("expected service error, got {:?}", other),
        }
    }

    struct AddLength;
    impl MapRequest for AddLength {
        type Error = Infallible;
        fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
            request.augment(|mut request, _| {
                let len = request.body().content_length().unwrap_or_default();
                request
                    .headers_mut()
                    .insert(http::header::CONTENT_LENGTH, HeaderValue::from(len));
                Ok(request)
            })
        }
    }

    #[test]
    fn map_request_transforms_request() {
        let request = operation::Request::new(
            http::Request::builder()
                .uri("/v1/apps")
                .body(SdkBody::from("12345"))
                .unwrap(),
        );
        let request = AddLength.apply(request).unwrap();
        assert_eq!(
            request.http().headers().get(http::header::CONTENT_LENGTH).unwrap(),
            "5"
        );
    }
}
