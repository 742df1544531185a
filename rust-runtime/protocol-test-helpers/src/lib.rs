/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use assert_json_diff::{assert_json_matches_no_panic, CompareMode, Config};
use http::{Request, Uri};
use pretty_assertions::Comparison;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("missing query param: expected `{expected}`, found {found:?}")]
    MissingQueryParam {
        expected: String,
        found: Vec<String>,
    },
    #[error("forbidden query param present: `{expected}`")]
    ForbiddenQueryParam { expected: String },
    #[error("required query param missing: `{expected}`")]
    RequiredQueryParam { expected: String },

    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },
    #[error("header `{forbidden}` was not allowed but was set to `{found}`")]
    ForbiddenHeader { forbidden: String, found: String },
    #[error("body did not match. {comparison}\nhint: {hint}")]
    BodyDidNotMatch { comparison: String, hint: String },
    #[error("expected body to be valid {expected} but instead: {found}")]
    InvalidBodyFormat { expected: String, found: String },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        eprintln!("{}", e);
        panic!("Protocol test failed");
    }
}

#[derive(Eq, PartialEq, Hash)]
struct QueryParam<'a> {
    key: &'a str,
    value: Option<&'a str>,
}

impl<'a> QueryParam<'a> {
    fn parse(s: &'a str) -> Self {
        let mut parsed = s.split('=');
        QueryParam {
            key: parsed.next().unwrap_or_default(),
            value: parsed.next(),
        }
    }
}

fn extract_params(uri: &Uri) -> HashSet<&str> {
    uri.query()
        .unwrap_or_default()
        .split('&')
        .filter(|param| !param.is_empty())
        .collect()
}

pub fn validate_query_string<B>(
    request: &Request<B>,
    expected_params: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_params = extract_params(request.uri());
    for param in expected_params {
        if !actual_params.contains(param) {
            return Err(ProtocolTestFailure::MissingQueryParam {
                expected: param.to_string(),
                found: actual_params.iter().map(|s| s.to_string()).collect(),
            });
        }
    }
    Ok(())
}

pub fn forbid_query_params<B>(
    request: &Request<B>,
    forbid_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys: HashSet<&str> = extract_params(request.uri())
        .iter()
        .map(|param| QueryParam::parse(param).key)
        .collect();
    for key in forbid_keys {
        if actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::ForbiddenQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn require_query_params<B>(
    request: &Request<B>,
    require_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys: HashSet<&str> = extract_params(request.uri())
        .iter()
        .map(|param| QueryParam::parse(param).key)
        .collect();
    for key in require_keys {
        if !actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::RequiredQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        // Header lists are compared as comma-delimited strings
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| hv.to_str().unwrap_or("<non-utf8 header>"))
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

pub fn forbid_headers<B>(
    request: &Request<B>,
    forbidden_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in forbidden_headers {
        if let Some(value) = request.headers().get(*key) {
            return Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: key.to_string(),
                found: format!("{:?}", value),
            });
        }
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MediaType {
    /// Json media types are deserialized and compared
    Json,
    /// Other media types are compared literally
    Other,
}

impl<T: AsRef<str>> From<T> for MediaType {
    fn from(inp: T) -> Self {
        match inp.as_ref() {
            "application/json" => MediaType::Json,
            _ => MediaType::Other,
        }
    }
}

/// Compare a request body against the expected body.
///
/// JSON bodies are compared structurally so member order and whitespace don't matter.
pub fn validate_body<T: AsRef<[u8]>>(
    actual_body: T,
    expected_body: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    let body_str = std::str::from_utf8(actual_body.as_ref());
    match (media_type, body_str) {
        (MediaType::Json, Ok(actual_body)) => try_json_eq(actual_body, expected_body),
        (MediaType::Json, Err(_)) => Err(ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: "input was not valid UTF-8".to_owned(),
        }),
        (MediaType::Other, _) => {
            if actual_body.as_ref() != expected_body.as_bytes() {
                Err(ProtocolTestFailure::BodyDidNotMatch {
                    comparison: pretty_comparison(
                        &String::from_utf8_lossy(actual_body.as_ref()),
                        expected_body,
                    ),
                    hint: "body did not match byte for byte".to_owned(),
                })
            } else {
                Ok(())
            }
        }
    }
}

fn pretty_comparison(left: &str, right: &str) -> String {
    format!("{}", Comparison::new(&left, &right))
}

fn try_json_eq(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    let actual_json: serde_json::Value =
        serde_json::from_str(actual).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: e.to_string() + actual,
        })?;
    let expected_json: serde_json::Value =
        serde_json::from_str(expected).expect("expected value must be valid JSON");
    match assert_json_matches_no_panic(
        &actual_json,
        &expected_json,
        Config::new(CompareMode::Strict),
    ) {
        Ok(()) => Ok(()),
        Err(message) => Err(ProtocolTestFailure::BodyDidNotMatch {
            comparison: pretty_comparison(
                &serde_json::to_string_pretty(&actual_json).unwrap_or_default(),
                &serde_json::to_string_pretty(&expected_json).unwrap_or_default(),
            ),
            hint: message,
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        forbid_headers, forbid_query_params, require_query_params, validate_body,
        validate_headers, validate_query_string, MediaType, ProtocolTestFailure,
    };
    use http::Request;

    #[test]
    fn test_validate_empty_query_string() {
        let request = Request::builder().uri("/foo").body(()).unwrap();
        validate_query_string(&request, &[]).expect("no required params should pass");
        validate_query_string(&request, &["a"])
            .err()
            .expect("no params provided");
    }

    #[test]
    fn test_validate_query_string() {
        let request = Request::builder()
            .uri("/v1/apps/app/campaigns?page-size=5&token&prefix=a%20b")
            .body(())
            .unwrap();
        validate_query_string(&request, &["page-size=5"]).expect("param is in the query string");
        validate_query_string(&request, &["token", "page-size=5", "prefix=a%20b"])
            .expect("all params are in the query string");
        validate_query_string(&request, &["page-size"]).expect_err("no parameter should match");
        validate_query_string(&request, &["page-size=50"]).expect_err("no parameter should match");
    }

    #[test]
    fn test_forbid_and_require_query_param() {
        let request = Request::builder()
            .uri("/foo?a=b&c&d=efg")
            .body(())
            .unwrap();
        forbid_query_params(&request, &["a"]).expect_err("a is a query param");
        forbid_query_params(&request, &["not_included"]).expect("query param not included");
        forbid_query_params(&request, &["a=b"]).expect("should be matching against keys");
        require_query_params(&request, &["c"]).expect("c is a query param");
        require_query_params(&request, &["not_included"]).expect_err("query param not included");
    }

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("Content-Type", "application/json")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .body(())
            .unwrap();

        validate_headers(&request, &[("content-type", "application/json")])
            .expect("header present");
        validate_headers(&request, &[("Content-Type", "Application/JSON")])
            .expect_err("case sensitive");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
        forbid_headers(&request, &["content-length"]).expect("not set");
        forbid_headers(&request, &["content-type"]).expect_err("set");
    }

    #[test]
    fn test_validate_json_body() {
        let expected = r#"{"Name": "welcome", "HoldoutPercent": 5}"#;
        let actual = r#"{"HoldoutPercent":5,"Name":"welcome"}"#;
        validate_body(&actual, expected, MediaType::Json).expect("inputs matched as JSON");

        let actual = r#"{"HoldoutPercent":6,"Name":"welcome"}"#;
        validate_body(&actual, expected, MediaType::Json).expect_err("values differ");

        let actual = r#"{"HoldoutPercent":5,"Name":"welcome","IsPaused":false}"#;
        validate_body(&actual, expected, MediaType::Json).expect_err("extra member");
    }

    #[test]
    fn test_validate_non_json_body() {
        validate_body(&"", "", MediaType::Other).expect("empty bodies match");
        validate_body(&"abc", "abd", MediaType::Other).expect_err("bodies differ");
        assert_eq!(MediaType::from("application/json"), MediaType::Json);
        assert_eq!(MediaType::from("text/plain"), MediaType::Other);
    }
}
