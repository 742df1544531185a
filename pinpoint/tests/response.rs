/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;
use pinpoint::error::{DeleteCampaignErrorKind, GetSegmentError, GetSegmentErrorKind};
use pinpoint::model::{DeliveryStatus, SegmentType};
use pinpoint::operation::{DeleteCampaign, GetSegment, SendMessages};
use pinpoint::SdkError;
use smithy_http::body::SdkBody;
use smithy_http::middleware::load_response;
use smithy_http::response::ParseStrictResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::error::Error;

fn response(status: u16, body: &'static str) -> Response<Bytes> {
    Response::builder()
        .status(status)
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

fn get_segment_error(response: Response<Bytes>) -> GetSegmentError {
    GetSegment::new()
        .parse(&response)
        .expect_err("response is an error")
}

#[test]
fn parse_segment_response() {
    let output = GetSegment::new()
        .parse(&response(
            200,
            r#"{
                "ApplicationId": "app-1",
                "Id": "seg-1",
                "Name": "subscribers",
                "SegmentType": "DIMENSIONAL",
                "Version": 4,
                "CreationDate": "2021-05-01T10:00:00.000Z",
                "tags": {"team": "growth"}
            }"#,
        ))
        .expect("valid response");
    let segment = output.segment_response().expect("payload is set");
    assert_eq!(segment.id(), Some("seg-1"));
    assert_eq!(segment.segment_type(), Some(&SegmentType::Dimensional));
    assert_eq!(segment.version(), Some(4));
    assert_eq!(
        segment.tags().and_then(|tags| tags.get("team")).map(String::as_str),
        Some("growth")
    );
}

#[test]
fn parse_message_response() {
    let output = SendMessages::new()
        .parse(&response(
            200,
            r#"{
                "ApplicationId": "app-1",
                "RequestId": "req-1",
                "Result": {
                    "+12065550100": {
                        "DeliveryStatus": "SUCCESSFUL",
                        "StatusCode": 200,
                        "MessageId": "msg-1"
                    }
                }
            }"#,
        ))
        .unwrap();
    let result = output
        .message_response()
        .and_then(|r| r.result())
        .and_then(|r| r.get("+12065550100"))
        .expect("result for the address");
    assert_eq!(result.delivery_status(), Some(&DeliveryStatus::Successful));
    assert_eq!(result.status_code(), Some(200));
}

#[test]
fn empty_success_body_has_no_payload() {
    let output = DeleteCampaign::new().parse(&response(200, "")).unwrap();
    assert_eq!(output.campaign_response(), None);
}

#[test]
fn malformed_success_body_is_unhandled() {
    let err = GetSegment::new()
        .parse(&response(200, "{not json"))
        .expect_err("body is malformed");
    assert!(matches!(err.kind, GetSegmentErrorKind::Unhandled(_)));
    assert!(err.source().is_some());
}

#[test]
fn error_code_from_header() {
    let err = get_segment_error(
        Response::builder()
            .status(400)
            .header("x-amzn-ErrorType", "NotFoundException:http://internal.amazon.com/coral/")
            .header("x-amzn-RequestId", "req-42")
            .body(Bytes::from_static(br#"{"Message": "Segment not found"}"#))
            .unwrap(),
    );
    assert!(err.is_not_found_exception());
    assert_eq!(err.code(), Some("NotFoundException"));
    assert_eq!(err.message(), Some("Segment not found"));
    assert_eq!(err.request_id(), Some("req-42"));
    match &err.kind {
        GetSegmentErrorKind::NotFoundException(inner) => {
            assert_eq!(inner.message(), Some("Segment not found"));
            assert_eq!(inner.request_id(), Some("req-42"));
        }
        other => panic!("unexpected kind: {:?}", other),
    }
    assert_eq!(err.to_string(), "NotFoundException: Segment not found");
}

#[test]
fn error_code_from_body() {
    let err = get_segment_error(response(
        400,
        r#"{"__type": "com.amazonaws.pinpoint#BadRequestException", "Message": "Invalid page size", "RequestID": "req-7"}"#,
    ));
    assert!(err.is_bad_request_exception());
    assert_eq!(err.request_id(), Some("req-7"));
    assert_eq!(err.error_kind(), None);
}

#[test]
fn error_code_from_status() {
    let err = get_segment_error(response(403, r#"{"message": "Missing authentication token"}"#));
    assert!(err.is_forbidden_exception());
    assert_eq!(err.message(), Some("Missing authentication token"));

    let err = get_segment_error(response(405, "{}"));
    assert!(err.is_method_not_allowed_exception());
    assert_eq!(err.message(), None);
}

#[test]
fn throttling_and_server_errors_are_classified() {
    let throttled = get_segment_error(response(429, r#"{"Message": "Too many requests"}"#));
    assert!(throttled.is_too_many_requests_exception());
    assert_eq!(throttled.error_kind(), Some(ErrorKind::ThrottlingError));
    assert_eq!(ProvideErrorKind::code(&throttled), Some("TooManyRequestsException"));

    let server = get_segment_error(response(500, r#"{"Message": "Internal failure"}"#));
    assert!(server.is_internal_server_error_exception());
    assert_eq!(server.error_kind(), Some(ErrorKind::ServerError));
}

#[test]
fn unknown_error_code_is_unhandled() {
    let err = get_segment_error(response(
        400,
        r#"{"code": "PayloadTooLargeException", "message": "Request entity too large"}"#,
    ));
    assert!(matches!(err.kind, GetSegmentErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("PayloadTooLargeException"));
    assert_eq!(err.message(), Some("Request entity too large"));
    assert!(!err.is_bad_request_exception());
}

#[test]
fn unmapped_status_without_code_is_unhandled() {
    let err = get_segment_error(response(503, "<html>Service Unavailable</html>"));
    assert!(matches!(err.kind, GetSegmentErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);
    assert_eq!(err.error_kind(), Some(ErrorKind::ServerError));
}

#[test]
fn unmodeled_errors_are_classified_by_status() {
    let throttled = get_segment_error(
        Response::builder()
            .status(429)
            .header("x-amzn-ErrorType", "ThrottlingException")
            .body(Bytes::from_static(b"{}"))
            .unwrap(),
    );
    assert!(matches!(throttled.kind, GetSegmentErrorKind::Unhandled(_)));
    assert_eq!(throttled.code(), Some("ThrottlingException"));
    assert_eq!(throttled.error_kind(), Some(ErrorKind::ThrottlingError));

    let rejected = get_segment_error(response(413, r#"{"code": "PayloadTooLargeException"}"#));
    assert_eq!(rejected.error_kind(), Some(ErrorKind::ClientError));
}

#[test]
fn blank_header_code_falls_back_to_body_type() {
    let err = get_segment_error(
        Response::builder()
            .status(400)
            .header("x-amzn-ErrorType", ":http://internal.amazon.com/coral/")
            .body(Bytes::from_static(
                br#"{"__type": "com.amazonaws.pinpoint#NotFoundException", "Message": "gone"}"#,
            ))
            .unwrap(),
    );
    assert!(err.is_not_found_exception());
    assert_eq!(err.code(), Some("NotFoundException"));
}

#[test]
fn blank_code_member_falls_back_to_type() {
    let err = get_segment_error(response(
        400,
        r#"{"code": "", "__type": "NotFoundException", "Message": "gone"}"#,
    ));
    assert!(err.is_not_found_exception());
}

#[test]
fn error_kinds_are_per_operation() {
    let err = DeleteCampaign::new()
        .parse(&response(404, r#"{"Message": "Campaign not found"}"#))
        .expect_err("404 is an error");
    assert!(matches!(err.kind, DeleteCampaignErrorKind::NotFoundException(_)));
}

#[tokio::test]
async fn load_success_response() {
    let http_response = Response::builder()
        .status(200)
        .body(SdkBody::from(r#"{"Id": "seg-1", "Name": "subscribers"}"#))
        .unwrap();
    let success = load_response(http_response, &GetSegment::new())
        .await
        .expect("response is a success");
    assert_eq!(success.raw.status(), 200);
    assert_eq!(
        success.parsed.segment_response().and_then(|s| s.name()),
        Some("subscribers")
    );
}

#[tokio::test]
async fn load_error_response() {
    let http_response = Response::builder()
        .status(404)
        .header("x-amzn-RequestId", "req-9")
        .body(SdkBody::from(r#"{"Message": "Segment not found"}"#))
        .unwrap();
    let err = load_response(http_response, &GetSegment::new())
        .await
        .expect_err("response is an error");
    match err {
        SdkError::ServiceError { raw, err } => {
            assert_eq!(raw.status(), 404);
            assert!(err.is_not_found_exception());
            assert_eq!(err.request_id(), Some("req-9"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
