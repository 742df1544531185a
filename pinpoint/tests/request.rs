/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::Region;
use aws_types::SigningService;
use pinpoint::input::{
    CreateCampaignInput, GetCampaignVersionInput, GetEmailTemplateInput, ListTemplatesInput,
};
use pinpoint::model::{
    ChannelType, DirectMessageConfiguration, EndpointBatchItem, EndpointBatchRequest,
    EndpointDemographic, MessageRequest, Schedule, SmsMessage, WriteCampaignRequest,
};
use pinpoint::{BuildError, Config};
use protocol_test_helpers::{
    assert_ok, forbid_headers, forbid_query_params, validate_body, validate_headers,
    validate_query_string, MediaType,
};

fn config() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

#[test]
fn create_campaign_request() {
    let op = CreateCampaignInput::builder()
        .application_id("app-1")
        .write_campaign_request(
            WriteCampaignRequest::builder()
                .name("welcome")
                .segment_id("seg-1")
                .schedule(
                    Schedule::builder()
                        .start_time("IMMEDIATE")
                        .frequency(pinpoint::model::Frequency::Once)
                        .build(),
                )
                .build(),
        )
        .build()
        .unwrap()
        .make_operation(&config())
        .expect("operation is valid");
    let request = op.request().http();
    assert_eq!(request.method(), "POST");
    assert_eq!(request.uri(), "/v1/apps/app-1/campaigns");
    assert_ok(validate_headers(
        request,
        &[("content-type", "application/json")],
    ));
    let body = request.body().bytes().expect("body is loaded");
    assert_eq!(
        request.headers().get("content-length").unwrap(),
        body.len().to_string().as_str()
    );
    assert_ok(validate_body(
        body,
        r#"{"Name": "welcome", "SegmentId": "seg-1", "Schedule": {"StartTime": "IMMEDIATE", "Frequency": "ONCE"}}"#,
        MediaType::Json,
    ));
    assert_eq!(op.metadata().map(|m| m.name()), Some("CreateCampaign"));
    assert_eq!(op.metadata().map(|m| m.service()), Some("pinpoint"));
}

#[test]
fn property_bag_is_populated() {
    let op = pinpoint::operation::GetApnsChannel::builder()
        .application_id("app-1")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let props = op.properties();
    assert_eq!(props.get::<Region>(), Some(&Region::new("us-east-1")));
    assert_eq!(
        props.get::<SigningService>(),
        Some(&SigningService::from_static("mobiletargeting"))
    );
    assert!(aws_endpoint::get_endpoint_resolver(&props).is_some());
}

#[test]
fn bodyless_request_has_no_content_headers() {
    let op = pinpoint::operation::DeleteSegment::builder()
        .application_id("app-1")
        .segment_id("seg-1")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), "DELETE");
    assert_eq!(request.uri(), "/v1/apps/app-1/segments/seg-1");
    assert_ok(forbid_headers(request, &["content-type", "content-length"]));
    assert_eq!(request.body().bytes(), Some(&b""[..]));
}

#[test]
fn labels_are_percent_encoded() {
    let op = GetCampaignVersionInput::builder()
        .application_id("app/1")
        .campaign_id("spring sale")
        .version("3")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_eq!(
        op.request().http().uri(),
        "/v1/apps/app%2F1/campaigns/spring%20sale/versions/3"
    );
}

#[test]
fn query_parameters_are_written_when_set() {
    let op = ListTemplatesInput::builder()
        .page_size("10")
        .prefix("welcome email")
        .template_type("EMAIL")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.uri().path(), "/v1/templates");
    assert_ok(validate_query_string(
        request,
        &["page-size=10", "prefix=welcome%20email", "template-type=EMAIL"],
    ));
    assert_ok(forbid_query_params(request, &["next-token"]));
}

#[test]
fn unset_query_parameters_are_omitted() {
    let op = pinpoint::operation::GetSegments::builder()
        .application_id("app-1")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_eq!(op.request().http().uri(), "/v1/apps/app-1/segments");
    assert_eq!(op.request().http().uri().query(), None);
}

#[test]
fn journey_metrics_uses_next_token() {
    let op = pinpoint::operation::GetJourneyExecutionMetrics::builder()
        .application_id("app-1")
        .journey_id("j-1")
        .next_token("abc==")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_eq!(
        op.request().http().uri(),
        "/v1/apps/app-1/journeys/j-1/execution-metrics?next-token=abc%3D%3D"
    );
}

#[test]
fn email_template_version_is_a_query_parameter() {
    let op = GetEmailTemplateInput::builder()
        .template_name("welcome")
        .version("2")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    assert_eq!(
        op.request().http().uri(),
        "/v1/templates/welcome/email?version=2"
    );
}

#[test]
fn send_messages_body() {
    let op = pinpoint::operation::SendMessages::builder()
        .application_id("app-1")
        .message_request(
            MessageRequest::builder()
                .addresses(
                    "+12065550100",
                    pinpoint::model::AddressConfiguration::builder()
                        .channel_type(ChannelType::Sms)
                        .build(),
                )
                .message_configuration(
                    DirectMessageConfiguration::builder()
                        .sms_message(SmsMessage::builder().body("Your code is 1234").build())
                        .build(),
                )
                .build(),
        )
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.uri(), "/v1/apps/app-1/messages");
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{
            "Addresses": {"+12065550100": {"ChannelType": "SMS"}},
            "MessageConfiguration": {"SMSMessage": {"Body": "Your code is 1234"}}
        }"#,
        MediaType::Json,
    ));
}

#[test]
fn update_endpoints_batch_body() {
    let op = pinpoint::operation::UpdateEndpointsBatch::builder()
        .application_id("app-1")
        .endpoint_batch_request(
            EndpointBatchRequest::builder()
                .item(
                    EndpointBatchItem::builder()
                        .id("ep-1")
                        .channel_type(ChannelType::Email)
                        .address("user@example.com")
                        .attributes("interests", vec!["music".to_string(), "books".to_string()])
                        .demographic(EndpointDemographic::builder().timezone("Europe/Paris").build())
                        .build(),
                )
                .build(),
        )
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), "PUT");
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{"Item": [{
            "Id": "ep-1",
            "ChannelType": "EMAIL",
            "Address": "user@example.com",
            "Attributes": {"interests": ["music", "books"]},
            "Demographic": {"Timezone": "Europe/Paris"}
        }]}"#,
        MediaType::Json,
    ));
}

#[test]
fn missing_label_fails() {
    let err = pinpoint::operation::GetCampaign::builder()
        .application_id("app-1")
        .build()
        .unwrap()
        .make_operation(&config())
        .expect_err("campaign id is required");
    match err {
        BuildError::MissingField { field, .. } => assert_eq!(field, "campaign_id"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn empty_label_fails() {
    let err = pinpoint::operation::GetEndpoint::builder()
        .application_id("")
        .endpoint_id("ep-1")
        .build()
        .unwrap()
        .make_operation(&config())
        .expect_err("application id must not be empty");
    assert!(matches!(
        err,
        BuildError::MissingField {
            field: "application_id",
            ..
        }
    ));
}

#[test]
fn missing_payload_fails() {
    let err = pinpoint::operation::UpdateGcmChannel::builder()
        .application_id("app-1")
        .build()
        .unwrap()
        .make_operation(&config())
        .expect_err("payload is required");
    assert!(matches!(
        err,
        BuildError::MissingField {
            field: "gcm_channel_request",
            ..
        }
    ));
    assert!(err.to_string().contains("gcm_channel_request"));
}

#[test]
fn operation_without_region_still_builds() {
    let op = pinpoint::operation::GetApplicationSettings::builder()
        .application_id("app-1")
        .build()
        .unwrap()
        .make_operation(&Config::builder().build())
        .unwrap();
    assert_eq!(op.properties().get::<Region>(), None);
}

#[test]
fn input_accessors() {
    let input = CreateCampaignInput::builder()
        .application_id("app-1")
        .build()
        .unwrap();
    assert_eq!(input.application_id(), Some("app-1"));
    assert_eq!(input.write_campaign_request(), None);
}
