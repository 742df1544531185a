/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pinpoint::model::{
    Action, Activity, AttributeDimension, AttributeType, ChannelType, DeliveryStatus, Duration,
    EndpointRequest, GcmMessage, JourneyResponse, MessageRequest, RandomSplitActivity,
    RandomSplitEntry, SegmentDimensions, State, WaitActivity, WaitTime, WriteCampaignRequest,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::HashMap;
use std::str::FromStr;

#[test]
fn builder_sets_and_reads_fields() {
    let message = GcmMessage::builder()
        .action(Action::DeepLink)
        .body("Your order has shipped")
        .title("Order update")
        .silent_push(false)
        .time_to_live(3600)
        .data("orderId", "1234")
        .data("carrier", "UPS")
        .substitutions("name", vec!["Ana".to_string()])
        .build();
    assert_eq!(message.action(), Some(&Action::DeepLink));
    assert_eq!(message.body(), Some("Your order has shipped"));
    assert_eq!(message.silent_push(), Some(false));
    assert_eq!(message.time_to_live(), Some(3600));
    assert_eq!(message.sound(), None);
    let data = message.data().expect("data was set");
    assert_eq!(data.len(), 2);
    assert_eq!(data.get("carrier").map(String::as_str), Some("UPS"));
    assert_eq!(
        message.substitutions().and_then(|s| s.get("name")),
        Some(&vec!["Ana".to_string()])
    );
}

#[test]
fn list_setters_append_and_set_replaces() {
    let dimension = AttributeDimension::builder()
        .attribute_type(AttributeType::Inclusive)
        .values("gold")
        .values("platinum")
        .build();
    assert_eq!(
        dimension.values(),
        Some(&["gold".to_string(), "platinum".to_string()][..])
    );

    let replaced = AttributeDimension::builder()
        .set_attribute_type(dimension.attribute_type.clone())
        .set_values(dimension.values.clone())
        .set_values(Some(vec!["silver".to_string()]))
        .build();
    assert_eq!(replaced.values(), Some(&["silver".to_string()][..]));
    assert_eq!(replaced.attribute_type(), Some(&AttributeType::Inclusive));

    let cleared = AttributeDimension::builder()
        .values("gold")
        .set_values(None)
        .build();
    assert_eq!(cleared.values(), None);
}

#[test]
fn collection_setter_takes_ownership_of_a_copy() {
    let mut tags = HashMap::new();
    tags.insert("team".to_string(), "growth".to_string());
    let request = WriteCampaignRequest::builder()
        .name("spring-sale")
        .set_tags(Some(tags.clone()))
        .build();
    tags.insert("team".to_string(), "retention".to_string());
    assert_eq!(
        request.tags().and_then(|t| t.get("team")).map(String::as_str),
        Some("growth")
    );
}

#[test]
fn equality_is_structural() {
    let a = EndpointRequest::builder()
        .address("device-token")
        .channel_type(ChannelType::Gcm)
        .metrics("sessions", 3.0)
        .build();
    let b = EndpointRequest::builder()
        .metrics("sessions", 3.0)
        .channel_type(ChannelType::Gcm)
        .address("device-token")
        .build();
    assert_eq!(a, b);
    assert_ne!(a, EndpointRequest::builder().address("device-token").build());
    assert_eq!(EndpointRequest::default(), EndpointRequest::builder().build());
}

#[test]
fn debug_output_names_fields() {
    let time = WaitTime::builder().wait_for("PT1H").build();
    let debug = format!("{:?}", time);
    assert!(debug.contains("WaitTime"), "{}", debug);
    assert!(debug.contains("wait_for: Some(\"PT1H\")"), "{}", debug);
    assert!(debug.contains("wait_until: None"), "{}", debug);
}

#[test]
fn serializes_with_wire_names_and_skips_unset() {
    let request = WriteCampaignRequest::builder()
        .name("welcome")
        .segment_id("seg-1")
        .segment_version(2)
        .is_paused(false)
        .tags("env", "prod")
        .build();
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "Name": "welcome",
            "SegmentId": "seg-1",
            "SegmentVersion": 2,
            "IsPaused": false,
            "tags": {"env": "prod"}
        })
    );
}

#[test]
fn acronym_members_use_wire_names() {
    let request = MessageRequest::builder()
        .message_configuration(
            pinpoint::model::DirectMessageConfiguration::builder()
                .gcm_message(GcmMessage::builder().body("hi").build())
                .sms_message(
                    pinpoint::model::SmsMessage::builder()
                        .body("hi")
                        .message_type(pinpoint::model::MessageType::Transactional)
                        .build(),
                )
                .build(),
        )
        .build();
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "MessageConfiguration": {
                "GCMMessage": {"Body": "hi"},
                "SMSMessage": {"Body": "hi", "MessageType": "TRANSACTIONAL"}
            }
        })
    );
}

#[test]
fn deserializes_nested_response_and_ignores_unknown_members() {
    let body = json!({
        "Id": "journey-1",
        "ApplicationId": "app-1",
        "Name": "Onboarding",
        "State": "ACTIVE",
        "LocalTime": true,
        "StartActivity": "split",
        "Activities": {
            "split": {
                "RandomSplit": {
                    "Branches": [
                        {"NextActivity": "wait", "Percentage": 50},
                        {"Percentage": 50}
                    ]
                }
            },
            "wait": {"Wait": {"WaitTime": {"WaitFor": "P1D"}}}
        },
        "tags": {"owner": "lifecycle"},
        "SomethingNew": {"Nested": [1, 2, 3]}
    });
    let journey: JourneyResponse = serde_json::from_value(body).unwrap();
    assert_eq!(journey.state(), Some(&State::Active));
    assert_eq!(journey.local_time(), Some(true));
    assert_eq!(journey.limits(), None);
    let activities = journey.activities().expect("activities");
    let split = Activity::builder()
        .random_split(
            RandomSplitActivity::builder()
                .branches(
                    RandomSplitEntry::builder()
                        .next_activity("wait")
                        .percentage(50)
                        .build(),
                )
                .branches(RandomSplitEntry::builder().percentage(50).build())
                .build(),
        )
        .build();
    assert_eq!(activities.get("split"), Some(&split));
    let wait = Activity::builder()
        .wait(
            WaitActivity::builder()
                .wait_time(WaitTime::builder().wait_for("P1D").build())
                .build(),
        )
        .build();
    assert_eq!(activities.get("wait"), Some(&wait));
    assert_eq!(
        journey.tags().and_then(|t| t.get("owner")).map(String::as_str),
        Some("lifecycle")
    );
}

#[test]
fn serialized_shape_deserializes_to_equal_value() {
    let dimensions = SegmentDimensions::builder()
        .attributes(
            "tier",
            AttributeDimension::builder()
                .attribute_type(AttributeType::Exclusive)
                .values("free")
                .build(),
        )
        .behavior(
            pinpoint::model::SegmentBehaviors::builder()
                .recency(
                    pinpoint::model::RecencyDimension::builder()
                        .duration(Duration::Day7)
                        .recency_type(pinpoint::model::RecencyType::Inactive)
                        .build(),
                )
                .build(),
        )
        .build();
    let text = serde_json::to_string(&dimensions).unwrap();
    let parsed: SegmentDimensions = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, dimensions);
}

#[test]
fn enums_parse_known_and_unknown_values() {
    assert_eq!(ChannelType::from("APNS_VOIP_SANDBOX"), ChannelType::ApnsVoipSandbox);
    assert_eq!(ChannelType::ApnsVoipSandbox.as_str(), "APNS_VOIP_SANDBOX");
    assert_eq!(Duration::from("HR_24"), Duration::Hr24);
    assert_eq!(
        DeliveryStatus::from_str("UNKNOWN_FAILURE").unwrap(),
        DeliveryStatus::UnknownFailure
    );
    let future = ChannelType::from("CARRIER_PIGEON");
    assert_eq!(future, ChannelType::Unknown("CARRIER_PIGEON".to_string()));
    assert_eq!(future.as_str(), "CARRIER_PIGEON");
    assert!(ChannelType::values().contains(&"IN_APP"));
    assert_eq!(State::values().len(), 6);
}

#[test]
fn enums_round_trip_unknown_values_through_json() {
    let value: DeliveryStatus = serde_json::from_str("\"DEFERRED\"").unwrap();
    assert_eq!(value, DeliveryStatus::Unknown("DEFERRED".to_string()));
    assert_eq!(serde_json::to_string(&value).unwrap(), "\"DEFERRED\"");
    assert_eq!(
        serde_json::to_string(&DeliveryStatus::OptOut).unwrap(),
        "\"OPT_OUT\""
    );
    assert!(serde_json::from_str::<DeliveryStatus>("12").is_err());
}
