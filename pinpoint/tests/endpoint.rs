/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::{AwsEndpoint, AwsEndpointStage, AwsEndpointStageError, CredentialScope};
use aws_types::region::{Region, SigningRegion};
use aws_types::SigningService;
use http::Uri;
use pinpoint::operation::GetCampaigns;
use pinpoint::Config;
use smithy_http::middleware::MapRequest;

fn get_campaigns(config: &Config) -> smithy_http::operation::Request {
    let op = GetCampaigns::builder()
        .application_id("app-1")
        .page_size("5")
        .build()
        .unwrap()
        .make_operation(config)
        .unwrap();
    let (request, _) = op.into_request_response();
    request
}

#[test]
fn default_endpoint_is_regional() {
    let config = Config::builder().region(Region::new("eu-west-1")).build();
    let request = AwsEndpointStage
        .apply(get_campaigns(&config))
        .expect("endpoint resolves");
    assert_eq!(
        request.http().uri(),
        &Uri::from_static("https://pinpoint.eu-west-1.amazonaws.com/v1/apps/app-1/campaigns?page-size=5")
    );
    let props = request.properties();
    assert_eq!(
        props.get::<SigningRegion>(),
        Some(&SigningRegion::from(Region::new("eu-west-1")))
    );
    assert_eq!(
        props.get::<SigningService>(),
        Some(&SigningService::from_static("mobiletargeting"))
    );
}

#[test]
fn custom_endpoint_keeps_request_path() {
    let config = Config::builder()
        .region(Region::new("us-east-1"))
        .endpoint_resolver(AwsEndpoint::new(
            Uri::from_static("http://localhost:8080/pinpoint"),
            CredentialScope::builder()
                .region(SigningRegion::from_static("us-west-2"))
                .build(),
        ))
        .build();
    let request = AwsEndpointStage.apply(get_campaigns(&config)).unwrap();
    assert_eq!(
        request.http().uri(),
        &Uri::from_static("http://localhost:8080/pinpoint/v1/apps/app-1/campaigns?page-size=5")
    );
    assert_eq!(
        request.properties().get::<SigningRegion>(),
        Some(&SigningRegion::from_static("us-west-2"))
    );
}

#[test]
fn missing_region_fails_at_endpoint_stage() {
    let config = Config::builder().build();
    let err = AwsEndpointStage
        .apply(get_campaigns(&config))
        .expect_err("no region was configured");
    assert!(matches!(err, AwsEndpointStageError::NoRegion));
}
