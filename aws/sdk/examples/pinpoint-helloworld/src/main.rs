/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error;
use std::process;

use aws_endpoint::AwsEndpointStage;
use pinpoint::model::{ChannelType, DirectMessageConfiguration, MessageRequest, SmsMessage};
use pinpoint::operation::{GetSegments, SendMessages};
use pinpoint::Region;
use smithy_http::body::SdkBody;
use smithy_http::middleware::{load_response, MapRequest};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
struct Opt {
    /// Region to resolve endpoints for. Falls back to `AWS_REGION` / `AWS_DEFAULT_REGION`.
    #[structopt(short, long)]
    region: Option<String>,

    /// Pinpoint project (application) ID
    #[structopt(short, long, default_value = "my-project")]
    application: String,

    /// Phone number to address the sample SMS to
    #[structopt(short, long, default_value = "+12065550100")]
    phone: String,

    #[structopt(short, long)]
    verbose: bool,
}

fn print_request(request: &smithy_http::operation::Request) {
    let http = request.http();
    println!("{} {}", http.method(), http.uri());
    for (name, value) in http.headers() {
        println!("    {}: {:?}", name, value);
    }
    if let Some(body) = http.body().bytes().filter(|body| !body.is_empty()) {
        println!("    {}", String::from_utf8_lossy(body));
    }
}

async fn run(opt: Opt) -> Result<(), Box<dyn Error>> {
    let config = match opt.region {
        Some(region) => pinpoint::Config::builder()
            .region(Region::new(region))
            .build(),
        None => pinpoint::Config::from_env(),
    };

    let send = SendMessages::builder()
        .application_id(&opt.application)
        .message_request(
            MessageRequest::builder()
                .addresses(
                    &opt.phone,
                    pinpoint::model::AddressConfiguration::builder()
                        .channel_type(ChannelType::Sms)
                        .build(),
                )
                .message_configuration(
                    DirectMessageConfiguration::builder()
                        .sms_message(SmsMessage::builder().body("Hello from Pinpoint").build())
                        .build(),
                )
                .build(),
        )
        .build()?
        .make_operation(&config)?;
    let (request, _) = send.into_request_response();
    print_request(&AwsEndpointStage.apply(request)?);

    let list = GetSegments::builder()
        .application_id(&opt.application)
        .page_size("10")
        .build()?
        .make_operation(&config)?;
    let (request, parts) = list.into_request_response();
    print_request(&AwsEndpointStage.apply(request)?);

    // A canned service response stands in for the transport
    let response = http::Response::builder()
        .status(200)
        .body(SdkBody::from(
            r#"{"Item": [{"Id": "seg-1", "Name": "subscribers", "SegmentType": "DIMENSIONAL"}]}"#,
        ))?;
    let segments = load_response(response, &parts.response_handler).await?;
    for segment in segments
        .parsed
        .segments_response()
        .and_then(|r| r.item())
        .unwrap_or_default()
    {
        println!(
            "segment {} ({})",
            segment.id().unwrap_or_default(),
            segment.name().unwrap_or_default()
        );
    }

    let throttled = http::Response::builder()
        .status(429)
        .body(SdkBody::from(r#"{"Message": "Too many requests"}"#))?;
    if let Err(err) = load_response(throttled, &GetSegments::new()).await {
        println!("error response: {}", err);
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let opt = Opt::from_args();
    if opt.verbose {
        println!("Pinpoint client version: {}", pinpoint::PKG_VERSION);
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("debug"))
            .init();
    }

    if let Err(e) = run(opt).await {
        println!("Got an error: {}", e);
        process::exit(1);
    }
}
