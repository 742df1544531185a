/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon Pinpoint is a messaging service for push notifications, SMS, email and voice, with
//! campaigns, segments, journeys and message templates built on top.
//!
//! Every operation is a unit struct in [`operation`] with an input builder in [`input`]:
//!
//! ```rust
//! use pinpoint::{Config, Region};
//!
//! let config = Config::builder().region(Region::new("us-east-1")).build();
//! let operation = pinpoint::operation::GetCampaigns::builder()
//!     .application_id("my-app")
//!     .page_size("25")
//!     .build()
//!     .expect("valid input")
//!     .make_operation(&config)
//!     .expect("valid operation");
//! assert_eq!(
//!     operation.request().http().uri(),
//!     "/v1/apps/my-app/campaigns?page-size=25"
//! );
//! ```
//!
//! The resulting [`Operation`](smithy_http::operation::Operation) carries the region, endpoint
//! resolver and signing service in its property bag. Apply
//! [`AwsEndpointStage`](aws_endpoint::AwsEndpointStage) to resolve the endpoint, dispatch it with
//! any HTTP client and hand the response to [`load_response`](smithy_http::middleware::load_response)
//! with the operation's response handler.

pub mod config;
pub mod error;
pub mod input;
mod json_deser;
mod json_errors;
pub mod model;
pub mod operation;
pub mod output;

pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub use aws_types::region::Region;
pub use config::Config;
pub use smithy_http::operation::BuildError;
pub use smithy_http::result::{SdkError, SdkSuccess};
