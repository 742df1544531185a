/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic types used by generated service crates.
//!
//! Nothing in this crate knows about HTTP: see `smithy-http` for the request/response side.

pub mod error;
pub mod retry;

pub use crate::error::Error;
