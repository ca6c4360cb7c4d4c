/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Application Auto Scaling
//!
//! Configure automatic scaling for ECS services, Spot Fleets, EMR instance groups, AppStream
//! fleets, DynamoDB tables and indexes, Aurora replicas, SageMaker endpoint variants, Comprehend
//! endpoints, Lambda provisioned concurrency, Keyspaces tables and custom resources.
//!
//! A resource is first registered as a scalable target with `RegisterScalableTarget`. Scaling
//! policies and scheduled actions then adjust its capacity between the registered bounds.

mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;

pub use crate::client::{ApplicationAutoScaling, Client};
pub use crate::config::Config;
pub use aws_hyper::{RetryConfig, TimeoutConfig};
pub use aws_types::region::Region;
pub use aws_types::Credentials;
pub use smithy_http::result::SdkError;

pub const TARGET_PREFIX: &str = "AnyScaleFrontendService";
/// Endpoint prefix, also the SigV4 signing name
pub const ENDPOINT_PREFIX: &str = "application-autoscaling";
pub const SERVICE_ID: &str = "Application Auto Scaling";
pub const API_VERSION: &str = "2016-02-06";
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
