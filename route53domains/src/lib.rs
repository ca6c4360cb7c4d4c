/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon Route 53 Domains
//!
//! Amazon Route 53 API actions let you register domain names and perform related operations.
//!
//! ```no_run
//! use route53domains::input::CheckDomainAvailabilityInput;
//! use route53domains::model::DomainAvailability;
//! use route53domains::{Client, Config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::from_conf(Config::builder().build())?;
//! let output = client.check_domain_availability(
//!     CheckDomainAvailabilityInput::builder()
//!         .domain_name("example.com")
//!         .build(),
//! )?;
//! let availability = output.availability().map(|a| a.parse::<DomainAvailability>());
//! println!("{:?}", availability);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;

pub use crate::client::{Client, Route53Domains};
pub use crate::config::Config;
pub use aws_hyper::{RetryConfig, TimeoutConfig};
pub use aws_types::region::Region;
pub use aws_types::Credentials;
pub use smithy_http::result::SdkError;

/// Prefix of the `X-Amz-Target` header of every operation
pub const TARGET_PREFIX: &str = "Route53Domains_v20140515";
/// Endpoint prefix, also the SigV4 signing name
pub const ENDPOINT_PREFIX: &str = "route53domains";
pub const SERVICE_ID: &str = "Route 53 Domains";
pub const API_VERSION: &str = "2014-05-15";
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
