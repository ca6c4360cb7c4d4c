/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Service configuration
//!
//! A [`Config`] is immutable once built. Clients capture it by value; to change the region or the
//! credentials of a client, build a new client.

use aws_endpoint::{
    set_endpoint_resolver, AwsEndpointResolver, DefaultAwsEndpointResolver, Endpoint,
    ResolveAwsEndpoint,
};
use aws_http::user_agent::{ApiMetadata, AwsUserAgent};
use aws_hyper::{RetryConfig, TimeoutConfig};
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::region::Region;
use aws_types::{
    EnvironmentVariableCredentialsProvider, ProvideCredentials, SharedCredentialsProvider,
    SigningService,
};
use smithy_http::property_bag::PropertyBag;
use std::fmt;
use std::sync::Arc;

/// Route 53 Domains is a global service served from `us-east-1`
pub const DEFAULT_REGION: Region = Region::from_static("us-east-1");

const API_METADATA: ApiMetadata = ApiMetadata::new("route53domains", crate::PKG_VERSION);

#[derive(Clone)]
pub struct Config {
    region: Region,
    credentials_provider: SharedCredentialsProvider,
    endpoint_resolver: AwsEndpointResolver,
    timeout_config: TimeoutConfig,
    retry_config: RetryConfig,
    user_agent: AwsUserAgent,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("timeout_config", &self.timeout_config)
            .field("retry_config", &self.retry_config)
            .finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn timeout_config(&self) -> &TimeoutConfig {
        &self.timeout_config
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry_config
    }

    /// Populate the property bag of an operation with everything the middleware stages read
    pub(crate) fn configure(&self, bag: &mut PropertyBag) {
        bag.insert(self.region.clone());
        bag.insert(SigningService::from_static(crate::ENDPOINT_PREFIX));
        bag.insert(self.credentials_provider.clone());
        bag.insert(OperationSigningConfig::default_config());
        bag.insert(self.user_agent.clone());
        set_endpoint_resolver(bag, self.endpoint_resolver.clone());
    }
}

#[derive(Default)]
pub struct Builder {
    region: Option<Region>,
    credentials_provider: Option<SharedCredentialsProvider>,
    endpoint_resolver: Option<AwsEndpointResolver>,
    timeout_config: Option<TimeoutConfig>,
    retry_config: Option<RetryConfig>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults to [`DEFAULT_REGION`]
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Defaults to [`EnvironmentVariableCredentialsProvider`]
    pub fn credentials_provider(mut self, provider: impl ProvideCredentials + 'static) -> Self {
        self.credentials_provider = Some(SharedCredentialsProvider::new(provider));
        self
    }

    /// Send every request to `uri` instead of `https://route53domains.{region}.amazonaws.com`
    pub fn endpoint(self, uri: http::Uri) -> Self {
        self.endpoint_resolver(Endpoint::immutable(uri))
    }

    pub fn endpoint_resolver(mut self, resolver: impl ResolveAwsEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(resolver));
        self
    }

    pub fn timeout_config(mut self, timeout_config: TimeoutConfig) -> Self {
        self.timeout_config = Some(timeout_config);
        self
    }

    pub fn retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = Some(retry_config);
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region.unwrap_or(DEFAULT_REGION),
            credentials_provider: self.credentials_provider.unwrap_or_else(|| {
                SharedCredentialsProvider::new(EnvironmentVariableCredentialsProvider::new())
            }),
            endpoint_resolver: self.endpoint_resolver.unwrap_or_else(|| {
                Arc::new(DefaultAwsEndpointResolver::for_service(crate::ENDPOINT_PREFIX))
            }),
            timeout_config: self.timeout_config.unwrap_or_default(),
            retry_config: self.retry_config.unwrap_or_default(),
            user_agent: AwsUserAgent::new_from_environment(API_METADATA),
        }
    }
}
