/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::{Region, SigningRegion};
use aws_types::SigningService;
use http::uri::{Authority, Scheme};
use http::Uri;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::error::Error;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// API Endpoint
///
/// This implements an API endpoint as specified in the
/// [Smithy Endpoint Specification](https://awslabs.github.io/smithy/1.0/spec/core/endpoint-traits.html)
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Endpoint {
    uri: Uri,
}

impl Endpoint {
    /// Create a new endpoint from a URI
    ///
    /// The URI must carry a scheme and an authority. Any path on the URI replaces the path of
    /// requests sent to this endpoint.
    pub fn immutable(uri: Uri) -> Self {
        Endpoint { uri }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Sets the endpoint on `uri`, keeping the path and query of the original request
    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), AwsEndpointStageError> {
        let authority = self
            .uri
            .authority()
            .cloned()
            .ok_or(AwsEndpointStageError::MissingAuthority)?;
        let scheme = self.uri.scheme().cloned().unwrap_or(Scheme::HTTPS);
        let path_and_query = if self.uri.path() != "/" && !self.uri.path().is_empty() {
            self.uri.path_and_query().cloned()
        } else {
            uri.path_and_query().cloned()
        };
        let mut parts = http::uri::Parts::default();
        parts.scheme = Some(scheme);
        parts.authority = Some(authority);
        parts.path_and_query = path_and_query.or_else(|| "/".parse().ok());
        *uri = Uri::from_parts(parts).map_err(|err| AwsEndpointStageError::InvalidUri(err.into()))?;
        Ok(())
    }
}

/// The signing parameters implied by an endpoint
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CredentialScope {
    region: Option<SigningRegion>,
    service: Option<SigningService>,
}

impl CredentialScope {
    pub fn builder() -> credential_scope::Builder {
        credential_scope::Builder::default()
    }

    pub fn region(&self) -> Option<&SigningRegion> {
        self.region.as_ref()
    }

    pub fn service(&self) -> Option<&SigningService> {
        self.service.as_ref()
    }
}

pub mod credential_scope {
    use crate::CredentialScope;
    use aws_types::region::SigningRegion;
    use aws_types::SigningService;

    #[derive(Debug, Default)]
    pub struct Builder {
        region: Option<SigningRegion>,
        service: Option<SigningService>,
    }

    impl Builder {
        pub fn region(mut self, region: impl Into<SigningRegion>) -> Self {
            self.region = Some(region.into());
            self
        }

        pub fn service(mut self, service: impl Into<SigningService>) -> Self {
            self.service = Some(service.into());
            self
        }

        pub fn build(self) -> CredentialScope {
            CredentialScope {
                region: self.region,
                service: self.service,
            }
        }
    }
}

/// An endpoint together with the scope its requests must be signed for
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AwsEndpoint {
    endpoint: Endpoint,
    credential_scope: CredentialScope,
}

impl AwsEndpoint {
    pub fn new(endpoint: Endpoint, credential_scope: CredentialScope) -> Self {
        AwsEndpoint {
            endpoint,
            credential_scope,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn credential_scope(&self) -> &CredentialScope {
        &self.credential_scope
    }
}

/// Resolve the AWS Endpoint for a given region
///
/// To provide a static endpoint, [`Endpoint`](Endpoint) implements this trait.
/// Example usage:
/// ```rust
/// # mod route53domains {
/// # use aws_endpoint::ResolveAwsEndpoint;
/// # pub struct ConfigBuilder;
/// # impl ConfigBuilder {
/// #     pub fn endpoint_resolver(&mut self, resolver: impl ResolveAwsEndpoint + 'static) {
/// #         // ...
/// #     }
/// # }
/// # pub struct Config;
/// # impl Config {
/// #     pub fn builder() -> ConfigBuilder {
/// #         ConfigBuilder
/// #     }
/// # }
/// # }
/// use aws_endpoint::Endpoint;
/// use http::Uri;
/// let config = route53domains::Config::builder()
///     .endpoint_resolver(Endpoint::immutable(Uri::from_static("http://localhost:8080")));
/// ```
pub trait ResolveAwsEndpoint: Send + Sync {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError>;
}

impl ResolveAwsEndpoint for Endpoint {
    fn endpoint(&self, _region: &Region) -> Result<AwsEndpoint, BoxError> {
        Ok(AwsEndpoint {
            endpoint: self.clone(),
            credential_scope: Default::default(),
        })
    }
}

/// The standard endpoint shape: `https://{prefix}.{region}.amazonaws.com`
#[derive(Clone, Debug)]
pub struct DefaultAwsEndpointResolver {
    endpoint_prefix: &'static str,
}

impl DefaultAwsEndpointResolver {
    pub fn for_service(endpoint_prefix: &'static str) -> Self {
        DefaultAwsEndpointResolver { endpoint_prefix }
    }
}

impl ResolveAwsEndpoint for DefaultAwsEndpointResolver {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let uri = Uri::builder()
            .scheme(Scheme::HTTPS)
            .authority(Authority::from_str(&format!(
                "{}.{}.amazonaws.com",
                self.endpoint_prefix,
                region.as_ref()
            ))?)
            .path_and_query("/")
            .build()?;
        Ok(AwsEndpoint {
            endpoint: Endpoint::immutable(uri),
            credential_scope: Default::default(),
        })
    }
}

pub type AwsEndpointResolver = Arc<dyn ResolveAwsEndpoint>;

pub fn get_endpoint_resolver(config: &PropertyBag) -> Option<&AwsEndpointResolver> {
    config.get()
}

pub fn set_endpoint_resolver(config: &mut PropertyBag, provider: AwsEndpointResolver) {
    config.insert(provider);
}

/// Middleware Stage to Add an Endpoint to a Request
///
/// AwsEndpointStage implements [`MapRequest`](smithy_http::middleware::MapRequest). It will:
/// 1. Load an endpoint provider from the property bag.
/// 2. Load an endpoint given the [`Region`](aws_types::region::Region) in the property bag.
/// 3. Apply the endpoint to the URI in the request
/// 4. Set the `SigningRegion` and `SigningService` in the property bag to drive downstream
/// signing middleware.
#[derive(Clone, Debug, Default)]
pub struct AwsEndpointStage;

#[derive(Debug, Error)]
pub enum AwsEndpointStageError {
    #[error("no endpoint resolver in the property bag")]
    NoEndpointResolver,
    #[error("no region in the property bag")]
    NoRegion,
    #[error("endpoint has no authority")]
    MissingAuthority,
    #[error("resolved endpoint is not a valid URI")]
    InvalidUri(#[source] BoxError),
    #[error("failed to resolve endpoint")]
    EndpointResolutionError(#[source] BoxError),
}

impl MapRequest for AwsEndpointStage {
    type Error = AwsEndpointStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut http_req, config| {
            let provider =
                get_endpoint_resolver(config).ok_or(AwsEndpointStageError::NoEndpointResolver)?;
            let region = config
                .get::<Region>()
                .ok_or(AwsEndpointStageError::NoRegion)?;
            let endpoint = provider
                .endpoint(region)
                .map_err(AwsEndpointStageError::EndpointResolutionError)?;
            tracing::debug!(endpoint = ?endpoint.endpoint().uri(), base_region = %region, "resolved endpoint");
            let signing_region = endpoint
                .credential_scope()
                .region()
                .cloned()
                .unwrap_or_else(|| region.clone().into());
            config.insert::<SigningRegion>(signing_region);
            if let Some(signing_service) = endpoint.credential_scope().service() {
                config.insert::<SigningService>(signing_service.clone());
            }
            endpoint.endpoint().set_endpoint(http_req.uri_mut())?;
            Ok(http_req)
        })
    }
}
