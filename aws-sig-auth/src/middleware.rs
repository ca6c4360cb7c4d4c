/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::signer::{OperationSigningConfig, RequestConfig, SigV4Signer, SigningError};
use aws_types::region::SigningRegion;
use aws_types::{Credentials, CredentialsError, ProvideCredentials, SharedCredentialsProvider};
use aws_types::SigningService;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::time::SystemTime;
use thiserror::Error;

/// Middleware stage to sign requests with SigV4
///
/// SigV4SigningStage will load configuration from the request property bag and add
/// a signature.
///
/// Prior to signing, the following fields MUST be present in the property bag:
/// - [`SigningRegion`](SigningRegion): The region used when signing the request, eg. `us-east-1`
/// - [`SigningService`](SigningService): The name of the service to use when signing the request, eg. `route53domains`
/// - [`SharedCredentialsProvider`](SharedCredentialsProvider): A credentials provider to retrieve credentials
/// - [`OperationSigningConfig`](OperationSigningConfig): Operation specific signing configuration
/// If any of these fields are missing, the middleware will return an error.
///
/// The following fields MAY be present in the property bag:
/// - [`SystemTime`](SystemTime): The timestamp to use when signing the request. If this field is not present
///   [`SystemTime::now`](SystemTime::now) will be used.
#[derive(Clone, Debug)]
pub struct SigV4SigningStage {
    signer: SigV4Signer,
}

impl SigV4SigningStage {
    pub fn new(signer: SigV4Signer) -> Self {
        Self { signer }
    }
}

#[derive(Debug, Error)]
pub enum SigningStageError {
    #[error("No credentials provider in the property bag")]
    MissingCredentialsProvider,
    #[error("No signing region in the property bag")]
    MissingSigningRegion,
    #[error("No signing service in the property bag")]
    MissingSigningService,
    #[error("No signing configuration in the property bag")]
    MissingSigningConfig,
    #[error("The request body could not be signed by this configuration")]
    InvalidBodyType,
    #[error("Signing failed")]
    SigningFailure(#[from] SigningError),
    #[error("Failed to load credentials from the credentials provider")]
    CredentialsLoadingError(#[from] CredentialsError),
}

/// Extract a signing config from a [`PropertyBag`](smithy_http::property_bag::PropertyBag)
fn signing_config(
    config: &PropertyBag,
) -> Result<(&OperationSigningConfig, RequestConfig<'_>, Credentials), SigningStageError> {
    let operation_config = config
        .get::<OperationSigningConfig>()
        .ok_or(SigningStageError::MissingSigningConfig)?;
    let cred_provider = config
        .get::<SharedCredentialsProvider>()
        .ok_or(SigningStageError::MissingCredentialsProvider)?;
    let creds = cred_provider.provide_credentials()?;
    let region = config
        .get::<SigningRegion>()
        .ok_or(SigningStageError::MissingSigningRegion)?;
    let signing_service = config
        .get::<SigningService>()
        .ok_or(SigningStageError::MissingSigningService)?;
    let request_config = RequestConfig {
        request_ts: config
            .get::<SystemTime>()
            .copied()
            .unwrap_or_else(SystemTime::now),
        region,
        service: signing_service,
    };
    Ok((operation_config, request_config, creds))
}

impl MapRequest for SigV4SigningStage {
    type Error = SigningStageError;

    fn apply(&self, req: Request) -> Result<Request, Self::Error> {
        req.augment(|req, config| {
            let (operation_config, request_config, creds) = signing_config(config)?;

            let (parts, body) = req.into_parts();
            let signable_body = body.bytes().ok_or(SigningStageError::InvalidBodyType)?;
            let mut signable_request = http::Request::from_parts(parts, signable_body);

            self.signer.sign(
                operation_config,
                &request_config,
                &creds,
                &mut signable_request,
            )?;
            let (signed_parts, _) = signable_request.into_parts();
            Ok(http::Request::from_parts(signed_parts, body))
        })
    }
}

#[cfg(test)]
mod test {
    use crate::middleware::{SigV4SigningStage, SigningStageError};
    use crate::signer::{OperationSigningConfig, SigV4Signer};
    use aws_endpoint::{set_endpoint_resolver, AwsEndpointStage, DefaultAwsEndpointResolver};
    use aws_types::region::Region;
    use aws_types::{Credentials, SharedCredentialsProvider, SigningService};
    use http::header::AUTHORIZATION;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;
        use std::sync::Arc;
    use std::time::{Duration, UNIX_EPOCH};

    // check that the endpoint middleware followed by signing middleware produce the expected result
    #[test]
    fn endpoint_plus_signer() {
        let provider = Arc::new(DefaultAwsEndpointResolver::for_service("route53domains"));
        let req = http::Request::builder()
            .method("POST")
            .uri("/")
            .header("x-amz-target", "Route53Domains_v20140515.ListDomains")
            .body(SdkBody::from("{}"))
            .unwrap();
        let mut req = operation::Request::new(req);
        {
            let mut conf = req.config_mut();
            conf.insert(Region::new("us-east-1"));
            conf.insert(UNIX_EPOCH + Duration::new(1611160427, 0));
            conf.insert(SigningService::from_static("route53domains"));
            conf.insert(SharedCredentialsProvider::new(Credentials::from_keys(
                "AKIAfoo", "bar", None,
            )));
            conf.insert(OperationSigningConfig::default_config());
            set_endpoint_resolver(&mut conf, provider);
        }
        let endpoint = AwsEndpointStage;
        let signer = SigV4SigningStage::new(SigV4Signer::new());
        let req = endpoint.apply(req).expect("endpoint resolved");
        let req = signer.apply(req).expect("signing succeeded");
        let (req, _) = req.into_parts();
        let auth = req
            .headers()
            .get(AUTHORIZATION)
            .expect("auth header must be present")
            .to_str()
            .unwrap();
        assert!(
            auth.starts_with(
                "AWS4-HMAC-SHA256 Credential=AKIAfoo/20210120/us-east-1/route53domains/aws4_request, \
                 SignedHeaders=host;x-amz-date;x-amz-target, Signature="
            ),
            "{}",
            auth
        );
        assert_eq!(req.headers()["x-amz-date"], "20210120T163347Z");
        assert_eq!(req.body().bytes(), Some(&b"{}"[..]));
    }

    #[test]
    fn missing_credentials_provider_is_an_error() {
        let mut req = operation::Request::new(
            http::Request::builder()
                .uri("https://route53domains.us-east-1.amazonaws.com/")
                .body(SdkBody::from("{}"))
                .unwrap(),
        );
        req.config_mut()
            .insert(OperationSigningConfig::default_config());
        match SigV4SigningStage::new(SigV4Signer::new()).apply(req) {
            Err(SigningStageError::MissingCredentialsProvider) => {}
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }
}
