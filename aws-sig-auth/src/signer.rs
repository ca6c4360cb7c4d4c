/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::canonical_request::{
    format_date, format_date_time, CanonicalRequest, StringToSign, HMAC_256, X_AMZ_CONTENT_SHA_256,
    X_AMZ_DATE, X_AMZ_SECURITY_TOKEN,
};
use aws_types::region::SigningRegion;
use aws_types::{Credentials, SigningService};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use http::header::{HeaderName, HeaderValue, InvalidHeaderValue, AUTHORIZATION};
use sha2::Sha256;
use std::fmt;
use std::time::SystemTime;
use thiserror::Error;

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum SigningAlgorithm {
    SigV4,
}

/// Signing Configuration for an Operation
///
/// Although these fields MAY be customized on a per request basis, they are generally static
/// for a given operation
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub struct OperationSigningConfig {
    pub algorithm: SigningAlgorithm,
    pub signing_options: SigningOptions,
}

impl OperationSigningConfig {
    /// The signing configuration used by every JSON protocol operation
    pub fn default_config() -> Self {
        OperationSigningConfig {
            algorithm: SigningAlgorithm::SigV4,
            signing_options: SigningOptions {
                double_uri_encode: true,
                content_sha256_header: false,
            },
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub struct SigningOptions {
    pub double_uri_encode: bool,
    pub content_sha256_header: bool,
}

/// Signing Configuration for an individual Request
///
/// These fields may vary on a per-request basis
#[derive(Clone, PartialEq, Eq)]
pub struct RequestConfig<'a> {
    pub request_ts: SystemTime,
    pub region: &'a SigningRegion,
    pub service: &'a SigningService,
}

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("request URI has no authority to derive the host header from")]
    MissingAuthority,
    #[error("header `{0}` is not valid visible ASCII and cannot be signed")]
    InvalidHeaderValue(String),
    #[error("signing produced an invalid header value")]
    InvalidSignedHeader(#[from] InvalidHeaderValue),
}

/// Generates a signing key for Sigv4
pub fn generate_signing_key(
    secret: &str,
    date: &DateTime<Utc>,
    region: &str,
    service: &str,
) -> impl AsRef<[u8]> {
    // kSecret = your secret access key
    // kDate = HMAC("AWS4" + kSecret, Date)
    // kRegion = HMAC(kDate, Region)
    // kService = HMAC(kRegion, Service)
    // kSigning = HMAC(kService, "aws4_request")
    let secret = format!("AWS4{}", secret);
    let tag = hmac_sha256(secret.as_bytes(), format_date(date).as_bytes());
    let tag = hmac_sha256(&tag, region.as_bytes());
    let tag = hmac_sha256(&tag, service.as_bytes());
    hmac_sha256(&tag, b"aws4_request")
}

/// Calculates a Sigv4 signature
pub fn calculate_signature(signing_key: impl AsRef<[u8]>, string_to_sign: &[u8]) -> String {
    hex::encode(hmac_sha256(signing_key.as_ref(), string_to_sign))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

#[derive(Clone, Default)]
pub struct SigV4Signer {
    _private: (),
}

impl fmt::Debug for SigV4Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigV4Signer").finish()
    }
}

impl SigV4Signer {
    pub fn new() -> Self {
        SigV4Signer { _private: () }
    }

    /// Sign a request using the SigV4 Protocol
    ///
    /// `x-amz-date`, `x-amz-security-token` (when the credentials carry a session token) and
    /// `authorization` are written to the request. Any stale values from an earlier attempt are
    /// replaced.
    ///
    /// Although this function may be used, end users will not typically
    /// interact with this code. It is generally used via middleware in the request pipeline. See [`SigV4SigningStage`](crate::middleware::SigV4SigningStage).
    pub fn sign<B>(
        &self,
        operation_config: &OperationSigningConfig,
        request_config: &RequestConfig<'_>,
        credentials: &Credentials,
        request: &mut http::Request<B>,
    ) -> Result<(), SigningError>
    where
        B: AsRef<[u8]>,
    {
        let date = DateTime::<Utc>::from(request_config.request_ts);
        let options = &operation_config.signing_options;

        let headers = request.headers_mut();
        headers.remove(AUTHORIZATION);
        headers.insert(
            HeaderName::from_static(X_AMZ_DATE),
            HeaderValue::from_str(&format_date_time(&date))?,
        );
        match credentials.session_token() {
            Some(token) => {
                let mut token = HeaderValue::from_str(token)?;
                token.set_sensitive(true);
                headers.insert(HeaderName::from_static(X_AMZ_SECURITY_TOKEN), token);
            }
            None => {
                headers.remove(X_AMZ_SECURITY_TOKEN);
            }
        }
        let payload_hash = if options.content_sha256_header {
            let hash = crate::canonical_request::sha256_hex_string(request.body().as_ref());
            request.headers_mut().insert(
                HeaderName::from_static(X_AMZ_CONTENT_SHA_256),
                HeaderValue::from_str(&hash)?,
            );
            Some(hash)
        } else {
            None
        };

        let region = request_config.region.as_ref();
        let service = request_config.service.as_ref();
        let authorization = {
            let creq = CanonicalRequest::new(
                request.method(),
                request.uri(),
                request.headers(),
                request.body().as_ref(),
                options.double_uri_encode,
                payload_hash,
            )?;
            let sts = StringToSign::new(&date, region, service, &creq);
            let signing_key =
                generate_signing_key(credentials.secret_access_key(), &date, region, service);
            let signature = calculate_signature(signing_key, sts.to_string().as_bytes());
            tracing::trace!(canonical_request = %creq, string_to_sign = %sts, "calculated signing parameters");
            format!(
                "{} Credential={}/{}, SignedHeaders={}, Signature={}",
                HMAC_256,
                credentials.access_key_id(),
                sts.scope,
                creq.signed_headers,
                signature
            )
        };
        let mut authorization = HeaderValue::from_str(&authorization)?;
        authorization.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, authorization);
        Ok(())
    }
}
