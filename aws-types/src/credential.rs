/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS SDK Credentials
//!
//! Clients obtain credentials through the [`ProvideCredentials`] collaborator once per request
//! attempt. Loading is synchronous, like the rest of the client.
//!
//! ### With static credentials
//! [`Credentials`] implement [`ProvideCredentials`] directly, so no custom provider
//! implementation is required:
//! ```rust
//! use aws_types::{Credentials, ProvideCredentials};
//! let my_creds = Credentials::from_keys("akid", "secret_key", None);
//! assert_eq!(my_creds.provide_credentials().unwrap().access_key_id(), "akid");
//! ```
//! ### With dynamically loaded credentials
//! ```rust
//! use aws_types::{Credentials, CredentialsError, ProvideCredentials};
//!
//! struct FileCredentialProvider(std::path::PathBuf);
//!
//! impl ProvideCredentials for FileCredentialProvider {
//!     fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
//!         let contents = std::fs::read_to_string(&self.0)
//!             .map_err(|err| CredentialsError::ProviderError(err.into()))?;
//!         let mut lines = contents.lines();
//!         let akid = lines.next().ok_or(CredentialsError::CredentialsNotLoaded)?;
//!         let secret = lines.next().ok_or(CredentialsError::CredentialsNotLoaded)?;
//!         Ok(Credentials::new(akid, secret, None, None, "CredentialsFile"))
//!     }
//! }
//! ```

use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// AWS SDK Credentials
///
/// An opaque struct representing credentials that may be used in an AWS SDK, modeled on
/// the [CRT credentials implementation](https://github.com/awslabs/aws-c-auth/blob/main/source/credentials.c).
///
/// Credentials uses an interior Arc so that clones share a single copy of the secret.
#[derive(Clone, Eq, PartialEq)]
pub struct Credentials(Arc<Inner>);

#[derive(Clone, Eq, PartialEq)]
struct Inner {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,

    /// Credential Expiry
    ///
    /// A timepoint at which the credentials should no longer
    /// be used because they have expired. The primary purpose of this value is to allow
    /// credentials to communicate to the caching provider when they need to be refreshed.
    ///
    /// If these credentials never expire, this value will be set to `None`
    expires_after: Option<SystemTime>,

    provider_name: &'static str,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut creds = f.debug_struct("Credentials");
        creds
            .field("provider_name", &self.0.provider_name)
            .field("access_key_id", &self.0.access_key_id)
            .field("secret_access_key", &"** redacted **");
        if let Some(expiry) = self.expiry() {
            creds.field(
                "expires_after",
                &expiry
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or_default(),
            );
        }
        creds.finish()
    }
}

const STATIC_CREDENTIALS: &str = "Static";

impl Credentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
        expires_after: Option<SystemTime>,
        provider_name: &'static str,
    ) -> Self {
        Credentials(Arc::new(Inner {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
            expires_after,
            provider_name,
        }))
    }

    pub fn from_keys(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self::new(
            access_key_id,
            secret_access_key,
            session_token,
            None,
            STATIC_CREDENTIALS,
        )
    }

    pub fn access_key_id(&self) -> &str {
        &self.0.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.0.secret_access_key
    }

    pub fn expiry(&self) -> Option<SystemTime> {
        self.0.expires_after
    }

    pub fn session_token(&self) -> Option<&str> {
        self.0.session_token.as_deref()
    }

    pub fn provider_name(&self) -> &'static str {
        self.0.provider_name
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CredentialsError {
    /// No credentials were available for this provider
    #[error("The provider could not provide credentials or required configuration was not set")]
    CredentialsNotLoaded,

    /// The provider was given an invalid configuration
    #[error("The credentials provider was not properly configured: {0}")]
    InvalidConfiguration(Box<dyn Error + Send + Sync + 'static>),

    /// The provider experienced an error during credential resolution
    #[error("An error occurred while loading credentials: {0}")]
    ProviderError(Box<dyn Error + Send + Sync + 'static>),

    /// An unexpected error occurred during credential resolution
    #[error("Unexpected credentials error: {0}")]
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

/// Credentials provider collaborator: `getCredentials() -> credentials`
pub trait ProvideCredentials: Send + Sync {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError>;
}

impl ProvideCredentials for Credentials {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
        Ok(self.clone())
    }
}

/// A credentials provider that can be cheaply cloned and stored in a request property bag
#[derive(Clone)]
pub struct SharedCredentialsProvider(Arc<dyn ProvideCredentials>);

impl SharedCredentialsProvider {
    pub fn new(provider: impl ProvideCredentials + 'static) -> Self {
        SharedCredentialsProvider(Arc::new(provider))
    }
}

impl Debug for SharedCredentialsProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("SharedCredentialsProvider")
    }
}

impl ProvideCredentials for SharedCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
        self.0.provide_credentials()
    }
}

impl From<Arc<dyn ProvideCredentials>> for SharedCredentialsProvider {
    fn from(provider: Arc<dyn ProvideCredentials>) -> Self {
        SharedCredentialsProvider(provider)
    }
}

/// Load credentials from `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`
///
/// `AWS_SECRET_KEY` is accepted as an alias for the secret key. Variables are read on every call,
/// so changes to the environment are picked up by the next request.
#[derive(Clone)]
pub struct EnvironmentVariableCredentialsProvider {
    env: fn(&str) -> Option<String>,
}

const ENVIRONMENT_CREDENTIALS: &str = "EnvironmentVariable";

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl EnvironmentVariableCredentialsProvider {
    pub fn new() -> Self {
        EnvironmentVariableCredentialsProvider { env: process_env }
    }

    /// Read variables through `env` instead of the process environment
    pub fn with_env(env: fn(&str) -> Option<String>) -> Self {
        EnvironmentVariableCredentialsProvider { env }
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.env)(key).filter(|value| !value.trim().is_empty())
    }
}

impl Default for EnvironmentVariableCredentialsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for EnvironmentVariableCredentialsProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("EnvironmentVariableCredentialsProvider")
    }
}

impl ProvideCredentials for EnvironmentVariableCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
        let access_key = self
            .var("AWS_ACCESS_KEY_ID")
            .ok_or(CredentialsError::CredentialsNotLoaded)?;
        let secret_key = self
            .var("AWS_SECRET_ACCESS_KEY")
            .or_else(|| self.var("AWS_SECRET_KEY"))
            .ok_or(CredentialsError::CredentialsNotLoaded)?;
        Ok(Credentials::new(
            access_key,
            secret_key,
            self.var("AWS_SESSION_TOKEN"),
            None,
            ENVIRONMENT_CREDENTIALS,
        ))
    }
}
