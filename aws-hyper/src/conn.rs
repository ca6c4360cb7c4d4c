/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use hyper::client::HttpConnector as HyperHttpConnector;
use hyper_rustls::HttpsConnector;
use smithy_http::body::SdkBody;
use smithy_http::result::ConnectorError;
use std::error::Error;
use std::fmt;
use std::io;
use std::sync::Arc;
use std::time::Duration;

type BoxError = Box<dyn Error + Send + Sync>;

/// The transport collaborator used by [`Client`](crate::Client)
///
/// A connector sends one fully signed request and blocks until the complete response body has
/// been received. Failures to obtain a response are reported as a [`ConnectorError`]; the kind
/// of the error decides whether the client retries it.
pub trait HttpConnector: Send + Sync {
    fn call(&self, request: http::Request<SdkBody>) -> Result<http::Response<Bytes>, ConnectorError>;
}

impl<C> HttpConnector for Arc<C>
where
    C: HttpConnector + ?Sized,
{
    fn call(&self, request: http::Request<SdkBody>) -> Result<http::Response<Bytes>, ConnectorError> {
        self.as_ref().call(request)
    }
}

impl HttpConnector for Box<dyn HttpConnector> {
    fn call(&self, request: http::Request<SdkBody>) -> Result<http::Response<Bytes>, ConnectorError> {
        self.as_ref().call(request)
    }
}

/// Connect and read timeouts for the default HTTPS connector
#[derive(Debug, Clone, PartialEq)]
pub struct TimeoutConfig {
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Default::default()
    }

    /// Timeout for establishing the TCP connection and TLS session. `None` disables it.
    pub fn with_connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Timeout for receiving the complete response once the request is sent. `None` disables it.
    pub fn with_read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        TimeoutConfig {
            connect_timeout: Some(Duration::from_secs(10)),
            read_timeout: Some(Duration::from_secs(50)),
        }
    }
}

/// HTTPS connector backed by hyper and rustls
///
/// Requests are driven to completion on a private single-worker tokio runtime, so the
/// connector can be used from any thread that is not itself running inside an async runtime.
#[derive(Clone)]
pub struct Https {
    client: hyper::Client<HttpsConnector<HyperHttpConnector>, SdkBody>,
    runtime: Arc<tokio::runtime::Runtime>,
    read_timeout: Option<Duration>,
}

impl fmt::Debug for Https {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Https")
            .field("read_timeout", &self.read_timeout)
            .finish()
    }
}

impl Https {
    pub fn new(timeouts: &TimeoutConfig) -> Result<Self, ConnectorError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("aws-hyper-io")
            .enable_all()
            .build()
            .map_err(|err| ConnectorError::other(err.into()))?;
        let mut http = HyperHttpConnector::new();
        http.enforce_http(false);
        http.set_connect_timeout(timeouts.connect_timeout());
        let https = hyper_rustls::HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .wrap_connector(http);
        let client = hyper::Client::builder().build::<_, SdkBody>(https);
        Ok(Https {
            client,
            runtime: Arc::new(runtime),
            read_timeout: timeouts.read_timeout(),
        })
    }

    async fn send(
        client: &hyper::Client<HttpsConnector<HyperHttpConnector>, SdkBody>,
        request: http::Request<SdkBody>,
    ) -> Result<http::Response<Bytes>, hyper::Error> {
        let response = client.request(request).await?;
        let (parts, body) = response.into_parts();
        let body = hyper::body::to_bytes(body).await?;
        Ok(http::Response::from_parts(parts, body))
    }
}

impl HttpConnector for Https {
    fn call(&self, request: http::Request<SdkBody>) -> Result<http::Response<Bytes>, ConnectorError> {
        let client = &self.client;
        let read_timeout = self.read_timeout;
        self.runtime.block_on(async move {
            let response = match read_timeout {
                Some(timeout) => tokio::time::timeout(timeout, Https::send(client, request))
                    .await
                    .map_err(|elapsed| ConnectorError::timeout(elapsed.into()))?,
                None => Https::send(client, request).await,
            };
            response.map_err(classify_hyper_error)
        })
    }
}

fn find_source<'a, E: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a E> {
    let mut next = Some(err);
    while let Some(err) = next {
        if let Some(matching) = err.downcast_ref::<E>() {
            return Some(matching);
        }
        next = err.source();
    }
    None
}

fn classify_hyper_error(err: hyper::Error) -> ConnectorError {
    let timed_out = err.is_timeout()
        || find_source::<io::Error>(&err).map(|io| io.kind()) == Some(io::ErrorKind::TimedOut);
    if timed_out {
        ConnectorError::timeout(err.into())
    } else if err.is_connect() || err.is_closed() || err.is_incomplete_message() {
        ConnectorError::io(err.into())
    } else {
        ConnectorError::other(BoxError::from(err))
    }
}
