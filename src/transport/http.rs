//! HTTP transport for the RPC endpoint.
//!
//! A single `reqwest::Client` is built per transport instance, so TLS
//! settings are scoped to one client rather than process-wide state. The
//! daemon commonly runs with a self-signed certificate on localhost, so
//! certificate validation is off by default; `accept_invalid_certs: false`
//! turns full validation back on.

use bytes::Bytes;

use crate::error::Result;

/// Path of the RPC endpoint on the daemon.
pub const API_PATH: &str = "/api/1.0";

/// Content-type marker for msgpack-encoded bodies.
pub const CONTENT_TYPE: &str = "binary/message-pack";

/// Where and how to reach the RPC endpoint.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Daemon hostname or address.
    pub host: String,
    /// Daemon port.
    pub port: u16,
    /// Use https instead of http.
    pub ssl: bool,
    /// Skip TLS certificate validation (self-signed daemon certs).
    pub accept_invalid_certs: bool,
}

/// HTTP invoker: one POST per call, the raw body back.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Build a transport for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be
    /// constructed (TLS backend initialization).
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        let scheme = if config.ssl { "https" } else { "http" };
        let endpoint = format!("{}://{}:{}{}", scheme, config.host, config.port, API_PATH);

        Ok(Self { client, endpoint })
    }

    /// Endpoint URL this transport posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one POST with the encoded envelope as the body and return the
    /// full response body.
    ///
    /// The HTTP status is deliberately not inspected: the daemon reports
    /// call failures as msgpack error descriptors in the body of a non-2xx
    /// response, and those must reach the error translation step intact.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the exchange cannot complete
    /// (connection refused, TLS failure, timeout).
    pub async fn exchange(&self, body: Vec<u8>) -> Result<Bytes> {
        tracing::trace!("POST {} ({} bytes)", self.endpoint, body.len());

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let bytes = response.bytes().await?;
        tracing::trace!("received {} bytes", bytes.len());
        Ok(bytes)
    }
}
