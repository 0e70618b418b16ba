//! Error types for msfrpc-client.

use thiserror::Error;

use crate::remote::RemoteError;

/// Main error type for all RPC client operations.
#[derive(Debug, Error)]
pub enum MsfRpcError {
    /// Endpoint URI could not be parsed.
    #[error("invalid endpoint URI: {0}")]
    Uri(#[from] url::ParseError),

    /// HTTP exchange failed (connection refused, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// MsgPack serialization error (request envelope).
    #[error("MsgPack encode error: {0}")]
    MsgPackEncode(#[from] rmp_serde::encode::Error),

    /// MsgPack deserialization error (response body).
    #[error("MsgPack decode error: {0}")]
    MsgPackDecode(#[from] rmpv::decode::Error),

    /// The remote service executed the call and reported a failure.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Response decoded but did not have the expected shape
    /// (e.g. a login reply without a token field).
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Result type alias using MsfRpcError.
pub type Result<T> = std::result::Result<T, MsfRpcError>;
