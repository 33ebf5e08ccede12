//! Core error types for `ChatRelay`.

use thiserror::Error;

/// Errors surfaced by provider API operations.
///
/// Each variant carries only the fields relevant to it. None of these are
/// retried internally; the caller decides whether to re-invoke.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The key matches no known provider prefix. The user must correct the
    /// input; re-attempting with the same key cannot succeed.
    #[error("API key format not recognized")]
    UnrecognizedKeyFormat,

    /// The provider answered with a non-success status.
    #[error("provider rejected the request (HTTP {status}): {message}")]
    UpstreamRejected {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Upstream error message when the body carried one, otherwise a
        /// generic description.
        message: String,
    },

    /// The key is valid but the account has no usable credit.
    #[error("insufficient balance: {0}")]
    InsufficientBalance(String),

    /// Network, timeout, or response-decoding failure.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors from the durable session store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
