//! Session-layer error types.

use chatrelay_core::{ApiError, StoreError};
use thiserror::Error;

/// Errors from session manager operations.
///
/// Provider failures pass through verbatim so the caller sees the upstream
/// reason unchanged.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The operation requires a registered session and none exists.
    #[error("no session is registered")]
    NoSession,

    /// Provider API failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Persistence failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
