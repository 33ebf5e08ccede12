//! Trait seams between the session manager and its collaborators.
//!
//! Both seams are object-safe so the manager can hold them as trait objects
//! and tests can substitute in-memory implementations.

use async_trait::async_trait;

use crate::error::{ApiError, StoreError};
use crate::models::{BalanceCheck, ChatCompletion, ModelInfo, SessionRecord};

/// Durable storage for the single session record.
///
/// The store is the backing copy of the session: it is written before the
/// in-memory cache on every create/update/delete, so the cache can always be
/// rebuilt from it after a restart.
///
/// ## Implementing a Store
///
/// ```ignore
/// struct MemoryStore(Mutex<Option<SessionRecord>>);
///
/// #[async_trait]
/// impl SessionStore for MemoryStore {
///     async fn load(&self) -> Result<Option<SessionRecord>, StoreError> {
///         Ok(self.0.lock().await.clone())
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the stored record, if any.
    async fn load(&self) -> Result<Option<SessionRecord>, StoreError>;

    /// Durably replaces the stored record.
    async fn save(&self, record: &SessionRecord) -> Result<(), StoreError>;

    /// Removes the stored record. Removing an absent record is not an error.
    async fn delete(&self) -> Result<(), StoreError>;
}

/// The provider-facing API surface consumed by the session manager.
///
/// Implementations translate these three logical operations into
/// provider-specific HTTP calls and normalize the divergent response shapes.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Resolves the key's provider and fetches its current balance.
    ///
    /// A syntactically valid key with a balance of zero or less fails with
    /// [`ApiError::InsufficientBalance`] even though the key is technically
    /// usable.
    async fn check_balance(&self, api_key: &str) -> Result<BalanceCheck, ApiError>;

    /// Lists the models available to the session.
    ///
    /// Never fails: on any upstream problem a fixed fallback list is returned
    /// instead, so the caller never has to render an empty catalog.
    async fn list_models(&self, session: &SessionRecord) -> Vec<ModelInfo>;

    /// Sends a single user message and returns the completion.
    ///
    /// One attempt per invocation; nothing is retried internally.
    async fn send_message(
        &self,
        session: &SessionRecord,
        message: &str,
        model: &str,
    ) -> Result<ChatCompletion, ApiError>;
}
