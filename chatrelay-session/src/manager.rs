//! The auth/session manager.
//!
//! Orchestrates the provider client, the durable store, and the in-memory
//! cache behind the collaborator contract the UI layer consumes. No
//! UI-toolkit types cross this boundary; every operation returns plain
//! result/error values.

use std::sync::Arc;

use chatrelay_core::{
    ChatApi, ChatCompletion, ModelInfo, ProviderKind, SessionRecord, SessionStore, StoreError,
};
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::error::SessionError;
use crate::pin::generate_pin;

// ============================================================================
// Projections
// ============================================================================

/// Read-only session summary handed to the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderDisplay {
    /// Provider display name.
    pub name: String,
    /// Last fetched balance, display-formatted.
    pub balance: String,
    /// When the balance was last fetched.
    pub last_checked_at: DateTime<Utc>,
}

// ============================================================================
// Cache
// ============================================================================

/// In-memory cache state for the single session record.
///
/// `Absent` is remembered separately from `Unloaded` so that repeated
/// no-session queries do not keep hitting the store.
#[derive(Debug, Clone)]
enum Cached {
    /// Store not consulted yet.
    Unloaded,
    /// Store consulted; no record exists.
    Absent,
    /// The authoritative in-memory copy.
    Present(SessionRecord),
}

// ============================================================================
// Session Manager
// ============================================================================

/// Orchestrates registration, PIN gating, and balance upkeep for the single
/// local session.
///
/// Construct one instance at the composition root and share it; there is no
/// ambient global. Overlapping register/refresh/reset calls are not
/// coordinated here; the calling layer serializes them (e.g. by disabling
/// the triggering control while an operation is in flight).
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    api: Arc<dyn ChatApi>,
    cache: RwLock<Cached>,
}

impl SessionManager {
    /// Creates a manager over the given store and provider client.
    pub fn new(store: Arc<dyn SessionStore>, api: Arc<dyn ChatApi>) -> Self {
        Self {
            store,
            api,
            cache: RwLock::new(Cached::Unloaded),
        }
    }

    /// Returns the current session, consulting the store only on first use.
    ///
    /// A record that fails to deserialize is reported as "no session" rather
    /// than wedging every operation behind the parse error; `reset` still
    /// removes the corrupt file.
    async fn session(&self) -> Result<Option<SessionRecord>, SessionError> {
        {
            let cache = self.cache.read().await;
            match &*cache {
                Cached::Present(record) => return Ok(Some(record.clone())),
                Cached::Absent => return Ok(None),
                Cached::Unloaded => {}
            }
        }

        let mut cache = self.cache.write().await;
        // Another caller may have filled the cache while we waited for the
        // write lock.
        match &*cache {
            Cached::Present(record) => return Ok(Some(record.clone())),
            Cached::Absent => return Ok(None),
            Cached::Unloaded => {}
        }

        let loaded = match self.store.load().await {
            Ok(record) => record,
            Err(StoreError::Serialization(e)) => {
                warn!(error = %e, "Stored session is corrupt, treating as no session");
                None
            }
            Err(e) => return Err(e.into()),
        };

        *cache = match &loaded {
            Some(record) => Cached::Present(record.clone()),
            None => Cached::Absent,
        };
        Ok(loaded)
    }

    /// True when a registered session exists.
    pub async fn has_session(&self) -> bool {
        matches!(self.session().await, Ok(Some(_)))
    }

    /// Validates a key against its provider and registers a new session.
    ///
    /// On success a fresh 4-digit PIN is generated, the record is persisted
    /// (replacing any existing one) and cached, and the record is returned so
    /// the caller can show the PIN once. On failure nothing changes and the
    /// provider's reason is surfaced verbatim.
    #[instrument(skip(self, api_key))]
    pub async fn register(&self, api_key: &str) -> Result<SessionRecord, SessionError> {
        let check = self.api.check_balance(api_key).await?;
        let record = SessionRecord::new(api_key, generate_pin(), check.provider, check.display);

        // Store first, cache second: a crash in between is rebuilt from the
        // store on next load, so no divergence survives a restart.
        self.store.save(&record).await?;
        *self.cache.write().await = Cached::Present(record.clone());

        info!(
            provider = record.provider.display_name(),
            balance = %record.last_balance,
            "Registered new session"
        );
        Ok(record)
    }

    /// True iff a session exists and `candidate` matches its PIN.
    ///
    /// With no session this is `false`, not an error.
    pub async fn validate_pin(&self, candidate: &str) -> Result<bool, SessionError> {
        Ok(self
            .session()
            .await?
            .is_some_and(|session| session.pin == candidate))
    }

    /// Re-checks the stored key's balance.
    ///
    /// On success the replacement record (same key/PIN/provider, new
    /// balance and timestamp) is persisted, cached, and returned. `Ok(None)`
    /// means the balance check failed and the existing record was left
    /// untouched, with no partial update.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoSession`] when nothing is registered; store faults
    /// while persisting the refreshed record.
    #[instrument(skip(self))]
    pub async fn refresh_balance(&self) -> Result<Option<SessionRecord>, SessionError> {
        let current = self.session().await?.ok_or(SessionError::NoSession)?;

        match self.api.check_balance(&current.api_key).await {
            Ok(check) => {
                let updated = current.with_balance(check.display);
                self.store.save(&updated).await?;
                *self.cache.write().await = Cached::Present(updated.clone());
                info!(balance = %updated.last_balance, "Refreshed balance");
                Ok(Some(updated))
            }
            Err(e) => {
                warn!(error = %e, "Balance refresh failed, keeping previous record");
                Ok(None)
            }
        }
    }

    /// Deletes the stored session and clears the cache. Irreversible.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), SessionError> {
        self.store.delete().await?;
        *self.cache.write().await = Cached::Absent;
        info!("Session reset");
        Ok(())
    }

    /// Lists the models available to the current session.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoSession`] when nothing is registered. Upstream
    /// catalog failures never surface here; the client degrades to its
    /// fallback list.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>, SessionError> {
        let session = self.session().await?.ok_or(SessionError::NoSession)?;
        Ok(self.api.list_models(&session).await)
    }

    /// Sends a single user message with the current session's credentials.
    #[instrument(skip(self, message))]
    pub async fn send_message(
        &self,
        message: &str,
        model: &str,
    ) -> Result<ChatCompletion, SessionError> {
        let session = self.session().await?.ok_or(SessionError::NoSession)?;
        Ok(self.api.send_message(&session, message, model).await?)
    }

    /// The current session's bearer headers, or `None` when no session
    /// exists.
    pub async fn auth_headers(&self) -> Option<Vec<(String, String)>> {
        let session = self.session().await.ok().flatten()?;
        Some(vec![
            ("Authorization".to_string(), format!("Bearer {}", session.api_key)),
            ("Content-Type".to_string(), "application/json".to_string()),
        ])
    }

    /// The current session's provider, or `None` when no session exists.
    pub async fn provider(&self) -> Option<ProviderKind> {
        self.session().await.ok().flatten().map(|session| session.provider)
    }

    /// The current session's provider base URL, or `None` when no session
    /// exists.
    pub async fn base_url(&self) -> Option<&'static str> {
        self.session()
            .await
            .ok()
            .flatten()
            .map(|session| session.provider.base_url())
    }

    /// Display info for the current provider, or `None` when no session
    /// exists.
    pub async fn provider_display(&self) -> Option<ProviderDisplay> {
        let session = self.session().await.ok().flatten()?;
        Some(ProviderDisplay {
            name: session.provider.display_name().to_string(),
            balance: session.last_balance,
            last_checked_at: session.last_checked_at,
        })
    }
}
