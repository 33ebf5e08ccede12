//! The persisted session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::provider::ProviderKind;

/// The single persisted credential + PIN + provider bundle.
///
/// At most one record exists system-wide; registering a new key replaces the
/// record rather than adding another. Records are immutable once built:
/// a balance refresh goes through [`SessionRecord::with_balance`], which
/// produces a replacement record, never a partial in-place mutation.
///
/// On-disk field names (`api_key`, `pin`, `provider_type`, `last_balance`,
/// `last_checked`) are fixed for compatibility with existing installs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Raw provider credential. Only ever transmitted as a bearer token.
    pub api_key: String,

    /// Exactly four ASCII digits gating local re-entry. Never sent to any
    /// server.
    pub pin: String,

    /// Which upstream API the key belongs to. Always derivable from the key
    /// prefix; persisted as `"openrouter"` / `"vsegpt"`.
    #[serde(rename = "provider_type")]
    pub provider: ProviderKind,

    /// Last successfully fetched balance, pre-formatted for display in the
    /// provider's currency.
    pub last_balance: String,

    /// When the balance was last fetched.
    #[serde(rename = "last_checked")]
    pub last_checked_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Builds a fresh record at registration time, stamped with the current
    /// time.
    pub fn new(
        api_key: impl Into<String>,
        pin: impl Into<String>,
        provider: ProviderKind,
        last_balance: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            pin: pin.into(),
            provider,
            last_balance: last_balance.into(),
            last_checked_at: Utc::now(),
        }
    }

    /// Returns a replacement record carrying a new balance and timestamp.
    ///
    /// Key, PIN, and provider carry over unchanged.
    pub fn with_balance(&self, last_balance: impl Into<String>) -> Self {
        Self {
            last_balance: last_balance.into(),
            last_checked_at: Utc::now(),
            ..self.clone()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
