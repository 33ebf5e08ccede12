//! Provider identity and key resolution.
//!
//! The provider a key belongs to is never stored independently of a
//! successful resolution: it is always recomputed from the key prefix or
//! looked up from the persisted enum tag.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// VseGPT key prefix.
///
/// Checked before the OpenRouter prefix: the prefixes are disjoint today, but
/// the more specific pattern goes first so a future overlapping prefix cannot
/// be shadowed by a shorter match.
const VSEGPT_KEY_PREFIX: &str = "sk-or-vv-";

/// OpenRouter key prefix.
const OPENROUTER_KEY_PREFIX: &str = "sk-or-v1-";

// ============================================================================
// Provider Kind
// ============================================================================

/// Supported upstream chat providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenRouter (openrouter.ai), dollar-denominated credits.
    OpenRouter,
    /// VseGPT (vsegpt.ru), ruble-denominated balance.
    VseGpt,
}

impl ProviderKind {
    /// Resolves a raw API key to its provider by prefix inspection.
    ///
    /// Pure: no I/O, no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnrecognizedKeyFormat`] when the key starts with
    /// neither known prefix.
    pub fn resolve(api_key: &str) -> Result<Self, ApiError> {
        if api_key.starts_with(VSEGPT_KEY_PREFIX) {
            Ok(Self::VseGpt)
        } else if api_key.starts_with(OPENROUTER_KEY_PREFIX) {
            Ok(Self::OpenRouter)
        } else {
            Err(ApiError::UnrecognizedKeyFormat)
        }
    }

    /// Returns the display name for this provider.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenRouter => "OpenRouter",
            Self::VseGpt => "VseGPT",
        }
    }

    /// Returns the API base URL for this provider.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::OpenRouter => "https://openrouter.ai/api/v1",
            Self::VseGpt => "https://api.vsegpt.ru/v1",
        }
    }

    /// Returns all supported provider kinds.
    pub fn all() -> &'static [ProviderKind] {
        &[Self::OpenRouter, Self::VseGpt]
    }
}

// ============================================================================
// Balance Check
// ============================================================================

/// Result of a successful key validation: the resolved provider plus its
/// current balance.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceCheck {
    /// Provider resolved from the key prefix.
    pub provider: ProviderKind,
    /// Balance formatted for display in the provider's currency.
    pub display: String,
    /// Raw balance amount the display string was built from.
    pub amount: f64,
}

// ============================================================================
// Tests
// ============================================================================
