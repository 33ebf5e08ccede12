//! Domain models for `ChatRelay`.
//!
//! This module contains the core data structures representing providers,
//! the persisted session record, and chat payloads.
//!
//! ## Submodules
//!
//! - [`provider`] - Provider types (`ProviderKind`, `BalanceCheck`) and key
//!   resolution
//! - [`session`] - The persisted `SessionRecord`
//! - [`chat`] - Chat payloads (`ModelInfo`, `ChatMessage`, `ChatCompletion`)

mod chat;
mod provider;
mod session;

// Re-export everything at the models level
pub use chat::{ChatChoice, ChatCompletion, ChatMessage, ModelInfo, TokenUsage};
pub use provider::{BalanceCheck, ProviderKind};
pub use session::SessionRecord;
#[cfg(test)]
mod serde_tests;
