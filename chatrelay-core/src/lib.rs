// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `ChatRelay` Core
//!
//! Core types, models, and trait seams for the `ChatRelay` application.
//!
//! This crate provides the foundational abstractions used across all other
//! `ChatRelay` crates, including:
//!
//! - Domain models (providers, the session record, chat payloads)
//! - Error types
//! - Trait definitions for the store and provider-client seams
//!
//! ## Key Types
//!
//! ### Provider Types
//! - [`ProviderKind`] - The two supported upstream providers, with key
//!   resolution by prefix
//! - [`BalanceCheck`] - Result of validating a key against its provider
//!
//! ### Session Types
//! - [`SessionRecord`] - The single persisted credential + PIN + provider
//!   bundle
//!
//! ### Chat Types
//! - [`ModelInfo`] - A chat model offered by a provider
//! - [`ChatMessage`] / [`ChatCompletion`] - Chat request and response payloads
//!
//! ### Seams
//! - [`SessionStore`] - Durable storage for the session record
//! - [`ChatApi`] - The provider-facing API surface

pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::{ApiError, StoreError};

// Re-export all model types
pub use models::{
    // Provider types
    BalanceCheck,
    ProviderKind,
    // Session types
    SessionRecord,
    // Chat types
    ChatChoice,
    ChatCompletion,
    ChatMessage,
    ModelInfo,
    TokenUsage,
};

// Re-export traits
pub use traits::{ChatApi, SessionStore};
