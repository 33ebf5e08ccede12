// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `ChatRelay` Session
//!
//! Session state management for the `ChatRelay` application.
//!
//! This crate provides:
//!
//! - **`SessionManager`**: register / PIN-gate / refresh / reset state
//!   machine over the single local session, with an in-memory cache
//! - **`FileSessionStore`**: durable JSON persistence with atomic writes and
//!   restrictive permissions
//! - **PIN generation** from the OS entropy source
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use chatrelay_api::ApiClient;
//! use chatrelay_session::{FileSessionStore, SessionManager};
//!
//! let store = Arc::new(FileSessionStore::at_default_path());
//! let manager = SessionManager::new(store, Arc::new(ApiClient::new()));
//!
//! let record = manager.register("sk-or-vv-...").await?;
//! println!("Your PIN: {}", record.pin);
//!
//! assert!(manager.validate_pin(&record.pin).await?);
//! ```

pub mod error;
pub mod manager;
pub mod persistence;
pub mod pin;

pub use error::SessionError;
pub use manager::{ProviderDisplay, SessionManager};
pub use persistence::{FileSessionStore, default_config_dir, default_session_path};
pub use pin::generate_pin;
