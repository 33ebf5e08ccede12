// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `ChatRelay` API
//!
//! The provider API client for `ChatRelay`.
//!
//! This crate speaks the two upstream dialects (OpenRouter and VseGPT)
//! behind the [`chatrelay_core::ChatApi`] seam:
//!
//! - **Client**: authenticated HTTP requests against the resolved provider's
//!   base URL, one attempt per invocation
//! - **Parser**: defensive extraction from the providers' divergent response
//!   shapes
//! - **Pricing**: balance and per-token price display formatting per
//!   provider currency
//! - **Config**: HTTP timeout and per-send chat tuning from the process
//!   environment

pub mod client;
pub mod config;
pub mod parser;
pub mod pricing;

pub use client::ApiClient;
pub use config::{ApiClientConfig, ChatTuning};
pub use pricing::{format_balance, format_pricing};
