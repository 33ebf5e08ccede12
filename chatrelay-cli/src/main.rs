// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! ChatRelay CLI - PIN-gated chat sessions against OpenRouter and VseGPT.
//!
//! # Examples
//!
//! ```bash
//! # Validate a key and register a session (prints the PIN once)
//! chatrelay register sk-or-vv-xxxxxxxx
//!
//! # Check a PIN against the stored session
//! chatrelay unlock 4321
//!
//! # Show provider, balance, and last check time (default command)
//! chatrelay status
//!
//! # Re-fetch the balance for the stored key
//! chatrelay refresh
//!
//! # List models with display pricing
//! chatrelay models
//!
//! # Send a single message
//! chatrelay chat "Explain borrowing in one sentence" --model deepseek-coder
//!
//! # JSON output
//! chatrelay status --format json
//!
//! # Delete the stored session
//! chatrelay reset
//! ```

mod commands;
mod output;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatrelay_api::ApiClient;
use chatrelay_session::{FileSessionStore, SessionManager};
use commands::{chat, models, refresh, register, reset, status, unlock};
use output::OutputFormat;

// ============================================================================
// CLI Definition
// ============================================================================

/// ChatRelay CLI - PIN-gated chat relay for OpenRouter and VseGPT.
#[derive(Parser)]
#[command(name = "chatrelay")]
#[command(about = "PIN-gated chat relay for OpenRouter and VseGPT")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'status' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Validate an API key and register a new session (prints the PIN once).
    Register {
        /// Provider API key (sk-or-v1-... or sk-or-vv-...).
        api_key: String,
    },

    /// Check a PIN against the stored session.
    Unlock {
        /// The 4-digit PIN printed at registration.
        pin: String,
    },

    /// Show the current session: provider, balance, last check time.
    #[command(visible_alias = "s")]
    Status,

    /// Re-fetch the balance for the stored key.
    #[command(visible_alias = "r")]
    Refresh,

    /// List models available to the session.
    #[command(visible_alias = "m")]
    Models,

    /// Send a single chat message.
    #[command(visible_alias = "c")]
    Chat {
        /// The message to send.
        message: String,

        /// Model id; defaults to the first model in the catalog.
        #[arg(long, short)]
        model: Option<String>,
    },

    /// Delete the stored session. Irreversible.
    Reset,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("chatrelay=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chatrelay=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let store = Arc::new(FileSessionStore::at_default_path());
    let api = Arc::new(ApiClient::new());
    let manager = SessionManager::new(store, api);

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Register { api_key } => register::run(&manager, &api_key, cli.format).await,
        Commands::Unlock { pin } => unlock::run(&manager, &pin, cli.format).await,
        Commands::Status => status::run(&manager, cli.format).await,
        Commands::Refresh => refresh::run(&manager, cli.format).await,
        Commands::Models => models::run(&manager, cli.format).await,
        Commands::Chat { message, model } => {
            chat::run(&manager, &message, model.as_deref(), cli.format).await
        }
        Commands::Reset => reset::run(&manager, cli.format).await,
    }
}
