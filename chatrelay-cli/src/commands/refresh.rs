//! Refresh command - re-fetch the balance for the stored key.

use anyhow::{Result, bail};
use chatrelay_session::SessionManager;

use crate::output::OutputFormat;

/// Runs the refresh command.
pub async fn run(manager: &SessionManager, format: OutputFormat) -> Result<()> {
    match manager.refresh_balance().await? {
        Some(record) => {
            match format {
                OutputFormat::Text => println!("Balance: {}", record.last_balance),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({
                        "refreshed": true,
                        "balance": record.last_balance,
                    })
                ),
            }
            Ok(())
        }
        None => {
            if format == OutputFormat::Json {
                println!("{}", serde_json::json!({ "refreshed": false }));
                Ok(())
            } else {
                bail!("balance check failed; keeping the last known balance")
            }
        }
    }
}
