//! Unlock command - check a PIN against the stored session.

use anyhow::{Result, bail};
use chatrelay_session::SessionManager;

use crate::output::OutputFormat;

/// Runs the unlock command. A rejected PIN exits nonzero so scripts can gate
/// on it.
pub async fn run(manager: &SessionManager, pin: &str, format: OutputFormat) -> Result<()> {
    let accepted = manager.validate_pin(pin).await?;

    match format {
        OutputFormat::Text => {
            if accepted {
                println!("PIN accepted.");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "accepted": accepted }));
        }
    }

    if !accepted && format == OutputFormat::Text {
        bail!("PIN rejected");
    }
    Ok(())
}
