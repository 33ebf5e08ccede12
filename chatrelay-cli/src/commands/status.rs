//! Status command - show the current session.

use anyhow::Result;
use chatrelay_session::SessionManager;

use crate::output::{OutputFormat, session_line};

/// Runs the status command.
pub async fn run(manager: &SessionManager, format: OutputFormat) -> Result<()> {
    let display = manager.provider_display().await;

    match format {
        OutputFormat::Text => match display {
            Some(display) => println!("{}", session_line(&display)),
            None => println!("No session registered. Run 'chatrelay register <api-key>' first."),
        },
        OutputFormat::Json => {
            let output = match display {
                Some(display) => serde_json::json!({
                    "registered": true,
                    "provider": display.name,
                    "balance": display.balance,
                    "last_checked": display.last_checked_at.to_rfc3339(),
                }),
                None => serde_json::json!({ "registered": false }),
            };
            println!("{output}");
        }
    }

    Ok(())
}
