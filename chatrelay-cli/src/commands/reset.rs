//! Reset command - delete the stored session.

use anyhow::Result;
use chatrelay_session::SessionManager;

use crate::output::OutputFormat;

/// Runs the reset command. Irreversible; a new key must be registered
/// afterwards.
pub async fn run(manager: &SessionManager, format: OutputFormat) -> Result<()> {
    manager.reset().await?;

    match format {
        OutputFormat::Text => println!("Session deleted."),
        OutputFormat::Json => println!("{}", serde_json::json!({ "reset": true })),
    }

    Ok(())
}
