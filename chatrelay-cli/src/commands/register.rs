//! Register command - validate a key and create the session.

use anyhow::Result;
use chatrelay_session::SessionManager;

use crate::output::OutputFormat;

/// Runs the register command.
pub async fn run(manager: &SessionManager, api_key: &str, format: OutputFormat) -> Result<()> {
    let record = manager.register(api_key).await?;

    match format {
        OutputFormat::Text => {
            println!("Registered with {}.", record.provider.display_name());
            println!("Balance: {}", record.last_balance);
            println!();
            println!("Your PIN: {}", record.pin);
            println!("It unlocks this session on re-entry and is shown only once.");
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "provider": record.provider.display_name(),
                "balance": record.last_balance,
                "pin": record.pin,
            });
            println!("{output}");
        }
    }

    Ok(())
}
