//! Models command - list the catalog with display pricing.

use anyhow::{Result, bail};
use chatrelay_session::SessionManager;

use crate::output::{OutputFormat, model_header, model_json, model_line};

/// Runs the models command.
pub async fn run(manager: &SessionManager, format: OutputFormat) -> Result<()> {
    let Some(provider) = manager.provider().await else {
        bail!("no session is registered");
    };
    let models = manager.list_models().await?;

    match format {
        OutputFormat::Text => {
            println!("{}", model_header());
            println!("{}", "─".repeat(100));
            for model in &models {
                println!("{}", model_line(model, provider));
            }
            println!();
            println!("Total: {} models", models.len());
        }
        OutputFormat::Json => {
            let entries: Vec<_> = models.iter().map(|m| model_json(m, provider)).collect();
            println!("{}", serde_json::Value::Array(entries));
        }
    }

    Ok(())
}
