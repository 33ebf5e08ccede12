//! Chat command - send one message and print the reply.

use anyhow::{Result, bail};
use chatrelay_session::SessionManager;
use tracing::debug;

use crate::output::OutputFormat;

/// Runs the chat command.
///
/// With no `--model`, the first catalog entry is used (the catalog is never
/// empty thanks to the fallback list).
pub async fn run(
    manager: &SessionManager,
    message: &str,
    model: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let model = match model {
        Some(model) => model.to_string(),
        None => {
            let models = manager.list_models().await?;
            let Some(first) = models.first() else {
                bail!("no models available");
            };
            debug!(model = %first.id, "No model given, using first catalog entry");
            first.id.clone()
        }
    };

    let completion = manager.send_message(message, &model).await?;
    let reply = completion.first_content().unwrap_or_default();

    match format {
        OutputFormat::Text => {
            println!("{reply}");
            if let Some(usage) = completion.usage {
                if let Some(total) = usage.total_tokens {
                    debug!(total_tokens = total, "Completion token usage");
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "model": completion.model.as_deref().unwrap_or(&model),
                "reply": reply,
                "usage": completion.usage.map(|u| serde_json::json!({
                    "prompt_tokens": u.prompt_tokens,
                    "completion_tokens": u.completion_tokens,
                    "total_tokens": u.total_tokens,
                })),
            });
            println!("{output}");
        }
    }

    Ok(())
}
