//! Output formatting for CLI surfaces.

use chatrelay_api::pricing::format_pricing;
use chatrelay_core::{ModelInfo, ProviderKind};
use chatrelay_session::ProviderDisplay;
use clap::ValueEnum;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// One-line session summary for the status surface.
pub fn session_line(display: &ProviderDisplay) -> String {
    format!(
        "{}  {}  (checked {})",
        display.name,
        display.balance,
        display.last_checked_at.format("%Y-%m-%d %H:%M UTC")
    )
}

/// One catalog row with display pricing in the provider's convention.
pub fn model_line(model: &ModelInfo, provider: ProviderKind) -> String {
    format!(
        "{:<36} {:<28} {:>12} {:>12} {:>9}",
        model.id,
        model.name,
        format_pricing(model.prompt_price, provider),
        format_pricing(model.completion_price, provider),
        model.context_length
    )
}

/// Header matching [`model_line`] columns.
pub fn model_header() -> String {
    format!(
        "{:<36} {:<28} {:>12} {:>12} {:>9}",
        "ID", "NAME", "PROMPT", "COMPLETION", "CONTEXT"
    )
}

/// JSON object for one catalog entry, with display pricing attached.
pub fn model_json(model: &ModelInfo, provider: ProviderKind) -> serde_json::Value {
    serde_json::json!({
        "id": model.id,
        "name": model.name,
        "prompt_price": format_pricing(model.prompt_price, provider),
        "completion_price": format_pricing(model.completion_price, provider),
        "context_length": model.context_length,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_session_line() {
        let display = ProviderDisplay {
            name: "VseGPT".to_string(),
            balance: "150.50₽".to_string(),
            last_checked_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
        };
        assert_eq!(
            session_line(&display),
            "VseGPT  150.50₽  (checked 2024-01-15 10:00 UTC)"
        );
    }

    #[test]
    fn test_model_line_uses_provider_pricing_convention() {
        let model = ModelInfo {
            id: "gpt-3.5-turbo".to_string(),
            name: "GPT-3.5 Turbo".to_string(),
            prompt_price: 0.000_002,
            completion_price: 0.000_002,
            context_length: 16_385,
        };
        let line = model_line(&model, ProviderKind::OpenRouter);
        assert!(line.contains("$2.000/M"));

        let line = model_line(&model, ProviderKind::VseGpt);
        assert!(line.contains("0.000₽/K"));
    }
}
