//! Response parsing for the two provider dialects.
//!
//! Everything here is pure: bytes in, values out. The HTTP side lives in
//! [`crate::client`].

use chatrelay_core::{ApiError, BalanceCheck, ModelInfo, ProviderKind};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::pricing;

// ============================================================================
// Balance Extraction
// ============================================================================

/// Ordered JSON paths tried for the VseGPT balance value.
///
/// The upstream API has shipped several envelope shapes over time; the first
/// path yielding a number wins, and a body matching none of them counts as
/// zero. This is deliberate tolerance of upstream inconsistency, not
/// incidental sloppiness.
const VSEGPT_BALANCE_PATHS: &[&[&str]] = &[
    &["balance"],
    &["data", "balance"],
    &["data", "credits"],
    &["credits"],
];

/// Extracts the VseGPT balance amount from a response body.
pub fn vsegpt_balance_amount(body: &Value) -> f64 {
    for path in VSEGPT_BALANCE_PATHS {
        let mut node = Some(body);
        for key in *path {
            node = node.and_then(|n| n.get(key));
        }
        if let Some(amount) = node.and_then(numeric) {
            return amount;
        }
    }
    debug!("No balance field found in VseGPT response, treating as zero");
    0.0
}

/// Extracts the OpenRouter balance: total credits bought minus total used.
///
/// Returns `None` when the credits envelope is malformed.
pub fn openrouter_balance_amount(body: &Value) -> Option<f64> {
    let data = body.get("data")?;
    let credits = data.get("total_credits").and_then(numeric)?;
    let usage = data.get("total_usage").and_then(numeric)?;
    Some(credits - usage)
}

/// Reads a JSON value as a number, accepting both numeric and string forms.
///
/// Both providers have been observed quoting numbers as strings.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Evaluates a successful balance response body for the given provider.
///
/// # Errors
///
/// [`ApiError::InsufficientBalance`] when the balance is zero or less: the
/// key was accepted upstream but the account is unusable until topped up.
/// [`ApiError::Transport`] when an OpenRouter credits envelope is malformed.
pub fn evaluate_balance(provider: ProviderKind, body: &Value) -> Result<BalanceCheck, ApiError> {
    let amount = match provider {
        ProviderKind::VseGpt => vsegpt_balance_amount(body),
        ProviderKind::OpenRouter => openrouter_balance_amount(body)
            .ok_or_else(|| ApiError::Transport("malformed credits response".to_string()))?,
    };

    let display = pricing::format_balance(amount, provider);
    if amount <= 0.0 {
        return Err(ApiError::InsufficientBalance(display));
    }

    Ok(BalanceCheck {
        provider,
        display,
        amount,
    })
}

// ============================================================================
// Model Catalog
// ============================================================================

/// `GET /models` response envelope. A body without `data` is malformed.
#[derive(Debug, Deserialize)]
struct ModelsResponse {
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    pricing: Option<ModelPricing>,
    #[serde(default)]
    context_length: Option<u32>,
}

/// Per-token prices; OpenRouter quotes these as strings.
#[derive(Debug, Deserialize)]
struct ModelPricing {
    #[serde(default)]
    prompt: Option<Value>,
    #[serde(default)]
    completion: Option<Value>,
}

/// Parses a model catalog body. Entries without an id are skipped.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when the body is not the expected
/// envelope; the caller degrades to the fallback list.
pub fn parse_models(body: &str) -> Result<Vec<ModelInfo>, ApiError> {
    let response: ModelsResponse = serde_json::from_str(body)
        .map_err(|e| ApiError::Transport(format!("malformed model catalog: {e}")))?;

    let models = response
        .data
        .into_iter()
        .filter_map(|entry| {
            let id = entry.id?;
            let name = sanitize_ascii(entry.name.as_deref().unwrap_or(&id));
            let (prompt_price, completion_price) = match entry.pricing {
                Some(p) => (
                    p.prompt.as_ref().and_then(numeric).unwrap_or(0.0),
                    p.completion.as_ref().and_then(numeric).unwrap_or(0.0),
                ),
                None => (0.0, 0.0),
            };
            Some(ModelInfo {
                id,
                name,
                prompt_price,
                completion_price,
                context_length: entry.context_length.unwrap_or(0),
            })
        })
        .collect();

    Ok(models)
}

/// Strips any byte outside the 7-bit ASCII range.
///
/// Guards against malformed upstream encoding in model names.
pub fn sanitize_ascii(input: &str) -> String {
    input.chars().filter(char::is_ascii).collect()
}

/// The fixed fallback catalog returned when the models endpoint fails.
///
/// Ids must stay stable: the chat screen falls back to these when the
/// catalog endpoint is flaky, and they must remain routable upstream.
pub fn fallback_models() -> Vec<ModelInfo> {
    vec![
        ModelInfo {
            id: "deepseek-coder".to_string(),
            name: "DeepSeek Coder".to_string(),
            prompt_price: 0.000_000_14,
            completion_price: 0.000_000_28,
            context_length: 16_384,
        },
        ModelInfo {
            id: "claude-3-sonnet".to_string(),
            name: "Claude 3 Sonnet".to_string(),
            prompt_price: 0.000_003,
            completion_price: 0.000_015,
            context_length: 200_000,
        },
        ModelInfo {
            id: "gpt-3.5-turbo".to_string(),
            name: "GPT-3.5 Turbo".to_string(),
            prompt_price: 0.000_000_5,
            completion_price: 0.000_001_5,
            context_length: 16_385,
        },
    ]
}

/// Collapses any catalog failure (and an empty catalog) into the fallback
/// list. Chat must stay usable even when the models endpoint misbehaves.
pub fn models_or_fallback(fetched: Result<Vec<ModelInfo>, ApiError>) -> Vec<ModelInfo> {
    match fetched {
        Ok(models) if !models.is_empty() => models,
        Ok(_) => {
            warn!("Model catalog came back empty, using fallback list");
            fallback_models()
        }
        Err(e) => {
            warn!(error = %e, "Model catalog fetch failed, using fallback list");
            fallback_models()
        }
    }
}

// ============================================================================
// Error Envelope
// ============================================================================

/// Pulls `error.message` out of an upstream error body, if present.
pub fn upstream_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(ToString::to_string)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vsegpt_balance_top_level() {
        let body = json!({"balance": 42.5});
        assert_eq!(vsegpt_balance_amount(&body), 42.5);
    }

    #[test]
    fn test_vsegpt_balance_nested_credits() {
        let body = json!({"data": {"credits": "150.50"}});
        assert_eq!(vsegpt_balance_amount(&body), 150.50);
    }

    #[test]
    fn test_vsegpt_balance_priority_order() {
        // Top-level `balance` wins over every nested shape.
        let body = json!({
            "balance": 1.0,
            "data": {"balance": 2.0, "credits": 3.0},
            "credits": 4.0
        });
        assert_eq!(vsegpt_balance_amount(&body), 1.0);

        // Without it, `data.balance` is next.
        let body = json!({"data": {"balance": 2.0, "credits": 3.0}, "credits": 4.0});
        assert_eq!(vsegpt_balance_amount(&body), 2.0);

        let body = json!({"data": {"credits": 3.0}, "credits": 4.0});
        assert_eq!(vsegpt_balance_amount(&body), 3.0);

        let body = json!({"credits": 4.0});
        assert_eq!(vsegpt_balance_amount(&body), 4.0);
    }

    #[test]
    fn test_vsegpt_balance_defaults_to_zero() {
        assert_eq!(vsegpt_balance_amount(&json!({})), 0.0);
        assert_eq!(vsegpt_balance_amount(&json!({"balance": "not a number"})), 0.0);
        assert_eq!(vsegpt_balance_amount(&json!({"balance": null})), 0.0);
    }

    #[test]
    fn test_vsegpt_balance_string_form() {
        let body = json!({"balance": "0"});
        assert_eq!(vsegpt_balance_amount(&body), 0.0);
    }

    #[test]
    fn test_openrouter_balance() {
        let body = json!({"data": {"total_credits": 10.0, "total_usage": 3.5}});
        assert_eq!(openrouter_balance_amount(&body), Some(6.5));
    }

    #[test]
    fn test_openrouter_balance_string_numbers() {
        let body = json!({"data": {"total_credits": "10", "total_usage": "3.5"}});
        assert_eq!(openrouter_balance_amount(&body), Some(6.5));
    }

    #[test]
    fn test_evaluate_balance_vsegpt_success() {
        let body = json!({"data": {"credits": "150.50"}});
        let check = evaluate_balance(ProviderKind::VseGpt, &body).unwrap();
        assert_eq!(check.display, "150.50₽");
        assert_eq!(check.provider, ProviderKind::VseGpt);
    }

    #[test]
    fn test_evaluate_balance_vsegpt_zero_is_insufficient() {
        let body = json!({"balance": "0"});
        let result = evaluate_balance(ProviderKind::VseGpt, &body);
        match result {
            Err(ApiError::InsufficientBalance(display)) => assert_eq!(display, "0.00₽"),
            other => panic!("expected InsufficientBalance, got {other:?}"),
        }
    }

    #[test]
    fn test_evaluate_balance_openrouter_success() {
        let body = json!({"data": {"total_credits": 10.0, "total_usage": 3.5}});
        let check = evaluate_balance(ProviderKind::OpenRouter, &body).unwrap();
        assert_eq!(check.display, "$6.50");
    }

    #[test]
    fn test_evaluate_balance_openrouter_overdrawn_is_insufficient() {
        let body = json!({"data": {"total_credits": 3.0, "total_usage": 5.0}});
        assert!(matches!(
            evaluate_balance(ProviderKind::OpenRouter, &body),
            Err(ApiError::InsufficientBalance(_))
        ));
    }

    #[test]
    fn test_evaluate_balance_openrouter_malformed_is_transport() {
        assert!(matches!(
            evaluate_balance(ProviderKind::OpenRouter, &json!({})),
            Err(ApiError::Transport(_))
        ));
    }

    #[test]
    fn test_openrouter_balance_malformed() {
        assert_eq!(openrouter_balance_amount(&json!({})), None);
        assert_eq!(openrouter_balance_amount(&json!({"data": {}})), None);
        assert_eq!(
            openrouter_balance_amount(&json!({"data": {"total_credits": 10.0}})),
            None
        );
    }

    #[test]
    fn test_parse_models() {
        let body = r#"{
            "data": [
                {
                    "id": "deepseek/deepseek-coder",
                    "name": "DeepSeek Coder",
                    "pricing": {"prompt": "0.000002", "completion": "0.000004"},
                    "context_length": 16384
                },
                {"name": "no id, skipped"},
                {"id": "bare-model"}
            ]
        }"#;

        let models = parse_models(body).unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].id, "deepseek/deepseek-coder");
        assert!((models[0].prompt_price - 0.000_002).abs() < 1e-12);
        assert_eq!(models[0].context_length, 16_384);
        // Entries missing optional fields still parse.
        assert_eq!(models[1].name, "bare-model");
        assert_eq!(models[1].context_length, 0);
    }

    #[test]
    fn test_parse_models_missing_data_field() {
        assert!(parse_models(r#"{"models": []}"#).is_err());
        assert!(parse_models("not json").is_err());
    }

    #[test]
    fn test_sanitize_ascii() {
        assert_eq!(sanitize_ascii("GPT-3.5 Turbo"), "GPT-3.5 Turbo");
        assert_eq!(sanitize_ascii("Клод Claude"), " Claude");
        assert_eq!(sanitize_ascii("Qwen–72B"), "Qwen72B");
    }

    #[test]
    fn test_fallback_models_ids() {
        let ids: Vec<_> = fallback_models().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, ["deepseek-coder", "claude-3-sonnet", "gpt-3.5-turbo"]);
    }

    #[test]
    fn test_models_or_fallback_on_failure() {
        let models = models_or_fallback(Err(ApiError::Transport("connection refused".into())));
        let ids: Vec<_> = models.into_iter().map(|m| m.id).collect();
        assert_eq!(ids, ["deepseek-coder", "claude-3-sonnet", "gpt-3.5-turbo"]);
    }

    #[test]
    fn test_models_or_fallback_on_empty_catalog() {
        let models = models_or_fallback(Ok(vec![]));
        assert_eq!(models.len(), 3);
    }

    #[test]
    fn test_models_or_fallback_passthrough() {
        let fetched = vec![ModelInfo {
            id: "m".to_string(),
            name: "M".to_string(),
            prompt_price: 0.0,
            completion_price: 0.0,
            context_length: 4096,
        }];
        assert_eq!(models_or_fallback(Ok(fetched.clone())), fetched);
    }

    #[test]
    fn test_upstream_error_message() {
        let body = r#"{"error": {"message": "Invalid model", "code": 400}}"#;
        assert_eq!(upstream_error_message(body).as_deref(), Some("Invalid model"));

        assert_eq!(upstream_error_message(r#"{"error": "flat"}"#), None);
        assert_eq!(upstream_error_message("<html>502</html>"), None);
    }
}
