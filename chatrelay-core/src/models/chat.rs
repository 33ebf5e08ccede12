//! Chat payloads: model catalog entries, messages, and completions.
//!
//! Response types are deliberately lenient: both providers speak an
//! OpenAI-flavored dialect, but neither guarantees every field, so anything
//! not needed to render a reply is optional with a default.

use serde::{Deserialize, Serialize};

// ============================================================================
// Model Catalog
// ============================================================================

/// A chat model offered by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Provider-scoped model identifier, as accepted by the chat endpoint.
    pub id: String,
    /// Human-readable model name, sanitized to 7-bit ASCII.
    pub name: String,
    /// Raw per-token prompt price, as reported by the provider.
    pub prompt_price: f64,
    /// Raw per-token completion price, as reported by the provider.
    pub completion_price: f64,
    /// Maximum context window in tokens.
    pub context_length: u32,
}

// ============================================================================
// Chat Messages
// ============================================================================

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role (`"user"`, `"assistant"`, `"system"`).
    #[serde(default)]
    pub role: String,
    /// Message text.
    #[serde(default)]
    pub content: String,
}

/// One completion choice in a chat response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChoice {
    /// The assistant message for this choice.
    pub message: ChatMessage,
}

/// Token accounting reported with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TokenUsage {
    /// Tokens consumed by the prompt.
    #[serde(default)]
    pub prompt_tokens: Option<u32>,
    /// Tokens produced in the completion.
    #[serde(default)]
    pub completion_tokens: Option<u32>,
    /// Prompt plus completion tokens.
    #[serde(default)]
    pub total_tokens: Option<u32>,
}

/// A chat completion response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletion {
    /// Provider-assigned completion id.
    #[serde(default)]
    pub id: Option<String>,
    /// Model that produced the completion.
    #[serde(default)]
    pub model: Option<String>,
    /// Completion choices; the first one carries the reply.
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    /// Token accounting, when the provider reports it.
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

impl ChatCompletion {
    /// Returns the first choice's message text, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_completion() {
        let json = r#"{
            "id": "gen-123",
            "model": "deepseek-coder",
            "choices": [
                {"message": {"role": "assistant", "content": "Hello!"}}
            ],
            "usage": {"prompt_tokens": 5, "completion_tokens": 2, "total_tokens": 7}
        }"#;

        let completion: ChatCompletion = serde_json::from_str(json).unwrap();
        assert_eq!(completion.first_content(), Some("Hello!"));
        assert_eq!(completion.usage.unwrap().total_tokens, Some(7));
    }

    #[test]
    fn test_parse_minimal_completion() {
        let completion: ChatCompletion = serde_json::from_str("{}").unwrap();
        assert_eq!(completion.first_content(), None);
        assert!(completion.usage.is_none());
    }
}
