//! HTTP client for the two provider dialects.

use async_trait::async_trait;
use chatrelay_core::{
    ApiError, BalanceCheck, ChatApi, ChatCompletion, ModelInfo, ProviderKind, SessionRecord,
};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::json;
use tracing::{debug, instrument};

use crate::config::{ApiClientConfig, ChatTuning};
use crate::parser;

// ============================================================================
// Constants
// ============================================================================

/// Client-identifying header sent on chat calls.
const CLIENT_TITLE_HEADER: &str = "X-Title";

/// Value for the client-identifying header.
const CLIENT_TITLE: &str = "ChatRelay";

/// Balance endpoint per provider dialect.
fn balance_endpoint(provider: ProviderKind) -> &'static str {
    match provider {
        ProviderKind::OpenRouter => "/credits",
        ProviderKind::VseGpt => "/balance",
    }
}

// ============================================================================
// API Client
// ============================================================================

/// HTTP client implementing the three provider operations.
///
/// One instance per process is enough; the underlying `reqwest` client pools
/// connections. Calls are single-attempt: the caller decides whether to
/// re-invoke after a failure.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client with default settings (30 s timeout).
    pub fn new() -> Self {
        Self::with_config(&ApiClientConfig::default())
    }

    /// Creates a client with an explicit configuration.
    pub fn with_config(config: &ApiClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("chatrelay/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self { http }
    }

    /// Builds headers for an authenticated call.
    ///
    /// Chat calls additionally carry the client-identifying title header.
    fn build_headers(api_key: &str, chat: bool) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let bearer = format!("Bearer {api_key}");
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer)
                .map_err(|e| ApiError::Transport(format!("invalid API key bytes: {e}")))?,
        );

        if chat {
            headers.insert(CLIENT_TITLE_HEADER, HeaderValue::from_static(CLIENT_TITLE));
        }

        Ok(headers)
    }

    /// Fetches and parses the model catalog. Failures here degrade to the
    /// fallback list in [`ChatApi::list_models`].
    async fn fetch_models(&self, session: &SessionRecord) -> Result<Vec<ModelInfo>, ApiError> {
        let url = format!("{}/models", session.provider.base_url());
        let headers = Self::build_headers(&session.api_key, false)?;

        debug!(provider = session.provider.display_name(), "Fetching model catalog");

        let response = self
            .http
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UpstreamRejected {
                status: status.as_u16(),
                message: "model catalog request rejected".to_string(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        parser::parse_models(&body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ChatApi Implementation
// ============================================================================

#[async_trait]
impl ChatApi for ApiClient {
    #[instrument(skip(self, api_key))]
    async fn check_balance(&self, api_key: &str) -> Result<BalanceCheck, ApiError> {
        let provider = ProviderKind::resolve(api_key)?;
        let url = format!("{}{}", provider.base_url(), balance_endpoint(provider));
        let headers = Self::build_headers(api_key, false)?;

        debug!(provider = provider.display_name(), "Checking key balance");

        let response = self
            .http
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UpstreamRejected {
                status: status.as_u16(),
                message: "provider rejected the API key".to_string(),
            });
        }

        let body: serde_json::Value = response.json().await.map_err(transport)?;
        let check = parser::evaluate_balance(provider, &body)?;

        debug!(balance = %check.display, "Key validated");
        Ok(check)
    }

    async fn list_models(&self, session: &SessionRecord) -> Vec<ModelInfo> {
        parser::models_or_fallback(self.fetch_models(session).await)
    }

    #[instrument(skip(self, session, message), fields(provider = session.provider.display_name()))]
    async fn send_message(
        &self,
        session: &SessionRecord,
        message: &str,
        model: &str,
    ) -> Result<ChatCompletion, ApiError> {
        let tuning = ChatTuning::from_env();
        let url = format!("{}/chat/completions", session.provider.base_url());
        let headers = Self::build_headers(&session.api_key, true)?;

        let body = json!({
            "model": model,
            "messages": [{"role": "user", "content": message}],
            "max_tokens": tuning.max_tokens,
            "temperature": tuning.temperature,
            "stream": false,
        });

        debug!(model, max_tokens = tuning.max_tokens, "Sending chat message");

        let response = self
            .http
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let text = response.text().await.map_err(transport)?;

        if !status.is_success() {
            let message = parser::upstream_error_message(&text)
                .unwrap_or_else(|| "provider rejected the chat request".to_string());
            return Err(ApiError::UpstreamRejected {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text)
            .map_err(|e| ApiError::Transport(format!("malformed completion response: {e}")))
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

// ============================================================================
// Tests
// ============================================================================
