//! Client configuration.

use std::time::Duration;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default completion token cap when `MAX_TOKENS` is unset.
const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Default sampling temperature when `TEMPERATURE` is unset.
const DEFAULT_TEMPERATURE: f64 = 0.7;

// ============================================================================
// Client Config
// ============================================================================

/// Construction-time settings for [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Timeout applied to every HTTP request.
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// ============================================================================
// Chat Tuning
// ============================================================================

/// Per-send chat tuning.
///
/// Read from the process environment once per send operation, so a running
/// process picks up changes without restarting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatTuning {
    /// Completion token cap (`MAX_TOKENS`).
    pub max_tokens: u32,
    /// Sampling temperature (`TEMPERATURE`).
    pub temperature: f64,
}

impl ChatTuning {
    /// Reads `MAX_TOKENS` and `TEMPERATURE` from the environment, falling
    /// back to the defaults on missing or unparseable values.
    pub fn from_env() -> Self {
        Self {
            max_tokens: env_parsed("MAX_TOKENS").unwrap_or(DEFAULT_MAX_TOKENS),
            temperature: env_parsed("TEMPERATURE").unwrap_or(DEFAULT_TEMPERATURE),
        }
    }
}

impl Default for ChatTuning {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let config = ApiClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_tuning_defaults() {
        let tuning = ChatTuning::default();
        assert_eq!(tuning.max_tokens, 1000);
        assert!((tuning.temperature - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_env_parsed() {
        // Dedicated variable name so this test cannot race with from_env
        // readers in other tests.
        unsafe { std::env::set_var("CHATRELAY_TEST_MAX_TOKENS", "250") };
        assert_eq!(env_parsed::<u32>("CHATRELAY_TEST_MAX_TOKENS"), Some(250));

        unsafe { std::env::set_var("CHATRELAY_TEST_MAX_TOKENS", "not-a-number") };
        assert_eq!(env_parsed::<u32>("CHATRELAY_TEST_MAX_TOKENS"), None);

        unsafe { std::env::remove_var("CHATRELAY_TEST_MAX_TOKENS") };
        assert_eq!(env_parsed::<u32>("CHATRELAY_TEST_MAX_TOKENS"), None);
    }
}
