//! Retry parameters for generation calls.
//!
//! The async loop that uses these lives in `cursus-llm`; this module only
//! holds the portable configuration value.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default number of attempts per record.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Default wait between attempts in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Fixed-delay retry configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryConfig {
    /// Total attempts including the first (default: 3).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Wait between consecutive attempts in ms (default: 1000).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}
fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl RetryConfig {
    /// Wait between attempts.
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Attempts actually made; a configured zero still makes one call.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RetryConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.delay(), Duration::from_secs(1));
    }

    #[test]
    fn partial_json() {
        let config: RetryConfig = serde_json::from_str(r#"{"delayMs": 250}"#).unwrap();
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.delay_ms, 250);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(RetryConfig::default()).unwrap();
        assert_eq!(json["maxAttempts"], 3);
        assert_eq!(json["delayMs"], 1000);
    }

    #[test]
    fn zero_attempts_clamped_to_one() {
        let config = RetryConfig {
            max_attempts: 0,
            delay_ms: 0,
        };
        assert_eq!(config.attempts(), 1);
    }
}
