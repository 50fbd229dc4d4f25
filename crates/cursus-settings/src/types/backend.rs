//! Generation backend settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Connection options for the Ollama chat endpoint.
///
/// Sampling is not configurable; requests always decode at temperature zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackendSettings {
    /// Server root; `/api/chat` is appended.
    pub base_url: String,
    /// Model tag, e.g. `qwen2.5:7b`.
    pub model: String,
    /// Context window passed as `options.num_ctx`.
    pub num_ctx: u32,
    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:11434".to_string(),
            model: "qwen2.5:7b".to_string(),
            num_ctx: 32_768,
            request_timeout_ms: 300_000,
        }
    }
}

impl BackendSettings {
    /// Per-request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
