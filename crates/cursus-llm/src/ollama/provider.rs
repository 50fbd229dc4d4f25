//! Ollama implementation of [`Generator`].

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::errors::{GenerationError, GenerationResult};
use crate::generator::Generator;

use super::types::{
    ChatMessage, ChatOptions, ChatRequest, ChatResponse, OllamaConfig, TEMPERATURE,
};

/// Ollama chat generator.
pub struct OllamaGenerator {
    config: OllamaConfig,
    client: reqwest::Client,
}

impl OllamaGenerator {
    /// Create a generator with its own HTTP client.
    #[must_use]
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }
}

#[async_trait]
impl Generator for OllamaGenerator {
    fn model(&self) -> &str {
        &self.config.model
    }

    #[instrument(skip_all, fields(model = %self.config.model))]
    async fn generate(&self, system: &str, user: &str) -> GenerationResult<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            stream: false,
            options: ChatOptions {
                num_ctx: self.config.num_ctx,
                temperature: TEMPERATURE,
            },
        };

        let url = self.config.chat_url();
        debug!(%url, user_chars = user.chars().count(), "sending chat request");

        let response = self
            .client
            .post(&url)
            .timeout(self.config.request_timeout)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = parse_api_error(&body, status.as_u16());
            warn!(status = status.as_u16(), %message, "Ollama API error");
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        Ok(parsed.into_content())
    }
}

/// Extract the error text from an Ollama error body (`{"error": "..."}`).
fn parse_api_error(body: &str, status: u16) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json["error"].as_str().map(String::from))
        .unwrap_or_else(|| format!("HTTP {status}: {body}"))
}
