//! Ollama configuration and wire types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default server root.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:11434";
/// Default model tag.
pub const DEFAULT_MODEL: &str = "qwen2.5:7b";
/// Default context window.
pub const DEFAULT_NUM_CTX: u32 = 32_768;
/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(300);
/// Sampling temperature sent with every request.
pub const TEMPERATURE: f64 = 0.0;

/// Connection options.
#[derive(Clone, Debug, PartialEq)]
pub struct OllamaConfig {
    /// Server root without trailing `/api/chat`.
    pub base_url: String,
    /// Model tag.
    pub model: String,
    /// `options.num_ctx`.
    pub num_ctx: u32,
    /// Timeout for one request, connect through body.
    pub request_timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            num_ctx: DEFAULT_NUM_CTX,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl OllamaConfig {
    /// Full chat endpoint URL.
    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url.trim_end_matches('/'))
    }
}

/// Request body for `/api/chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    /// Model tag.
    pub model: &'a str,
    /// System then user message.
    pub messages: [ChatMessage<'a>; 2],
    /// Always `false`; the whole reply arrives in one body.
    pub stream: bool,
    /// Sampling options.
    pub options: ChatOptions,
}

/// One chat message.
#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    /// `"system"` or `"user"`.
    pub role: &'static str,
    /// Message text.
    pub content: &'a str,
}

/// Model options.
#[derive(Debug, Serialize)]
pub struct ChatOptions {
    /// Context window.
    pub num_ctx: u32,
    /// Always [`TEMPERATURE`].
    pub temperature: f64,
}

/// Response body from `/api/chat`; only the reply text is read.
#[derive(Debug, Default, Deserialize)]
pub struct ChatResponse {
    /// Assistant message; may be absent or `null`.
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

/// Assistant message in a [`ChatResponse`].
#[derive(Debug, Default, Deserialize)]
pub struct ResponseMessage {
    /// Reply text; may be absent or `null`.
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Reply text, empty when the body carries none.
    pub fn into_content(self) -> String {
        self.message.and_then(|m| m.content).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_url_handles_trailing_slash() {
        let config = OllamaConfig {
            base_url: "http://localhost:11434/".into(),
            ..Default::default()
        };
        assert_eq!(config.chat_url(), "http://localhost:11434/api/chat");
        assert_eq!(OllamaConfig::default().chat_url(), "http://127.0.0.1:11434/api/chat");
    }

    #[test]
    fn request_serializes_to_ollama_shape() {
        let request = ChatRequest {
            model: "qwen2.5:7b",
            messages: [
                ChatMessage { role: "system", content: "sys" },
                ChatMessage { role: "user", content: "usr" },
            ],
            stream: false,
            options: ChatOptions {
                num_ctx: 32_768,
                temperature: TEMPERATURE,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "qwen2.5:7b",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "usr"}
                ],
                "stream": false,
                "options": {"num_ctx": 32768, "temperature": 0.0}
            })
        );
    }

    #[test]
    fn response_content_extracted() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"model": "m", "message": {"role": "assistant", "content": "[TEACHES]"}, "done": true}"#,
        )
        .unwrap();
        assert_eq!(response.into_content(), "[TEACHES]");
    }

    #[test]
    fn response_without_content_is_empty() {
        for body in [r#"{}"#, r#"{"message": null}"#, r#"{"message": {"role": "assistant"}}"#] {
            let response: ChatResponse = serde_json::from_str(body).unwrap();
            assert_eq!(response.into_content(), "", "body: {body}");
        }
    }
}
