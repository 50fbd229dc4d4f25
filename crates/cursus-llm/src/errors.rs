//! Generation error types.

/// Result type alias for generator operations.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Errors from a single generation attempt.
///
/// These never leave [`GenerationClient`](crate::GenerationClient); after the
/// last attempt fails it falls back to empty text.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Transport failure (connect error or timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error text from the body, or the raw body.
        message: String,
    },

    /// The response body was not the expected JSON.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GenerationError {
    /// Whether a later attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.status().is_some_and(|s| {
                        s == reqwest::StatusCode::TOO_MANY_REQUESTS || s.is_server_error()
                    })
            }
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            Self::Decode(_) => false,
        }
    }

    /// Short category label for log fields.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Http(_) => "network",
            Self::Api { .. } => "api",
            Self::Decode(_) => "decode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn http_connect_error_is_retryable() {
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:1")
            .timeout(std::time::Duration::from_secs(2))
            .send()
            .await
            .unwrap_err();
        let err = GenerationError::Http(err);
        assert!(err.is_retryable());
        assert_eq!(err.category(), "network");
    }

    #[test]
    fn api_server_errors_retryable() {
        let err = GenerationError::Api {
            status: 503,
            message: "loading model".into(),
        };
        assert!(err.is_retryable());
        assert_eq!(err.category(), "api");
        assert_eq!(err.to_string(), "API error (503): loading model");
    }

    #[test]
    fn api_client_errors_not_retryable() {
        let err = GenerationError::Api {
            status: 404,
            message: "model 'x' not found".into(),
        };
        assert!(!err.is_retryable());
    }

    #[test]
    fn decode_error_not_retryable() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err: GenerationError = json_err.into();
        assert!(!err.is_retryable());
        assert_eq!(err.category(), "decode");
    }
}
