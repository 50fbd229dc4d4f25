//! Retrying prompt client.

use cursus_core::RetryConfig;
use tracing::{debug, error, warn};

use crate::generator::Generator;
use crate::prompt::{SYSTEM_PROMPT, user_prompt};

/// Turns syllabus text into generated micro-format text.
///
/// Builds the prompt pair, calls the [`Generator`] up to
/// `retry.max_attempts` times with a fixed pause between attempts, and
/// returns the first success. When every attempt fails the result is an
/// empty string, which the parser reads as three empty lists; a backend
/// outage therefore never stops a batch.
pub struct GenerationClient<G> {
    generator: G,
    retry: RetryConfig,
}

impl<G: Generator> GenerationClient<G> {
    /// Wrap a generator with retry bounds.
    pub fn new(generator: G, retry: RetryConfig) -> Self {
        Self { generator, retry }
    }

    /// The wrapped generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generate micro-format text for one syllabus. Never fails.
    pub async fn generate(&self, syllabus_text: &str) -> String {
        let user = user_prompt(syllabus_text);
        let attempts = self.retry.attempts();

        for attempt in 1..=attempts {
            match self.generator.generate(SYSTEM_PROMPT, &user).await {
                Ok(text) => {
                    debug!(
                        attempt,
                        model = self.generator.model(),
                        chars = text.chars().count(),
                        "generation succeeded"
                    );
                    return text;
                }
                Err(e) => {
                    warn!(
                        attempt,
                        max_attempts = attempts,
                        category = e.category(),
                        retryable = e.is_retryable(),
                        error = %e,
                        "generation attempt failed"
                    );
                    if attempt < attempts {
                        tokio::time::sleep(self.retry.delay()).await;
                    }
                }
            }
        }

        error!(
            attempts,
            model = self.generator.model(),
            "all generation attempts failed, continuing with empty text"
        );
        String::new()
    }
}
