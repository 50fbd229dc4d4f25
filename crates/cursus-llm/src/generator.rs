//! # Generator Trait
//!
//! Abstraction over the text-generation backend. The pipeline only ever sees
//! [`GenerationClient`](crate::GenerationClient), which wraps a [`Generator`]
//! with prompts and retries, so tests can swap in a scripted generator.

use async_trait::async_trait;

use crate::errors::GenerationResult;

/// One-shot chat completion backend.
///
/// Implementors must be `Send + Sync`.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Model identifier used for requests and log fields.
    fn model(&self) -> &str;

    /// Generate a reply to a system + user message pair.
    ///
    /// A response that decodes but carries no content is `Ok(String::new())`,
    /// not an error.
    async fn generate(&self, system: &str, user: &str) -> GenerationResult<String>;
}
