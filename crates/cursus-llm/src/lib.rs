//! # cursus-llm
//!
//! Generation boundary. [`Generator`] abstracts the backend and
//! [`OllamaGenerator`] implements it; [`GenerationClient`] adds the prompts
//! and retries and never returns an error.

#![deny(unsafe_code)]

pub mod client;
pub mod errors;
pub mod generator;
pub mod ollama;
pub mod prompt;

pub use client::GenerationClient;
pub use errors::{GenerationError, GenerationResult};
pub use generator::Generator;
pub use ollama::{OllamaConfig, OllamaGenerator};
