//! Ollama chat backend.
//!
//! Non-streaming `POST {base_url}/api/chat`.

pub mod provider;
pub mod types;

pub use provider::OllamaGenerator;
pub use types::OllamaConfig;
