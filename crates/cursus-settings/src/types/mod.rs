//! Settings type definitions.
//!
//! Every section uses `#[serde(rename_all = "camelCase", default)]`, so a
//! settings file may name only the fields it changes.

mod backend;
mod pipeline;

pub use backend::*;
pub use pipeline::*;

pub use cursus_core::{ExtractionConfig, RetryConfig};

use serde::{Deserialize, Serialize};

/// Root settings type.
///
/// Loaded from `~/.cursus/settings.json` with defaults for missing fields,
/// then overridden by `CURSUS_*` environment variables. Example:
///
/// ```json
/// {
///   "backend": { "model": "llama3.1:8b" },
///   "retry": { "maxAttempts": 5 },
///   "pipeline": { "input": "theory.jsonl", "output": "theory_output.jsonl" }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CursusSettings {
    /// Generation backend connection.
    pub backend: BackendSettings,
    /// Attempts and delay for generation calls.
    pub retry: RetryConfig,
    /// Input/output files and per-record throttle.
    pub pipeline: PipelineSettings,
    /// Parser and cleaner limits.
    pub extraction: ExtractionConfig,
    /// Log level.
    pub logging: LoggingSettings,
}
