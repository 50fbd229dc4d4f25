//! Pipeline and logging settings.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Files and pacing for a batch run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineSettings {
    /// Input JSONL of syllabus records.
    pub input: PathBuf,
    /// Output JSONL; truncated at the start of a run.
    pub output: PathBuf,
    /// Pause after each written record in milliseconds.
    pub record_delay_ms: u64,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("syllabus.jsonl"),
            output: PathBuf::from("raw_concepts_output.jsonl"),
            record_delay_ms: 1000,
        }
    }
}

impl PipelineSettings {
    /// Pause after each written record.
    #[must_use]
    pub fn record_delay(&self) -> Duration {
        Duration::from_millis(self.record_delay_ms)
    }
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Default filter level when `RUST_LOG` is unset.
    pub level: String,
    /// Emit one JSON object per event instead of compact text.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
