//! # cursus-runtime
//!
//! Pipeline driver: reads syllabus JSONL, runs each record through
//! generation, parsing and cleaning, and writes one output line per decoded
//! record, flushed immediately.
//!
//! Processing is strictly sequential. Bad input lines are skipped with a
//! warning. Only file errors stop a batch.

#![deny(unsafe_code)]

pub mod errors;
pub mod jsonl;
pub mod pipeline;

pub use errors::RuntimeError;
pub use pipeline::{Pipeline, RunSummary};

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
