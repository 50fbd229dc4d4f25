//! Pipeline error types.

use std::path::PathBuf;

/// Fatal pipeline errors.
///
/// Malformed input lines and generation failures are not errors; they are
/// logged and counted in the [`RunSummary`](crate::RunSummary).
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The input file could not be opened. Raised before the output exists.
    #[error("cannot open input {}: {source}", path.display())]
    InputUnreadable {
        /// Input path as given.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The output file could not be created.
    #[error("cannot create output {}: {source}", path.display())]
    OutputUnwritable {
        /// Output path as given.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Reading input or writing output failed mid-run.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An output record could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_unreadable_display_names_path() {
        let err = RuntimeError::InputUnreadable {
            path: PathBuf::from("technology.jsonl"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        let text = err.to_string();
        assert!(text.contains("technology.jsonl"));
        assert!(text.contains("No such file"));
    }

    #[test]
    fn io_error_from_conversion() {
        let err: RuntimeError = std::io::Error::other("disk full").into();
        assert!(matches!(err, RuntimeError::Io(_)));
    }
}
