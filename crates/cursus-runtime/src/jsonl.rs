//! JSONL line decoding and flushed record output.

use cursus_core::{OutputRecord, SyllabusRecord};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Outcome of decoding one input line.
#[derive(Debug)]
pub enum InputLine {
    /// Empty or whitespace-only; skipped silently.
    Blank,
    /// A decoded record.
    Record(SyllabusRecord),
    /// Not UTF-8, or not a JSON object with string-or-null fields.
    Malformed(LineError),
}

/// Why a non-blank line was not a record.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    /// The bytes are not UTF-8.
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// The text is not a syllabus record.
    #[error("invalid record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode one input line as read from the file, terminator excluded.
pub fn decode_bytes(line: &[u8]) -> InputLine {
    match std::str::from_utf8(line) {
        Ok(text) => decode_line(text),
        Err(e) => InputLine::Malformed(e.into()),
    }
}

/// Decode one input line.
pub fn decode_line(line: &str) -> InputLine {
    let line = line.trim();
    if line.is_empty() {
        return InputLine::Blank;
    }
    match serde_json::from_str(line) {
        Ok(record) => InputLine::Record(record),
        Err(e) => InputLine::Malformed(e.into()),
    }
}

/// Writes one JSON object per line and flushes after each.
///
/// A record is either fully on disk or absent when a run is interrupted
/// between records.
pub struct RecordWriter<W> {
    inner: W,
}

impl<W: AsyncWrite + Unpin> RecordWriter<W> {
    /// Wrap a sink.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write one record and flush.
    pub async fn write_record(&mut self, record: &OutputRecord) -> crate::Result<()> {
        let mut line = record.to_json_line()?;
        line.push('\n');
        self.inner.write_all(line.as_bytes()).await?;
        self.inner.flush().await?;
        Ok(())
    }

    /// Recover the sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn blank_lines() {
        assert_matches!(decode_line(""), InputLine::Blank);
        assert_matches!(decode_line("  \t\r"), InputLine::Blank);
    }

    #[test]
    fn record_line_trimmed() {
        let line = r#"  {"course_code": "X101", "title": "Data Structures", "text": "..."}  "#;
        assert_matches!(decode_line(line), InputLine::Record(r) if r.course_code == "X101");
    }

    #[test]
    fn malformed_lines() {
        assert_matches!(decode_line("{not json"), InputLine::Malformed(_));
        assert_matches!(decode_line("[1, 2, 3]"), InputLine::Malformed(_));
        assert_matches!(decode_line(r#"{"text": 42}"#), InputLine::Malformed(LineError::Json(_)));
    }

    #[test]
    fn bytes_decode_like_text() {
        assert_matches!(decode_bytes(b" \r"), InputLine::Blank);
        assert_matches!(
            decode_bytes("{\"title\": \"線形代数\"}\r".as_bytes()),
            InputLine::Record(r) if r.title == "線形代数"
        );
    }

    #[test]
    fn non_utf8_bytes_are_malformed() {
        let line = b"{\"course_code\": \"\xff\xfe\"}";
        assert_matches!(decode_bytes(line), InputLine::Malformed(LineError::Utf8(_)));
    }

    #[tokio::test]
    async fn writes_one_line_per_record_unescaped() {
        let mut writer = RecordWriter::new(Vec::new());
        let record = OutputRecord {
            course_code: "C1".into(),
            title: "線形代数".into(),
            ..Default::default()
        };
        writer.write_record(&record).await.unwrap();
        writer.write_record(&record).await.unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(out.ends_with('\n'));
        assert!(lines[0].contains("線形代数"));
        assert!(!lines[0].contains("\\u"));
    }
}
