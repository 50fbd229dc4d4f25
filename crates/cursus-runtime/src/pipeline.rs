//! Sequential extraction over a JSONL file.

use std::path::Path;
use std::time::Duration;

use cursus_core::{ExtractionConfig, OutputRecord, SyllabusRecord, clean, parse_sections};
use cursus_llm::{GenerationClient, Generator};
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, BufReader, BufWriter};
use tracing::{debug, info, instrument, warn};

use crate::errors::RuntimeError;
use crate::jsonl::{InputLine, RecordWriter, decode_bytes};

/// Counters for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Input lines seen, blank lines included.
    pub lines_read: u64,
    /// Output records written.
    pub records_written: u64,
    /// Non-blank lines that failed to decode.
    pub records_skipped: u64,
    /// Records whose generation came back empty.
    pub empty_generations: u64,
}

/// One record at a time: generate, parse, clean, write, pause.
pub struct Pipeline<G> {
    client: GenerationClient<G>,
    extraction: ExtractionConfig,
    record_delay: Duration,
}

impl<G: Generator> Pipeline<G> {
    /// Assemble a pipeline.
    pub fn new(client: GenerationClient<G>, extraction: ExtractionConfig, record_delay: Duration) -> Self {
        Self {
            client,
            extraction,
            record_delay,
        }
    }

    /// Run over `input`, writing to `output`.
    ///
    /// The input is opened first; if that fails no output file is created.
    /// The output is truncated.
    #[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
    pub async fn run(&self, input: &Path, output: &Path) -> crate::Result<RunSummary> {
        let input_file = File::open(input)
            .await
            .map_err(|source| RuntimeError::InputUnreadable {
                path: input.to_path_buf(),
                source,
            })?;
        let output_file = File::create(output)
            .await
            .map_err(|source| RuntimeError::OutputUnwritable {
                path: output.to_path_buf(),
                source,
            })?;

        info!("extraction started");
        let summary = self
            .run_streams(BufReader::new(input_file), BufWriter::new(output_file))
            .await?;
        info!(
            lines_read = summary.lines_read,
            records_written = summary.records_written,
            records_skipped = summary.records_skipped,
            empty_generations = summary.empty_generations,
            "extraction finished"
        );
        Ok(summary)
    }

    /// Run over arbitrary line source and sink.
    pub async fn run_streams<R, W>(&self, reader: R, writer: W) -> crate::Result<RunSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut summary = RunSummary::default();
        let mut lines = reader.split(b'\n');
        let mut writer = RecordWriter::new(writer);

        while let Some(line) = lines.next_segment().await? {
            summary.lines_read += 1;
            let index = summary.lines_read;

            let record = match decode_bytes(&line) {
                InputLine::Blank => continue,
                InputLine::Record(record) => record,
                InputLine::Malformed(e) => {
                    warn!(line = index, error = %e, "malformed input line, skipping");
                    summary.records_skipped += 1;
                    continue;
                }
            };

            info!(
                index,
                course_code = %record.course_code,
                title = %record.title,
                "processing record"
            );
            let (output, generated_empty) = self.process_record(record).await;
            if generated_empty {
                summary.empty_generations += 1;
            }
            writer.write_record(&output).await?;
            summary.records_written += 1;

            if !self.record_delay.is_zero() {
                tokio::time::sleep(self.record_delay).await;
            }
        }

        Ok(summary)
    }

    /// Generate, parse and clean a single record.
    ///
    /// The flag reports whether the generated text was empty.
    pub async fn process_record(&self, record: SyllabusRecord) -> (OutputRecord, bool) {
        let generated = self.client.generate(&record.text).await;
        let sections = parse_sections(&generated, &self.extraction);
        let cleaned = clean(&sections, &self.extraction);
        debug!(
            course_code = %record.course_code,
            raw_teaches = sections.teaches.len(),
            raw_requires = sections.requires.len(),
            notes = sections.notes.len(),
            teaches_clean = cleaned.teaches_clean.len(),
            requires_clean = cleaned.requires_clean.len(),
            "record cleaned"
        );
        (
            OutputRecord::assemble(record, sections, cleaned),
            generated.is_empty(),
        )
    }
}
