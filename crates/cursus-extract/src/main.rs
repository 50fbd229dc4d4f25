//! # cursus-extract
//!
//! Batch extraction binary. Runs the pipeline over one input JSONL file
//! against a local Ollama server.

#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cursus_llm::{GenerationClient, OllamaConfig, OllamaGenerator};
use cursus_logging::LogFormat;
use cursus_runtime::Pipeline;
use cursus_settings::{
    CursusSettings, load_settings_from_path, parse_log_level, settings_path, validate,
};
use tracing::info;

/// Extract taught and prerequisite concepts from syllabus JSONL.
#[derive(Parser, Debug)]
#[command(name = "cursus-extract", version, about)]
struct Cli {
    /// Input JSONL (`course_code`, `title`, `text` per line).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output JSONL; truncated if it exists.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Settings file (default: `~/.cursus/settings.json`).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Ollama server root, e.g. `http://127.0.0.1:11434`.
    #[arg(long)]
    url: Option<String>,

    /// Model tag, e.g. `qwen2.5:7b`.
    #[arg(long)]
    model: Option<String>,

    /// Attempts per record before giving up on generation.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    max_attempts: Option<u32>,

    /// Pause after each record in milliseconds.
    #[arg(long)]
    record_delay_ms: Option<u64>,

    /// Log level when `RUST_LOG` is unset.
    #[arg(long, value_parser = log_level_arg)]
    log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long)]
    log_json: bool,
}

fn log_level_arg(val: &str) -> std::result::Result<String, String> {
    parse_log_level(val)
        .ok_or_else(|| format!("expected one of trace, debug, info, warn, error, off; got {val:?}"))
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings.
    fn apply(&self, settings: &mut CursusSettings) {
        if let Some(ref v) = self.input {
            settings.pipeline.input.clone_from(v);
        }
        if let Some(ref v) = self.output {
            settings.pipeline.output.clone_from(v);
        }
        if let Some(ref v) = self.url {
            settings.backend.base_url.clone_from(v);
        }
        if let Some(ref v) = self.model {
            settings.backend.model.clone_from(v);
        }
        if let Some(v) = self.max_attempts {
            settings.retry.max_attempts = v;
        }
        if let Some(v) = self.record_delay_ms {
            settings.pipeline.record_delay_ms = v;
        }
        if let Some(ref v) = self.log_level {
            settings.logging.level.clone_from(v);
        }
        if self.log_json {
            settings.logging.json = true;
        }
    }
}

fn load(cli: &Cli) -> Result<CursusSettings> {
    let path = match cli.settings {
        Some(ref path) => {
            if !path.exists() {
                bail!("settings file not found: {}", path.display());
            }
            path.clone()
        }
        None => settings_path(),
    };
    let mut settings = load_settings_from_path(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    cli.apply(&mut settings);
    validate(&settings).context("Invalid command-line override")?;
    Ok(settings)
}

fn ollama_config(settings: &CursusSettings) -> OllamaConfig {
    OllamaConfig {
        base_url: settings.backend.base_url.clone(),
        model: settings.backend.model.clone(),
        num_ctx: settings.backend.num_ctx,
        request_timeout: settings.backend.request_timeout(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load(&cli)?;

    cursus_logging::init_subscriber(
        &settings.logging.level,
        LogFormat::from_json_flag(settings.logging.json),
    );
    info!(
        model = %settings.backend.model,
        url = %settings.backend.base_url,
        max_attempts = settings.retry.max_attempts,
        "starting extraction"
    );

    let generator = OllamaGenerator::new(ollama_config(&settings));
    let pipeline = Pipeline::new(
        GenerationClient::new(generator, settings.retry),
        settings.extraction.clone(),
        settings.pipeline.record_delay(),
    );

    let summary = pipeline
        .run(&settings.pipeline.input, &settings.pipeline.output)
        .await
        .context("Extraction run failed")?;

    info!(
        output = %settings.pipeline.output.display(),
        records_written = summary.records_written,
        records_skipped = summary.records_skipped,
        "done"
    );
    Ok(())
}
