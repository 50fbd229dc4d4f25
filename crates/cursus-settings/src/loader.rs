//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`CursusSettings::default()`]
//! 2. If the settings file exists, deep-merge its values over the defaults
//! 3. Apply `CURSUS_*` environment overrides
//! 4. Validate the result
//!
//! Command-line flags are applied by the binary after this returns.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::errors::{Result, SettingsError};
use crate::types::CursusSettings;

/// Resolve the default settings file (`~/.cursus/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".cursus").join("settings.json")
}

/// Load settings from a specific path with env var overrides.
///
/// A missing file yields defaults. Invalid JSON is an error.
pub fn load_settings_from_path(path: &Path) -> Result<CursusSettings> {
    let mut settings = read_settings_file(path)?;
    apply_env_overrides(&mut settings);
    validate(&settings)?;
    Ok(settings)
}

/// Read and merge the settings file over defaults, without env overrides.
pub fn read_settings_file(path: &Path) -> Result<CursusSettings> {
    let defaults = serde_json::to_value(CursusSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    Ok(serde_json::from_value(merged)?)
}

/// Recursive deep merge of two JSON values.
///
/// - Objects are merged recursively (source overrides target per-key)
/// - Arrays and primitives are replaced entirely by source
/// - Null values in source are skipped (preserving target)
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = match target_map.remove(&key) {
                    Some(target_val) => deep_merge(target_val, source_val),
                    None => source_val,
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Check cross-field constraints that serde cannot express.
pub fn validate(settings: &CursusSettings) -> Result<()> {
    if settings.backend.base_url.trim().is_empty() {
        return Err(SettingsError::InvalidValue("backend.baseUrl is empty".into()));
    }
    if settings.backend.model.trim().is_empty() {
        return Err(SettingsError::InvalidValue("backend.model is empty".into()));
    }
    let extraction = &settings.extraction;
    if extraction.candidate_chars_min > extraction.candidate_chars_max {
        return Err(SettingsError::InvalidValue(format!(
            "extraction.candidateCharsMin ({}) exceeds candidateCharsMax ({})",
            extraction.candidate_chars_min, extraction.candidate_chars_max
        )));
    }
    Ok(())
}

/// Apply `CURSUS_*` environment variable overrides.
///
/// Numbers must parse and fall within range; invalid values are logged and
/// ignored.
pub fn apply_env_overrides(settings: &mut CursusSettings) {
    apply_overrides_from(settings, |name| std::env::var(name).ok());
}

/// Apply overrides from an arbitrary variable source.
///
/// `lookup` returns the raw value of a variable, if set.
pub fn apply_overrides_from(settings: &mut CursusSettings, lookup: impl Fn(&str) -> Option<String>) {
    let env = EnvSource { lookup };

    // ── Backend ─────────────────────────────────────────────────────
    if let Some(v) = env.string("CURSUS_OLLAMA_URL") {
        settings.backend.base_url = v;
    }
    if let Some(v) = env.string("CURSUS_MODEL") {
        settings.backend.model = v;
    }
    if let Some(v) = env.u64("CURSUS_NUM_CTX", 512, 1_048_576) {
        settings.backend.num_ctx = u32::try_from(v).unwrap_or(settings.backend.num_ctx);
    }
    if let Some(v) = env.u64("CURSUS_REQUEST_TIMEOUT_MS", 1000, 3_600_000) {
        settings.backend.request_timeout_ms = v;
    }

    // ── Retry ───────────────────────────────────────────────────────
    if let Some(v) = env.u64("CURSUS_MAX_ATTEMPTS", 1, 100) {
        settings.retry.max_attempts = u32::try_from(v).unwrap_or(settings.retry.max_attempts);
    }
    if let Some(v) = env.u64("CURSUS_RETRY_DELAY_MS", 0, 600_000) {
        settings.retry.delay_ms = v;
    }

    // ── Pipeline ────────────────────────────────────────────────────
    if let Some(v) = env.u64("CURSUS_RECORD_DELAY_MS", 0, 600_000) {
        settings.pipeline.record_delay_ms = v;
    }
    if let Some(v) = env.string("CURSUS_INPUT") {
        settings.pipeline.input = PathBuf::from(v);
    }
    if let Some(v) = env.string("CURSUS_OUTPUT") {
        settings.pipeline.output = PathBuf::from(v);
    }

    // ── Logging ─────────────────────────────────────────────────────
    if let Some(v) = env.log_level("CURSUS_LOG_LEVEL") {
        settings.logging.level = v;
    }
    if let Some(v) = env.bool("CURSUS_LOG_JSON") {
        settings.logging.json = v;
    }
}

// ── Pure parsing functions (testable without env vars) ──────────────────────

/// Parse a string as a boolean.
///
/// Accepts (case-insensitive): `true`/`1`/`yes`/`on` or `false`/`0`/`no`/`off`.
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a string as a `u64` within an inclusive range.
pub fn parse_u64_range(val: &str, min: u64, max: u64) -> Option<u64> {
    let n: u64 = val.trim().parse().ok()?;
    (n >= min && n <= max).then_some(n)
}

/// Parse a log level name (case-insensitive), returning it lower-cased.
pub fn parse_log_level(val: &str) -> Option<String> {
    let level = val.trim().to_lowercase();
    matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error" | "off").then_some(level)
}

// ── Variable readers (thin wrappers) ────────────────────────────────────────

struct EnvSource<F> {
    lookup: F,
}

impl<F: Fn(&str) -> Option<String>> EnvSource<F> {
    fn string(&self, name: &str) -> Option<String> {
        (self.lookup)(name).filter(|v| !v.is_empty())
    }

    fn bool(&self, name: &str) -> Option<bool> {
        let val = (self.lookup)(name)?;
        let result = parse_bool(&val);
        if result.is_none() {
            tracing::warn!(key = name, value = %val, "invalid boolean env var, ignoring");
        }
        result
    }

    fn u64(&self, name: &str, min: u64, max: u64) -> Option<u64> {
        let val = (self.lookup)(name)?;
        let result = parse_u64_range(&val, min, max);
        if result.is_none() {
            tracing::warn!(key = name, value = %val, min, max, "invalid numeric env var, ignoring");
        }
        result
    }

    fn log_level(&self, name: &str) -> Option<String> {
        let val = (self.lookup)(name)?;
        let result = parse_log_level(&val);
        if result.is_none() {
            tracing::warn!(key = name, value = %val, "invalid log level env var, ignoring");
        }
        result
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
