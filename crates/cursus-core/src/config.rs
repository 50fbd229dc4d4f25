//! Extraction configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CANDIDATE_CHARS_MAX, CANDIDATE_CHARS_MIN, GENERIC_LABELS, GOAL_PHRASES, NOTE_PLACEHOLDERS,
    REQUIRES_MAX, TEACHES_MAX,
};

/// Immutable limits and phrase lists used by the parser and the cleaners.
///
/// Passed by reference into [`parse_sections`](crate::parse_sections),
/// [`clean_teaches`](crate::clean_teaches) and
/// [`clean_requires`](crate::clean_requires); neither keeps hidden state.
///
/// Deserializes from partial camelCase JSON; missing fields take the
/// compiled defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractionConfig {
    /// Cap on cleaned "teaches" items.
    pub teaches_max: usize,
    /// Cap on cleaned "requires" items.
    pub requires_max: usize,
    /// Minimum candidate length in characters (inclusive).
    pub candidate_chars_min: usize,
    /// Maximum candidate length in characters (inclusive).
    pub candidate_chars_max: usize,
    /// Substrings marking a learning-objective sentence.
    pub goal_phrases: Vec<String>,
    /// Exact labels rejected as too generic.
    pub generic_labels: Vec<String>,
    /// Exact `[NOTES]` items dropped by the parser.
    pub note_placeholders: Vec<String>,
}

fn owned(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|p| (*p).to_owned()).collect()
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            teaches_max: TEACHES_MAX,
            requires_max: REQUIRES_MAX,
            candidate_chars_min: CANDIDATE_CHARS_MIN,
            candidate_chars_max: CANDIDATE_CHARS_MAX,
            goal_phrases: owned(GOAL_PHRASES),
            generic_labels: owned(GENERIC_LABELS),
            note_placeholders: owned(NOTE_PLACEHOLDERS),
        }
    }
}

impl ExtractionConfig {
    /// Whether `text` contains any goal phrase.
    pub fn is_goal_phrasing(&self, text: &str) -> bool {
        self.goal_phrases.iter().any(|p| text.contains(p.as_str()))
    }

    /// Whether `text` is exactly one of the generic labels.
    pub fn is_generic_label(&self, text: &str) -> bool {
        self.generic_labels.iter().any(|l| l == text)
    }

    /// Whether `text` is exactly one of the note placeholders.
    pub fn is_note_placeholder(&self, text: &str) -> bool {
        self.note_placeholders.iter().any(|p| p == text)
    }
}
