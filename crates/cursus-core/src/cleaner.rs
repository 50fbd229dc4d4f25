//! Candidate cleaning.
//!
//! Both cleaners run every candidate through the same ordered filter chain
//! (length window, goal phrasing, generic label, whitespace-insensitive
//! dedup) and stop at a cap. `clean_requires` adds one rule: a prerequisite
//! that overlaps anything the course itself teaches is dropped.

use std::collections::HashSet;

use crate::config::ExtractionConfig;
use crate::normalize::{keys_overlap, normalize, trim_space};
use crate::types::{CleanedResult, ParsedSections};

/// Clean the "teaches" candidates.
///
/// Returns at most `config.teaches_max` trimmed items, in input order.
#[must_use]
pub fn clean_teaches(raw_teaches: &[String], config: &ExtractionConfig) -> Vec<String> {
    select(raw_teaches, config.teaches_max, config, |_| false)
}

/// Clean the "requires" candidates.
///
/// Same chain as [`clean_teaches`] with cap `config.requires_max`, plus a
/// rejection of any item whose key equals, contains, or is contained in the
/// key of a *raw* teaches item. Comparing against the raw list means a
/// teaches item that was itself filtered out still blocks its prerequisite.
#[must_use]
pub fn clean_requires(
    raw_teaches: &[String],
    raw_requires: &[String],
    config: &ExtractionConfig,
) -> Vec<String> {
    let teaches_keys: Vec<String> = raw_teaches.iter().map(|t| normalize(t)).collect();
    select(raw_requires, config.requires_max, config, |key| {
        teaches_keys.iter().any(|tk| keys_overlap(key, tk))
    })
}

/// Apply both cleaners to parsed sections.
pub fn clean(sections: &ParsedSections, config: &ExtractionConfig) -> CleanedResult {
    CleanedResult {
        teaches_clean: clean_teaches(&sections.teaches, config),
        requires_clean: clean_requires(&sections.teaches, &sections.requires, config),
    }
}

/// Shared filter chain.
///
/// `excluded` sees the normalized key of an item that passed every other
/// check and has not been seen yet. Rejected items never enter `seen`.
fn select(
    raw: &[String],
    cap: usize,
    config: &ExtractionConfig,
    excluded: impl Fn(&str) -> bool,
) -> Vec<String> {
    let mut cleaned = Vec::new();
    if cap == 0 {
        return cleaned;
    }
    let mut seen = HashSet::new();

    for item in raw {
        let text = trim_space(item);
        if !within_length(text, config) {
            continue;
        }
        if config.is_goal_phrasing(text) || config.is_generic_label(text) {
            continue;
        }

        let key = normalize(text);
        if key.is_empty() || seen.contains(&key) || excluded(&key) {
            continue;
        }
        let _ = seen.insert(key);
        cleaned.push(text.to_owned());
        if cleaned.len() >= cap {
            break;
        }
    }
    cleaned
}

fn within_length(text: &str, config: &ExtractionConfig) -> bool {
    let chars = text.chars().count();
    chars >= config.candidate_chars_min && chars <= config.candidate_chars_max
}
