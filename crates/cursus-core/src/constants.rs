//! Default extraction limits and phrase lists.
//!
//! The phrase lists are Japanese because the generator is prompted to answer
//! in Japanese. They seed [`ExtractionConfig::default`](crate::ExtractionConfig)
//! and can be replaced through settings.

/// Maximum number of cleaned "teaches" concepts per record.
pub const TEACHES_MAX: usize = 5;

/// Maximum number of cleaned "requires" concepts per record.
pub const REQUIRES_MAX: usize = 5;

/// Shortest accepted candidate, in characters.
pub const CANDIDATE_CHARS_MIN: usize = 3;

/// Longest accepted candidate, in characters. Longer strings read as sentences.
pub const CANDIDATE_CHARS_MAX: usize = 40;

/// Learning-objective phrasing ("to do", "can do", "become able to",
/// "acquire", "understand"). A candidate containing any of these is a goal
/// sentence, not a concept.
pub const GOAL_PHRASES: &[&str] = &["すること", "できるようになる", "できる", "身につける", "理解する"];

/// Labels too generic to be a concept on their own
/// ("understanding", "knowledge", "ability", "skill", "attitude").
pub const GENERIC_LABELS: &[&str] = &["理解", "知識", "能力", "スキル", "態度"];

/// `[NOTES]` bullets that carry no information
/// ("none", "nothing in particular", "no remarks").
pub const NOTE_PLACEHOLDERS: &[&str] = &["なし", "特になし", "特記事項なし"];
