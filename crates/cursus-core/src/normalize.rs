//! Comparison keys for candidate deduplication.

/// Whitespace as candidates and keys see it.
///
/// Unicode `White_Space` plus the information separators U+001C..=U+001F,
/// which model output occasionally carries as padding.
#[must_use]
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Trim [`is_space`] characters from both ends.
#[must_use]
pub fn trim_space(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Strip every whitespace character from `s`.
///
/// The result is only an equality/substring key. Case and all other
/// characters are kept, so `"データ 構造"` and `"データ構造"` share a key
/// while `"API"` and `"api"` do not. Full-width spaces (U+3000) count as
/// whitespace.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.chars().filter(|&c| !is_space(c)).collect()
}

/// Whether one key equals, contains, or is contained in the other.
pub fn keys_overlap(a: &str, b: &str) -> bool {
    a == b || a.contains(b) || b.contains(a)
}
