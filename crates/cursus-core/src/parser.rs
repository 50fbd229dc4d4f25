//! Micro-format scanner.
//!
//! The generator is asked for plain text of the form
//!
//! ```text
//! [TEACHES]
//! - concept
//! ・concept
//! [REQUIRES]
//! - concept
//! ```
//!
//! rather than JSON. The scanner is line-oriented and permissive: anything
//! it does not recognize is dropped, so stray prose around the sections
//! costs nothing.

use crate::config::ExtractionConfig;
use crate::normalize::trim_space;
use crate::types::{ParsedSections, Section};

/// Characters that open a bullet line.
const BULLET_MARKERS: &[char] = &['-', '・'];

/// Parse generated text into teaches / requires / notes lists.
///
/// Never fails. Empty or unrecognizable input returns three empty lists.
#[must_use]
pub fn parse_sections(text: &str, config: &ExtractionConfig) -> ParsedSections {
    let mut sections = ParsedSections::default();
    let mut current: Option<Section> = None;

    for line in text.split(is_line_boundary) {
        let line = trim_space(line);
        if line.is_empty() {
            continue;
        }

        if let Some(section) = Section::from_header_line(line) {
            current = Some(section);
            continue;
        }

        let Some(item) = bullet_item(line) else {
            continue;
        };
        if let Some(section) = current {
            sections.list_mut(section).push(item.to_owned());
        }
    }

    sections.notes.retain(|note| !config.is_note_placeholder(note));
    sections
}

/// Strip the bullet marker(s) from a trimmed line.
///
/// Returns `None` for non-bullet lines and for bullets with no text.
fn bullet_item(line: &str) -> Option<&str> {
    if !line.starts_with(BULLET_MARKERS) {
        return None;
    }
    let item = trim_space(line.trim_start_matches(BULLET_MARKERS));
    (!item.is_empty()).then_some(item)
}

/// Line terminators accepted between micro-format lines.
///
/// `\r\n` splits into a line and an empty line, which the scanner skips.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ParsedSections {
        parse_sections(text, &ExtractionConfig::default())
    }

    #[test]
    fn empty_input_yields_empty_lists() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn text_without_markers_yields_empty_lists() {
        assert!(parse("garbage with no markers").is_empty());
        assert!(parse("以下が抽出結果です。\n機械学習\nデータ構造").is_empty());
    }

    #[test]
    fn teaches_only() {
        let parsed = parse("[TEACHES]\n- 機械学習\n- データ構造");
        assert_eq!(parsed.teaches, vec!["機械学習", "データ構造"]);
        assert!(parsed.requires.is_empty());
        assert!(parsed.notes.is_empty());
    }

    #[test]
    fn all_sections_with_both_markers() {
        let text = "[TEACHES]\n- スタック\n・キュー\n\n[REQUIRES]\n- プログラミング基礎\n[NOTES]\n- 演習あり";
        let parsed = parse(text);
        assert_eq!(parsed.teaches, vec!["スタック", "キュー"]);
        assert_eq!(parsed.requires, vec!["プログラミング基礎"]);
        assert_eq!(parsed.notes, vec!["演習あり"]);
    }

    #[test]
    fn raw_lists_keep_duplicates_and_trim() {
        let parsed = parse("[TEACHES]\n- A\n-  A \n- B");
        assert_eq!(parsed.teaches, vec!["A", "A", "B"]);
    }

    #[test]
    fn bullets_before_any_header_are_dropped() {
        let parsed = parse("- 前置き\n[REQUIRES]\n- 線形代数");
        assert!(parsed.teaches.is_empty());
        assert_eq!(parsed.requires, vec!["線形代数"]);
    }

    #[test]
    fn headers_are_case_insensitive_and_tolerate_suffixes() {
        let parsed = parse("[teaches]（最大5個）\n- 確率\n[Requires]:\n- 微分");
        assert_eq!(parsed.teaches, vec!["確率"]);
        assert_eq!(parsed.requires, vec!["微分"]);
    }

    #[test]
    fn header_lines_never_become_items() {
        let parsed = parse("[TEACHES]\n[TEACHES]\n- 集合");
        assert_eq!(parsed.teaches, vec!["集合"]);
    }

    #[test]
    fn prose_lines_inside_sections_are_dropped() {
        let parsed = parse("[TEACHES]\nこの授業では以下を扱う。\n- 再帰\n* 箇条書きではない\n1. 番号付き");
        assert_eq!(parsed.teaches, vec!["再帰"]);
    }

    #[test]
    fn repeated_markers_are_stripped() {
        let parsed = parse("[TEACHES]\n--- グラフ理論\n・・ 木構造\n-・ハッシュ");
        assert_eq!(parsed.teaches, vec!["グラフ理論", "木構造", "ハッシュ"]);
    }

    #[test]
    fn marker_after_whitespace_is_kept() {
        let parsed = parse("[TEACHES]\n- - 入れ子");
        assert_eq!(parsed.teaches, vec!["- 入れ子"]);
    }

    #[test]
    fn empty_bullets_are_dropped() {
        let parsed = parse("[TEACHES]\n-\n・\n-   \n- 整列");
        assert_eq!(parsed.teaches, vec!["整列"]);
    }

    #[test]
    fn indented_lines_are_trimmed_first() {
        let parsed = parse("   [TEACHES]  \n\t- 探索\t\n");
        assert_eq!(parsed.teaches, vec!["探索"]);
    }

    #[test]
    fn crlf_and_unicode_line_breaks() {
        let parsed = parse("[TEACHES]\r\n- 論理回路\r- 順序回路\u{2028}- 組合せ回路");
        assert_eq!(parsed.teaches, vec!["論理回路", "順序回路", "組合せ回路"]);
    }

    #[test]
    fn unit_separator_padding_is_trimmed() {
        let parsed = parse("\u{1f}[TEACHES]\n-\u{1f}状態機械\u{1f}");
        assert_eq!(parsed.teaches, vec!["状態機械"]);
    }

    #[test]
    fn note_placeholders_are_removed() {
        let parsed = parse("[NOTES]\n- なし\n- 特になし\n-  特記事項なし \n- 実験レポートあり");
        assert_eq!(parsed.notes, vec!["実験レポートあり"]);
    }

    #[test]
    fn placeholders_only_filtered_from_notes() {
        let parsed = parse("[REQUIRES]\n- なし");
        assert_eq!(parsed.requires, vec!["なし"]);
    }

    #[test]
    fn custom_placeholders_from_config() {
        let config = ExtractionConfig {
            note_placeholders: vec!["none".into()],
            ..Default::default()
        };
        let parsed = parse_sections("[NOTES]\n- none\n- なし", &config);
        assert_eq!(parsed.notes, vec!["なし"]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn never_panics(s in "\\PC*") {
                let _ = parse(&s);
            }

            #[test]
            fn items_are_trimmed_and_non_empty(s in "(\\[TEACHES\\]|\\[REQUIRES\\]|- |・| |x|\n){0,40}") {
                let parsed = parse(&s);
                for item in parsed.teaches.iter().chain(&parsed.requires).chain(&parsed.notes) {
                    prop_assert!(!item.is_empty());
                    prop_assert_eq!(item.trim(), item.as_str());
                }
            }
        }
    }
}
