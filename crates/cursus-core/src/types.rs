//! Records and intermediate candidate lists.

use serde::{Deserialize, Deserializer, Serialize};

/// One syllabus line from the input JSONL.
///
/// Absent or `null` fields become empty strings. `course_code` and `title`
/// are identifiers: they are copied to the output untouched and never shown
/// to the generator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusRecord {
    /// Course code, e.g. `"X101"`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub course_code: String,
    /// Course title.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Free-text syllabus body sent to the generator.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A micro-format section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Concepts the course teaches.
    Teaches,
    /// Concepts the course expects students to know already.
    Requires,
    /// Free remarks; parsed but not emitted.
    Notes,
}

impl Section {
    /// All sections in header-matching order.
    pub const ALL: [Section; 3] = [Section::Teaches, Section::Requires, Section::Notes];

    /// Bracketed header token, upper case.
    pub fn header(self) -> &'static str {
        match self {
            Section::Teaches => "[TEACHES]",
            Section::Requires => "[REQUIRES]",
            Section::Notes => "[NOTES]",
        }
    }

    /// Recognize a trimmed line as a section header.
    ///
    /// Matching is a case-insensitive prefix test, so `[teaches]:` and
    /// `[Teaches] (max 5)` both switch to [`Section::Teaches`].
    pub fn from_header_line(line: &str) -> Option<Section> {
        let upper = line.to_uppercase();
        Section::ALL
            .into_iter()
            .find(|section| upper.starts_with(section.header()))
    }
}

/// Candidate lists exactly as the parser found them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedSections {
    /// Bullets under `[TEACHES]`, in generator order.
    pub teaches: Vec<String>,
    /// Bullets under `[REQUIRES]`, in generator order.
    pub requires: Vec<String>,
    /// Bullets under `[NOTES]`, placeholders removed.
    pub notes: Vec<String>,
}

impl ParsedSections {
    /// Mutable access to the list backing `section`.
    pub fn list_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Teaches => &mut self.teaches,
            Section::Requires => &mut self.requires,
            Section::Notes => &mut self.notes,
        }
    }

    /// Whether every list is empty.
    pub fn is_empty(&self) -> bool {
        self.teaches.is_empty() && self.requires.is_empty() && self.notes.is_empty()
    }
}

/// Validated, bounded concept lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedResult {
    /// Cleaned "teaches" concepts.
    pub teaches_clean: Vec<String>,
    /// Cleaned "requires" concepts.
    pub requires_clean: Vec<String>,
}

/// One line of the output JSONL.
///
/// Field order is the serialized key order. Raw lists keep everything the
/// parser extracted so filtered items stay auditable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    /// Copied from the input record.
    pub course_code: String,
    /// Copied from the input record.
    pub title: String,
    /// Parsed `[TEACHES]` bullets before cleaning.
    pub raw_teaches: Vec<String>,
    /// Parsed `[REQUIRES]` bullets before cleaning.
    pub raw_requires: Vec<String>,
    /// Result of [`clean_teaches`](crate::clean_teaches).
    pub teaches_clean: Vec<String>,
    /// Result of [`clean_requires`](crate::clean_requires).
    pub requires_clean: Vec<String>,
}

impl OutputRecord {
    /// Combine a record's identifiers with its parsed and cleaned lists.
    ///
    /// Notes are dropped here; they never reach the output.
    pub fn assemble(record: SyllabusRecord, sections: ParsedSections, cleaned: CleanedResult) -> Self {
        Self {
            course_code: record.course_code,
            title: record.title,
            raw_teaches: sections.teaches,
            raw_requires: sections.requires,
            teaches_clean: cleaned.teaches_clean,
            requires_clean: cleaned.requires_clean,
        }
    }

    /// Serialize as a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
