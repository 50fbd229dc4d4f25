//! # cursus-core
//!
//! Pure domain logic for syllabus concept extraction. Nothing in this crate
//! performs I/O.
//!
//! - [`normalize`]: whitespace-free comparison keys
//! - [`parser`]: `[TEACHES]` / `[REQUIRES]` / `[NOTES]` micro-format scanner
//! - [`cleaner`]: filtering, deduplication and capping of candidate lists
//! - [`types`]: input/output records and intermediate lists
//! - [`config`]: the immutable [`ExtractionConfig`] threaded through all of the above
//! - [`retry`]: retry bounds shared by the generation client and settings
//!
//! Both [`parse_sections`] and the cleaners are total: arbitrary input,
//! including empty or malformed generator output, degrades to empty lists.

#![deny(unsafe_code)]

pub mod cleaner;
pub mod config;
pub mod constants;
pub mod normalize;
pub mod parser;
pub mod retry;
pub mod types;

pub use cleaner::{clean, clean_requires, clean_teaches};
pub use config::ExtractionConfig;
pub use normalize::normalize;
pub use parser::parse_sections;
pub use retry::RetryConfig;
pub use types::{CleanedResult, OutputRecord, ParsedSections, Section, SyllabusRecord};
