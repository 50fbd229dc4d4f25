//! # cursus-settings
//!
//! Layered configuration for the extraction pipeline.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults**: [`CursusSettings::default()`]
//! 2. **User file**: `~/.cursus/settings.json` (deep-merged over defaults)
//! 3. **Environment variables**: `CURSUS_*` overrides (highest priority)
//!
//! The binary applies its command-line flags on top of the result.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{
    apply_env_overrides, apply_overrides_from, deep_merge, load_settings_from_path,
    parse_log_level, settings_path, validate,
};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_exports_work() {
        let settings = CursusSettings::default();
        assert!(validate(&settings).is_ok());
        assert!(settings_path().ends_with(".cursus/settings.json"));
    }
}
