//! Settings for ccg.
//!
//! This module provides the [`Settings`] struct. Settings are built once at
//! startup (see [`settings_loader`](crate::settings_loader)) and passed by
//! reference to whatever needs them.

use serde::{Deserialize, Serialize};

/// The name of the settings file picked up from the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "ccg.toml";

/// The complete set of ccg settings.
///
/// # Examples
///
/// ```
/// use ccg_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(!settings.debug);
/// assert!(settings.color);
/// assert_eq!(settings.log_level, "warn");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether debug mode is enabled (pretty, source-located log output).
    pub debug: bool,

    /// The log filter directive (e.g. "info", "debug", "ccg_cli=trace").
    pub log_level: String,

    /// Whether generated code and banners are colorized on the terminal.
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            log_level: "warn".to_string(),
            color: true,
        }
    }
}
