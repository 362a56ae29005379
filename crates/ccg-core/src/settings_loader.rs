//! Settings loading from configuration files.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `CCG_DEBUG` | `debug` |
//! | `CCG_LOG_LEVEL` | `log_level` |
//! | `CCG_COLOR` | `color` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use ccg_core::settings_loader;
//!
//! // Explicit file with environment overrides
//! let settings = settings_loader::from_toml_file_with_env("ccg.toml").unwrap();
//!
//! // `ccg.toml` from the working directory if present, defaults otherwise
//! let settings = settings_loader::load(None).unwrap();
//! ```

use std::path::Path;

use crate::error::CcgError;
use crate::settings::{Settings, DEFAULT_SETTINGS_FILE};

/// Loads settings from a TOML string.
///
/// Keys absent from the TOML keep their default values.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or cannot be deserialized.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, CcgError> {
    // Round-trip through serde_json::Value so that the TOML document can be
    // deep-merged over the serialized defaults.
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| CcgError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;

    let json_value = toml_to_json(toml_value);
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        CcgError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, json_value);
    serde_json::from_value(merged).map_err(|e| {
        CcgError::ConfigurationError(format!("Failed to deserialize settings from TOML: {e}"))
    })
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, CcgError> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        CcgError::ConfigurationError(format!(
            "Failed to read TOML file '{}': {e}",
            path.as_ref().display()
        ))
    })?;
    from_toml_str(&content)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, CcgError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Resolves the settings for a run.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_SETTINGS_FILE`] is
/// read from the working directory when present, and the defaults are used
/// otherwise. Environment overrides are applied in every case.
///
/// # Errors
///
/// Returns an error if the chosen file cannot be read or is malformed.
pub fn load(path: Option<&Path>) -> Result<Settings, CcgError> {
    match path {
        Some(path) => from_toml_file_with_env(path),
        None if Path::new(DEFAULT_SETTINGS_FILE).exists() => {
            from_toml_file_with_env(DEFAULT_SETTINGS_FILE)
        }
        None => Ok(from_env()),
    }
}

/// Applies environment variable overrides to a settings struct.
///
/// - `CCG_DEBUG` -> `debug` (values: "true"/"1"/"yes" => true, anything else => false)
/// - `CCG_LOG_LEVEL` -> `log_level`
/// - `CCG_COLOR` -> `color` (same truthy values as `CCG_DEBUG`)
pub fn apply_env_overrides(settings: &mut Settings) {
    apply_overrides_from(settings, |key| std::env::var(key).ok());
}

/// Applies overrides looked up through `lookup` instead of the process environment.
pub fn apply_overrides_from<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("CCG_DEBUG") {
        settings.debug = is_truthy(&val);
    }

    if let Some(val) = lookup("CCG_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Some(val) = lookup("CCG_COLOR") {
        settings.color = is_truthy(&val);
    }
}

// ============================================================
// Helpers
// ============================================================

fn is_truthy(val: &str) -> bool {
    matches!(val.to_lowercase().as_str(), "true" | "1" | "yes")
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, serde_json::Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ── TOML loading ────────────────────────────────────────────────

    #[test]
    fn test_from_toml_str_basic() {
        let toml = r#"
            debug = true
            log_level = "debug"
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert!(settings.debug);
        assert_eq!(settings.log_level, "debug");
        // Defaults preserved
        assert!(settings.color);
    }

    #[test]
    fn test_from_toml_str_empty() {
        let settings = from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let result = from_toml_str("this is not = = toml");
        assert!(matches!(result, Err(CcgError::ConfigurationError(_))));
    }

    #[test]
    fn test_from_toml_str_wrong_type() {
        let result = from_toml_str("color = \"sometimes\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ccg.toml");
        std::fs::write(&path, "color = false\n").unwrap();

        let settings = from_toml_file(&path).unwrap();
        assert!(!settings.color);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_from_toml_file_missing() {
        let result = from_toml_file("/nonexistent/ccg.toml");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }

    #[test]
    fn test_load_explicit_missing_path_errors() {
        let result = load(Some(Path::new("/nonexistent/ccg.toml")));
        assert!(result.is_err());
    }

    // ── Environment overrides ───────────────────────────────────────

    #[test]
    fn test_overrides_debug_true() {
        let mut settings = Settings::default();
        apply_overrides_from(&mut settings, lookup_in(&[("CCG_DEBUG", "true")]));
        assert!(settings.debug);
    }

    #[test]
    fn test_overrides_debug_1() {
        let mut settings = Settings::default();
        apply_overrides_from(&mut settings, lookup_in(&[("CCG_DEBUG", "1")]));
        assert!(settings.debug);
    }

    #[test]
    fn test_overrides_color_false() {
        let mut settings = Settings::default();
        apply_overrides_from(&mut settings, lookup_in(&[("CCG_COLOR", "no")]));
        assert!(!settings.color);
    }

    #[test]
    fn test_overrides_log_level() {
        let mut settings = Settings::default();
        apply_overrides_from(&mut settings, lookup_in(&[("CCG_LOG_LEVEL", "trace")]));
        assert_eq!(settings.log_level, "trace");
    }

    #[test]
    fn test_overrides_absent_keep_values() {
        let mut settings = Settings {
            debug: true,
            log_level: "info".into(),
            color: false,
        };
        let before = settings.clone();
        apply_overrides_from(&mut settings, lookup_in(&[]));
        assert_eq!(settings, before);
    }

    // ── Helpers ─────────────────────────────────────────────────────

    #[test]
    fn test_merge_json_nested() {
        let base = serde_json::json!({"a": 1, "b": {"c": 2, "d": 3}});
        let over = serde_json::json!({"b": {"c": 20}});
        let merged = merge_json(base, over);
        assert_eq!(merged, serde_json::json!({"a": 1, "b": {"c": 20, "d": 3}}));
    }
}
