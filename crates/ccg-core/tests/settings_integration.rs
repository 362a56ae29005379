//! Integration tests for settings loading from files.

use ccg_core::settings_loader::{apply_overrides_from, from_toml_file, load};
use ccg_core::{CcgError, Settings};

#[test]
fn test_full_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(
        &path,
        "debug = true\nlog_level = \"ccg_cli=debug\"\ncolor = false\n",
    )
    .unwrap();

    let settings = from_toml_file(&path).unwrap();
    assert_eq!(
        settings,
        Settings {
            debug: true,
            log_level: "ccg_cli=debug".into(),
            color: false,
        }
    );
}

#[test]
fn test_file_then_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ccg.toml");
    std::fs::write(&path, "log_level = \"info\"\n").unwrap();

    let mut settings = from_toml_file(&path).unwrap();
    apply_overrides_from(&mut settings, |key| {
        (key == "CCG_LOG_LEVEL").then(|| "error".to_string())
    });
    assert_eq!(settings.log_level, "error");
    assert!(settings.color);
}

#[test]
fn test_malformed_file_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ccg.toml");
    std::fs::write(&path, "debug = [\n").unwrap();

    let err = load(Some(&path)).unwrap_err();
    assert!(matches!(err, CcgError::ConfigurationError(_)));
    assert!(!err.is_input_error());
}
