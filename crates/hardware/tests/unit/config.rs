//! # Configuration Tests
//!
//! Defaults, partial JSON documents, file loading, and error reporting.

use std::io::Write;

use cyclesim_core::config::{Config, ConfigError, DisplayConfig, GeneralConfig};

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_steps);
    assert!(!config.general.mask_register_writes);
    assert_eq!(
        config.display.awaiting_message,
        "Awaiting execution start..."
    );
    assert_eq!(config.display.finished_message, "Execution complete.");
}

#[test]
fn test_section_defaults() {
    let general = GeneralConfig::default();
    assert!(!general.trace_steps);
    assert!(!general.mask_register_writes);

    let display = DisplayConfig::default();
    assert_eq!(display.awaiting_message, "Awaiting execution start...");
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = Config::from_json_str("{}").unwrap();
    assert!(!config.general.trace_steps);
    assert_eq!(config.display.finished_message, "Execution complete.");
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config =
        Config::from_json_str(r#"{ "general": { "mask_register_writes": true } }"#).unwrap();
    assert!(config.general.mask_register_writes);
    assert!(!config.general.trace_steps);
    assert_eq!(
        config.display.awaiting_message,
        "Awaiting execution start..."
    );
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = Config::from_json_str("{ general: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let err = Config::from_json_str(r#"{ "general": { "trace_steps": "yes" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse config"));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "display": {{ "finished_message": "All done." }} }}"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.display.finished_message, "All done.");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
