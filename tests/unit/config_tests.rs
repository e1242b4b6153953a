//! Unit tests for `TrackerConfig` parsing and validation.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use employee_tracker::config::ManagerCandidates;
use employee_tracker::{AppError, TrackerConfig};

fn sample_toml() -> &'static str {
    r#"
log_level = "debug"
manager_candidates = "any"

[database]
path = "data/tracker.db"
create_if_missing = false
"#
}

#[test]
fn parses_full_config() {
    let config = TrackerConfig::from_toml_str(sample_toml()).expect("config");

    assert_eq!(config.log_level, "debug");
    assert_eq!(config.manager_candidates, ManagerCandidates::Any);
    assert_eq!(config.db_path(), Path::new("data/tracker.db"));
    assert!(!config.database.create_if_missing);
}

#[test]
fn empty_document_yields_defaults() {
    let config = TrackerConfig::from_toml_str("").expect("config");
    assert_eq!(config, TrackerConfig::default());
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.manager_candidates, ManagerCandidates::TopLevel);
    assert_eq!(config.db_path(), Path::new("employee_tracker.db"));
    assert!(config.database.create_if_missing);
}

#[test]
fn partial_database_table_fills_defaults() {
    let config = TrackerConfig::from_toml_str("[database]\npath = \"x.db\"\n").expect("config");
    assert_eq!(config.db_path(), Path::new("x.db"));
    assert!(config.database.create_if_missing);
}

#[test]
fn unknown_manager_policy_rejected() {
    let err = TrackerConfig::from_toml_str("manager_candidates = \"everyone\"").unwrap_err();
    assert!(matches!(err, AppError::Config(_)), "got {err:?}");
}

#[test]
fn empty_database_path_rejected() {
    let err = TrackerConfig::from_toml_str("[database]\npath = \"\"\n").unwrap_err();
    match err {
        AppError::Config(msg) => assert!(msg.contains("database.path")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn invalid_log_level_rejected() {
    let err = TrackerConfig::from_toml_str("log_level = \"tracker=loudest\"").unwrap_err();
    match err {
        AppError::Config(msg) => assert!(msg.contains("log_level")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn load_from_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(sample_toml().as_bytes()).expect("write");

    let config = TrackerConfig::load_from_path(file.path()).expect("config");
    assert_eq!(config.manager_candidates, ManagerCandidates::Any);
}

#[test]
fn load_from_missing_path_is_config_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = TrackerConfig::load_from_path(dir.path().join("absent.toml")).unwrap_err();
    match err {
        AppError::Config(msg) => assert!(msg.starts_with("failed to read config")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn overridden_empty_database_path_fails_validation() {
    let mut config = TrackerConfig::default();
    assert!(config.validate().is_ok());

    config.database.path = PathBuf::new();
    match config.validate().unwrap_err() {
        AppError::Config(msg) => assert!(msg.contains("database.path")),
        other => panic!("expected config error, got {other:?}"),
    }
}
