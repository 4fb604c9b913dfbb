//! Integration tests for config file handling.

use tempfile::TempDir;
use treequery::config::Config;
use treequery::query::{Dialect, QueryError};

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.dialect, "regex");
    assert!(!config.ignore_case);
    assert_eq!(config.max_results, 0);
    assert!(!config.show_names);
    assert_eq!(config.dialect(), Ok(Dialect::Regex));
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config {
        dialect: "glob".to_string(),
        ignore_case: true,
        max_results: 10,
        show_names: true,
    };
    config.save_to(&path).unwrap();
    assert!(path.exists());

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.dialect(), Ok(Dialect::Glob));
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "dialect = \"Grep\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.dialect(), Ok(Dialect::Grep));
    assert!(!config.ignore_case);
    assert_eq!(config.max_results, 0);
}

#[test]
fn test_unknown_dialect_in_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "dialect = \"xpath\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.dialect(),
        Err(QueryError::UnknownDialect("xpath".to_string()))
    );
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "ignore_case = maybe\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(Config::load_from(dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_config_path_location() {
    if let Some(path) = Config::config_path() {
        assert!(path.ends_with(".config/treequery/config.toml"));
    }
}
