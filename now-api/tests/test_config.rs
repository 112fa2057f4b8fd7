//! Integration tests for building a client from a TOML config file.

use now_api::{ApiError, NowClient, ValidationError};
use now_core::config::NowConfig;
use now_core::NowError;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn config_roundtrip_builds_client() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = NowConfig::default();
    config.api.token = "from-file".into();
    config.api.timeout_ms = 5_000;
    config.save_to_file(&path).unwrap();

    let loaded = NowConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.api.token, "from-file");

    let client = NowClient::from_config_file(&path).unwrap();
    assert_eq!(client.timeout(), Some(Duration::from_secs(5)));
    assert_eq!(client.base_url(), "https://api.zeit.co");
}

#[test]
fn config_without_token_cannot_build_client() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

    let loaded = NowConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.logging.level, "debug");

    let err = NowClient::from_config(&loaded.api).unwrap_err();
    assert!(matches!(err, ApiError::Construction(ValidationError::MissingToken)));
}

#[test]
fn malformed_config_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api\ntoken = ").unwrap();

    let err = NowClient::from_config_file(&path).unwrap_err();
    assert!(matches!(err, ApiError::Config(NowError::Config(_))));
    assert!(err.validation().is_none());
    assert!(!err.is_transport());
}

#[test]
fn unreadable_config_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = NowClient::from_config_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ApiError::Config(NowError::Io(_))));
}
