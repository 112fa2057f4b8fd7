//! Integration tests for the default config and log locations.
//!
//! Kept in its own test binary: it points the XDG directories at a temp dir.

#![cfg(target_os = "linux")]

use now_core::config::NowConfig;
use tempfile::TempDir;

#[test]
fn default_locations_follow_xdg_dirs() {
    let dir = TempDir::new().unwrap();
    let config_home = dir.path().join("config");
    let data_home = dir.path().join("data");
    std::env::set_var("XDG_CONFIG_HOME", &config_home);
    std::env::set_var("XDG_DATA_HOME", &data_home);

    let path = NowConfig::default_config_path().unwrap();
    assert_eq!(path, config_home.join("now-rs").join("config.toml"));

    // No file yet: defaults.
    let loaded = NowConfig::load_default().unwrap();
    assert!(loaded.api.token.is_empty());
    assert_eq!(loaded.api.timeout_ms, 30_000);

    let mut config = NowConfig::default();
    config.api.token = "saved".into();
    config.save_to_file(&path).unwrap();
    assert_eq!(NowConfig::load_default().unwrap().api.token, "saved");

    assert_eq!(
        loaded.effective_log_dir().unwrap(),
        data_home.join("now-rs").join("logs")
    );
}
