//! Library-wide constants.

/// Application name, used for the config and data directories.
pub const APP_NAME: &str = "now-rs";

/// Library version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base endpoint of the Now REST API.
pub const API_BASE_URL: &str = "https://api.zeit.co";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Connect timeout for new connections in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 15;

/// Name of the rolling log file.
pub const LOG_FILE_NAME: &str = "now-rs.log";
