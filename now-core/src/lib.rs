//! Now Core - Foundation types shared by the Now API client.
//!
//! This crate provides:
//! - The closed set of parameter validation errors
//! - Configuration loading and saving (TOML)
//! - Structured logging with tracing
//! - Common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::NowConfig;
pub use error::{NowError, NowResult, ValidationError};
pub use logging::init_logging;
