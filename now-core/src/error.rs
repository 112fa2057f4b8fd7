//! Error types shared across the Now client crates.
//!
//! `ValidationError` is the closed set of parameter failures a resource
//! method can report before any network access. `NowError` covers the
//! configuration and logging layers.

use thiserror::Error;

/// Convenience type alias for Results using NowError.
pub type NowResult<T> = Result<T, NowError>;

/// Errors raised by configuration and logging setup.
#[derive(Error, Debug)]
pub enum NowError {
    /// Failed to load or parse configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for NowError {
    fn from(e: toml::de::Error) -> Self {
        NowError::Config(e.to_string())
    }
}

/// A required parameter was missing or empty.
///
/// Each kind carries a stable symbolic code and a human-readable message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    #[error("Missing `token` parameter")]
    MissingToken,
    #[error("Missing `id` parameter")]
    MissingId,
    #[error("Missing `fileId` parameter")]
    MissingFileId,
    #[error("Missing `body` parameter")]
    MissingBody,
    #[error("Missing `cn` parameter")]
    MissingCn,
    #[error("Missing `alias` parameter")]
    MissingAlias,
    #[error("Missing `name` parameter")]
    MissingName,
    #[error("Missing `value` parameter")]
    MissingValue,
}

impl ValidationError {
    /// Symbolic code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingToken => "missing_token",
            Self::MissingId => "missing_id",
            Self::MissingFileId => "missing_file_id",
            Self::MissingBody => "missing_body",
            Self::MissingCn => "missing_cn",
            Self::MissingAlias => "missing_alias",
            Self::MissingName => "missing_name",
            Self::MissingValue => "missing_value",
        }
    }

    /// Human-readable message for this error.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Fail with `err` when `value` is empty.
pub fn require(value: &str, err: ValidationError) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(err)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_codes_are_unique() {
        let all = [
            ValidationError::MissingToken,
            ValidationError::MissingId,
            ValidationError::MissingFileId,
            ValidationError::MissingBody,
            ValidationError::MissingCn,
            ValidationError::MissingAlias,
            ValidationError::MissingName,
            ValidationError::MissingValue,
        ];
        let mut codes: Vec<_> = all.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::MissingToken.message(), "Missing `token` parameter");
        assert_eq!(ValidationError::MissingFileId.message(), "Missing `fileId` parameter");
        assert_eq!(ValidationError::MissingAlias.code(), "missing_alias");
    }

    #[test]
    fn test_require() {
        assert_eq!(require("", ValidationError::MissingId), Err(ValidationError::MissingId));
        assert!(require("abc", ValidationError::MissingId).is_ok());
    }

    #[test]
    fn test_now_error_display() {
        let err = NowError::Config("bad value".to_string());
        assert_eq!(err.to_string(), "configuration error: bad value");
    }
}
