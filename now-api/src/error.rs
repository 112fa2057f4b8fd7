//! Error types for the Now API client.

use reqwest::StatusCode;
use thiserror::Error;

use now_core::{NowError, ValidationError};

/// Convenience type alias for Results using ApiError.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by `NowClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client could not be constructed. Only ever `MissingToken`.
    #[error("client construction failed: {0}")]
    Construction(ValidationError),

    /// A required parameter was missing. No request was sent.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The request was sent and failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] NowError),
}

/// Remote failures, carrying the underlying cause unmodified.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed")]
    Request(#[source] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// The validation error carried by this failure, if any.
    pub fn validation(&self) -> Option<ValidationError> {
        match self {
            ApiError::Construction(e) | ApiError::Validation(e) => Some(*e),
            _ => None,
        }
    }

    /// The HTTP status of a non-success response, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Transport(TransportError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Whether the request reached the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}
