//! Now API - async HTTP client for the Now deployment platform REST API.
//!
//! Covers deployments, domains, DNS records, certificates, aliases, and
//! secrets. Every resource method checks its required parameters locally,
//! then issues exactly one authenticated request through the shared
//! transport core in [`client`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod request;

// Re-export key types
pub use client::{resolve_url, NowClient};
pub use error::{ApiError, ApiResult, TransportError};
pub use now_core::ValidationError;
pub use request::RequestDescriptor;
