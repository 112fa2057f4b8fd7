//! HTTP client for the Now REST API.
//!
//! Owns the bearer token and base endpoint, resolves relative paths,
//! attaches the `Authorization` header, and turns a `RequestDescriptor`
//! into a single HTTP round-trip. Failures are returned as-is: there is no
//! retry and no interpretation of status codes.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use now_core::config::{ApiConfig, NowConfig};
use now_core::{constants, ValidationError};

use crate::error::{ApiError, ApiResult, TransportError};
use crate::request::RequestDescriptor;

/// HTTP client for the Now platform.
///
/// All fields are read-only after construction, so a single instance (or
/// its clones, which share one connection pool) can serve concurrent calls.
#[derive(Clone)]
pub struct NowClient {
    inner: Client,
    /// Bearer token sent with every request.
    token: String,
    /// Base endpoint, without a trailing slash.
    base_url: String,
    /// Per-request timeout, if any.
    timeout: Option<Duration>,
}

impl NowClient {
    /// Create a client for `token` against the public API endpoint.
    ///
    /// Fails with `MissingToken` when the token is empty. No per-request
    /// timeout is set; see `with_timeout` and `from_config`.
    pub fn new(token: impl Into<String>) -> ApiResult<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(ApiError::Construction(ValidationError::MissingToken));
        }

        let inner = Client::builder()
            .user_agent(format!("{}/{}", constants::APP_NAME, constants::APP_VERSION))
            .connect_timeout(Duration::from_secs(constants::CONNECT_TIMEOUT_SECS))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(TransportError::Request)?;

        Ok(Self {
            inner,
            token,
            base_url: constants::API_BASE_URL.to_string(),
            timeout: None,
        })
    }

    /// Create a client from the `[api]` configuration section.
    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        let mut client = Self::new(config.token.clone())?;
        client.timeout = config.timeout();
        Ok(client)
    }

    /// Create a client from the `[api]` section of a TOML config file.
    pub fn from_config_file(path: &Path) -> ApiResult<Self> {
        let config = NowConfig::load_from_file(path)?;
        Self::from_config(&config.api)
    }

    /// Create a client from the config file at the default location.
    ///
    /// A missing file yields the default configuration, which has no token.
    pub fn from_default_config() -> ApiResult<Self> {
        let config = NowConfig::load_default()?;
        Self::from_config(&config.api)
    }

    /// Point the client at a different endpoint (e.g. a local mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout. `None` disables it.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the base endpoint.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the per-request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Build the absolute URL for an API path.
    pub fn resolve(&self, path: &str) -> String {
        resolve_url(&self.base_url, path)
    }

    /// Send one request and return the selected part of its JSON body.
    pub async fn dispatch(&self, request: RequestDescriptor) -> ApiResult<Value> {
        let url = self.resolve(&request.path);
        debug!("{} {}", request.method, request.path);

        let mut builder = self
            .inner
            .request(request.method.clone(), &url)
            .bearer_auth(&self.token);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(TransportError::Request)?;
        let status = response.status();
        let text = response.text().await.map_err(TransportError::Request)?;

        if !status.is_success() {
            warn!("{} {} returned {}", request.method, request.path, status);
            return Err(TransportError::Status { status, body: text }.into());
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(TransportError::Decode)?
        };
        Ok(request.extract(body))
    }

    /// Run a built request, or report its validation failure without
    /// touching the network.
    pub(crate) async fn send(
        &self,
        request: Result<RequestDescriptor, ValidationError>,
    ) -> ApiResult<Value> {
        match request {
            Ok(request) => self.dispatch(request).await,
            Err(e) => {
                debug!("rejected before dispatch: {}", e.code());
                Err(e.into())
            }
        }
    }
}

impl fmt::Debug for NowClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NowClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Join `base` and `path` with exactly one `/` between them.
///
/// An empty path yields `base` unchanged.
pub fn resolve_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    let separator = if path.starts_with('/') { "" } else { "/" };
    format!("{base}{separator}{path}")
}
