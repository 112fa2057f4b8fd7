//! Domain endpoints.

use serde_json::Value;

use now_core::error::require;
use now_core::ValidationError;

use crate::client::NowClient;
use crate::error::ApiResult;
use crate::request::RequestDescriptor;

/// Body of an add-domain request.
#[derive(Debug, Clone, Copy)]
pub struct NewDomain<'a> {
    pub name: &'a str,
    /// Whether DNS for the domain is managed outside the platform.
    pub is_external: bool,
}

pub fn build_list_domains() -> RequestDescriptor {
    RequestDescriptor::get("/domains").select("domains")
}

pub fn build_add_domain(domain: &NewDomain<'_>) -> Result<RequestDescriptor, ValidationError> {
    require(domain.name, ValidationError::MissingName)?;
    let body = serde_json::json!({ "name": domain.name, "isExternal": domain.is_external });
    Ok(RequestDescriptor::post("/domains").with_body(body))
}

pub fn build_delete_domain(name: &str) -> Result<RequestDescriptor, ValidationError> {
    require(name, ValidationError::MissingName)?;
    Ok(RequestDescriptor::delete(format!("/domains/{name}")))
}

impl NowClient {
    /// List all domains. Returns the `domains` array.
    pub async fn list_domains(&self) -> ApiResult<Value> {
        self.dispatch(build_list_domains()).await
    }

    /// Register a domain.
    pub async fn add_domain(&self, domain: &NewDomain<'_>) -> ApiResult<Value> {
        self.send(build_add_domain(domain)).await
    }

    /// Remove a domain by name.
    pub async fn delete_domain(&self, name: &str) -> ApiResult<Value> {
        self.send(build_delete_domain(name)).await
    }
}
