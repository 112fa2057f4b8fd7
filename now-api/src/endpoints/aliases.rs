//! Alias endpoints.

use serde_json::{json, Value};

use now_core::error::require;
use now_core::ValidationError;

use crate::client::NowClient;
use crate::error::ApiResult;
use crate::request::RequestDescriptor;

/// List all aliases, or those of deployment `id` when given.
pub fn build_list_aliases(id: Option<&str>) -> RequestDescriptor {
    let path = match id.filter(|id| !id.is_empty()) {
        Some(id) => format!("/now/deployments/{id}/aliases"),
        None => "/now/aliases".to_string(),
    };
    RequestDescriptor::get(path).select("aliases")
}

pub fn build_create_alias(id: &str, alias: &str) -> Result<RequestDescriptor, ValidationError> {
    require(id, ValidationError::MissingId)?;
    require(alias, ValidationError::MissingAlias)?;
    Ok(RequestDescriptor::post(format!("/now/deployments/{id}/aliases"))
        .with_body(json!({ "alias": alias })))
}

pub fn build_delete_alias(id: &str) -> Result<RequestDescriptor, ValidationError> {
    require(id, ValidationError::MissingId)?;
    Ok(RequestDescriptor::delete(format!("/now/aliases/{id}")))
}

impl NowClient {
    /// List aliases. Returns the `aliases` array.
    pub async fn list_aliases(&self, id: Option<&str>) -> ApiResult<Value> {
        self.dispatch(build_list_aliases(id)).await
    }

    /// Point `alias` at deployment `id`.
    pub async fn create_alias(&self, id: &str, alias: &str) -> ApiResult<Value> {
        self.send(build_create_alias(id, alias)).await
    }

    /// Delete an alias by ID.
    pub async fn delete_alias(&self, id: &str) -> ApiResult<Value> {
        self.send(build_delete_alias(id)).await
    }
}
