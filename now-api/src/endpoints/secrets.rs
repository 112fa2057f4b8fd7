//! Secret endpoints.

use serde_json::{json, Value};

use now_core::error::require;
use now_core::ValidationError;

use crate::client::NowClient;
use crate::error::ApiResult;
use crate::request::RequestDescriptor;

pub fn build_list_secrets() -> RequestDescriptor {
    RequestDescriptor::get("/now/secrets").select("secrets")
}

pub fn build_create_secret(name: &str, value: &str) -> Result<RequestDescriptor, ValidationError> {
    require(name, ValidationError::MissingName)?;
    require(value, ValidationError::MissingValue)?;
    Ok(RequestDescriptor::post("/now/secrets").with_body(json!({ "name": name, "value": value })))
}

pub fn build_rename_secret(id: &str, name: &str) -> Result<RequestDescriptor, ValidationError> {
    require(id, ValidationError::MissingId)?;
    require(name, ValidationError::MissingName)?;
    Ok(RequestDescriptor::patch(format!("/now/secrets/{id}")).with_body(json!({ "name": name })))
}

pub fn build_delete_secret(id: &str) -> Result<RequestDescriptor, ValidationError> {
    require(id, ValidationError::MissingId)?;
    Ok(RequestDescriptor::delete(format!("/now/secrets/{id}")))
}

impl NowClient {
    /// List secrets. Returns the `secrets` array.
    pub async fn list_secrets(&self) -> ApiResult<Value> {
        self.dispatch(build_list_secrets()).await
    }

    /// Create a secret.
    pub async fn create_secret(&self, name: &str, value: &str) -> ApiResult<Value> {
        self.send(build_create_secret(name, value)).await
    }

    /// Rename secret `id` to `name`.
    pub async fn rename_secret(&self, id: &str, name: &str) -> ApiResult<Value> {
        self.send(build_rename_secret(id, name)).await
    }

    /// Delete a secret by ID or name.
    pub async fn delete_secret(&self, id: &str) -> ApiResult<Value> {
        self.send(build_delete_secret(id)).await
    }
}
