//! Deployment and deployment file endpoints.

use serde_json::Value;

use now_core::error::require;
use now_core::ValidationError;

use crate::client::NowClient;
use crate::error::ApiResult;
use crate::request::RequestDescriptor;

pub fn build_list_deployments() -> RequestDescriptor {
    RequestDescriptor::get("/now/deployments").select("deployments")
}

pub fn build_get_deployment(id: &str) -> Result<RequestDescriptor, ValidationError> {
    require(id, ValidationError::MissingId)?;
    Ok(RequestDescriptor::get(format!("/now/deployments/{id}")))
}

/// `body` is the deployment payload; JSON `null` counts as missing.
pub fn build_create_deployment(body: &Value) -> Result<RequestDescriptor, ValidationError> {
    if body.is_null() {
        return Err(ValidationError::MissingBody);
    }
    Ok(RequestDescriptor::post("/now/deployments").with_body(body.clone()))
}

pub fn build_delete_deployment(id: &str) -> Result<RequestDescriptor, ValidationError> {
    require(id, ValidationError::MissingId)?;
    Ok(RequestDescriptor::delete(format!("/now/deployments/{id}")))
}

pub fn build_list_files(id: &str) -> Result<RequestDescriptor, ValidationError> {
    require(id, ValidationError::MissingId)?;
    Ok(RequestDescriptor::get(format!("/now/deployments/{id}/files")))
}

pub fn build_get_file(id: &str, file_id: &str) -> Result<RequestDescriptor, ValidationError> {
    require(id, ValidationError::MissingId)?;
    require(file_id, ValidationError::MissingFileId)?;
    Ok(RequestDescriptor::get(format!(
        "/now/deployments/{id}/files/{file_id}"
    )))
}

impl NowClient {
    /// List all deployments. Returns the `deployments` array.
    pub async fn list_deployments(&self) -> ApiResult<Value> {
        self.dispatch(build_list_deployments()).await
    }

    /// Get a single deployment by ID.
    pub async fn get_deployment(&self, id: &str) -> ApiResult<Value> {
        self.send(build_get_deployment(id)).await
    }

    /// Create a new deployment from a JSON payload.
    pub async fn create_deployment(&self, body: &Value) -> ApiResult<Value> {
        self.send(build_create_deployment(body)).await
    }

    /// Delete a deployment.
    pub async fn delete_deployment(&self, id: &str) -> ApiResult<Value> {
        self.send(build_delete_deployment(id)).await
    }

    /// List the files of a deployment.
    pub async fn list_files(&self, id: &str) -> ApiResult<Value> {
        self.send(build_list_files(id)).await
    }

    /// Get a single file of a deployment.
    pub async fn get_file(&self, id: &str, file_id: &str) -> ApiResult<Value> {
        self.send(build_get_file(id, file_id)).await
    }
}
