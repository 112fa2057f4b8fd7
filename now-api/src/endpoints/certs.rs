//! Certificate endpoints.

use serde_json::{json, Value};

use now_core::error::require;
use now_core::ValidationError;

use crate::client::NowClient;
use crate::error::ApiResult;
use crate::request::RequestDescriptor;

/// A PEM certificate bundle for `replace_certificate`.
#[derive(Debug, Clone, Copy)]
pub struct CertificateBundle<'a> {
    /// Common name the certificate is issued for.
    pub cn: &'a str,
    pub cert: &'a str,
    pub key: &'a str,
    /// Intermediate chain, omitted from the request when `None`.
    pub ca: Option<&'a str>,
}

/// List all certificates, or those for `cn` when given.
pub fn build_list_certificates(cn: Option<&str>) -> RequestDescriptor {
    let path = match cn.filter(|cn| !cn.is_empty()) {
        Some(cn) => format!("/certs/now/{cn}"),
        None => "/certs".to_string(),
    };
    RequestDescriptor::get(path).select("certs")
}

pub fn build_create_certificate(cn: &str) -> Result<RequestDescriptor, ValidationError> {
    require(cn, ValidationError::MissingCn)?;
    Ok(RequestDescriptor::post("/now/certs").with_body(json!({ "domains": [cn] })))
}

pub fn build_renew_certificate(cn: &str) -> Result<RequestDescriptor, ValidationError> {
    require(cn, ValidationError::MissingCn)?;
    Ok(RequestDescriptor::post("/now/certs").with_body(json!({ "domains": [cn], "renew": true })))
}

pub fn build_replace_certificate(bundle: &CertificateBundle<'_>) -> RequestDescriptor {
    let mut body = json!({
        "domains": [bundle.cn],
        "cert": bundle.cert,
        "key": bundle.key,
    });
    if let Some(ca) = bundle.ca {
        body["ca"] = Value::from(ca);
    }
    RequestDescriptor::put("/now/certs").with_body(body).select("created")
}

pub fn build_delete_certificate(cn: &str) -> Result<RequestDescriptor, ValidationError> {
    require(cn, ValidationError::MissingCn)?;
    Ok(RequestDescriptor::delete(format!("/now/certs/{cn}")))
}

impl NowClient {
    /// List certificates. Returns the `certs` array.
    pub async fn list_certificates(&self, cn: Option<&str>) -> ApiResult<Value> {
        self.dispatch(build_list_certificates(cn)).await
    }

    /// Issue a new certificate for `cn`.
    pub async fn create_certificate(&self, cn: &str) -> ApiResult<Value> {
        self.send(build_create_certificate(cn)).await
    }

    /// Renew the certificate for `cn`.
    pub async fn renew_certificate(&self, cn: &str) -> ApiResult<Value> {
        self.send(build_renew_certificate(cn)).await
    }

    /// Upload a custom certificate. Returns the `created` field.
    pub async fn replace_certificate(&self, bundle: &CertificateBundle<'_>) -> ApiResult<Value> {
        self.dispatch(build_replace_certificate(bundle)).await
    }

    /// Delete the certificate for `cn`.
    pub async fn delete_certificate(&self, cn: &str) -> ApiResult<Value> {
        self.send(build_delete_certificate(cn)).await
    }
}
