//! DNS record endpoints.
//!
//! None of these check their arguments: the domain and record ID are
//! interpolated into the path as given.

use serde_json::Value;

use crate::client::NowClient;
use crate::error::ApiResult;
use crate::request::RequestDescriptor;

pub fn build_list_domain_records(domain: &str) -> RequestDescriptor {
    RequestDescriptor::get(format!("/domains/{domain}/records")).select("records")
}

pub fn build_add_domain_record(domain: &str, record: &Value) -> RequestDescriptor {
    RequestDescriptor::post(format!("/domains/{domain}/records")).with_body(record.clone())
}

pub fn build_delete_domain_record(domain: &str, record_id: &str) -> RequestDescriptor {
    RequestDescriptor::delete(format!("/domains/{domain}/records/{record_id}"))
}

impl NowClient {
    /// List the DNS records of a domain. Returns the `records` array.
    pub async fn list_domain_records(&self, domain: &str) -> ApiResult<Value> {
        self.dispatch(build_list_domain_records(domain)).await
    }

    /// Add a DNS record, e.g. `{"name": "www", "type": "CNAME", "value": "alias.zeit.co"}`.
    pub async fn add_domain_record(&self, domain: &str, record: &Value) -> ApiResult<Value> {
        self.dispatch(build_add_domain_record(domain, record)).await
    }

    /// Remove a DNS record.
    pub async fn delete_domain_record(&self, domain: &str, record_id: &str) -> ApiResult<Value> {
        self.dispatch(build_delete_domain_record(domain, record_id)).await
    }
}
