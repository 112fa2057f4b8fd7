//! Request descriptors.
//!
//! A `RequestDescriptor` describes one API call as plain data: the relative
//! path, the verb, an optional JSON body, and an optional response selector.
//! Resource methods build one per call and hand it to `NowClient::dispatch`.

use reqwest::Method;
use serde_json::Value;

/// One API call described as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// Path relative to the base endpoint.
    pub path: String,
    pub method: Method,
    /// JSON body, sent only when present.
    pub body: Option<Value>,
    /// Top-level response field to return instead of the whole body.
    pub selector: Option<&'static str>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            body: None,
            selector: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Return only `field` of the response body.
    pub fn select(mut self, field: &'static str) -> Self {
        self.selector = Some(field);
        self
    }

    /// Apply the selector to a decoded response body.
    ///
    /// A missing field, or a body that is not an object, selects `null`.
    pub fn extract(&self, body: Value) -> Value {
        match self.selector {
            None => body,
            Some(field) => match body {
                Value::Object(mut map) => map.remove(field).unwrap_or(Value::Null),
                _ => Value::Null,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let req = RequestDescriptor::post("/now/secrets")
            .with_body(json!({"name": "n"}))
            .select("uid");
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/now/secrets");
        assert_eq!(req.body, Some(json!({"name": "n"})));
        assert_eq!(req.selector, Some("uid"));
    }

    #[test]
    fn test_extract_without_selector_returns_body() {
        let req = RequestDescriptor::get("/x");
        let body = json!({"a": 1, "b": [2]});
        assert_eq!(req.extract(body.clone()), body);
    }

    #[test]
    fn test_extract_with_selector() {
        let req = RequestDescriptor::get("/now/deployments").select("deployments");
        let body = json!({"deployments": [{"uid": "d1"}], "pagination": {}});
        assert_eq!(req.extract(body), json!([{"uid": "d1"}]));
    }

    #[test]
    fn test_extract_missing_field_is_null() {
        let req = RequestDescriptor::get("/domains").select("domains");
        assert_eq!(req.extract(json!({"other": true})), Value::Null);
        assert_eq!(req.extract(json!([1, 2])), Value::Null);
    }
}
