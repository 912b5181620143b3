//! Description of a single API call, built by the command layer.
//!
//! The API key is not part of the request; `ApiClient` adds it when
//! sending, so a request can be logged or compared in tests without
//! leaking the key.

use serde_json::Value;

/// HTTP method used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One request against the API: endpoint path, query pairs and an
/// optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base URL, e.g. `/ipgeo`.
    pub endpoint: &'static str,
    /// Query pairs in the order they are sent (after `apiKey`).
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// A GET request with no parameters.
    pub fn get(endpoint: &'static str) -> Self {
        Self {
            method: Method::Get,
            endpoint,
            query: Vec::new(),
            body: None,
        }
    }

    /// A POST request carrying `body` as JSON.
    pub fn post(endpoint: &'static str, body: Value) -> Self {
        Self {
            method: Method::Post,
            endpoint,
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Add a parameter if `value` is present and non-empty.
    pub fn param(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.query.push((key, v.to_string()));
        }
        self
    }

    /// Add a comma-joined list parameter if the list is non-empty.
    pub fn list(mut self, key: &'static str, values: &[String]) -> Self {
        if !values.is_empty() {
            self.query.push((key, values.join(",")));
        }
        self
    }

    /// Add a float parameter with six decimals if present.
    pub fn float(mut self, key: &'static str, value: Option<f64>) -> Self {
        if let Some(v) = value {
            self.query.push((key, format!("{v:.6}")));
        }
        self
    }

    /// Look up a query value by key.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Human-readable form for logs: method, path and query, no key.
    pub fn describe(&self) -> String {
        let method = match self.method {
            Method::Get => "GET",
            Method::Post => "POST",
        };
        if self.query.is_empty() {
            return format!("{method} {}", self.endpoint);
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{method} {}?{query}", self.endpoint)
    }
}
