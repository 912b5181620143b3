//! Blocking HTTP client for the ipgeolocation.io API.
//!
//! One request per invocation, no retries.  A non-200 status is turned
//! into `IpGeoError::Api` carrying the response body so the user sees the
//! server's own message.

use serde_json::Value;
use ureq::Agent;

use super::request::{ApiRequest, Method};
use crate::config::Settings;
use crate::errors::{IpGeoError, Result};

/// User-Agent sent with every request.
const USER_AGENT: &str = concat!("ipgeolocation-cli/", env!("CARGO_PKG_VERSION"));

/// A decoded response together with the bytes it was decoded from.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub raw: Vec<u8>,
    pub value: Value,
}

impl ApiResponse {
    /// Decode a response body as JSON.
    pub fn from_body(raw: Vec<u8>) -> Result<Self> {
        let value =
            serde_json::from_slice(&raw).map_err(|e| IpGeoError::InvalidJson(e.to_string()))?;
        Ok(Self { raw, value })
    }
}

/// Sends `ApiRequest`s to the configured base URL.
pub struct ApiClient {
    agent: Agent,
    base_url: String,
}

impl ApiClient {
    /// Build a client from resolved settings.
    pub fn new(settings: &Settings) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(settings.timeout())
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Perform `request`, authenticating with `api_key`.
    pub fn fetch(&self, api_key: &str, request: &ApiRequest) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.endpoint);
        tracing::debug!(request = %request.describe(), base = %self.base_url, "sending request");

        let result = match request.method {
            Method::Get => with_query(self.agent.get(&url), api_key, request).call(),
            Method::Post => {
                let body = request.body.clone().unwrap_or(Value::Null);
                with_query(self.agent.post(&url), api_key, request).send_json(&body)
            }
        };

        let mut response = result.map_err(|e| IpGeoError::Http(e.to_string()))?;
        let status = response.status().as_u16();
        // Bulk responses can exceed ureq's default 10 MiB body limit.
        let raw = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|e| IpGeoError::Http(format!("reading response body: {e}")))?;

        tracing::debug!(status, bytes = raw.len(), "received response");

        if status != 200 {
            return Err(IpGeoError::Api {
                status,
                body: String::from_utf8_lossy(&raw).trim().to_string(),
            });
        }

        ApiResponse::from_body(raw)
    }
}

/// Attach the User-Agent, the API key and the request's query pairs.
fn with_query<B>(
    builder: ureq::RequestBuilder<B>,
    api_key: &str,
    request: &ApiRequest,
) -> ureq::RequestBuilder<B> {
    let mut builder = builder
        .header("User-Agent", USER_AGENT)
        .query("apiKey", api_key);
    for (key, value) in &request.query {
        builder = builder.query(*key, value);
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_body_keeps_raw_bytes() {
        let raw = br#"{"ip":"8.8.8.8"}"#.to_vec();
        let resp = ApiResponse::from_body(raw.clone()).unwrap();
        assert_eq!(resp.raw, raw);
        assert_eq!(resp.value["ip"], "8.8.8.8");
    }

    #[test]
    fn from_body_rejects_non_json() {
        let err = ApiResponse::from_body(b"<html>".to_vec()).unwrap_err();
        assert!(matches!(err, IpGeoError::InvalidJson(_)));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let settings = Settings::default().with_base_url_override(Some("http://x/v2/".into()));
        assert_eq!(ApiClient::new(&settings).base_url, "http://x/v2");
    }
}
