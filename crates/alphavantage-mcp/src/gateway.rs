//! # Request Gateway
//!
//! Single choke point for every call to the Alpha Vantage API. Tools build an
//! [`UpstreamRequest`] and hand it to [`RequestGateway::fetch`], which appends
//! the credential, issues one GET against the configured endpoint and returns
//! the decoded payload.
//!
//! Every failure mode (transport fault, non-2xx status, empty or non-JSON
//! body) is logged here and collapsed into `None`. Callers only ever see
//! "data" or "no data".

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::GatewayConfig;
use crate::error::{ConfigError, GatewayError, GatewayResult};

/// Query parameter selecting the upstream operation.
pub const FUNCTION_PARAM: &str = "function";

/// Query parameter carrying the credential.
pub const API_KEY_PARAM: &str = "apikey";

/// Query parameters for one upstream call, minus the credential.
///
/// The `function` discriminator is fixed at construction and always comes
/// first, so a request can never be built without one or with two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    params: Vec<(String, String)>,
}

impl UpstreamRequest {
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            params: vec![(FUNCTION_PARAM.to_string(), function.into())],
        }
    }

    /// Append an operation-specific field.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn function(&self) -> &str {
        &self.params[0].1
    }

    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

/// HTTP client bound to one upstream endpoint and one credential.
#[derive(Debug)]
pub struct RequestGateway {
    client: Client,
    base_url: Url,
    api_key: SecretString,
}

impl RequestGateway {
    /// Build the gateway. The HTTP client keeps reqwest's defaults, so there
    /// is no request timeout.
    pub fn new(config: GatewayConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(concat!("alphavantage-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue the request and return the upstream payload, or `None` on any
    /// failure. Never retries.
    pub async fn fetch(&self, request: UpstreamRequest) -> Option<Value> {
        let function = request.function().to_string();

        match self.send(request).await {
            Ok(payload) => Some(payload),
            Err(e) => {
                warn!(function = %function, error = %e, "Upstream request failed");
                None
            }
        }
    }

    async fn send(&self, request: UpstreamRequest) -> GatewayResult<Value> {
        debug!(function = request.function(), "Requesting upstream");

        let mut query = request.params;
        query.push((
            API_KEY_PARAM.to_string(),
            self.api_key.expose_secret().to_string(),
        ));

        let response = self
            .client
            .get(self.base_url.clone())
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        decode_payload(&body)
    }
}

/// Decode a response body, treating blank bodies and empty JSON values as
/// "no data".
fn decode_payload(body: &[u8]) -> GatewayResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(GatewayError::EmptyBody);
    }

    let payload: Value = serde_json::from_slice(body)?;
    if is_empty_payload(&payload) {
        return Err(GatewayError::EmptyBody);
    }

    Ok(payload)
}

fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
