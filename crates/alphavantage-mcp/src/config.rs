//! Upstream gateway configuration.
//!
//! The credential is read exactly once, when the server starts, and is then
//! owned by the [`RequestGateway`](crate::gateway::RequestGateway). A missing
//! credential is a startup error, never a per-request one.

use secrecy::SecretString;
use url::Url;

use crate::error::ConfigError;

/// Environment variable holding the Alpha Vantage API key.
pub const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";

/// Environment variable overriding the upstream endpoint.
pub const BASE_URL_ENV: &str = "ALPHA_VANTAGE_BASE_URL";

/// Fixed upstream endpoint; every function is served from this one path.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Resolved configuration for the request gateway.
#[derive(Debug)]
pub struct GatewayConfig {
    pub api_key: SecretString,
    pub base_url: Url,
}

impl GatewayConfig {
    /// Build a config from an explicit key and endpoint.
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential { var: API_KEY_ENV });
        }

        let base_url = Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        Ok(Self {
            api_key: SecretString::from(api_key),
            base_url,
        })
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup.
    ///
    /// The base URL falls back to [`DEFAULT_BASE_URL`] when unset; the API key
    /// has no fallback.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingCredential { var: API_KEY_ENV })?;
        let base_url = lookup(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::new(api_key, &base_url)
    }

    /// Replace the endpoint, keeping the credential.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(self)
    }
}
