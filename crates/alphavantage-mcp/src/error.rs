//! # Error Types
//!
//! Startup configuration errors and upstream gateway errors.
//!
//! `ConfigError` is fatal and ends the process before the transport is opened.
//! `GatewayError` never leaves the gateway: every variant is logged and
//! collapsed into a "no data" result for the calling tool.

use thiserror::Error;

/// Gateway operation result type
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors raised while building the server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing credential: set {var} to your Alpha Vantage API key")]
    MissingCredential { var: &'static str },

    #[error("invalid upstream base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Errors raised while talking to the upstream API.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream returned status {status}")]
    Status { status: u16 },

    #[error("upstream returned an empty body")]
    EmptyBody,

    #[error("upstream body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

// The request URL carries the credential in its query string, so it is
// stripped before the error can reach a log line.
impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_names_the_variable() {
        let err = ConfigError::MissingCredential {
            var: "ALPHA_VANTAGE_API_KEY",
        };
        assert!(err.to_string().contains("ALPHA_VANTAGE_API_KEY"));
    }

    #[test]
    fn test_invalid_base_url_display() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid upstream base URL 'not a url'"));
    }

    #[test]
    fn test_status_display() {
        let err = GatewayError::Status { status: 503 };
        assert_eq!(err.to_string(), "upstream returned status 503");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: GatewayError = json_err.into();
        assert!(matches!(err, GatewayError::InvalidJson(_)));
    }
}
