use std::fmt;

use async_trait::async_trait;

use crate::core::country::{CountryCode, CountryDetail, CountrySummary};

/// Errors that can occur while talking to the country service.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Client misconfigured (bad base URL, TLS setup). Not retryable.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// Service returned a non-success status.
    Api { status: u16, message: String },
    /// Body was not the JSON shape we expect.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Where country data comes from.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Returns the name of the source, for logs.
    fn name(&self) -> &str;

    /// Fetches every country, in the order the service returns them.
    async fn fetch_all(&self) -> Result<Vec<CountrySummary>, ApiError>;

    /// Fetches the detail record for one country.
    async fn fetch_detail(&self, code: &CountryCode) -> Result<CountryDetail, ApiError>;
}
