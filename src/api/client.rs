//! REST Countries client.
//!
//! Two endpoints, both plain GETs with JSON bodies:
//! - `{base_url}/all` for the directory
//! - `{base_url}/alpha/{code}` for one country

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::source::{ApiError, CountrySource};
use super::types::{CountryDetailRecord, CountryRecord};
use crate::core::country::{CountryCode, CountryDetail, CountrySummary};

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v2";

/// HTTP-backed [`CountrySource`].
pub struct RestCountriesClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestCountriesClient {
    /// Builds a client for `base_url`. A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "base URL must start with http:// or https://, got {base_url:?}"
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("atlas/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Country API error: {} - {}", status, message);
            return Err(ApiError::Api { status, message });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn fetch_all(&self) -> Result<Vec<CountrySummary>, ApiError> {
        let records: Vec<CountryRecord> = self.get_json(&format!("{}/all", self.base_url)).await?;
        let countries = records
            .into_iter()
            .map(CountrySummary::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        info!("Fetched {} countries", countries.len());
        Ok(countries)
    }

    async fn fetch_detail(&self, code: &CountryCode) -> Result<CountryDetail, ApiError> {
        let record: CountryDetailRecord = self
            .get_json(&format!("{}/alpha/{}", self.base_url, code))
            .await?;
        info!("Fetched details for {}", code);
        Ok(record.into())
    }
}
