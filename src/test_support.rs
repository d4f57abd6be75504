//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use ratatui::buffer::Buffer;
use std::sync::Arc;

use crate::api::{ApiError, CountrySource};
use crate::core::country::{CountryCode, CountryDetail, CountrySummary};

/// A source for tests that don't need real API calls. Every request fails.
pub struct NoopSource;

#[async_trait]
impl CountrySource for NoopSource {
    fn name(&self) -> &str {
        "noop"
    }

    async fn fetch_all(&self) -> Result<Vec<CountrySummary>, ApiError> {
        Err(ApiError::Network("noop source".to_string()))
    }

    async fn fetch_detail(&self, _code: &CountryCode) -> Result<CountryDetail, ApiError> {
        Err(ApiError::Network("noop source".to_string()))
    }
}

/// Creates a test App with a NoopSource.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopSource))
}

pub fn code(raw: &str) -> CountryCode {
    raw.parse().unwrap()
}

pub fn summary(name: &str, raw_code: &str) -> CountrySummary {
    CountrySummary {
        name: name.to_string(),
        flag_url: format!("https://flagcdn.com/{}.svg", raw_code.to_lowercase()),
        code: code(raw_code),
    }
}

/// Germany, Ghana, France, in that order.
pub fn sample_countries() -> Vec<CountrySummary> {
    vec![
        summary("Germany", "DEU"),
        summary("Ghana", "GHA"),
        summary("France", "FRA"),
    ]
}

pub fn germany_detail() -> CountryDetail {
    CountryDetail {
        name: "Germany".to_string(),
        flag_url: "https://flagcdn.com/de.svg".to_string(),
        capital: "Berlin".to_string(),
        region: "Europe".to_string(),
        population: 83_000_000,
    }
}

/// Screen contents as text, one line per terminal row.
pub fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width.max(1) as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
