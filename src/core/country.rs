//! # Country Records
//!
//! Domain types for the two shapes the remote service hands us: the summary
//! row shown in the directory and the detail record shown for one country.
//! Wire-format structs live in `api::types` and convert into these.

use std::fmt;
use std::str::FromStr;

/// A 3-letter ISO alpha-3 country code, always stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(String);

/// Returned when a string is not a 3-letter alphabetic code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCountryCode(pub String);

impl fmt::Display for InvalidCountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid country code: {:?}", self.0)
    }
}

impl std::error::Error for InvalidCountryCode {}

impl CountryCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CountryCode {
    type Err = InvalidCountryCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(InvalidCountryCode(s.to_string()))
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySummary {
    pub name: String,
    pub flag_url: String,
    pub code: CountryCode,
}

/// Full record for a single country. Replaced wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryDetail {
    pub name: String,
    pub flag_url: String,
    /// Empty when the country has no capital (e.g. Antarctica).
    pub capital: String,
    pub region: String,
    pub population: u64,
}
