//! Wire types for the REST Countries v2 API.
//!
//! Only the fields we display are declared; serde ignores the rest.

use serde::Deserialize;

use crate::core::country::{CountryCode, CountryDetail, CountrySummary, InvalidCountryCode};

/// An element of `GET /all`.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub name: String,
    #[serde(default)]
    pub flag: String,
    pub alpha3_code: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Flags {
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub png: Option<String>,
}

/// The body of `GET /alpha/{code}`.
#[derive(Deserialize, Debug, Clone)]
pub struct CountryDetailRecord {
    pub name: String,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub population: u64,
}

impl TryFrom<CountryRecord> for CountrySummary {
    type Error = InvalidCountryCode;

    fn try_from(record: CountryRecord) -> Result<Self, Self::Error> {
        Ok(CountrySummary {
            code: record.alpha3_code.parse::<CountryCode>()?,
            name: record.name,
            flag_url: record.flag,
        })
    }
}

impl From<CountryDetailRecord> for CountryDetail {
    fn from(record: CountryDetailRecord) -> Self {
        // Prefer the SVG flag, like the list view's flag field
        let flag_url = record
            .flags
            .svg
            .or(record.flag)
            .or(record.flags.png)
            .unwrap_or_default();
        CountryDetail {
            name: record.name,
            flag_url,
            capital: record.capital.unwrap_or_default(),
            region: record.region,
            population: record.population,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_record_deserializes_and_converts() {
        let json = r#"{
            "name": "Germany",
            "alpha2Code": "DE",
            "alpha3Code": "DEU",
            "flag": "https://flagcdn.com/de.svg",
            "population": 83240525
        }"#;
        let record: CountryRecord = serde_json::from_str(json).unwrap();
        let summary = CountrySummary::try_from(record).unwrap();
        assert_eq!(summary.name, "Germany");
        assert_eq!(summary.code.as_str(), "DEU");
        assert_eq!(summary.flag_url, "https://flagcdn.com/de.svg");
    }

    #[test]
    fn test_summary_with_bad_code_fails_conversion() {
        let record = CountryRecord {
            name: "Nowhere".to_string(),
            flag: String::new(),
            alpha3_code: "N0".to_string(),
        };
        assert!(CountrySummary::try_from(record).is_err());
    }

    #[test]
    fn test_detail_prefers_svg_flag() {
        let json = r#"{
            "name": "Germany",
            "capital": "Berlin",
            "region": "Europe",
            "population": 83000000,
            "flag": "https://flagcdn.com/de.svg",
            "flags": { "svg": "https://flagcdn.com/de-flags.svg", "png": "https://flagcdn.com/w320/de.png" }
        }"#;
        let record: CountryDetailRecord = serde_json::from_str(json).unwrap();
        let detail = CountryDetail::from(record);
        assert_eq!(detail.flag_url, "https://flagcdn.com/de-flags.svg");
        assert_eq!(detail.capital, "Berlin");
        assert_eq!(detail.region, "Europe");
        assert_eq!(detail.population, 83_000_000);
    }

    #[test]
    fn test_detail_without_capital_or_flags() {
        let json = r#"{ "name": "Antarctica", "region": "Polar", "population": 1000 }"#;
        let record: CountryDetailRecord = serde_json::from_str(json).unwrap();
        let detail = CountryDetail::from(record);
        assert_eq!(detail.capital, "");
        assert_eq!(detail.flag_url, "");
    }
}
