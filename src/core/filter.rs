//! # Filter Engine
//!
//! Derives the visible subset of the directory from the full list and the
//! current search term. Pure: no state, no I/O, cannot fail.

use super::country::CountrySummary;

/// Returns the countries whose name contains `term`, ignoring case,
/// in their original order. An empty term keeps everything.
pub fn filter_countries(countries: &[CountrySummary], term: &str) -> Vec<CountrySummary> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return countries.to_vec();
    }
    countries
        .iter()
        .filter(|country| country.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
