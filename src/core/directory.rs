//! # Country Directory Store
//!
//! Holds the fetched country list for as long as the directory screen is
//! mounted, together with the search term and the filtered view of the list.
//!
//! ```text
//! Directory
//! ├── status: LoadState<Vec<CountrySummary>>  // source list
//! ├── search_term: String                     // controlled by the search box
//! └── filtered: Vec<CountrySummary>           // filter_countries(list, term)
//! ```
//!
//! `filtered` is private and rebuilt by every method that touches the list or
//! the term, so it can never drift from its inputs.
//!
//! Each fetch is tagged with a sequence number from `begin_loading`. Only the
//! latest one may complete the store; `reset` bumps the number too, so a
//! result from an earlier visit to the screen is dropped.

use log::{debug, info};

use super::country::CountrySummary;
use super::filter::filter_countries;
use super::load::LoadState;

#[derive(Debug, Default)]
pub struct Directory {
    status: LoadState<Vec<CountrySummary>>,
    search_term: String,
    filtered: Vec<CountrySummary>,
    latest_seq: u64,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a list fetch as in flight and returns the sequence number it
    /// must carry. The term is kept so a retry does not wipe what the user
    /// typed.
    pub fn begin_loading(&mut self) -> u64 {
        self.latest_seq += 1;
        self.status = LoadState::Loading;
        self.refilter();
        self.latest_seq
    }

    /// Stores the fetched list if `seq` belongs to the fetch in flight.
    pub fn finish_loading(&mut self, seq: u64, countries: Vec<CountrySummary>) -> bool {
        if !self.accepts(seq) {
            return false;
        }
        info!("Directory loaded {} countries", countries.len());
        self.status = LoadState::Loaded(countries);
        self.refilter();
        true
    }

    pub fn fail(&mut self, seq: u64, message: String) -> bool {
        if !self.accepts(seq) {
            return false;
        }
        self.status = LoadState::Failed(message);
        self.refilter();
        true
    }

    /// Replaces the search term and recomputes the filtered list.
    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
        self.refilter();
    }

    /// Unmount: back to an empty, never-fetched store. Fetches still in
    /// flight become stale.
    pub fn reset(&mut self) {
        *self = Self {
            latest_seq: self.latest_seq + 1,
            ..Self::default()
        };
    }

    pub fn status(&self) -> &LoadState<Vec<CountrySummary>> {
        &self.status
    }

    /// Full source list, empty unless loaded.
    pub fn countries(&self) -> &[CountrySummary] {
        self.status.loaded().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn filtered(&self) -> &[CountrySummary] {
        &self.filtered
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    fn accepts(&self, seq: u64) -> bool {
        if seq != self.latest_seq || !self.status.is_loading() {
            debug!(
                "Discarding stale country list (seq={}, latest={})",
                seq, self.latest_seq
            );
            return false;
        }
        true
    }

    fn refilter(&mut self) {
        self.filtered = filter_countries(self.countries(), &self.search_term);
    }
}
