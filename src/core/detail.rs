//! # Detail Loader
//!
//! Tracks the detail record for the country named in the current route.
//!
//! Every activation hands out a new sequence number and the fetch carries it.
//! `resolve` only accepts the response tagged with the latest number, so a
//! slow request for a previous country cannot overwrite the current one.

use log::{debug, warn};

use super::country::{CountryCode, CountryDetail};
use super::load::LoadState;

#[derive(Debug, Default)]
pub struct DetailLoader {
    code: Option<CountryCode>,
    state: LoadState<CountryDetail>,
    latest_seq: u64,
}

impl DetailLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts loading `code`, dropping whatever was held. Returns the sequence
    /// number the fetch must carry.
    pub fn activate(&mut self, code: CountryCode) -> u64 {
        self.latest_seq += 1;
        debug!("Detail loader activated for {} (seq={})", code, self.latest_seq);
        self.code = Some(code);
        self.state = LoadState::Loading;
        self.latest_seq
    }

    /// Leaves the detail route. In-flight responses become stale.
    pub fn deactivate(&mut self) {
        self.latest_seq += 1;
        self.code = None;
        self.state = LoadState::NotLoaded;
    }

    /// Applies a fetch result if it is the latest one issued.
    /// Returns false when the response was stale and discarded.
    pub fn resolve(&mut self, seq: u64, result: Result<CountryDetail, String>) -> bool {
        if seq != self.latest_seq || self.code.is_none() {
            debug!(
                "Discarding stale detail response (seq={}, latest={})",
                seq, self.latest_seq
            );
            return false;
        }
        self.state = match result {
            Ok(detail) => LoadState::Loaded(detail),
            Err(message) => {
                warn!(
                    "Failed to load details for {}: {}",
                    self.code.as_ref().map(CountryCode::as_str).unwrap_or("?"),
                    message
                );
                LoadState::Failed(message)
            }
        };
        true
    }

    /// Re-issues the fetch for the current code after a failure.
    pub fn retry(&mut self) -> Option<(CountryCode, u64)> {
        if !self.state.is_failed() {
            return None;
        }
        let code = self.code.clone()?;
        let seq = self.activate(code.clone());
        Some((code, seq))
    }

    pub fn code(&self) -> Option<&CountryCode> {
        self.code.as_ref()
    }

    pub fn state(&self) -> &LoadState<CountryDetail> {
        &self.state
    }
}
