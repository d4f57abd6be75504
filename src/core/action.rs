//! # Actions
//!
//! Everything that can happen in Atlas becomes an `Action`.
//! User picks a country? That's `Action::Navigate(Route::Country(code))`.
//! The list request comes back? That's `Action::CountriesLoaded { .. }`.
//!
//! `update()` applies an action to the state and returns the effects the
//! adapter must run. It performs no I/O itself.
//!
//! ```text
//! State + Action  →  update()  →  New State + Vec<Effect>
//! ```
//!
//! Fetches are driven by route diffs: mounting the directory screen asks for
//! the list once, and every change of the routed identifier asks for that
//! country's detail.

use chrono::{DateTime, Local};
use log::{debug, info, warn};

use crate::api::ApiError;
use crate::core::country::{CountryCode, CountryDetail, CountrySummary};
use crate::core::route::Route;
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    Navigate(Route),
    /// Go one route level up.
    Back,
    /// Full replacement of the search term.
    SearchChanged(String),
    CountriesLoaded {
        seq: u64,
        result: Result<Vec<CountrySummary>, ApiError>,
        fetched_at: DateTime<Local>,
    },
    DetailLoaded {
        seq: u64,
        result: Result<CountryDetail, ApiError>,
    },
    /// Re-issue whichever visible fetch has failed.
    Retry,
    Quit,
}

/// Side effects requested by `update`, run by the TUI adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchCountries { seq: u64 },
    FetchDetail { code: CountryCode, seq: u64 },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Vec<Effect> {
    match action {
        Action::Navigate(route) => navigate(app, route),
        Action::Back => match app.route.parent() {
            Some(parent) => navigate(app, parent),
            None => Vec::new(),
        },
        Action::SearchChanged(term) => {
            app.directory.set_search_term(term);
            Vec::new()
        }
        Action::CountriesLoaded {
            seq,
            result,
            fetched_at,
        } => {
            match result {
                Ok(countries) => {
                    let count = countries.len();
                    if app.directory.finish_loading(seq, countries) {
                        app.status_message = format!(
                            "{} countries (fetched {})",
                            count,
                            fetched_at.format("%H:%M:%S")
                        );
                    }
                }
                Err(e) => {
                    warn!("Failed to fetch country list (seq={}): {}", seq, e);
                    if app.directory.fail(seq, e.to_string()) {
                        app.status_message = String::from("Country list unavailable");
                    }
                }
            }
            Vec::new()
        }
        Action::DetailLoaded { seq, result } => {
            app.detail.resolve(seq, result.map_err(|e| e.to_string()));
            Vec::new()
        }
        Action::Retry => retry(app),
        Action::Quit => vec![Effect::Quit],
    }
}

/// Switches routes and mounts/unmounts whatever the diff implies.
fn navigate(app: &mut App, to: Route) -> Vec<Effect> {
    if app.route == to {
        return Vec::new();
    }
    info!("Navigate {} -> {}", app.route, to);
    let from = std::mem::replace(&mut app.route, to);
    let mut effects = Vec::new();

    match (from.in_directory(), app.route.in_directory()) {
        (false, true) => {
            app.directory.reset();
            let seq = app.directory.begin_loading();
            app.status_message = String::from("Loading countries...");
            effects.push(Effect::FetchCountries { seq });
        }
        (true, false) => {
            debug!("Unmounting directory");
            app.directory.reset();
            app.status_message = String::from("Welcome to Atlas!");
        }
        _ => {}
    }

    match (from.country(), app.route.country()) {
        (old, Some(new)) if old != Some(new) => {
            let code = new.clone();
            let seq = app.detail.activate(code.clone());
            effects.push(Effect::FetchDetail { code, seq });
        }
        (Some(_), None) => app.detail.deactivate(),
        _ => {}
    }

    effects
}

fn retry(app: &mut App) -> Vec<Effect> {
    let mut effects = Vec::new();
    if app.route.in_directory() && app.directory.status().is_failed() {
        info!("Retrying country list");
        let seq = app.directory.begin_loading();
        app.status_message = String::from("Loading countries...");
        effects.push(Effect::FetchCountries { seq });
    }
    if let Some((code, seq)) = app.detail.retry() {
        info!("Retrying details for {}", code);
        effects.push(Effect::FetchDetail { code, seq });
    }
    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::load::LoadState;
    use crate::test_support::{code, germany_detail, sample_countries, test_app};

    fn loaded(seq: u64, result: Result<Vec<CountrySummary>, ApiError>) -> Action {
        Action::CountriesLoaded {
            seq,
            result,
            fetched_at: Local::now(),
        }
    }

    /// Sequence number of the list fetch among `effects`.
    fn list_seq(effects: &[Effect]) -> u64 {
        effects
            .iter()
            .find_map(|effect| match effect {
                Effect::FetchCountries { seq } => Some(*seq),
                _ => None,
            })
            .expect("no list fetch requested")
    }

    /// Navigates to the directory and completes the list fetch.
    fn app_with_directory() -> App {
        let mut app = test_app();
        let effects = update(&mut app, Action::Navigate(Route::Directory));
        update(&mut app, loaded(list_seq(&effects), Ok(sample_countries())));
        app
    }

    #[test]
    fn test_entering_directory_fetches_once() {
        let mut app = test_app();
        let effects = update(&mut app, Action::Navigate(Route::Directory));
        assert!(matches!(effects.as_slice(), [Effect::FetchCountries { .. }]));
        assert!(app.directory.status().is_loading());

        // Same route again is not a dependency change
        let effects = update(&mut app, Action::Navigate(Route::Directory));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_deep_link_fetches_list_and_detail() {
        let mut app = test_app();
        let effects = update(&mut app, Action::Navigate(Route::Country(code("DEU"))));
        assert_eq!(
            effects,
            vec![
                Effect::FetchCountries { seq: list_seq(&effects) },
                Effect::FetchDetail { code: code("DEU"), seq: 1 },
            ]
        );
    }

    #[test]
    fn test_search_filters_loaded_list() {
        let mut app = app_with_directory();
        update(&mut app, Action::SearchChanged("g".to_string()));
        let names: Vec<_> = app.directory.filtered().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Germany", "Ghana"]);
    }

    #[test]
    fn test_detail_round_trip_keeps_list_and_term() {
        let mut app = app_with_directory();
        update(&mut app, Action::SearchChanged("g".to_string()));

        let effects = update(&mut app, Action::Navigate(Route::Country(code("GHA"))));
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], Effect::FetchDetail { .. }));

        let effects = update(&mut app, Action::Back);
        assert!(effects.is_empty(), "list must not be re-fetched");
        assert_eq!(app.route, Route::Directory);
        assert_eq!(app.directory.countries().len(), 3);
        assert_eq!(app.directory.search_term(), "g");
        assert_eq!(app.directory.filtered().len(), 2);
        assert_eq!(app.detail.state(), &LoadState::NotLoaded);
    }

    #[test]
    fn test_switching_country_refetches_detail() {
        let mut app = app_with_directory();
        update(&mut app, Action::Navigate(Route::Country(code("DEU"))));
        let effects = update(&mut app, Action::Navigate(Route::Country(code("FRA"))));
        assert_eq!(effects, vec![Effect::FetchDetail { code: code("FRA"), seq: 2 }]);
    }

    #[test]
    fn test_stale_detail_does_not_overwrite_newer() {
        let mut app = app_with_directory();
        update(&mut app, Action::Navigate(Route::Country(code("DEU"))));
        update(&mut app, Action::Navigate(Route::Country(code("FRA"))));

        // Germany (seq 1) resolves late, after France was requested
        update(&mut app, Action::DetailLoaded { seq: 1, result: Ok(germany_detail()) });
        assert!(app.detail.state().is_loading());
    }

    #[test]
    fn test_detail_loaded_renders_population() {
        let mut app = app_with_directory();
        update(&mut app, Action::Navigate(Route::Country(code("DEU"))));
        update(&mut app, Action::DetailLoaded { seq: 1, result: Ok(germany_detail()) });
        let detail = app.detail.state().loaded().unwrap();
        assert_eq!(detail.population, 83_000_000);
        assert_eq!(detail.capital, "Berlin");
    }

    #[test]
    fn test_detail_failure_is_contained_and_retryable() {
        let mut app = app_with_directory();
        update(&mut app, Action::Navigate(Route::Country(code("DEU"))));
        update(
            &mut app,
            Action::DetailLoaded {
                seq: 1,
                result: Err(ApiError::Network("connection refused".to_string())),
            },
        );
        assert!(app.detail.state().is_failed());

        let effects = update(&mut app, Action::Retry);
        assert_eq!(effects, vec![Effect::FetchDetail { code: code("DEU"), seq: 2 }]);
        assert!(app.detail.state().is_loading());
    }

    #[test]
    fn test_list_failure_is_distinct_from_no_match() {
        let mut app = test_app();
        let effects = update(&mut app, Action::Navigate(Route::Directory));
        let first = list_seq(&effects);
        let down = ApiError::Api {
            status: 503,
            message: "down".to_string(),
        };
        update(&mut app, loaded(first, Err(down)));
        assert!(app.directory.status().is_failed());
        assert!(app.directory.filtered().is_empty());

        let effects = update(&mut app, Action::Retry);
        assert_eq!(effects.len(), 1);
        assert!(list_seq(&effects) > first);
    }

    #[test]
    fn test_retry_without_failure_does_nothing() {
        let mut app = app_with_directory();
        assert!(update(&mut app, Action::Retry).is_empty());
    }

    #[test]
    fn test_leaving_directory_unmounts_and_reentering_refetches() {
        let mut app = test_app();
        let effects = update(&mut app, Action::Navigate(Route::Directory));
        let first = list_seq(&effects);
        update(&mut app, Action::SearchChanged("fr".to_string()));

        update(&mut app, Action::Navigate(Route::Landing));
        assert!(app.directory.countries().is_empty());
        assert_eq!(app.directory.search_term(), "");

        // A late list result after unmount is ignored
        update(&mut app, loaded(first, Ok(sample_countries())));
        assert!(app.directory.countries().is_empty());

        let effects = update(&mut app, Action::Navigate(Route::Directory));
        assert!(list_seq(&effects) > first);
    }

    #[test]
    fn test_late_failure_from_previous_visit_does_not_hide_new_list() {
        let mut app = test_app();
        let effects = update(&mut app, Action::Navigate(Route::Directory));
        let first = list_seq(&effects);
        update(&mut app, Action::Navigate(Route::Landing));
        let effects = update(&mut app, Action::Navigate(Route::Directory));
        let second = list_seq(&effects);

        let old = ApiError::Network("old mount".to_string());
        update(&mut app, loaded(first, Err(old)));
        assert!(app.directory.status().is_loading());

        update(&mut app, loaded(second, Ok(sample_countries())));
        assert_eq!(app.directory.countries().len(), 3);
        assert!(app.status_message.starts_with("3 countries"));
    }

    #[test]
    fn test_back_from_landing_is_noop_and_quit_requests_quit() {
        let mut app = test_app();
        assert!(update(&mut app, Action::Back).is_empty());
        assert_eq!(update(&mut app, Action::Quit), vec![Effect::Quit]);
    }
}
