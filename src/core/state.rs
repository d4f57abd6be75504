//! # Application State
//!
//! Core business state for Atlas. Domain logic only, no TUI types.
//! Presentation state (list selection, spinner) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn CountrySource>   // remote country service
//! ├── route: Route                     // which screen is mounted
//! ├── directory: Directory             // list + search term + filtered view
//! ├── detail: DetailLoader             // record for the routed country
//! └── status_message: String           // nav bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::api::CountrySource;
use crate::core::detail::DetailLoader;
use crate::core::directory::Directory;
use crate::core::route::Route;

pub struct App {
    pub source: Arc<dyn CountrySource>,
    pub route: Route,
    pub directory: Directory,
    pub detail: DetailLoader,
    pub status_message: String,
}

impl App {
    /// Starts on the landing route. Navigate to the start route through
    /// `update` so the mount effects are produced.
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        Self {
            source,
            route: Route::Landing,
            directory: Directory::new(),
            detail: DetailLoader::new(),
            status_message: String::from("Welcome to Atlas!"),
        }
    }

    /// True while any fetch is in flight (drives the spinner).
    pub fn is_loading(&self) -> bool {
        self.directory.status().is_loading() || self.detail.state().is_loading()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::route::Route;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.route, Route::Landing);
        assert_eq!(app.status_message, "Welcome to Atlas!");
        assert!(!app.is_loading());
    }
}
