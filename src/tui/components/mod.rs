//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `NavBar`: Top line with app title, nav entries and status
//! - `LandingPage`: Welcome screen at `/`
//! - `CountryDetailView`: The sub-route pane (prompt, spinner, error or record)
//! - `SearchBox`: Controlled input; its value is always the store's search term
//!
//! ### Stateful Components
//!
//! - `CountryList`: Country rows with selection kept in `CountryListState`
//!
//! Stateful components follow the persistent state + transient wrapper
//! pattern: the state struct lives in `TuiState`, the wrapper is built each
//! frame with borrowed props.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── nav_bar.rs        (Top navigation bar)
//! ├── landing.rs        (Landing screen)
//! ├── search_box.rs     (Search input)
//! ├── country_list.rs   (Directory list)
//! └── country_detail.rs (Detail pane)
//! ```

mod country_detail;
mod country_list;
mod landing;
mod nav_bar;
mod search_box;

pub use country_detail::CountryDetailView;
pub use country_list::{CountryList, CountryListEvent, CountryListState};
pub use landing::LandingPage;
pub use nav_bar::NavBar;
pub use search_box::{SearchBox, SearchEvent};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Braille spinner glyph for the given animation frame.
pub fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}
