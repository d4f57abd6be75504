//! # Core Application Logic
//!
//! This module contains Atlas's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                    ┌───────────┴─────────────┐
//!                    ▼                         ▼
//!             ┌────────────┐            ┌────────────┐
//!             │    TUI     │  spawns    │    API     │
//!             │  Adapter   │ ─────────▶ │ (reqwest)  │
//!             │ (ratatui)  │            │            │
//!             └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`directory`]: Country list, search term and filtered view
//! - [`filter`]: The case-insensitive name filter
//! - [`detail`]: Sequence-checked loader for one country's details
//! - [`route`]: Client-side paths
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod country;
pub mod detail;
pub mod directory;
pub mod filter;
pub mod load;
pub mod route;
pub mod state;
