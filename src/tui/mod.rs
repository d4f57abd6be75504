//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into core::Action values, and runs the
//! effects the reducer asks for.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Effects
//!
//! `update()` returns `Effect`s instead of doing I/O. Fetch effects become
//! `tokio` tasks that report back through an mpsc channel as actions, which
//! the loop drains every tick. Superseded fetches are not aborted; the
//! directory store and the detail loader drop their results by sequence
//! number.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use chrono::Local;
use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::{CountrySource, RestCountriesClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::country::CountryCode;
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CountryListEvent, CountryListState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub country_list: CountryListState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            country_list: CountryListState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Cursor marks the search box
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Build the country source from the resolved config.
pub fn build_source(config: &ResolvedConfig) -> std::io::Result<Arc<dyn CountrySource>> {
    let client = RestCountriesClient::new(config.base_url.clone(), config.timeout)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    info!("Using country source {} at {}", client.name(), client.base_url());
    Ok(Arc::new(client))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config)?;
    let mut app = App::new(source);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Mount the start route (may already request fetches)
    let effects = update(&mut app, Action::Navigate(config.start_route.clone()));
    let mut should_quit = run_effects(effects, &app, &tx);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    while !should_quit {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effects = handle_event(&mut app, &mut tui, &event);
            if run_effects(effects, &app, &tx) {
                should_quit = true;
                break;
            }
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effects = update(&mut app, action);
            if run_effects(effects, &app, &tx) {
                should_quit = true;
            }
        }
    }

    info!("Atlas shutting down");
    ratatui::restore();
    Ok(())
}

/// Maps one terminal event to reducer calls. Returns the resulting effects.
fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Vec<Effect> {
    match event {
        TuiEvent::Resize => return Vec::new(),
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::Retry => return update(app, Action::Retry),
        TuiEvent::ToggleRoute => {
            let target = if app.route.in_directory() {
                Route::Landing
            } else {
                Route::Directory
            };
            return update(app, Action::Navigate(target));
        }
        _ => {}
    }

    if app.route.in_directory() {
        handle_directory_event(app, tui, event)
    } else {
        match event {
            TuiEvent::Submit => update(app, Action::Navigate(Route::Directory)),
            TuiEvent::Escape | TuiEvent::InputChar('q') => update(app, Action::Quit),
            _ => Vec::new(),
        }
    }
}

fn handle_directory_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Vec<Effect> {
    if matches!(event, TuiEvent::Escape) {
        return update(app, Action::Back);
    }

    // Controlled input: the box is rebuilt from the store's current term
    let search_event = SearchBox::new(app.directory.search_term()).handle_event(event);
    if let Some(SearchEvent::Changed(term)) = search_event {
        tui.country_list.reset();
        return update(app, Action::SearchChanged(term));
    }

    let len = app.directory.filtered().len();
    match tui.country_list.handle_event(event, len) {
        Some(CountryListEvent::Open(index)) => {
            let route = app
                .directory
                .filtered()
                .get(index)
                .map(|country| Route::Country(country.code.clone()));
            match route {
                Some(route) => update(app, Action::Navigate(route)),
                None => Vec::new(),
            }
        }
        None => Vec::new(),
    }
}

/// Runs effects. Returns true if one of them asked to quit.
fn run_effects(effects: Vec<Effect>, app: &App, tx: &mpsc::Sender<Action>) -> bool {
    let mut quit = false;
    for effect in effects {
        match effect {
            Effect::Quit => quit = true,
            Effect::FetchCountries { seq } => {
                spawn_fetch_countries(app.source.clone(), seq, tx.clone())
            }
            Effect::FetchDetail { code, seq } => {
                spawn_fetch_detail(app.source.clone(), code, seq, tx.clone())
            }
        }
    }
    quit
}

fn spawn_fetch_countries(source: Arc<dyn CountrySource>, seq: u64, tx: mpsc::Sender<Action>) {
    info!("Spawning country list fetch via {} (seq={})", source.name(), seq);
    tokio::spawn(async move {
        let result = source.fetch_all().await;
        let action = Action::CountriesLoaded {
            seq,
            result,
            fetched_at: Local::now(),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send country list: receiver dropped");
        }
    });
}

fn spawn_fetch_detail(
    source: Arc<dyn CountrySource>,
    code: CountryCode,
    seq: u64,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning detail fetch for {} (seq={})", code, seq);
    tokio::spawn(async move {
        let result = source.fetch_detail(&code).await;
        if tx.send(Action::DetailLoaded { seq, result }).is_err() {
            warn!("Failed to send details for {}: receiver dropped", code);
        }
    });
}
