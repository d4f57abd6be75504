//! # Country List Component
//!
//! The directory's list of (filtered) countries, one two-line card per row:
//! name and code on top, flag URL underneath.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CountryListState` lives in `TuiState` and owns the selection
//! - `CountryList` is created each frame with borrowed props
//!
//! The list never shows a bare empty box: loading, failure and "no match"
//! each get their own message.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding, Paragraph, Wrap};

use crate::core::country::{CountryCode, CountrySummary};
use crate::core::load::LoadState;
use crate::tui::component::Component;
use crate::tui::components::spinner;
use crate::tui::event::TuiEvent;

const ROWS_PER_ITEM: u16 = 2;

/// Persistent selection state for the country list.
pub struct CountryListState {
    pub list_state: ListState,
    /// Items that fit on screen, measured during render.
    page_size: usize,
}

impl Default for CountryListState {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryListState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            page_size: 10,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Back to the first row (the filtered list just changed).
    pub fn reset(&mut self) {
        self.list_state = ListState::default();
    }

    /// Keeps the selection inside `0..len`, selecting the first row when
    /// there is something to select.
    pub fn clamp(&mut self, len: usize) {
        let selected = match (len, self.list_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.list_state.select(selected);
    }

    /// Handle a key event against a list of `len` rows.
    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> Option<CountryListEvent> {
        self.clamp(len);
        let current = self.list_state.selected()?;
        let last = len - 1;
        let page = self.page_size.max(1);

        let next = match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => current.saturating_sub(1),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => (current + 1).min(last),
            TuiEvent::PageUp => current.saturating_sub(page),
            TuiEvent::PageDown => (current + page).min(last),
            TuiEvent::Home => 0,
            TuiEvent::End => last,
            TuiEvent::Submit => return Some(CountryListEvent::Open(current)),
            _ => return None,
        };
        self.list_state.select(Some(next));
        None
    }
}

/// Events emitted by the country list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryListEvent {
    /// Open the detail route for the row at this index.
    Open(usize),
}

/// Transient render wrapper for the country list.
pub struct CountryList<'a> {
    state: &'a mut CountryListState,
    countries: &'a [CountrySummary],
    status: &'a LoadState<Vec<CountrySummary>>,
    active: Option<&'a CountryCode>,
    spinner_frame: usize,
}

impl<'a> CountryList<'a> {
    pub fn new(
        state: &'a mut CountryListState,
        countries: &'a [CountrySummary],
        status: &'a LoadState<Vec<CountrySummary>>,
        active: Option<&'a CountryCode>,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            countries,
            status,
            active,
            spinner_frame,
        }
    }

    fn title(&self) -> String {
        match self.status {
            LoadState::Loaded(all) => {
                format!(" Countries ({}/{}) ", self.countries.len(), all.len())
            }
            _ => " Countries ".to_string(),
        }
    }

    fn placeholder(&self) -> Option<Text<'static>> {
        let dim = Style::default().fg(Color::DarkGray);
        match self.status {
            LoadState::NotLoaded => Some(Text::styled("Nothing loaded yet.", dim)),
            LoadState::Loading => Some(Text::styled(
                format!("{} Loading countries...", spinner(self.spinner_frame)),
                Style::default().fg(Color::Yellow),
            )),
            LoadState::Failed(message) => Some(Text::from(vec![
                Line::styled("Could not load the country list.", Style::default().fg(Color::Red)),
                Line::styled(message.clone(), dim),
                Line::from(""),
                Line::styled("Press Ctrl+R to retry.", Style::default().fg(Color::Yellow)),
            ])),
            LoadState::Loaded(_) if self.countries.is_empty() => {
                Some(Text::styled("No countries match your search.", dim))
            }
            LoadState::Loaded(_) => None,
        }
    }

    fn item(&self, country: &CountrySummary) -> ListItem<'static> {
        let is_active = self.active == Some(&country.code);
        let marker = if is_active { "● " } else { "  " };
        let name_style = if is_active {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        ListItem::new(vec![
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::styled(country.name.clone(), name_style),
                Span::styled(format!("  {}", country.code), Style::default().fg(Color::Cyan)),
            ]),
            Line::from(Span::styled(
                format!("  {}", country.flag_url),
                Style::default().fg(Color::DarkGray),
            )),
        ])
    }
}

impl Component for CountryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(self.title())
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        if let Some(text) = self.placeholder() {
            let paragraph = Paragraph::new(text)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, area);
            return;
        }

        self.state.page_size = (area.height.saturating_sub(2) / ROWS_PER_ITEM) as usize;
        self.state.clamp(self.countries.len());

        let items: Vec<ListItem> = self.countries.iter().map(|c| self.item(c)).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("›");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
