//! # SearchBox Component
//!
//! Controlled text input for the directory search term.
//!
//! The box owns no text. It is rebuilt from `app.directory.search_term()`
//! every frame and before every key event, and each edit comes back as
//! `SearchEvent::Changed(new_term)` for the reducer to store. What is shown
//! is therefore always exactly the current term.
//!
//! A term wider than the box scrolls left so its tail and the cursor stay
//! visible.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search for a country...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The full new value of the search term.
    Changed(String),
}

pub struct SearchBox<'a> {
    term: &'a str,
}

impl<'a> SearchBox<'a> {
    pub fn new(term: &'a str) -> Self {
        Self { term }
    }
}

impl EventHandler for SearchBox<'_> {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                let mut next = self.term.to_string();
                next.push(*c);
                Some(SearchEvent::Changed(next))
            }
            TuiEvent::Paste(text) => {
                let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
                if pasted.is_empty() {
                    return None;
                }
                Some(SearchEvent::Changed(format!("{}{}", self.term, pasted)))
            }
            TuiEvent::Backspace => {
                let mut next = self.term.to_string();
                next.pop()?;
                Some(SearchEvent::Changed(next))
            }
            TuiEvent::ClearInput if !self.term.is_empty() => {
                Some(SearchEvent::Changed(String::new()))
            }
            _ => None,
        }
    }
}

impl Component for SearchBox<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content = if self.term.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
        } else {
            Line::from(self.term)
        };

        let term_width = u16::try_from(self.term.width()).unwrap_or(u16::MAX);
        let offset = scroll_offset(term_width, area.width.saturating_sub(2));

        let block = Block::bordered()
            .title(" Search ")
            .border_style(Style::default().fg(Color::Cyan));
        let paragraph = Paragraph::new(content).block(block).scroll((0, offset));
        frame.render_widget(paragraph, area);

        // Cursor sits after the last visible character, inside the border
        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1).saturating_add(term_width - offset).min(max_x);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// Columns to scroll so the term's end plus one cursor cell fit in `inner`.
fn scroll_offset(term_width: u16, inner: u16) -> u16 {
    term_width.saturating_sub(inner.saturating_sub(1))
}
