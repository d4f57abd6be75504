//! # NavBar Component
//!
//! Single-line bar at the top of every screen:
//!
//! ```text
//!  Countries App   Home   Countries   /countries/DEU | 250 countries (fetched 14:03:12)
//! ```
//!
//! The active entry is highlighted. "Countries" stays active on the detail
//! route because the detail is nested under the directory.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::route::Route;
use crate::tui::component::Component;

pub struct NavBar<'a> {
    pub route: &'a Route,
    pub status_message: &'a str,
}

impl<'a> NavBar<'a> {
    pub fn new(route: &'a Route, status_message: &'a str) -> Self {
        Self {
            route,
            status_message,
        }
    }

    fn entry(label: &'static str, active: bool) -> Span<'static> {
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        Span::styled(format!(" {label} "), style)
    }

    fn line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::styled(
                " Countries App ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Self::entry("Home", matches!(self.route, Route::Landing)),
            Span::raw(" "),
            Self::entry("Countries", self.route.in_directory()),
            Span::raw("  "),
            Span::styled(self.route.path(), Style::default().fg(Color::DarkGray)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(self.status_message));
        }
        Line::from(spans)
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line()), area);
    }
}
