//! # Country Detail Component
//!
//! The pane next to the list. Renders whatever the detail loader holds:
//! the "select a country" prompt when nothing is routed, a spinner while the
//! request is in flight, the error with a retry hint, or the record itself.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::country::{CountryCode, CountryDetail};
use crate::core::load::LoadState;
use crate::tui::component::Component;
use crate::tui::components::spinner;

pub struct CountryDetailView<'a> {
    state: &'a LoadState<CountryDetail>,
    code: Option<&'a CountryCode>,
    spinner_frame: usize,
}

impl<'a> CountryDetailView<'a> {
    pub fn new(
        state: &'a LoadState<CountryDetail>,
        code: Option<&'a CountryCode>,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            code,
            spinner_frame,
        }
    }

    fn code_str(&self) -> &str {
        self.code.map(CountryCode::as_str).unwrap_or("?")
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let dim = Style::default().fg(Color::DarkGray);
        match self.state {
            LoadState::NotLoaded => vec![Line::styled(
                "Select a country to see its details.",
                Style::default().fg(Color::Gray),
            )],
            LoadState::Loading => vec![Line::styled(
                format!(
                    "{} Loading details for {}...",
                    spinner(self.spinner_frame),
                    self.code_str()
                ),
                Style::default().fg(Color::Yellow),
            )],
            LoadState::Failed(message) => vec![
                Line::styled(
                    format!("Could not load details for {}.", self.code_str()),
                    Style::default().fg(Color::Red),
                ),
                Line::styled(message.as_str(), dim),
                Line::from(""),
                Line::styled("Press Ctrl+R to retry.", Style::default().fg(Color::Yellow)),
            ],
            LoadState::Loaded(detail) => detail_lines(detail),
        }
    }
}

fn field<'a>(label: &'static str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Cyan)),
        Span::raw(value),
    ])
}

fn detail_lines(detail: &CountryDetail) -> Vec<Line<'_>> {
    let capital = if detail.capital.is_empty() {
        "n/a".to_string()
    } else {
        detail.capital.clone()
    };
    vec![
        Line::styled(
            detail.name.as_str(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Line::styled(detail.flag_url.as_str(), Style::default().fg(Color::DarkGray)),
        Line::from(""),
        field("Capital: ", capital),
        field("Region: ", detail.region.clone()),
        field("Population: ", detail.population.to_string()),
    ]
}

impl Component for CountryDetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = match self.code {
            Some(code) => format!(" Details: {code} "),
            None => " Details ".to_string(),
        };
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::uniform(1));

        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
