use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CountryDetailView, CountryList, LandingPage, NavBar, SearchBox};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [nav_area, main_area, help_area] = layout.areas(frame.area());

    NavBar::new(&app.route, &app.status_message).render(frame, nav_area);

    if app.route.in_directory() {
        draw_directory(frame, main_area, app, tui, spinner_frame);
    } else {
        LandingPage::new().render(frame, main_area);
    }

    let help = Paragraph::new(Line::from(help_text(&app.route)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

fn draw_directory(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    use Constraint::{Length, Min, Percentage};
    let [search_area, body_area] = Layout::vertical([Length(3), Min(0)]).areas(area);
    let [list_area, detail_area] =
        Layout::horizontal([Percentage(45), Percentage(55)]).areas(body_area);

    SearchBox::new(app.directory.search_term()).render(frame, search_area);

    CountryList::new(
        &mut tui.country_list,
        app.directory.filtered(),
        app.directory.status(),
        app.route.country(),
        spinner_frame,
    )
    .render(frame, list_area);

    CountryDetailView::new(app.detail.state(), app.detail.code(), spinner_frame)
        .render(frame, detail_area);
}

fn help_text(route: &Route) -> &'static str {
    match route {
        Route::Landing => " Enter Countries  Tab Switch screen  q Quit",
        Route::Directory => {
            " Type to search  ↑↓ Select  Enter Details  Ctrl+U Clear  Ctrl+R Retry  Esc Home  Ctrl+C Quit"
        }
        Route::Country(_) => {
            " Type to search  ↑↓ Select  Enter Details  Ctrl+R Retry  Esc Back to list  Ctrl+C Quit"
        }
    }
}
