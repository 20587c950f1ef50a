use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::App;
use crate::source::FetchState;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CountryTable, FilterBar, Focus, Notice, Pager, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1)]);
    let [title_area, filter_area, main_area, footer_area] = layout.areas(frame.area());

    let view = app.view();

    TitleBar::new(view.total_count, app.status_message.clone()).render(frame, title_area);
    FilterBar::new(&mut tui.filter_bar, &view).render(frame, filter_area);

    // Main area - loading, error, or the table
    match &app.fetch {
        FetchState::Pending => draw_loading_view(frame, main_area),
        FetchState::Failed(message) => draw_error_view(frame, main_area, message),
        FetchState::Ready(_) => {
            let focused = tui.filter_bar.focus == Focus::Table;
            CountryTable::new(&view.records, focused).render(frame, main_area);
        }
    }

    Pager::from_view(&view).render(frame, footer_area);

    if let Some(message) = &app.notice {
        Notice::new(message).render(frame, frame.area());
    }
}

fn draw_loading_view(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new("Loading…")
        .style(Style::default().fg(Color::Gray))
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(loading, area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, message: &str) {
    let error_paragraph = Paragraph::new(vec![
        Line::from(format!("Error: {message}")).style(Style::default().fg(Color::Red)),
        Line::from(""),
        Line::from("Press Ctrl+R to try again.").style(Style::default().fg(Color::DarkGray)),
    ])
    .block(Block::bordered().title("ERROR"))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}
