//! # Pager Component
//!
//! Footer line: "Showing 11–20 of 57" on the left, Prev / page / Next on
//! the right. Prev and Next are dimmed when they would do nothing.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::view::PageView;
use crate::tui::component::Component;

pub struct Pager {
    pub range_label: String,
    pub page_label: String,
    pub has_prev: bool,
    pub has_next: bool,
}

impl Pager {
    pub fn from_view(view: &PageView<'_>) -> Self {
        Self {
            range_label: view.range_label(),
            page_label: view.page_label(),
            has_prev: view.has_prev(),
            has_next: view.has_next(),
        }
    }
}

fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }
}

impl Component for Pager {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(36)]).areas(area);

        frame.render_widget(Paragraph::new(self.range_label.as_str()), left);

        let nav = Line::from(vec![
            Span::styled("◂ Prev", button_style(self.has_prev)),
            Span::raw("  "),
            Span::raw(self.page_label.as_str()),
            Span::raw("  "),
            Span::styled("Next ▸", button_style(self.has_next)),
        ])
        .right_aligned();
        frame.render_widget(Paragraph::new(nav), right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::QueryState;
    use crate::core::view::derive;
    use crate::test_support::generated_countries;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_pager_from_first_page() {
        let records = generated_countries(25);
        let query = QueryState::default();
        let pager = Pager::from_view(&derive(&records, &query));

        assert_eq!(pager.range_label, "Showing 1–10 of 25");
        assert_eq!(pager.page_label, "Page 1 / 3");
        assert!(!pager.has_prev);
        assert!(pager.has_next);
    }

    #[test]
    fn test_pager_render() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut pager = Pager {
            range_label: "Showing 0–0 of 0".to_string(),
            page_label: "Page 1 / 1".to_string(),
            has_prev: false,
            has_next: false,
        };

        terminal.draw(|f| pager.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Showing 0–0 of 0"));
        assert!(text.contains("Page 1 / 1"));
        assert!(text.contains("Prev"));
        assert!(text.contains("Next"));
    }
}
