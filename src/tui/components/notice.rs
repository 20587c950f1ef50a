//! # Notice Component
//!
//! Blocking overlay that shows a fetch error the moment it happens. While it
//! is open, every key except Enter/Esc (dismiss), Ctrl+R (retry) and
//! Ctrl+C is swallowed.
//! The inline error view underneath stays after dismissal.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

pub struct Notice<'a> {
    pub message: &'a str,
}

impl<'a> Notice<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Component for Notice<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 30, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Error ")
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .title_bottom(Line::from(" Enter/Esc Dismiss  Ctrl+R Retry ").centered())
            .padding(Padding::uniform(1));

        let paragraph = Paragraph::new(self.message)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
