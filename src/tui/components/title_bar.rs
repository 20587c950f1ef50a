//! # TitleBar Component
//!
//! Top line: heading, total record count and the current status message.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Countries | Total entries: 250 | Loading…"`
//! 2. **Default**: `"Countries | Total entries: 250"`
//!
//! Stateless: every field is a prop copied from `App` by the parent.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Number of records fetched, before filtering
    pub total_count: usize,
    /// Status message (e.g., "Loading…", "Fetch failed (Ctrl+R to retry)")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(total_count: usize, status_message: String) -> Self {
        Self {
            total_count,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Countries", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" | Total entries: {}", self.total_count)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
