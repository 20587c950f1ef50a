//! # TextInput Component
//!
//! Single-line text field used for the code and name queries.
//!
//! The buffer is internal state; `focused` is a prop set by the parent
//! before each render. Every edit emits the full new value so the parent
//! can turn it into an `Action`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub struct TextInput {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    /// Whether the input has keyboard focus (Prop)
    pub focused: bool,
}

impl TextInput {
    pub fn new(title: &'static str, placeholder: &'static str, value: &str) -> Self {
        Self {
            title,
            placeholder,
            value: value.to_string(),
            focused: false,
        }
    }

    /// Tail of the buffer that fits in `width` columns, so the end being
    /// typed stays visible.
    fn visible_tail(&self, width: usize) -> &str {
        let mut start = 0;
        while self.value[start..].width() > width {
            match self.value[start..].chars().next() {
                Some(c) => start += c.len_utf8(),
                None => break,
            }
        }
        &self.value[start..]
    }
}

impl EventHandler for TextInput {
    type Event = String;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<String> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => self.value.push(*c),
            TuiEvent::Paste(text) => {
                // Single-line field: newlines become spaces
                self.value
                    .extend(text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
            }
            TuiEvent::Backspace => {
                self.value.pop()?;
            }
            _ => return None,
        }
        Some(self.value.clone())
    }
}

impl Component for TextInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(self.title)
            .border_style(border)
            .title_style(border);

        let inner_width = area.width.saturating_sub(2) as usize;
        let paragraph = if self.value.is_empty() {
            Paragraph::new(self.placeholder).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.visible_tail(inner_width.saturating_sub(1)))
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused && area.width > 2 && area.height > 2 {
            let shown = self.visible_tail(inner_width.saturating_sub(1)).width() as u16;
            let x = (area.x + 1 + shown).min(area.x + area.width - 2);
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_emits_full_value() {
        let mut input = TextInput::new("Code", "", "");
        assert_eq!(input.handle_event(&TuiEvent::InputChar('h')), Some("h".to_string()));
        assert_eq!(input.handle_event(&TuiEvent::InputChar('u')), Some("hu".to_string()));
        assert_eq!(input.handle_event(&TuiEvent::Backspace), Some("h".to_string()));
    }

    #[test]
    fn test_backspace_on_empty_is_silent() {
        let mut input = TextInput::new("Code", "", "");
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = TextInput::new("Name", "", "");
        assert_eq!(
            input.handle_event(&TuiEvent::Paste("New\nZealand".to_string())),
            Some("New Zealand".to_string())
        );
    }

    #[test]
    fn test_navigation_keys_are_ignored() {
        let mut input = TextInput::new("Name", "", "x");
        assert_eq!(input.handle_event(&TuiEvent::Left), None);
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        assert_eq!(input.value, "x");
    }

    #[test]
    fn test_visible_tail_keeps_end_of_long_values() {
        let input = TextInput::new("Name", "", "Ország Ország");
        assert_eq!(input.visible_tail(6), "Ország");
        assert_eq!(input.visible_tail(40), "Ország Ország");
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = TextInput::new("Code", "e.g. HU", "");

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Code"));
        assert!(text.contains("e.g. HU"));
    }
}
