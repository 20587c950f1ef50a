//! # Selector Component
//!
//! A dropdown rendered inline as `◂ label ▸`. Left/Up and Right/Down cycle
//! through the choices, wrapping at both ends.
//!
//! Selectors are transient: rebuilt from the current facets and query state
//! for each render and each key press, so they never hold stale options.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::facets::Continent;
use crate::core::query::{PageSize, Selection};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub struct Choice<T> {
    pub value: T,
    pub label: String,
}

pub struct Selector<T> {
    pub title: &'static str,
    pub choices: Vec<Choice<T>>,
    pub selected: usize,
    /// Whether the selector has keyboard focus (Prop)
    pub focused: bool,
}

impl<T: PartialEq + Clone> Selector<T> {
    /// Builds a selector positioned on `current`, or on the first choice
    /// when `current` is not offered.
    pub fn new(title: &'static str, choices: Vec<Choice<T>>, current: &T) -> Self {
        let selected = choices
            .iter()
            .position(|choice| &choice.value == current)
            .unwrap_or(0);
        Self {
            title,
            choices,
            selected,
            focused: false,
        }
    }

    pub fn current_label(&self) -> &str {
        self.choices
            .get(self.selected)
            .map(|choice| choice.label.as_str())
            .unwrap_or("")
    }
}

impl Selector<Selection> {
    pub fn continents(continents: &[Continent], current: &Selection) -> Self {
        let mut choices: Vec<Choice<Selection>> = std::iter::once(Choice {
            value: Selection::All,
            label: "All continents".to_string(),
        })
        .chain(continents.iter().map(|c| Choice {
            value: Selection::Only(c.code.clone()),
            label: c.name.clone(),
        }))
        .collect();
        keep_unlisted(&mut choices, current);
        Self::new("Continent", choices, current)
    }

    pub fn currencies(currencies: &[String], current: &Selection) -> Self {
        let mut choices: Vec<Choice<Selection>> = std::iter::once(Choice {
            value: Selection::All,
            label: "All currencies".to_string(),
        })
        .chain(currencies.iter().map(|c| Choice {
            value: Selection::Only(c.clone()),
            label: c.clone(),
        }))
        .collect();
        keep_unlisted(&mut choices, current);
        Self::new("Currency", choices, current)
    }
}

/// A selection seeded from the command line may name a value the data
/// doesn't contain. It stays selectable (and visible) instead of silently
/// showing "All".
fn keep_unlisted(choices: &mut Vec<Choice<Selection>>, current: &Selection) {
    if let Selection::Only(value) = current
        && !choices.iter().any(|choice| &choice.value == current)
    {
        choices.push(Choice {
            value: current.clone(),
            label: value.clone(),
        });
    }
}

impl Selector<PageSize> {
    pub fn page_sizes(current: PageSize) -> Self {
        let choices = PageSize::ALL
            .into_iter()
            .map(|size| Choice {
                value: size,
                label: format!("{size} / page"),
            })
            .collect();
        Self::new("Page size", choices, &current)
    }
}

impl<T: Clone> EventHandler for Selector<T> {
    type Event = T;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<T> {
        let len = self.choices.len();
        if len == 0 {
            return None;
        }
        self.selected = match event {
            TuiEvent::Left | TuiEvent::Up => (self.selected + len - 1) % len,
            TuiEvent::Right | TuiEvent::Down => (self.selected + 1) % len,
            _ => return None,
        };
        self.choices.get(self.selected).map(|choice| choice.value.clone())
    }
}

impl<T: PartialEq + Clone> Component for Selector<T> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let line = Line::from(vec![
            Span::styled("◂ ", border),
            Span::raw(self.current_label().to_string()),
            Span::styled(" ▸", border),
        ]);
        let block = Block::bordered()
            .title(self.title)
            .border_style(border)
            .title_style(border);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}
