//! # Filter Bar Component
//!
//! The row of controls above the table: code input, name input, continent,
//! currency and page-size selectors. Owns keyboard focus for the whole
//! screen, including the table (where Left/Right turn pages).
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FilterBarState` lives in `TuiState` (focus, text buffers)
//! - `FilterBar` is created each frame with borrowed state and the view

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::action::Action;
use crate::core::query::QueryState;
use crate::core::view::PageView;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::selector::Selector;
use crate::tui::components::text_input::TextInput;
use crate::tui::event::TuiEvent;

/// Which control receives keys. Tab order follows the screen left to right,
/// then the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Code,
    Name,
    Continent,
    Currency,
    PageSize,
    Table,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Code => Focus::Name,
            Focus::Name => Focus::Continent,
            Focus::Continent => Focus::Currency,
            Focus::Currency => Focus::PageSize,
            Focus::PageSize => Focus::Table,
            Focus::Table => Focus::Code,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Code => Focus::Table,
            Focus::Name => Focus::Code,
            Focus::Continent => Focus::Name,
            Focus::Currency => Focus::Continent,
            Focus::PageSize => Focus::Currency,
            Focus::Table => Focus::PageSize,
        }
    }
}

/// Persistent state for the filter bar.
pub struct FilterBarState {
    pub focus: Focus,
    pub code: TextInput,
    pub name: TextInput,
}

impl FilterBarState {
    /// Seeds the text buffers from the initial query.
    pub fn new(query: &QueryState) -> Self {
        Self {
            focus: Focus::default(),
            code: TextInput::new("Code contains", "e.g. A → AF, AX", query.code_query()),
            name: TextInput::new("Name", "accents optional", query.name_query()),
        }
    }

    /// Handle a key event, returning the Action it maps to, if any.
    pub fn handle_event(&mut self, event: &TuiEvent, view: &PageView<'_>) -> Option<Action> {
        match event {
            TuiEvent::FocusNext => {
                self.focus = self.focus.next();
                return None;
            }
            TuiEvent::FocusPrev => {
                self.focus = self.focus.prev();
                return None;
            }
            // Paging works from anywhere
            TuiEvent::PageUp => return Some(Action::PrevPage),
            TuiEvent::PageDown => return Some(Action::NextPage),
            _ => {}
        }

        match self.focus {
            Focus::Code => self.code.handle_event(event).map(Action::SetCodeQuery),
            Focus::Name => self.name.handle_event(event).map(Action::SetNameQuery),
            Focus::Continent => Selector::continents(&view.continents, view.state.continent())
                .handle_event(event)
                .map(Action::SetContinent),
            Focus::Currency => Selector::currencies(&view.currencies, view.state.currency())
                .handle_event(event)
                .map(Action::SetCurrency),
            Focus::PageSize => Selector::page_sizes(view.state.page_size())
                .handle_event(event)
                .map(Action::SetPageSize),
            Focus::Table => match event {
                TuiEvent::Left | TuiEvent::Up => Some(Action::PrevPage),
                TuiEvent::Right | TuiEvent::Down => Some(Action::NextPage),
                _ => None,
            },
        }
    }
}

/// Transient render wrapper for the filter bar.
pub struct FilterBar<'a> {
    state: &'a mut FilterBarState,
    view: &'a PageView<'a>,
}

impl<'a> FilterBar<'a> {
    pub fn new(state: &'a mut FilterBarState, view: &'a PageView<'a>) -> Self {
        Self { state, view }
    }
}

impl Component for FilterBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [code_area, name_area, continent_area, currency_area, size_area] =
            Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Length(16),
            ])
            .areas(area);

        let focus = self.state.focus;

        self.state.code.focused = focus == Focus::Code;
        self.state.code.render(frame, code_area);

        self.state.name.focused = focus == Focus::Name;
        self.state.name.render(frame, name_area);

        let mut continent =
            Selector::continents(&self.view.continents, self.view.state.continent());
        continent.focused = focus == Focus::Continent;
        continent.render(frame, continent_area);

        let mut currency = Selector::currencies(&self.view.currencies, self.view.state.currency());
        currency.focused = focus == Focus::Currency;
        currency.render(frame, currency_area);

        let mut size = Selector::page_sizes(self.view.state.page_size());
        size.focused = focus == Focus::PageSize;
        size.render(frame, size_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::{PageSize, Selection};
    use crate::core::view::derive;
    use crate::test_support::sample_countries;

    #[test]
    fn test_focus_cycle_round_trips() {
        let mut focus = Focus::Code;
        for _ in 0..6 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Code);
        assert_eq!(Focus::Code.prev(), Focus::Table);
    }

    #[test]
    fn test_typing_in_code_input() {
        let records = sample_countries();
        let query = QueryState::default();
        let view = derive(&records, &query);
        let mut bar = FilterBarState::new(&query);

        assert_eq!(
            bar.handle_event(&TuiEvent::InputChar('a'), &view),
            Some(Action::SetCodeQuery("a".to_string()))
        );
    }

    #[test]
    fn test_tab_then_type_in_name_input() {
        let records = sample_countries();
        let query = QueryState::default();
        let view = derive(&records, &query);
        let mut bar = FilterBarState::new(&query);

        assert_eq!(bar.handle_event(&TuiEvent::FocusNext, &view), None);
        assert_eq!(
            bar.handle_event(&TuiEvent::InputChar('o'), &view),
            Some(Action::SetNameQuery("o".to_string()))
        );
    }

    #[test]
    fn test_continent_selector_uses_facets() {
        let records = sample_countries();
        let query = QueryState::default();
        let view = derive(&records, &query);
        let mut bar = FilterBarState::new(&query);
        bar.focus = Focus::Continent;

        // First continent by name is Africa
        assert_eq!(
            bar.handle_event(&TuiEvent::Right, &view),
            Some(Action::SetContinent(Selection::Only("AF".to_string())))
        );
    }

    #[test]
    fn test_currency_and_page_size_selectors() {
        let records = sample_countries();
        let query = QueryState::default();
        let view = derive(&records, &query);
        let mut bar = FilterBarState::new(&query);

        bar.focus = Focus::Currency;
        assert_eq!(
            bar.handle_event(&TuiEvent::Left, &view),
            Some(Action::SetCurrency(Selection::Only("XOF".to_string())))
        );

        bar.focus = Focus::PageSize;
        assert_eq!(
            bar.handle_event(&TuiEvent::Right, &view),
            Some(Action::SetPageSize(PageSize::Twenty))
        );
    }

    #[test]
    fn test_table_focus_turns_pages() {
        let records = sample_countries();
        let query = QueryState::default();
        let view = derive(&records, &query);
        let mut bar = FilterBarState::new(&query);
        bar.focus = Focus::Table;

        assert_eq!(bar.handle_event(&TuiEvent::Right, &view), Some(Action::NextPage));
        assert_eq!(bar.handle_event(&TuiEvent::Left, &view), Some(Action::PrevPage));
        assert_eq!(bar.handle_event(&TuiEvent::InputChar('x'), &view), None);
    }

    #[test]
    fn test_page_keys_work_from_inputs() {
        let records = sample_countries();
        let query = QueryState::default();
        let view = derive(&records, &query);
        let mut bar = FilterBarState::new(&query);

        assert_eq!(bar.handle_event(&TuiEvent::PageDown, &view), Some(Action::NextPage));
        assert_eq!(bar.handle_event(&TuiEvent::PageUp, &view), Some(Action::PrevPage));
    }

    #[test]
    fn test_seeded_query_prefills_inputs() {
        let mut query = QueryState::default();
        query.set_name_query("orszag");
        let bar = FilterBarState::new(&query);
        assert_eq!(bar.name.value, "orszag");
        assert_eq!(bar.code.value, "");
    }
}
