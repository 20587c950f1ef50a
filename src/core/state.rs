//! # Application State
//!
//! Core business state for Atlas. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── fetch: FetchState             // Pending | Failed(msg) | Ready(records)
//! ├── query: QueryState             // page, page size, filters
//! ├── notice: Option<String>        // one-shot error notification
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::query::QueryState;
use crate::core::view::{self, PageView};
use crate::source::FetchState;

pub struct App {
    pub fetch: FetchState,
    pub query: QueryState,
    /// Error waiting to be acknowledged by the user. Set once per failure.
    pub notice: Option<String>,
    pub status_message: String,
}

impl App {
    pub fn new(query: QueryState) -> Self {
        Self {
            fetch: FetchState::Pending,
            query,
            notice: None,
            status_message: String::from("Loading…"),
        }
    }

    /// Derives the current page. Empty until the fetch succeeds.
    pub fn view(&self) -> PageView<'_> {
        view::derive(self.fetch.records(), &self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ready_app;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new(QueryState::default());
        assert!(app.fetch.is_pending());
        assert!(app.notice.is_none());
        assert_eq!(app.query, QueryState::default());
        assert_eq!(app.view().total_count, 0);
    }

    #[test]
    fn test_view_reflects_loaded_records() {
        let app = ready_app();
        let view = app.view();
        assert_eq!(view.total_count, 9);
        assert_eq!(view.records.len(), 9);
    }
}
