//! # Actions
//!
//! Everything that can happen in Atlas becomes an `Action`.
//! User types in the name box? That's `Action::SetNameQuery(text)`.
//! The fetch finishes? That's `Action::RecordsLoaded(records)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing any I/O the caller should perform. No side effects
//! happen here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::sync::Arc;

use log::{debug, info};

use crate::core::filter::Filter;
use crate::core::query::{PageSize, Selection};
use crate::core::state::App;
use crate::core::view;
use crate::source::{Country, FetchState};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetCodeQuery(String),
    SetNameQuery(String),
    SetContinent(Selection),
    SetCurrency(Selection),
    SetPageSize(PageSize),
    SetPage(usize),
    PrevPage,
    NextPage,
    /// A fetch task was spawned.
    FetchStarted,
    RecordsLoaded(Arc<[Country]>),
    FetchFailed(String),
    /// User asked to fetch again (after a failure).
    Refetch,
    DismissNotice,
    Quit,
}

/// I/O the event loop must perform after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnFetch,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SetCodeQuery(query) => app.query.set_code_query(query),
        Action::SetNameQuery(query) => app.query.set_name_query(query),
        Action::SetContinent(continent) => app.query.set_continent(continent),
        Action::SetCurrency(currency) => app.query.set_currency(currency),
        Action::SetPageSize(size) => app.query.set_page_size(size),
        Action::SetPage(page) => app.query.set_page(page),
        Action::PrevPage => {
            let page_count = current_page_count(app);
            if !app.query.prev_page(page_count) {
                debug!("PrevPage ignored: already on first page");
            }
        }
        Action::NextPage => {
            let page_count = current_page_count(app);
            if !app.query.next_page(page_count) {
                debug!("NextPage ignored: already on last page");
            }
        }
        Action::FetchStarted => {
            app.fetch = FetchState::Pending;
            app.status_message = String::from("Loading…");
        }
        Action::RecordsLoaded(records) => {
            info!("Loaded {} countries", records.len());
            app.status_message.clear();
            app.fetch = FetchState::Ready(records);
        }
        Action::FetchFailed(message) => {
            app.status_message = String::from("Fetch failed (Ctrl+R to retry)");
            app.notice = Some(message.clone());
            app.fetch = FetchState::Failed(message);
        }
        Action::Refetch => {
            if app.fetch.is_pending() {
                debug!("Refetch ignored: a fetch is already outstanding");
                return Effect::None;
            }
            app.notice = None;
            return Effect::SpawnFetch;
        }
        Action::DismissNotice => app.notice = None,
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}

/// Page count for the current filters, without building the page itself.
fn current_page_count(app: &App) -> usize {
    let filtered = Filter::new(&app.query)
        .apply(app.fetch.records())
        .len();
    view::page_count(filtered, app.query.page_size().get())
}
