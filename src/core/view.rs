//! # Page View
//!
//! The derived, display-ready picture of the data: one page of filtered
//! records plus facets and navigation metadata.
//!
//! ```text
//! records + QueryState  →  derive()  →  PageView
//! ```
//!
//! `derive` is a pure function. It is called on every render and after every
//! state change, and its result is thrown away afterwards. Nothing is
//! updated incrementally.

use crate::core::facets::{self, Continent};
use crate::core::filter::Filter;
use crate::core::query::QueryState;
use crate::source::Country;

#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    /// Records on the effective page.
    pub records: Vec<&'a Country>,
    pub total_count: usize,
    pub filtered_count: usize,
    /// 1-based index of the first visible record, 0 when nothing matches.
    pub range_start: usize,
    /// 1-based index of the last visible record, 0 when nothing matches.
    pub range_end: usize,
    pub effective_page: usize,
    pub page_count: usize,
    pub continents: Vec<Continent>,
    pub currencies: Vec<String>,
    pub state: &'a QueryState,
}

impl PageView<'_> {
    pub fn has_prev(&self) -> bool {
        self.effective_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.effective_page < self.page_count
    }

    /// "Showing 11–20 of 57"
    pub fn range_label(&self) -> String {
        format!(
            "Showing {}–{} of {}",
            self.range_start, self.range_end, self.filtered_count
        )
    }

    /// "Page 2 / 6"
    pub fn page_label(&self) -> String {
        format!("Page {} / {}", self.effective_page, self.page_count)
    }
}

/// Number of pages needed for `filtered` records, never less than one.
pub fn page_count(filtered: usize, page_size: usize) -> usize {
    filtered.div_ceil(page_size.max(1)).max(1)
}

pub fn derive<'a>(records: &'a [Country], state: &'a QueryState) -> PageView<'a> {
    let filtered = Filter::new(state).apply(records);
    let page_size = state.page_size().get();

    let page_count = page_count(filtered.len(), page_size);
    let effective_page = state.effective_page(page_count);
    let start = (effective_page - 1) * page_size;
    let end = (start + page_size).min(filtered.len());

    let (range_start, range_end) = if filtered.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };

    PageView {
        records: filtered.get(start..end).map(<[_]>::to_vec).unwrap_or_default(),
        total_count: records.len(),
        filtered_count: filtered.len(),
        range_start,
        range_end,
        effective_page,
        page_count,
        continents: facets::continents(records),
        currencies: facets::currencies(records),
        state,
    }
}
