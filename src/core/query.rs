//! # Query State
//!
//! Everything the user can change about what is shown: the requested page,
//! the page size, and the four filters.
//!
//! ```text
//! QueryState
//! ├── page: usize           // requested page, 1-based (clamped on derive)
//! ├── page_size: PageSize   // 10 | 20 | 50 | 100
//! ├── code_query: String    // code substring
//! ├── name_query: String    // accent-insensitive name substring
//! ├── continent: Selection  // All | Only(continent code)
//! └── currency: Selection   // All | Only(currency)
//! ```
//!
//! Every setter except `set_page` resets the page to 1 in the same call.
//! The requested page may point past the last page after the data shrinks;
//! the view clamps it on every derivation.

use std::fmt;

/// The fixed set of page sizes offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    /// Looks up the page size with exactly `n` rows.
    pub fn from_rows(n: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.get() == n)
    }

    /// Next larger size, wrapping to the smallest.
    pub fn next(self) -> Self {
        match self {
            PageSize::Ten => PageSize::Twenty,
            PageSize::Twenty => PageSize::Fifty,
            PageSize::Fifty => PageSize::Hundred,
            PageSize::Hundred => PageSize::Ten,
        }
    }

    /// Next smaller size, wrapping to the largest.
    pub fn prev(self) -> Self {
        match self {
            PageSize::Ten => PageSize::Hundred,
            PageSize::Twenty => PageSize::Ten,
            PageSize::Fifty => PageSize::Twenty,
            PageSize::Hundred => PageSize::Fifty,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A dropdown choice: everything, or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Builds a selection from an optional value. Absent or blank selects
    /// everything; anything else is taken literally (so the lek, `ALL`, is a
    /// currency like any other).
    pub fn from_option(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Selection::All,
            Some(value) => Selection::Only(value.to_string()),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    page: usize,
    page_size: PageSize,
    code_query: String,
    name_query: String,
    continent: Selection,
    currency: Selection,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PageSize::default(),
            code_query: String::new(),
            name_query: String::new(),
            continent: Selection::All,
            currency: Selection::All,
        }
    }
}

impl QueryState {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn code_query(&self) -> &str {
        &self.code_query
    }

    pub fn name_query(&self) -> &str {
        &self.name_query
    }

    pub fn continent(&self) -> &Selection {
        &self.continent
    }

    pub fn currency(&self) -> &Selection {
        &self.currency
    }

    pub fn set_code_query(&mut self, query: impl Into<String>) {
        self.code_query = query.into();
        self.page = 1;
    }

    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.name_query = query.into();
        self.page = 1;
    }

    pub fn set_continent(&mut self, continent: Selection) {
        self.continent = continent;
        self.page = 1;
    }

    pub fn set_currency(&mut self, currency: Selection) {
        self.currency = currency;
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// Sets the requested page. Values below 1 become 1; the upper bound is
    /// applied at derivation time.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// The page actually shown for a result set with `page_count` pages.
    pub fn effective_page(&self, page_count: usize) -> usize {
        self.page.clamp(1, page_count.max(1))
    }

    /// Moves one page back. Returns false (and changes nothing) on the first page.
    pub fn prev_page(&mut self, page_count: usize) -> bool {
        let current = self.effective_page(page_count);
        if current <= 1 {
            return false;
        }
        self.page = current - 1;
        true
    }

    /// Moves one page forward. Returns false (and changes nothing) on the last page.
    pub fn next_page(&mut self, page_count: usize) -> bool {
        let page_count = page_count.max(1);
        let current = self.effective_page(page_count);
        if current >= page_count {
            return false;
        }
        self.page = (current + 1).min(page_count);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page(page: usize) -> QueryState {
        let mut state = QueryState::default();
        state.set_page(page);
        state
    }

    #[test]
    fn test_defaults() {
        let state = QueryState::default();
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size().get(), 10);
        assert_eq!(state.code_query(), "");
        assert_eq!(state.name_query(), "");
        assert_eq!(state.continent(), &Selection::All);
        assert_eq!(state.currency(), &Selection::All);
    }

    #[test]
    fn test_filter_and_size_setters_reset_page() {
        let mut state = on_page(4);
        state.set_code_query("a");
        assert_eq!(state.page(), 1);

        state.set_page(4);
        state.set_name_query("orszag");
        assert_eq!(state.page(), 1);

        state.set_page(4);
        state.set_continent(Selection::Only("EU".to_string()));
        assert_eq!(state.page(), 1);

        state.set_page(4);
        state.set_currency(Selection::Only("EUR".to_string()));
        assert_eq!(state.page(), 1);

        state.set_page(4);
        state.set_page_size(PageSize::Fifty);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_set_page_keeps_other_fields() {
        let mut state = QueryState::default();
        state.set_code_query("a");
        state.set_name_query("b");
        state.set_continent(Selection::Only("EU".to_string()));
        state.set_currency(Selection::Only("EUR".to_string()));
        state.set_page_size(PageSize::Twenty);
        let before = state.clone();

        state.set_page(3);

        assert_eq!(state.page(), 3);
        assert_eq!(state.code_query(), before.code_query());
        assert_eq!(state.name_query(), before.name_query());
        assert_eq!(state.continent(), before.continent());
        assert_eq!(state.currency(), before.currency());
        assert_eq!(state.page_size(), before.page_size());
    }

    #[test]
    fn test_set_page_floor_is_one() {
        assert_eq!(on_page(0).page(), 1);
    }

    #[test]
    fn test_effective_page_clamps() {
        assert_eq!(on_page(7).effective_page(3), 3);
        assert_eq!(on_page(2).effective_page(3), 2);
        assert_eq!(on_page(2).effective_page(0), 1);
    }

    #[test]
    fn test_prev_next_stay_in_bounds() {
        let mut state = QueryState::default();
        for _ in 0..5 {
            state.prev_page(3);
        }
        assert_eq!(state.page(), 1);
        assert!(!state.prev_page(3));

        for _ in 0..10 {
            state.next_page(3);
        }
        assert_eq!(state.page(), 3);
        assert!(!state.next_page(3));
    }

    #[test]
    fn test_navigation_starts_from_effective_page() {
        // Requested page 9 but only 3 exist: Prev lands on 2, not 8
        let mut state = on_page(9);
        assert!(state.prev_page(3));
        assert_eq!(state.page(), 2);

        // Next from a stale page beyond the end is disabled
        let mut state = on_page(9);
        assert!(!state.next_page(3));
        assert_eq!(state.page(), 9);
    }

    #[test]
    fn test_page_size_cycle() {
        assert_eq!(PageSize::Hundred.next(), PageSize::Ten);
        assert_eq!(PageSize::Ten.prev(), PageSize::Hundred);
        assert_eq!(PageSize::from_rows(50), Some(PageSize::Fifty));
        assert_eq!(PageSize::from_rows(30), None);
        assert_eq!(PageSize::Twenty.to_string(), "20");
    }

    #[test]
    fn test_selection_from_option() {
        assert_eq!(Selection::from_option(None), Selection::All);
        assert_eq!(Selection::from_option(Some("  ")), Selection::All);
        assert_eq!(Selection::from_option(Some("EU")), Selection::Only("EU".to_string()));
        assert_eq!(Selection::from_option(Some("ALL")), Selection::Only("ALL".to_string()));
        assert!(Selection::All.matches("anything"));
        assert!(!Selection::Only("EU".to_string()).matches("AS"));
    }
}
