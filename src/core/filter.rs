//! # Filters
//!
//! The four record predicates, combined with logical AND:
//!
//! 1. continent selection (exact continent code)
//! 2. currency selection (exact currency; absent currency compares as `""`)
//! 3. code query (case-insensitive substring)
//! 4. name query (accent- and case-insensitive substring)
//!
//! Blank text queries match everything. Queries are normalized once per
//! derivation in [`Filter::new`], not once per record.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

use crate::core::query::{QueryState, Selection};
use crate::source::Country;

/// Lowercases, decomposes (NFD) and strips combining diacritical marks
/// (U+0300..=U+036F), so "Ország" and "orszag" fold to the same string.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_diacritical_mark(*c))
        .collect()
}

fn is_diacritical_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Human ordering for display names: accent-folded and case-insensitive
/// first, raw code points to break ties.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

/// A compiled filter: the query state with its text queries pre-normalized.
pub struct Filter<'q> {
    continent: &'q Selection,
    currency: &'q Selection,
    code: Option<String>,
    name: Option<String>,
}

impl<'q> Filter<'q> {
    pub fn new(state: &'q QueryState) -> Self {
        let code = state.code_query().trim();
        Self {
            continent: state.continent(),
            currency: state.currency(),
            code: (!code.is_empty()).then(|| code.to_lowercase()),
            name: (!state.name_query().trim().is_empty()).then(|| fold(state.name_query())),
        }
    }

    pub fn matches(&self, country: &Country) -> bool {
        self.continent.matches(&country.continent_code)
            && self.currency.matches(country.currency_or_empty())
            && self
                .code
                .as_ref()
                .is_none_or(|q| country.code.to_lowercase().contains(q.as_str()))
            && self
                .name
                .as_ref()
                .is_none_or(|q| fold(&country.name).contains(q.as_str()))
    }

    /// Records passing every predicate, in their original order.
    pub fn apply<'a>(&self, records: &'a [Country]) -> Vec<&'a Country> {
        records.iter().filter(|c| self.matches(c)).collect()
    }
}
