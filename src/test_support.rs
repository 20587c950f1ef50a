//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::source::{Country, CountrySource, SourceError};

/// Builds a country record.
pub fn country(
    code: &str,
    name: &str,
    continent_code: &str,
    continent_name: &str,
    currency: Option<&str>,
) -> Country {
    Country {
        code: code.to_string(),
        name: name.to_string(),
        continent_code: continent_code.to_string(),
        continent_name: continent_name.to_string(),
        currency: currency.map(str::to_string),
    }
}

/// A small, mixed dataset in "server order".
pub fn sample_countries() -> Vec<Country> {
    vec![
        country("AF", "Afghanistan", "AS", "Asia", Some("AFN")),
        country("AQ", "Antarctica", "AN", "Antarctica", None),
        country("AX", "Åland", "EU", "Europe", Some("EUR")),
        country("BR", "Brazil", "SA", "South America", Some("BRL")),
        country("CI", "Côte d'Ivoire", "AF", "Africa", Some("XOF")),
        country("HU", "Ország", "EU", "Europe", Some("HUF")),
        country("JP", "Japan", "AS", "Asia", Some("JPY")),
        country("NZ", "New Zealand", "OC", "Oceania", Some("NZD")),
        country("US", "United States", "NA", "North America", Some("USD")),
    ]
}

/// `n` synthetic countries cycling through five continents and three currencies.
pub fn generated_countries(n: usize) -> Vec<Country> {
    const CONTINENTS: [(&str, &str); 5] = [
        ("AF", "Africa"),
        ("AS", "Asia"),
        ("EU", "Europe"),
        ("NA", "North America"),
        ("OC", "Oceania"),
    ];
    const CURRENCIES: [&str; 3] = ["EUR", "USD", "XOF"];
    (0..n)
        .map(|i| {
            let (cc, cn) = CONTINENTS[i % CONTINENTS.len()];
            country(
                &format!("C{i:03}"),
                &format!("Country {i}"),
                cc,
                cn,
                Some(CURRENCIES[i % CURRENCIES.len()]),
            )
        })
        .collect()
}

/// A source that answers from memory and counts how often it was asked.
pub struct CountingSource {
    result: Result<Arc<[Country]>, SourceError>,
    calls: AtomicUsize,
}

impl CountingSource {
    pub fn ok(countries: Vec<Country>) -> Self {
        Self {
            result: Ok(countries.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: SourceError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountrySource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    async fn fetch_all_countries(&self) -> Result<Arc<[Country]>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Creates a test App whose fetch already succeeded with `sample_countries()`.
pub fn ready_app() -> crate::core::state::App {
    let mut app = crate::core::state::App::new(crate::core::query::QueryState::default());
    crate::core::action::update(
        &mut app,
        crate::core::action::Action::RecordsLoaded(sample_countries().into()),
    );
    app
}
