//! Filter options derived from the full record list.
//!
//! Facets never look at the active filters, so a user stuck with an
//! over-constrained combination can still see (and pick) every option.

use std::collections::{BTreeSet, HashMap};

use crate::core::filter::locale_cmp;
use crate::source::Country;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Continent {
    pub code: String,
    pub name: String,
}

/// Distinct continents, sorted by name. On duplicate codes the last
/// record's name wins.
pub fn continents(records: &[Country]) -> Vec<Continent> {
    let mut by_code: HashMap<&str, &str> = HashMap::new();
    for record in records {
        by_code.insert(&record.continent_code, &record.continent_name);
    }

    let mut continents: Vec<Continent> = by_code
        .into_iter()
        .map(|(code, name)| Continent {
            code: code.to_string(),
            name: name.to_string(),
        })
        .collect();
    continents.sort_by(|a, b| locale_cmp(&a.name, &b.name).then_with(|| a.code.cmp(&b.code)));
    continents
}

/// Distinct present currencies in code-point order.
pub fn currencies(records: &[Country]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.currency.as_deref())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{country, sample_countries};

    #[test]
    fn test_continents_sorted_by_name_and_unique() {
        let names: Vec<String> = continents(&sample_countries())
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Africa",
                "Antarctica",
                "Asia",
                "Europe",
                "North America",
                "Oceania",
                "South America"
            ]
        );
    }

    #[test]
    fn test_continent_last_name_wins() {
        let records = vec![
            country("AA", "One", "EU", "Old Europe", None),
            country("BB", "Two", "EU", "Europe", None),
        ];
        assert_eq!(
            continents(&records),
            vec![Continent {
                code: "EU".to_string(),
                name: "Europe".to_string()
            }]
        );
    }

    #[test]
    fn test_currencies_skip_absent_and_dedupe() {
        assert_eq!(
            currencies(&sample_countries()),
            vec!["AFN", "BRL", "EUR", "HUF", "JPY", "NZD", "USD", "XOF"]
        );
    }

    #[test]
    fn test_currencies_sort_by_code_point() {
        let records = vec![
            country("AA", "A", "EU", "Europe", Some("eur")),
            country("BB", "B", "EU", "Europe", Some("USD")),
        ];
        assert_eq!(currencies(&records), vec!["USD", "eur"]);
    }

    #[test]
    fn test_empty_records_give_empty_facets() {
        assert!(continents(&[]).is_empty());
        assert!(currencies(&[]).is_empty());
    }
}
