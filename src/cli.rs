//! Command-line flags. Filter flags seed the initial query; `--plain`
//! swaps the TUI for a one-shot text report.

use clap::Parser;

use crate::core::config::CliOverrides;
use crate::core::query::{PageSize, QueryState, Selection};

#[derive(Parser, Debug, Default)]
#[command(name = "atlas", about = "Browse the world's countries from a GraphQL API")]
pub struct Args {
    /// GraphQL endpoint serving the countries
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Rows per page: 10, 20, 50 or 100
    #[arg(long, value_parser = parse_page_size)]
    pub page_size: Option<usize>,

    /// Initial code filter (case-insensitive substring)
    #[arg(long)]
    pub code: Option<String>,

    /// Initial name filter (accent-insensitive substring)
    #[arg(long)]
    pub name: Option<String>,

    /// Initial continent code, e.g. EU
    #[arg(long)]
    pub continent: Option<String>,

    /// Initial currency code, e.g. EUR
    #[arg(long)]
    pub currency: Option<String>,

    /// Initial page (1-based, clamped to the last page)
    #[arg(long)]
    pub page: Option<usize>,

    /// Print the page to stdout instead of starting the TUI
    #[arg(long)]
    pub plain: bool,
}

fn parse_page_size(value: &str) -> Result<usize, String> {
    let rows: usize = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    PageSize::from_rows(rows)
        .map(PageSize::get)
        .ok_or_else(|| format!("page size must be one of 10, 20, 50, 100 (got {rows})"))
}

impl Args {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            endpoint: self.endpoint.clone(),
            page_size: self.page_size,
        }
    }

    /// Builds the starting query. The page is applied last since every
    /// other setter resets it.
    pub fn initial_query(&self, page_size: PageSize) -> QueryState {
        let mut query = QueryState::default();
        query.set_page_size(page_size);
        if let Some(code) = &self.code {
            query.set_code_query(code.as_str());
        }
        if let Some(name) = &self.name {
            query.set_name_query(name.as_str());
        }
        query.set_continent(Selection::from_option(self.continent.as_deref()));
        query.set_currency(Selection::from_option(self.currency.as_deref()));
        if let Some(page) = self.page {
            query.set_page(page);
        }
        query
    }
}
