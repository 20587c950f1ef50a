//! # Plain Report
//!
//! Non-interactive adapter: fetch once, derive a single page from the
//! starting query and print it as aligned text. Used by `--plain`.

use unicode_width::UnicodeWidthStr;

use crate::core::query::QueryState;
use crate::core::view::{self, PageView};
use crate::source::{Country, Session, SourceError};

const HEADERS: [&str; 4] = ["Country", "Code", "Continent", "Currency"];

fn cells(country: &Country) -> [String; 4] {
    [
        country.name.clone(),
        country.code.clone(),
        country.continent_label(),
        country.currency_label().to_string(),
    ]
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Renders one page as text: heading, table (or "No results."), footer.
pub fn render_plain(view: &PageView<'_>) -> String {
    let mut out = format!("Countries | Total entries: {}\n\n", view.total_count);

    if view.records.is_empty() {
        out.push_str("No results.\n");
    } else {
        let rows: Vec<[String; 4]> = view.records.iter().map(|c| cells(c)).collect();
        let mut widths = HEADERS.map(|header| header.width());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        let line = |row: [&str; 4]| {
            let padded: Vec<String> = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| pad(cell, width))
                .collect();
            format!("{}\n", padded.join("  ").trim_end())
        };

        out.push_str(&line(HEADERS));
        for row in &rows {
            out.push_str(&line(row.each_ref().map(String::as_str)));
        }
    }

    out.push('\n');
    out.push_str(&format!("{}  {}\n", view.range_label(), view.page_label()));
    out
}

/// Fetches through the session and renders the page for `query`.
pub async fn run_plain(session: &Session, query: &QueryState) -> Result<String, SourceError> {
    let records = session.fetch_all_countries().await?;
    Ok(render_plain(&view::derive(&records, query)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::Selection;
    use crate::test_support::{CountingSource, sample_countries};
    use std::sync::Arc;

    #[test]
    fn test_render_plain_table() {
        let records = sample_countries();
        let mut query = QueryState::default();
        query.set_continent(Selection::Only("EU".to_string()));
        let text = render_plain(&view::derive(&records, &query));

        assert!(text.starts_with("Countries | Total entries: 9\n"));
        assert!(text.contains("Country"));
        assert!(text.contains("Åland"));
        assert!(text.contains("EU — Europe"));
        assert!(text.contains("HUF"));
        assert!(!text.contains("Japan"));
        assert!(text.contains("Showing 1–2 of 2  Page 1 / 1"));
    }

    #[test]
    fn test_render_plain_columns_align() {
        let records = sample_countries();
        let query = QueryState::default();
        let text = render_plain(&view::derive(&records, &query));

        // Every data row puts the code at the same display column
        let code_columns: Vec<usize> = text
            .lines()
            .filter(|l| l.contains("AF  ") || l.contains("JP  "))
            .map(|l| {
                let idx = l.find("  AF").or_else(|| l.find("  JP")).unwrap_or(0);
                l[..idx].width()
            })
            .collect();
        assert_eq!(code_columns.len(), 2);
        assert!(code_columns.iter().all(|&c| c == code_columns[0]));
    }

    #[test]
    fn test_render_plain_no_results() {
        let records = sample_countries();
        let mut query = QueryState::default();
        query.set_code_query("zz");
        let text = render_plain(&view::derive(&records, &query));

        assert!(text.contains("No results."));
        assert!(text.contains("Showing 0–0 of 0  Page 1 / 1"));
    }

    #[test]
    fn test_absent_currency_shows_dash() {
        let records = sample_countries();
        let mut query = QueryState::default();
        query.set_code_query("aq");
        let text = render_plain(&view::derive(&records, &query));
        let row = text.lines().find(|l| l.starts_with("Antarctica")).unwrap();
        assert!(row.trim_end().ends_with('—'));
    }

    #[tokio::test]
    async fn test_run_plain_propagates_fetch_error() {
        let session = Session::new(Arc::new(CountingSource::failing(SourceError::Network(
            "offline".to_string(),
        ))));
        let err = run_plain(&session, &QueryState::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Network error: offline");
    }

    #[tokio::test]
    async fn test_run_plain_uses_query() {
        let session = Session::new(Arc::new(CountingSource::ok(sample_countries())));
        let mut query = QueryState::default();
        query.set_name_query("cote");
        let text = run_plain(&session, &query).await.unwrap();
        assert!(text.contains("Côte d'Ivoire"));
        assert!(text.contains("AF — Africa"));
        assert!(text.contains("XOF"));
    }
}
