use std::sync::Arc;

/// One country as displayed by the browser.
///
/// `code` is assumed unique and doubles as the row identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub continent_code: String,
    pub continent_name: String,
    pub currency: Option<String>,
}

impl Country {
    /// Currency as compared by the currency filter. Absent compares as `""`.
    pub fn currency_or_empty(&self) -> &str {
        self.currency.as_deref().unwrap_or("")
    }

    /// "EU — Europe"
    pub fn continent_label(&self) -> String {
        format!("{} — {}", self.continent_code, self.continent_name)
    }

    /// Currency for display, or an em dash when the country has none.
    pub fn currency_label(&self) -> &str {
        self.currency.as_deref().unwrap_or("—")
    }
}

/// Lifecycle of the one country fetch a session performs.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// Request outstanding (or not yet issued).
    #[default]
    Pending,
    /// Request failed; carries the human-readable message.
    Failed(String),
    /// Full, unfiltered list in server order.
    Ready(Arc<[Country]>),
}

impl FetchState {
    /// Records when ready, an empty slice otherwise.
    pub fn records(&self) -> &[Country] {
        match self {
            FetchState::Ready(records) => records,
            FetchState::Pending | FetchState::Failed(_) => &[],
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }
}
