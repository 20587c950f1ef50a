use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use super::types::Country;

/// Errors that can occur while fetching the country list.
///
/// None of these are retried automatically; the caller decides whether to
/// fetch again.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Endpoint answered with a non-success HTTP status.
    Api { status: u16, message: String },
    /// Endpoint answered, but reported GraphQL errors.
    Graphql(Vec<String>),
    /// Response body could not be decoded, or carried no data.
    Parse(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Network(msg) => write!(f, "Network error: {msg}"),
            SourceError::Api { status, message } => {
                write!(f, "Network error: HTTP {status}: {message}")
            }
            SourceError::Graphql(messages) => {
                write!(f, "GraphQL error: {}", messages.join("; "))
            }
            SourceError::Parse(msg) => write!(f, "Response error: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// A place the full country list can be fetched from.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Returns the name of the source, for logs.
    fn name(&self) -> &str;

    /// Fetches every country, unfiltered, in the order the source provides.
    async fn fetch_all_countries(&self) -> Result<Arc<[Country]>, SourceError>;
}
