//! # Session
//!
//! The lifetime of one run of the browser. A `Session` pairs a
//! [`CountrySource`] with a response cache: the first successful fetch is
//! kept for the rest of the session, so later calls never hit the network.
//! Failures are not cached, a later call issues a fresh request.
//!
//! Constructed once in `main` and shared (via `Arc`) with every fetch task.

use std::sync::Arc;

use log::{debug, error, info};
use tokio::sync::OnceCell;

use crate::source::{Country, CountrySource, SourceError};

pub struct Session {
    source: Arc<dyn CountrySource>,
    cache: OnceCell<Arc<[Country]>>,
}

impl Session {
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        Self {
            source,
            cache: OnceCell::new(),
        }
    }

    /// Returns the full country list, from cache when a previous fetch succeeded.
    pub async fn fetch_all_countries(&self) -> Result<Arc<[Country]>, SourceError> {
        if let Some(records) = self.cache.get() {
            debug!("Serving {} countries from session cache", records.len());
            return Ok(records.clone());
        }

        info!("Fetching countries from source '{}'", self.source.name());
        let records = self
            .cache
            .get_or_try_init(|| self.source.fetch_all_countries())
            .await
            .inspect_err(|e| error!("Country fetch failed: {}", e))?;
        Ok(records.clone())
    }

    /// Whether a successful fetch is cached.
    pub fn is_cached(&self) -> bool {
        self.cache.initialized()
    }
}
