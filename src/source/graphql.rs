//! GraphQL country source.
//!
//! Issues the single `AllCountries` query against a countries GraphQL
//! endpoint and maps the response into [`Country`] records. All filtering
//! and pagination happen locally, so the query takes no variables.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::source::{Country, CountrySource, SourceError};

pub const ALL_COUNTRIES_QUERY: &str =
    "query AllCountries { countries { code name currency continent { code name } } }";
pub const ALL_COUNTRIES_OPERATION: &str = "AllCountries";

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Serialize, Debug)]
struct GraphqlRequest<'a> {
    query: &'a str,
    #[serde(rename = "operationName")]
    operation_name: &'a str,
}

#[derive(Deserialize, Debug)]
struct GraphqlResponse {
    data: Option<AllCountriesData>,
    #[serde(default)]
    errors: Option<Vec<GraphqlErrorEntry>>,
}

#[derive(Deserialize, Debug)]
struct GraphqlErrorEntry {
    message: String,
}

#[derive(Deserialize, Debug)]
struct AllCountriesData {
    countries: Vec<GqlCountry>,
}

#[derive(Deserialize, Debug)]
struct GqlCountry {
    code: String,
    name: String,
    currency: Option<String>,
    continent: GqlContinent,
}

#[derive(Deserialize, Debug)]
struct GqlContinent {
    code: String,
    name: String,
}

impl From<GqlCountry> for Country {
    fn from(c: GqlCountry) -> Self {
        Country {
            code: c.code,
            name: c.name,
            continent_code: c.continent.code,
            continent_name: c.continent.name,
            currency: c.currency,
        }
    }
}

/// Collects GraphQL error messages, if the response reported any.
fn error_messages(errors: Option<Vec<GraphqlErrorEntry>>) -> Option<Vec<String>> {
    let messages: Vec<String> = errors?.into_iter().map(|e| e.message).collect();
    (!messages.is_empty()).then_some(messages)
}

/// Turns a response body into records. Any reported GraphQL error fails the
/// whole fetch, even when partial data came back.
fn parse_body(body: &str) -> Result<Vec<Country>, SourceError> {
    let response: GraphqlResponse =
        serde_json::from_str(body).map_err(|e| SourceError::Parse(e.to_string()))?;

    if let Some(messages) = error_messages(response.errors) {
        return Err(SourceError::Graphql(messages));
    }

    let data = response
        .data
        .ok_or_else(|| SourceError::Parse("response contained no data".to_string()))?;

    Ok(data.countries.into_iter().map(Country::from).collect())
}

// ============================================================================
// Source Implementation
// ============================================================================

/// Fetches countries over HTTP from a GraphQL endpoint.
pub struct GraphqlCountrySource {
    endpoint: String,
    client: reqwest::Client,
}

impl GraphqlCountrySource {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                reqwest::Client::new()
            });
        Self { endpoint, client }
    }
}

#[async_trait]
impl CountrySource for GraphqlCountrySource {
    fn name(&self) -> &str {
        "graphql"
    }

    async fn fetch_all_countries(&self) -> Result<Arc<[Country]>, SourceError> {
        let request = GraphqlRequest {
            query: ALL_COUNTRIES_QUERY,
            operation_name: ALL_COUNTRIES_OPERATION,
        };

        info!("GraphQL request: operation={} endpoint={}", ALL_COUNTRIES_OPERATION, self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        debug!("GraphQL response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !status.is_success() {
            // GraphQL servers often report query faults with a 4xx and an errors body
            if let Ok(parsed) = serde_json::from_str::<GraphqlResponse>(&body)
                && let Some(messages) = error_messages(parsed.errors)
            {
                warn!("GraphQL errors with HTTP {}: {:?}", status, messages);
                return Err(SourceError::Graphql(messages));
            }
            warn!("GraphQL endpoint error: {} - {}", status, body);
            return Err(SourceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let countries = parse_body(&body)?;
        info!("Fetched {} countries", countries.len());
        Ok(countries.into())
    }
}
