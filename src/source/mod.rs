pub mod graphql;
pub mod provider;
pub mod session;
pub mod types;

pub use graphql::GraphqlCountrySource;
pub use provider::{CountrySource, SourceError};
pub use session::Session;
pub use types::{Country, FetchState};
