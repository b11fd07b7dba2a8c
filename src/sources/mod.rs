//! Network retrieval of sheet rows: endpoint composition, the HTTP fetch, and load errors.

mod endpoint;
mod error;
mod fetch;

/// One untyped sheet row as delivered by the data source.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

pub use endpoint::{DEFAULT_ENDPOINT_TEMPLATE, compose_endpoint};
pub use error::LoadError;
pub use fetch::{fetch_records, parse_records};
