//! One-shot retrieval of sheet rows over HTTP.

use reqwest::header::{ACCEPT, CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use serde_json::Value;
use tracing::{info, warn};

use super::{LoadError, RawRecord};

/// What: Build the HTTP client used for the sheet request.
///
/// Inputs: None
///
/// Output:
/// - Client that asks every intermediary to skip its cache; `Err` if TLS setup fails.
///
/// Details:
/// - No request timeout is configured; a hanging source leaves the loading state up.
fn build_client() -> Result<reqwest::Client, LoadError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    reqwest::Client::builder()
        .user_agent(format!("sheetnav/{}", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .build()
        .map_err(LoadError::Network)
}

/// What: Parse a response body into raw rows.
///
/// Inputs:
/// - `body`: Response text.
///
/// Output:
/// - Object rows in order. Non-object array elements are skipped.
///
/// # Errors
/// - `LoadError::Parse` when `body` is not JSON
/// - `LoadError::Shape` when the JSON is not an array
pub fn parse_records(body: &str) -> Result<Vec<RawRecord>, LoadError> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(items) = value else {
        return Err(LoadError::Shape);
    };
    Ok(items
        .into_iter()
        .filter_map(|v| match v {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect())
}

/// What: Fetch the sheet rows from `endpoint`.
///
/// Inputs:
/// - `endpoint`: Fully composed JSON endpoint URL.
///
/// Output:
/// - `Ok(rows)` in source order; `Err(LoadError)` on any failure.
///
/// # Errors
/// - `LoadError::Network` when no response arrives or the body cannot be read
/// - `LoadError::Fetch` when the status is not 2xx
/// - `LoadError::Parse` / `LoadError::Shape` when the body is not a JSON array
///
/// Details:
/// - Single attempt, no retry.
pub async fn fetch_records(endpoint: &str) -> Result<Vec<RawRecord>, LoadError> {
    let client = build_client()?;
    info!(endpoint, "fetching sheet rows");
    let res = client
        .get(endpoint)
        .send()
        .await
        .map_err(LoadError::Network)?;
    let status = res.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), endpoint, "sheet request failed");
        return Err(LoadError::Fetch {
            status: status.as_u16(),
        });
    }
    let body = res.text().await.map_err(LoadError::Network)?;
    let rows = parse_records(&body)?;
    info!(rows = rows.len(), bytes = body.len(), "fetched sheet rows");
    Ok(rows)
}
