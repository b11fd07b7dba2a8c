use std::fmt;

/// What: Failure of the one-shot sheet load.
///
/// Inputs: Produced by [`crate::sources::fetch_records`] and [`crate::sources::parse_records`].
///
/// Output: Implements `Display`/`Error`; the `Display` text is what the error card shows.
///
/// Details:
/// - Every variant is fatal to initialization. There is no retry.
/// - Individual malformed rows are not errors; the normalizer drops them.
#[derive(Debug)]
pub enum LoadError {
    /// The data source answered with a non-success status.
    Fetch {
        /// HTTP status code returned by the endpoint.
        status: u16,
    },
    /// The request never produced a response (DNS, TLS, refused connection, body read).
    Network(reqwest::Error),
    /// The response body is not valid JSON.
    Parse(serde_json::Error),
    /// The body is valid JSON but not an array of rows.
    Shape,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch { status } => write!(f, "failed to fetch data: {status}"),
            Self::Network(err) => write!(f, "network error: {err}"),
            Self::Parse(err) => write!(f, "response is not valid JSON: {err}"),
            Self::Shape => f.write_str("response is not a list of rows"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Fetch { .. } | Self::Shape => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
