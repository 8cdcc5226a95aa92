//! Search failure taxonomy.

use reqwest::StatusCode;
use thiserror::Error;

/// Why a search produced no results.
///
/// The HTTP surface reports every variant to the caller as an empty list;
/// the distinction exists for logs, metrics and tests.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The configured base URL could not be combined into a request URL.
    #[error("invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),

    /// Connection, TLS or request construction failed.
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with a non-2xx status.
    #[error("upstream returned status {0}")]
    Status(StatusCode),

    /// The response body could not be read.
    #[error("failed to read upstream body: {0}")]
    Body(#[source] reqwest::Error),

    /// The body was not the expected JSON shape.
    #[error("failed to decode upstream body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Upstream parsed fine but had no itineraries.
    #[error("upstream returned no itineraries")]
    NoItineraries,
}

impl SearchError {
    /// Stable label for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Url(_) => "url",
            SearchError::Transport(_) => "transport",
            SearchError::Status(_) => "status",
            SearchError::Body(_) => "body",
            SearchError::Decode(_) => "decode",
            SearchError::NoItineraries => "empty",
        }
    }
}
