//! Relay error taxonomy and its HTTP mapping.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors that abort a relay request.
///
/// Every variant is surfaced to the caller; nothing is retried or recovered.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The `url` query parameter is absent or empty.
    #[error("Missing 'url' parameter")]
    MissingUrl,

    /// The upstream request could not be built from the supplied URL.
    #[error("Failed to create request: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The upstream request failed in transport (DNS, connect, timeout).
    #[error("Failed to download file: {0}")]
    UpstreamRequest(#[source] reqwest::Error),

    /// Upstream answered with anything other than 200.
    #[error("Failed to download file: {0}")]
    UpstreamStatus(u16),

    /// The upstream body could not be read to completion.
    #[error("Failed to read response body: {0}")]
    UpstreamRead(#[source] reqwest::Error),

    #[error("Empty response body")]
    EmptyBody,

    /// The body is not valid YAML.
    #[error("Failed to parse YAML: {0}")]
    Decode(#[source] serde_yaml::Error),

    /// The body is valid YAML but its root is not a mapping.
    #[error("Failed to parse YAML: expected a mapping at the top level, found {0}")]
    NotAMapping(&'static str),

    #[error("Failed to serialize updated YAML: {0}")]
    Encode(#[source] serde_yaml::Error),
}

/// Result type for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;

impl RelayError {
    /// HTTP status reported to the client.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingUrl => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::MissingUrl => "bad_request",
            RelayError::InvalidUrl(_) | RelayError::UpstreamRequest(_) => "upstream_request",
            RelayError::UpstreamStatus(_) => "upstream_status",
            RelayError::UpstreamRead(_) => "upstream_read",
            RelayError::EmptyBody => "empty_response",
            RelayError::Decode(_) | RelayError::NotAMapping(_) => "decode",
            RelayError::Encode(_) => "encode",
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
