//! The relay endpoint.

use std::time::Instant;

use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use url::{form_urlencoded, Url};

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::relay::document::{decode_document, encode_document};
use crate::relay::error::{RelayError, RelayResult};
use crate::relay::merge::{merge_document, MergeAction};

/// Media type of relayed documents.
pub const YAML_CONTENT_TYPE: &str = "application/x-yaml";

/// First non-absent `url` value in a raw query string.
///
/// Repeated keys are not an error; later values are ignored.
pub fn url_param(query: Option<&str>) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned())
}

/// Host portion of an upstream URL, for logs. Subscription URLs carry
/// access tokens in their path and query, so nothing else is recorded.
fn log_host(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| "-".to_string())
}

/// `GET /xxxxxxxx/clash?url=...`
pub async fn relay_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    let start_time = Instant::now();
    let url = url_param(query.as_deref());

    match relay(&state, url).await {
        Ok(body) => {
            metrics::record_relay("ok", start_time);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, YAML_CONTENT_TYPE)],
                body,
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(kind = e.kind(), error = %e, "Relay failed");
            metrics::record_relay(e.kind(), start_time);
            e.into_response()
        }
    }
}

async fn relay(state: &AppState, url: Option<String>) -> RelayResult<String> {
    let url = url.filter(|url| !url.is_empty()).ok_or(RelayError::MissingUrl)?;
    let host = log_host(&url);

    tracing::debug!(upstream_host = %host, "Fetching upstream document");
    let bytes = state.upstream.fetch(&url).await?;

    let mut document = decode_document(&bytes)?;
    let report = merge_document(&mut document);
    if report.any_skipped() {
        if report.proxies == MergeAction::Skipped {
            tracing::warn!(upstream_host = %host, "Upstream 'proxies' is not a list; proxy not injected");
        }
        if report.rules == MergeAction::Skipped {
            tracing::warn!(upstream_host = %host, "Upstream 'rules' is not a list; rules not injected");
        }
    }

    encode_document(document)
}
