//! Upstream document retrieval.
//!
//! One GET per relay request, no retries. The client is built once and
//! shared; it carries no per-request state.

use std::time::Duration;

use axum::body::Bytes;
use reqwest::{header::USER_AGENT, StatusCode};
use url::Url;

use crate::config::UpstreamConfig;
use crate::relay::error::{RelayError, RelayResult};

/// User-Agent presented to upstream servers.
pub const RELAY_USER_AGENT: &str = "clash";

/// HTTP client for fetching upstream configuration documents.
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
}

impl UpstreamClient {
    /// Build a client from upstream settings.
    ///
    /// Unset timeouts leave the transport defaults in place.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Download the document at `url`.
    ///
    /// Only a 200 with a non-empty body counts as success.
    pub async fn fetch(&self, url: &str) -> RelayResult<Bytes> {
        let target = Url::parse(url)?;

        let response = self
            .client
            .get(target)
            .header(USER_AGENT, RELAY_USER_AGENT)
            .send()
            .await
            .map_err(RelayError::UpstreamRequest)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RelayError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(RelayError::UpstreamRead)?;
        if body.is_empty() {
            return Err(RelayError::EmptyBody);
        }

        tracing::debug!(bytes = body.len(), "Upstream document fetched");
        Ok(body)
    }
}
