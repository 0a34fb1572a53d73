//! HTTP client for the chart-rendering service
//!
//! One request per call: `POST {base_url}/plot` to render, `GET {base_url}/`
//! to probe. Nothing is retried or cached.

use bytes::Bytes;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

use crate::chart::ChartRequest;
use crate::config::{ServiceConfig, TimeoutsConfig};

/// Longest slice of a health-check body kept for display.
const STATUS_EXCERPT_CHARS: usize = 200;

/// Body reported when `/plot` answers 200 without any image bytes.
const EMPTY_RESPONSE: &str = "empty response";

/// Failure talking to the rendering service
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Connection refused, DNS failure, TLS handshake failure
    #[error("could not connect to {url}")]
    Connect { url: String },
    /// No response within the configured timeout
    #[error("{url} did not respond within {secs}s")]
    Timeout { url: String, secs: u64 },
    /// Service answered with a non-success status
    #[error("{status} - {body}")]
    Remote { status: u16, body: String },
    /// The HTTP client could not be constructed (TLS backend, resolver)
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    /// Any other transport-level failure
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Outcome of a health check that reached the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub status_code: u16,
    /// Leading part of the response body, trimmed
    pub body_excerpt: String,
}

impl ServiceStatus {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Client bound to one rendering service instance.
#[derive(Debug, Clone)]
pub struct RenderClient {
    client: reqwest::Client,
    base_url: String,
    plot_timeout: Duration,
    status_timeout: Duration,
}

impl RenderClient {
    /// Create a client for the configured service.
    ///
    /// Timeouts are applied per request so that the status probe can use a
    /// shorter bound than chart rendering. Idle connections are not pooled:
    /// every call opens its own connection and closes it when done.
    pub fn new(service: &ServiceConfig, timeouts: &TimeoutsConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            client,
            base_url: service.base_url.clone(),
            plot_timeout: timeouts.plot(),
            status_timeout: timeouts.status(),
        })
    }

    /// Base URL exactly as configured.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve an absolute path against the base URL.
    ///
    /// Trailing slashes on the base are dropped so `http://host/` and
    /// `http://host` resolve identically.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Render a chart and return the raw image bytes.
    pub async fn plot(&self, request: &ChartRequest) -> Result<Bytes, ClientError> {
        let url = self.endpoint("/plot");
        tracing::debug!(
            %url,
            chart_type = %request.chart_type,
            points = request.data.values.len(),
            "POST"
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .timeout(self.plot_timeout)
            .send()
            .await
            .map_err(|e| classify_error(e, &url, self.plot_timeout))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Remote { status: status.as_u16(), body });
        }

        let data =
            response.bytes().await.map_err(|e| classify_error(e, &url, self.plot_timeout))?;
        if data.is_empty() {
            return Err(ClientError::Remote {
                status: status.as_u16(),
                body: EMPTY_RESPONSE.to_string(),
            });
        }
        Ok(data)
    }

    /// Probe the service root.
    ///
    /// Any HTTP response counts as reachable; the caller decides what a
    /// non-2xx status means.
    pub async fn status(&self) -> Result<ServiceStatus, ClientError> {
        let url = self.endpoint("/");
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .timeout(self.status_timeout)
            .send()
            .await
            .map_err(|e| classify_error(e, &url, self.status_timeout))?;

        let status_code = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Ok(ServiceStatus { status_code, body_excerpt: excerpt(&body) })
    }
}

/// Map a reqwest error onto the client error taxonomy.
fn classify_error(err: reqwest::Error, url: &str, timeout: Duration) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout { url: url.to_string(), secs: timeout.as_secs() }
    } else if err.is_connect() {
        ClientError::Connect { url: url.to_string() }
    } else {
        ClientError::Transport { url: url.to_string(), source: err }
    }
}

fn excerpt(body: &str) -> String {
    body.trim().chars().take(STATUS_EXCERPT_CHARS).collect()
}
