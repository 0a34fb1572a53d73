//! Request marshaler
//!
//! Converts tool arguments into rendering-service requests and every possible
//! outcome (image, remote rejection, connectivity failure, bad input) into a
//! [`ChartResult`]. Nothing in here returns an error to the caller.

use bytes::Bytes;
use serde_json::Value;
use std::time::Instant;

use crate::chart::{ChartInput, ChartRequest, ChartValidationError};
use crate::client::{ClientError, RenderClient};
use crate::config::PlotBridgeConfig;

/// MIME type of every image produced by the rendering service.
pub const PNG_MIME_TYPE: &str = "image/png";

/// Result of a single tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartResult {
    /// Rendered chart
    Image {
        data: Bytes,
        mime_type: &'static str,
        /// Short human-readable line shown next to the image
        caption: String,
    },
    /// Status report or failure description
    Message { text: String, is_error: bool },
}

impl ChartResult {
    fn info(text: impl Into<String>) -> Self {
        ChartResult::Message { text: text.into(), is_error: false }
    }

    fn error(text: impl Into<String>) -> Self {
        ChartResult::Message { text: text.into(), is_error: true }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ChartResult::Message { is_error: true, .. })
    }

    /// Caption for images, message text otherwise.
    pub fn text(&self) -> &str {
        match self {
            ChartResult::Image { caption, .. } => caption,
            ChartResult::Message { text, .. } => text,
        }
    }
}

/// Bridges tool calls to one rendering service.
///
/// Holds no per-call state; a single instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct Marshaler {
    client: RenderClient,
}

impl Marshaler {
    pub fn new(config: &PlotBridgeConfig) -> Result<Self, ClientError> {
        Ok(Self { client: RenderClient::new(&config.service, &config.timeouts)? })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Like [`generate_chart`](Self::generate_chart), starting from untyped
    /// tool arguments. Arguments of the wrong shape become a failure message.
    pub async fn generate_chart_from_arguments(&self, arguments: Value) -> ChartResult {
        match ChartInput::from_arguments(arguments) {
            Ok(input) => self.generate_chart(input).await,
            Err(e) => reject(&e),
        }
    }

    /// Validate the arguments, request a chart, and wrap the outcome.
    pub async fn generate_chart(&self, input: ChartInput) -> ChartResult {
        let request = match ChartRequest::from_input(input) {
            Ok(request) => request,
            Err(e) => return reject(&e),
        };

        let start = Instant::now();
        tracing::info!(
            tool = "generate_chart",
            chart_type = %request.chart_type,
            base_url = %self.base_url(),
            "start"
        );

        match self.client.plot(&request).await {
            Ok(data) => {
                tracing::info!(
                    tool = "generate_chart",
                    elapsed_ms = start.elapsed().as_millis(),
                    bytes = data.len(),
                    "ok"
                );
                ChartResult::Image {
                    data,
                    mime_type: PNG_MIME_TYPE,
                    caption: format!("Chart generated successfully: {}", request.title),
                }
            }
            Err(e) => {
                tracing::error!(
                    tool = "generate_chart",
                    elapsed_ms = start.elapsed().as_millis(),
                    err = %e,
                    "failed"
                );
                ChartResult::error(self.describe_plot_failure(&e))
            }
        }
    }

    /// Probe the rendering service and report whether it is reachable.
    pub async fn check_status(&self) -> ChartResult {
        let base_url = self.base_url();
        let start = Instant::now();
        tracing::info!(tool = "check_fastapi_status", %base_url, "start");

        let result = match self.client.status().await {
            Ok(status) if status.is_success() => {
                if status.body_excerpt.is_empty() {
                    ChartResult::info(format!(
                        "Chart service at {} is running and accessible",
                        base_url
                    ))
                } else {
                    ChartResult::info(format!(
                        "Chart service at {} is running and accessible: {}",
                        base_url, status.body_excerpt
                    ))
                }
            }
            Ok(status) => ChartResult::error(format!(
                "Chart service at {} responded with status: {}",
                base_url, status.status_code
            )),
            Err(ClientError::Timeout { secs, .. }) => ChartResult::error(format!(
                "Chart service at {} did not respond within {}s",
                base_url, secs
            )),
            Err(ClientError::Connect { .. }) => ChartResult::error(format!(
                "Chart service is not accessible. Make sure it's accessible at {}",
                base_url
            )),
            Err(e) => ChartResult::error(format!(
                "Error checking chart service status at {}: {}",
                base_url, e
            )),
        };

        tracing::info!(
            tool = "check_fastapi_status",
            elapsed_ms = start.elapsed().as_millis(),
            reachable = !result.is_error(),
            "done"
        );
        result
    }

    fn describe_plot_failure(&self, err: &ClientError) -> String {
        match err {
            ClientError::Connect { .. } => format!(
                "Error: Could not connect to chart service. Make sure it's accessible at {}",
                self.base_url()
            ),
            ClientError::Timeout { secs, .. } => format!(
                "Error: Chart service at {} did not respond within {}s",
                self.base_url(),
                secs
            ),
            ClientError::Remote { status, body } if body.trim().is_empty() => {
                format!("Error generating chart: {}", status)
            }
            ClientError::Remote { status, body } => {
                format!("Error generating chart: {} - {}", status, body)
            }
            other => format!("Error generating chart: {}", other),
        }
    }
}

fn reject(err: &ChartValidationError) -> ChartResult {
    tracing::warn!(tool = "generate_chart", err = %err, "rejected");
    ChartResult::error(format!("Invalid chart request: {}", err))
}
