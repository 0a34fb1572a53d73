//! MCP tool definitions for PlotBridge
//!
//! Each tool is a thin wrapper over a [`Marshaler`](crate::marshal::Marshaler)
//! operation; this module turns its [`ChartResult`] into MCP content.

pub mod generate_chart;
pub mod status;

use base64::Engine;
use rmcp::model::{CallToolResult, Content};

use crate::marshal::ChartResult;

/// Convert a marshaler result into the tool-call response.
///
/// Images are returned as a caption followed by the base64 image content.
/// Failure messages set `is_error` so the caller can tell them apart from
/// status reports.
pub fn to_call_tool_result(result: ChartResult) -> CallToolResult {
    match result {
        ChartResult::Image { data, mime_type, caption } => {
            let encoded = base64::engine::general_purpose::STANDARD.encode(&data);
            CallToolResult::success(vec![
                Content::text(caption),
                Content::image(encoded, mime_type),
            ])
        }
        ChartResult::Message { text, is_error: false } => {
            CallToolResult::success(vec![Content::text(text)])
        }
        ChartResult::Message { text, is_error: true } => {
            CallToolResult::error(vec![Content::text(text)])
        }
    }
}
