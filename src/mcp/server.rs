//! Core MCP server implementation.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt};

use super::tools::generate_chart::{run_generate_chart, GenerateChartInput};
use super::tools::status::run_check_status;
use crate::client::ClientError;
use crate::config::PlotBridgeConfig;
use crate::marshal::Marshaler;

/// The PlotBridge MCP Server
///
/// Exposes the chart-rendering service as two MCP tools: `generate_chart`
/// and `check_fastapi_status`.
#[derive(Debug, Clone)]
pub struct PlotBridgeMcpServer {
    tool_router: ToolRouter<Self>,
    marshaler: Marshaler,
}

#[tool_router]
impl PlotBridgeMcpServer {
    pub fn new(config: &PlotBridgeConfig) -> Result<Self, ClientError> {
        Ok(Self { tool_router: Self::tool_router(), marshaler: Marshaler::new(config)? })
    }

    #[tool(
        name = "generate_chart",
        description = "Generate a chart (line, bar, scatter, or pie) using the chart rendering service. Returns a PNG image."
    )]
    async fn generate_chart(
        &self,
        Parameters(input): Parameters<GenerateChartInput>,
    ) -> Result<CallToolResult, McpError> {
        Ok(run_generate_chart(&self.marshaler, input).await)
    }

    #[tool(
        name = "check_fastapi_status",
        description = "Check if the chart rendering service is running and accessible"
    )]
    async fn check_fastapi_status(&self) -> Result<CallToolResult, McpError> {
        Ok(run_check_status(&self.marshaler).await)
    }
}

#[tool_handler]
impl ServerHandler for PlotBridgeMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "plotbridge".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "PlotBridge MCP server. Renders charts through an HTTP chart service. \
                 Use generate_chart with a chart_type, titles, axis labels and \
                 data.labels/data.values to get a PNG, and check_fastapi_status to \
                 verify the service is reachable."
                    .into(),
            ),
        }
    }
}

/// Run the MCP server on stdin/stdout
pub async fn run_server(config: &PlotBridgeConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(base_url = %config.service.base_url, "starting MCP server on stdio");
    let server = PlotBridgeMcpServer::new(config)?;
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;
    tracing::info!("MCP client disconnected");
    Ok(())
}
