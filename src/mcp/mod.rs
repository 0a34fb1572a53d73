//! MCP (Model Context Protocol) server implementation for PlotBridge
//!
//! Exposes the chart-rendering service as MCP tools so AI models can
//! request charts and check the service directly.
//!
//! Start the server with `plotbridge mcp` (feature-gated).

mod server;
pub mod tools;

pub use server::{run_server, PlotBridgeMcpServer};
