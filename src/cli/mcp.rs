//! MCP server command

use std::process::ExitCode;

use super::{runtime, EXIT_ERROR, EXIT_SUCCESS};
use crate::config::PlotBridgeConfig;

/// Execute the MCP server command
pub fn run_mcp(config: &PlotBridgeConfig) -> ExitCode {
    let rt = match runtime() {
        Ok(rt) => rt,
        Err(code) => return code,
    };

    match rt.block_on(crate::mcp::run_server(config)) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: MCP server failed: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
