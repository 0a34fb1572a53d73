//! PlotBridge - Command-line tool and MCP server for an HTTP chart-rendering service

use std::process::ExitCode;

use plotbridge::cli;

fn main() -> ExitCode {
    cli::run()
}
