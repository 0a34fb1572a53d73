//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

#[cfg(feature = "mcp")]
mod mcp;
mod plot;
mod status;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{resolve_config, CliOverrides, LogFormat, PlotBridgeConfig};
use crate::logging::init_tracing;
use crate::marshal::Marshaler;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// PlotBridge - relay chart requests to an HTTP chart-rendering service
#[derive(Parser)]
#[command(name = "plotbridge")]
#[command(about = "PlotBridge - expose an HTTP chart-rendering service as MCP tools")]
#[command(version)]
pub struct Cli {
    /// Path to plotbridge.toml (default: discovered from the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the chart-rendering service (e.g. http://localhost:8000)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Timeout for chart rendering requests, in seconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format (logs always go to stderr)
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the MCP (Model Context Protocol) server on stdin/stdout
    #[cfg(feature = "mcp")]
    Mcp,

    /// Check whether the chart-rendering service is reachable
    Status,

    /// Render a chart from a JSON request file and save it as PNG
    Plot {
        /// JSON file with chart_type, title, subtitle, x_label, y_label and data
        input: PathBuf,

        /// Output PNG file (default: derived from the chart title)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
        }
    }
}

/// Build the async runtime used by every command.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, ExitCode> {
    tokio::runtime::Runtime::new().map_err(|e| {
        eprintln!("Error: Failed to create async runtime: {}", e);
        ExitCode::from(EXIT_ERROR)
    })
}

/// Build the marshaler for the resolved configuration.
pub(crate) fn build_marshaler(config: &PlotBridgeConfig) -> Result<Marshaler, ExitCode> {
    Marshaler::new(config).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_ERROR)
    })
}

fn load(cli: &Cli) -> Result<PlotBridgeConfig, ExitCode> {
    let mut config = resolve_config(cli.config.as_deref(), &cli.overrides()).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_INVALID_ARGS)
    })?;

    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    Ok(config)
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match load(&cli) {
        Ok(config) => config,
        Err(code) => return code,
    };
    init_tracing(&config.logging, cli.verbose);

    match cli.command {
        #[cfg(feature = "mcp")]
        Commands::Mcp => mcp::run_mcp(&config),
        Commands::Status => status::run_status(&config),
        Commands::Plot { input, output } => plot::run_plot(&config, &input, output.as_deref()),
    }
}
