//! PlotBridge - Library for relaying chart requests to an HTTP rendering service
//!
//! This library provides functionality to:
//! - Validate chart requests (line, bar, scatter, pie) before they leave the process
//! - Send them to a chart-rendering service and relay the PNG it returns
//! - Expose both operations as MCP tools (`generate_chart`, `check_fastapi_status`)

pub mod chart;
pub mod cli;
pub mod client;
pub mod config;
pub mod logging;
pub mod marshal;
#[cfg(feature = "mcp")]
pub mod mcp;

pub use chart::{ChartData, ChartInput, ChartRequest, ChartType, ChartValidationError};
pub use marshal::{ChartResult, Marshaler};
