//! Status command

use std::process::ExitCode;

use super::{build_marshaler, runtime, EXIT_ERROR, EXIT_SUCCESS};
use crate::config::PlotBridgeConfig;

/// Probe the rendering service once and print the outcome.
pub fn run_status(config: &PlotBridgeConfig) -> ExitCode {
    let rt = match runtime() {
        Ok(rt) => rt,
        Err(code) => return code,
    };

    let marshaler = match build_marshaler(config) {
        Ok(m) => m,
        Err(code) => return code,
    };
    let result = rt.block_on(marshaler.check_status());

    if result.is_error() {
        eprintln!("{}", result.text());
        ExitCode::from(EXIT_ERROR)
    } else {
        println!("{}", result.text());
        ExitCode::from(EXIT_SUCCESS)
    }
}
