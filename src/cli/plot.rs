//! Plot command implementation

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::{build_marshaler, runtime, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::chart::ChartInput;
use crate::config::PlotBridgeConfig;
use crate::marshal::ChartResult;

/// Execute the plot command
pub fn run_plot(config: &PlotBridgeConfig, input: &Path, output: Option<&Path>) -> ExitCode {
    let contents = match fs::read_to_string(input) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: Cannot read '{}': {}", input.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let request: ChartInput = match serde_json::from_str(&contents) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: Invalid chart request in '{}': {}", input.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let output_path =
        output.map(Path::to_path_buf).unwrap_or_else(|| default_output(&request.title));

    let rt = match runtime() {
        Ok(rt) => rt,
        Err(code) => return code,
    };
    let marshaler = match build_marshaler(config) {
        Ok(m) => m,
        Err(code) => return code,
    };

    match rt.block_on(marshaler.generate_chart(request)) {
        ChartResult::Image { data, caption, .. } => {
            if let Err(e) = fs::write(&output_path, &data) {
                eprintln!("Error: Failed to write '{}': {}", output_path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
            println!("{}", caption);
            println!("Saved: {}", output_path.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        ChartResult::Message { text, .. } => {
            eprintln!("{}", text);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// File name derived from the chart title, e.g. "Arrivals 2024" -> "arrivals_2024.png".
fn default_output(title: &str) -> PathBuf {
    let mut slug = String::new();
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_end_matches('_');

    if slug.is_empty() {
        PathBuf::from("chart.png")
    } else {
        PathBuf::from(format!("{}.png", slug))
    }
}
