//! Configuration schema types for `plotbridge.toml`
//!
//! Defines the structure, defaults, and validation rules for the bridge
//! configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default address of the chart-rendering service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
    /// Compact single-line format
    Compact,
}

/// Where the rendering service lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL; `/plot` and `/` are resolved against it
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { base_url: default_base_url() }
    }
}

/// Per-request timeouts, in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeoutsConfig {
    #[serde(default = "default_plot_secs")]
    pub plot_secs: u64,
    #[serde(default = "default_status_secs")]
    pub status_secs: u64,
}

fn default_plot_secs() -> u64 {
    30
}

fn default_status_secs() -> u64 {
    5
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self { plot_secs: default_plot_secs(), status_secs: default_status_secs() }
    }
}

impl TimeoutsConfig {
    pub fn plot(&self) -> Duration {
        Duration::from_secs(self.plot_secs)
    }

    pub fn status(&self) -> Duration {
        Duration::from_secs(self.status_secs)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level(), format: LogFormat::default() }
    }
}

/// Root of `plotbridge.toml`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotBridgeConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub timeouts: TimeoutsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// A single configuration problem
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "timeouts.plot_secs")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "plotbridge.toml: '{}' {}", self.field, self.message)
    }
}

impl PlotBridgeConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        match reqwest::Url::parse(&self.service.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(ConfigValidationError {
                field: "service.base_url".to_string(),
                message: format!("must use http or https (got '{}')", url.scheme()),
            }),
            Err(e) => errors.push(ConfigValidationError {
                field: "service.base_url".to_string(),
                message: format!("is not a valid URL: {}", e),
            }),
        }

        if self.timeouts.plot_secs == 0 {
            errors.push(ConfigValidationError {
                field: "timeouts.plot_secs".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if self.timeouts.status_secs == 0 {
            errors.push(ConfigValidationError {
                field: "timeouts.status_secs".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
