//! Configuration loading and discovery for `plotbridge.toml`
//!
//! Provides functions to find, load, and merge configuration from the
//! config file, the environment, and command-line flags.

use super::schema::PlotBridgeConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "plotbridge.toml";

/// Overrides the base URL of the rendering service.
pub const ENV_BASE_URL: &str = "PLOTBRIDGE_BASE_URL";
/// Overrides the `/plot` timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "PLOTBRIDGE_TIMEOUT_SECS";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse plotbridge.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Environment variable holds an unusable value
    #[error("Invalid value for {name}: '{value}'")]
    Env { name: &'static str, value: String },
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override the rendering service base URL
    pub base_url: Option<String>,
    /// Override the `/plot` timeout
    pub timeout_secs: Option<u64>,
}

/// Find plotbridge.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for plotbridge.toml
/// 2. Check XDG_CONFIG_HOME/plotbridge/plotbridge.toml (or ~/.config/plotbridge/plotbridge.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find plotbridge.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("plotbridge").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find plotbridge.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a plotbridge.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, the defaults are
/// returned. The file contents are not validated here; call [`resolve_config`]
/// to get a validated configuration with overrides applied.
pub fn load_config(path: Option<&Path>) -> Result<PlotBridgeConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(PlotBridgeConfig::default()),
    }
}

fn load_config_file(path: &Path) -> Result<PlotBridgeConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Apply `PLOTBRIDGE_*` environment variables on top of the file values.
pub fn merge_env_overrides(config: &mut PlotBridgeConfig) -> Result<(), ConfigError> {
    if let Ok(base_url) = env::var(ENV_BASE_URL) {
        if !base_url.trim().is_empty() {
            config.service.base_url = base_url.trim().to_string();
        }
    }

    if let Ok(raw) = env::var(ENV_TIMEOUT_SECS) {
        let secs = raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::Env { name: ENV_TIMEOUT_SECS, value: raw.clone() })?;
        config.timeouts.plot_secs = secs;
    }

    Ok(())
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file and environment values.
pub fn merge_cli_overrides(config: &mut PlotBridgeConfig, overrides: &CliOverrides) {
    if let Some(ref base_url) = overrides.base_url {
        config.service.base_url = base_url.clone();
    }

    if let Some(secs) = overrides.timeout_secs {
        config.timeouts.plot_secs = secs;
    }
}

/// Load, merge, and validate the effective configuration.
///
/// Precedence: defaults < file < environment < CLI flags.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<PlotBridgeConfig, ConfigError> {
    let mut config = load_config(path)?;
    merge_env_overrides(&mut config)?;
    merge_cli_overrides(&mut config, overrides);

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}
