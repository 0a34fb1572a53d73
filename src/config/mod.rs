//! Configuration module for plotbridge
//!
//! Provides types, discovery, and parsing for `plotbridge.toml`, plus the
//! environment and command-line overrides layered on top of it.

pub mod loader;
pub mod schema;

pub use loader::{resolve_config, CliOverrides, ConfigError};
pub use schema::*;
