//! Tracing setup
//!
//! All output goes to stderr: in MCP mode stdout carries the protocol stream
//! and must stay clean.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{LogFormat, LoggingConfig};

static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync + 'static>;

fn make_layer(format: LogFormat, filter: EnvFilter) -> BoxedLayer {
    match format {
        LogFormat::Pretty => fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(filter)
            .boxed(),
        LogFormat::Json => {
            fmt::layer().json().with_writer(std::io::stderr).with_filter(filter).boxed()
        }
        LogFormat::Compact => {
            fmt::layer().compact().with_writer(std::io::stderr).with_filter(filter).boxed()
        }
    }
}

/// Build the filter: `RUST_LOG` wins, then `verbose`, then the configured level.
fn make_filter(config: &LoggingConfig, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { config.level.as_str() };
        EnvFilter::try_new(format!("plotbridge={},warn", level))
            .unwrap_or_else(|_| EnvFilter::new("plotbridge=info,warn"))
    })
}

/// Initialize tracing once; later calls are ignored.
pub fn init_tracing(config: &LoggingConfig, verbose: bool) {
    if TRACING_INITIALIZED.get().is_some() {
        return;
    }

    let layer = make_layer(config.format, make_filter(config, verbose));
    if let Err(e) = tracing_subscriber::registry().with(layer).try_init() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let _ = TRACING_INITIALIZED.set(());
}
