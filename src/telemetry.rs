//! # Telemetry
//!
//! `tracing` subscriber setup for the report binary.
//!
//! Logs go to stderr so stdout carries only the report. `RUST_LOG` takes
//! precedence over the configured level.

use crate::config::{LogConfig, LogFormat};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Builds the event filter, preferring `RUST_LOG` when it is set.
#[must_use]
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(&config.level));

    match config.format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init(),
    }
}
