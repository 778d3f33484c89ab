//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout carries only the JSON
//! result so callers can parse it.

use crate::error::{KdeConfigError, Result};
use tracing_subscriber::EnvFilter;

/// Default filter directive for a given `-v` count
///
/// ```
/// use kdeconfig::logging::default_directive;
///
/// assert_eq!(default_directive(0), "warn");
/// assert_eq!(default_directive(1), "kdeconfig=debug");
/// assert_eq!(default_directive(2), "trace");
/// ```
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "kdeconfig=debug",
        _ => "trace",
    }
}

/// Install the global stderr subscriber
///
/// `RUST_LOG` wins over the verbosity flag when set.
pub fn init(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| KdeConfigError::Config(format!("Failed to initialize logging: {}", e)))
}
