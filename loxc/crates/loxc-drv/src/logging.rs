//! Logging setup.
//!
//! Logs go to stderr so that token output on stdout stays machine-readable.
//! Scanner diagnostics arrive here through `TracingReporter`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{DriverError, Result};

/// Builds the log filter: `debug` when verbose, otherwise `RUST_LOG` or `info`.
pub fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Installs the global tracing subscriber.
///
/// Fails with [`DriverError::Logging`] if a subscriber is already set.
pub fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))?;

    Ok(())
}
