//! Diagnostic logging for the CLI

use cfieldgen_core::LogLevel;
use tracing_subscriber::EnvFilter;

/// Build the filter for `level`, letting `RUST_LOG` override it
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
}

/// Initialize the logging system
///
/// Diagnostics go to stderr so generated code on stdout stays clean.
pub fn init_logging(level: LogLevel) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    // Try to set as global default (ignore error if already set)
    let _ = tracing::subscriber::set_global_default(subscriber);
}
