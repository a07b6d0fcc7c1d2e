//! Tracing subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global `tracing` subscriber described by `config`.
///
/// Emits human-readable lines for `LOG_FORMAT=text` and JSON lines for
/// `LOG_FORMAT=json`, filtered by `RUST_LOG`.
///
/// Returns `Ok(false)` when a global subscriber was already installed, in
/// which case the existing one is kept.
///
/// # Errors
///
/// Returns an error if the log level is not a valid filter directive.
pub fn init_tracing(config: &Config) -> Result<bool> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.is_json_logging() {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    Ok(installed)
}
