//! Log subscriber setup

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use tracing_subscriber::EnvFilter;

/// Builds the log filter: `RUST_LOG` when set, otherwise the verbosity default
pub fn build_filter(config: &CliConfig) -> CliResult<EnvFilter> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(&directives)
            .map_err(|e| CliError::config(format!("invalid RUST_LOG {directives:?}: {e}"))),
        _ => EnvFilter::try_new(config.verbosity.log_filter())
            .map_err(|e| CliError::config(e.to_string())),
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout carries
/// only calculator output.
pub fn init(config: &CliConfig) -> CliResult<()> {
    let filter = build_filter(config)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.color.should_color_stderr())
        .with_target(config.verbosity.is_verbose())
        .try_init()
        .map_err(|e| CliError::config(format!("logging already initialised: {e}")))
}
