//! Logging configuration and initialization
//!
//! Installs the process-wide `tracing` subscriber that [`TracingSink`] writes
//! through. Log lines go to stderr, leaving stdout to the program itself.
//! Call [`init_logging`] once, before any traced operation runs.
//!
//! [`TracingSink`]: crate::diagnostics::TracingSink

use crate::app::config::AppConfig;
use crate::error::{DsfError, ErrorCode, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the application
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_new(config.log_level()).map_err(|e| {
        DsfError::config_with_code(ErrorCode::CONFIG_INVALID_FILTER, "invalid log filter")
            .with_source(e)
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.show_target)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| {
            DsfError::config_with_code(
                ErrorCode::CONFIG_LOGGING_ALREADY_INITIALIZED,
                "logging was already initialized",
            )
            .with_source(e)
        })?;

    debug!("dsf logging initialized at level: {}", config.log_level());
    Ok(())
}
