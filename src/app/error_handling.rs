//! Error handling utilities
//!
//! This module provides centralized error handling for the demo binary.

use crate::error::DsfError;
use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// - For `DsfError`: shows the user message, plus the error chain in verbose mode
/// - For other errors: shows the error message and exits with status 1
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    let exit_code = if let Some(dsf_err) = error.downcast_ref::<DsfError>() {
        eprintln!("{}", dsf_err.user_message());
        dsf_err.exit_code()
    } else {
        eprintln!("Error: {error}");
        1
    };

    if verbose >= 2 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code)
}
