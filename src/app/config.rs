//! Application configuration
//!
//! This module handles the settings that control diagnostic output.

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Include the event target (`dsf`) in each log line
    pub show_target: bool,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    /// Show or hide the event target in log lines
    pub fn with_target(mut self, show: bool) -> Self {
        self.show_target = show;
        self
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

impl Default for AppConfig {
    /// Diagnostics are emitted at debug level unless configured otherwise.
    fn default() -> Self {
        Self {
            verbose: 1,
            show_target: true,
        }
    }
}
