use std::fmt::Display;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// The error type shared by every dsf component
#[derive(Error, Debug)]
pub enum DsfError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Arithmetic error: {message}")]
    Arithmetic { code: u16, message: String },

    #[error("[E{code:04}] Invalid value {value:?}: {message}")]
    ValueFormat {
        code: u16,
        message: String,
        value: String,
    },
}

impl DsfError {
    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create the error raised when a divisor is zero
    pub fn division_by_zero(operation: impl Display) -> Self {
        Self::Arithmetic {
            code: ErrorCode::ARITHMETIC_DIVISION_BY_ZERO,
            message: format!("division by zero in {}", operation),
        }
    }

    /// Create a value format error naming the rejected input
    pub fn value_format_with_code(
        code: u16,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ValueFormat {
            code,
            message: message.into(),
            value: value.into(),
        }
    }

    /// Add a source error to this error.
    ///
    /// Only configuration errors carry a source; other variants are returned as-is.
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        if let Self::Config { source: src, .. } = &mut self {
            *src = Some(source.into());
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Arithmetic { .. } => 3,
            Self::ValueFormat { .. } => 4,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Arithmetic { code, .. }
            | Self::ValueFormat { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            Self::Arithmetic { message, .. } => format!("Calculation failed: {}", message),
            Self::ValueFormat { message, value, .. } => {
                format!("Huh?!?! {} ({})", value, message)
            }
        }
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, DsfError>;
