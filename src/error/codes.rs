/// Error code registry for dsf
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Arithmetic errors
/// - 3000-3999: Value format errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_LOGGING_ALREADY_INITIALIZED: u16 = 1001;
    pub const CONFIG_INVALID_FILTER: u16 = 1002;

    // Arithmetic errors (2000-2999)
    pub const ARITHMETIC_DIVISION_BY_ZERO: u16 = 2001;

    // Value format errors (3000-3999)
    pub const VALUE_FORMAT_DISPLAY_NAME: u16 = 3001;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1001 => "Logging was already initialized",
        1002 => "Invalid log filter directive",

        2001 => "Division by zero",

        3001 => "Display name must be two space-separated words",

        _ => "Unknown error code",
    }
}
