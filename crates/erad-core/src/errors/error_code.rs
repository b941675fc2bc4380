//! EradErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable code string that
/// downstream tools can match on without parsing messages.
pub trait EradErrorCode {
    /// Returns the error code string (e.g., "CONFIGURATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNIT_ERROR: &str = "UNIT_ERROR";
pub const CONFIGURATION_ERROR: &str = "CONFIGURATION_ERROR";
pub const UNSUPPORTED_OPERATION: &str = "UNSUPPORTED_OPERATION";
pub const MISSING_COVARIATE: &str = "MISSING_COVARIATE";
pub const RANGE_ERROR: &str = "RANGE_ERROR";
pub const UNKNOWN_CONFIGURATION: &str = "UNKNOWN_CONFIGURATION";
pub const DEGENERATE_PARAMETER: &str = "DEGENERATE_PARAMETER";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const ASSET_UPDATE_FAILED: &str = "ASSET_UPDATE_FAILED";
