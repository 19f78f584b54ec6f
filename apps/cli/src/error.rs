//! # CLI Error Type
//!
//! ## Error Flow
//! ```text
//! FormatError / PreconditionViolation ──► CoreError ──┐
//!                                                      ├──► CliError ──► stderr
//! std::io::Error ──────────────────────► ExportError ─┘
//! ```

use pricetag_core::CoreError;
use pricetag_export::ExportError;
use thiserror::Error;

/// Result type alias for the binary.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file is not valid TOML.
    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config file could not be read.
    #[error("Failed to load config: {0}")]
    Io(#[from] std::io::Error),

    /// Bad command line.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricetag_core::FormatError;

    #[test]
    fn test_core_errors_pass_through() {
        let err: CliError = CoreError::from(FormatError::Empty).into();
        assert_eq!(err.to_string(), "Invalid money format: amount is required");
    }

    #[test]
    fn test_argument_message() {
        let err = CliError::InvalidArgument("--discount needs a value".to_string());
        assert_eq!(err.to_string(), "Invalid argument: --discount needs a value");
    }
}
