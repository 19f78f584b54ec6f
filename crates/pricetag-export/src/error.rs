//! # Export Error Types

use thiserror::Error;

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Everything that can go wrong while writing a cart out.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Underlying writer or file failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Format name not recognised.
    #[error("Unknown export format: '{0}'. Valid options: xml, json")]
    UnknownFormat(String),
}
