//! Error types for the CLI

use crate::literal::LiteralError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O error
    #[error("File error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed input literal
    #[error("Parse error: {0}")]
    ParseError(#[from] LiteralError),

    /// JSON output error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
