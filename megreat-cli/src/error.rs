//! CLI error types and result alias.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(megreat::cli::io))]
    Io(#[from] std::io::Error),

    /// Migration configuration could not be loaded
    #[error(transparent)]
    #[diagnostic(transparent)]
    Configuration(#[from] megreat_config::ConfigError),

    /// Logging setup error
    #[error("Logging error: {0}")]
    #[diagnostic(code(megreat::cli::logging))]
    Logging(String),

    /// Output format error
    #[error("Format error: {0}")]
    #[diagnostic(code(megreat::cli::format))]
    Format(String),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Format(format!("Failed to serialize JSON: {}", err))
    }
}
