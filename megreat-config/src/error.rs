//! Error types for configuration parsing and validation.

// These warnings are false positives - the fields are used by derive macros
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a migration configuration.
///
/// Every validation variant renders a fixed message, so callers can show
/// `to_string()` to users as-is.
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    /// Error reading the configuration file.
    #[error("failed to read configuration file: {path}")]
    #[diagnostic(code(megreat::config::io_error))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The input is not a JSON object.
    #[error("Invalid configuration file.")]
    #[diagnostic(code(megreat::config::invalid_document))]
    InvalidDocument {
        #[source_code]
        src: String,
        #[label("here")]
        span: Option<miette::SourceSpan>,
        #[help]
        reason: String,
    },

    /// `sql_files_directories` is missing.
    #[error("sql_files_directories configuration was not found.")]
    #[diagnostic(code(megreat::config::sql_files_directories_missing))]
    SqlFilesDirectoriesMissing,

    /// `sql_files_directories` is an empty array.
    #[error("sql_files_directories configuration was empty.")]
    #[diagnostic(code(megreat::config::sql_files_directories_empty))]
    SqlFilesDirectoriesEmpty,

    /// `sql_files_directories` is not an array of non-blank strings.
    #[error("sql_files_directories has invalid value.")]
    #[diagnostic(code(megreat::config::sql_files_directories_invalid))]
    SqlFilesDirectoriesInvalid,

    /// `db_connection` is missing or is not an object.
    #[error("db_connection configuration was not found.")]
    #[diagnostic(code(megreat::config::db_connection_missing))]
    DbConnectionMissing,

    /// `db_connection.connection_string` is missing or blank.
    #[error("db_connection.connection_string configuration was not found or has invalid value.")]
    #[diagnostic(code(megreat::config::connection_string_invalid))]
    ConnectionStringInvalid,

    /// `db_connection.type` is missing or not a known database type.
    #[error("db_connection.type configuration was not found or has invalid value.")]
    #[diagnostic(
        code(megreat::config::db_type_invalid),
        help("supported types: mysql")
    )]
    DbTypeInvalid,

    /// `log_output_directory` is present but not a string.
    #[error("log_output_directory has invalid value.")]
    #[diagnostic(code(megreat::config::log_output_directory_invalid))]
    LogOutputDirectoryInvalid,
}

impl ConfigError {
    /// Create an error for a configuration file that could not be read.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create an invalid document error from a JSON decoding failure.
    pub fn syntax(src: impl Into<String>, err: &serde_json::Error) -> Self {
        let src = src.into();
        let span = offset_of(&src, err.line(), err.column()).map(|offset| (offset, 0).into());
        Self::InvalidDocument {
            src,
            span,
            reason: err.to_string(),
        }
    }

    /// Create an invalid document error for a well-formed document of the wrong shape.
    pub fn not_an_object(src: impl Into<String>) -> Self {
        Self::InvalidDocument {
            src: src.into(),
            span: None,
            reason: "the configuration must be a JSON object".to_string(),
        }
    }

    /// Check if this error was produced by validating the document contents
    /// rather than by reading the file.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

/// Convert serde_json's 1-based line/column into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let mut offset = 0;
    for (idx, text) in src.split('\n').enumerate() {
        if idx + 1 == line {
            let col = column.saturating_sub(1).min(text.len());
            return Some(offset + col);
        }
        offset += text.len() + 1;
    }

    Some(src.len())
}
