//! Logging setup for the megreat CLI.
//!
//! Structured logging is controlled by environment variables, the `-v` flag
//! and the `log_output_directory` of the loaded migration configuration.
//!
//! # Environment Variables
//!
//! - `MEGREAT_DEBUG=true` - Enable debug logging
//! - `MEGREAT_DEBUG=1` - Enable debug logging
//! - `MEGREAT_LOG_LEVEL=debug|info|warn|error|trace` - Set specific log level
//! - `MEGREAT_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! When `log_output_directory` is configured, events are appended to
//! `megreat.log` in that directory at `info` level unless something more
//! verbose was requested. Without it, logs go to stderr and are only enabled
//! when one of the variables or `-v` asks for them.

use std::env;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::LOG_FILE_NAME;
use crate::error::{CliError, CliResult};

const DEBUG_VAR: &str = "MEGREAT_DEBUG";
const LEVEL_VAR: &str = "MEGREAT_LOG_LEVEL";
const FORMAT_VAR: &str = "MEGREAT_LOG_FORMAT";

/// Check if debug logging is enabled via `MEGREAT_DEBUG`.
///
/// Returns `true` if it is set to "true", "1", or "yes" (case-insensitive).
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var(DEBUG_VAR)
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Pick the log level, or `None` when nothing asked for logging.
///
/// Precedence: a valid `MEGREAT_LOG_LEVEL`, then `-v` flags, then
/// `MEGREAT_DEBUG`, then `info` if a log directory is configured.
pub fn resolve_level(
    verbose: u8,
    level_var: Option<&str>,
    debug: bool,
    has_log_dir: bool,
) -> Option<&'static str> {
    let explicit = level_var.and_then(|level| match level.to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    });

    explicit
        .or(match verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        })
        .or(debug.then_some("debug"))
        .or(has_log_dir.then_some("info"))
}

/// Pick the output format from a `MEGREAT_LOG_FORMAT` value.
///
/// Defaults to "json" for structured logging.
pub fn resolve_format(format_var: Option<&str>) -> &'static str {
    match format_var.map(str::to_lowercase).as_deref() {
        Some("pretty") => "pretty",
        Some("compact") => "compact",
        _ => "json",
    }
}

/// Create the log directory if needed and open the log file for appending.
pub fn open_log_file(directory: &Path) -> CliResult<(PathBuf, File)> {
    std::fs::create_dir_all(directory)?;
    let path = directory.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` when logging was not requested.
pub fn init(verbose: u8, log_output_directory: Option<&str>) -> CliResult<bool> {
    let level_var = env::var(LEVEL_VAR).ok();
    let Some(level) = resolve_level(
        verbose,
        level_var.as_deref(),
        is_debug_enabled(),
        log_output_directory.is_some(),
    ) else {
        return Ok(false);
    };
    let format = resolve_format(env::var(FORMAT_VAR).ok().as_deref());

    let (writer, log_file) = match log_output_directory {
        Some(dir) => {
            let (path, file) = open_log_file(Path::new(dir))?;
            (BoxMakeWriter::new(Mutex::new(file)), Some(path))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };
    let ansi = log_file.is_none();

    let filter = EnvFilter::try_new(format!(
        "megreat={},megreat_cli={},megreat_config={}",
        level, level, level
    ))
    .unwrap_or_else(|_| EnvFilter::new("warn"));

    let result = match format {
        "json" => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(writer))
            .try_init(),
        "compact" => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_ansi(ansi).with_writer(writer))
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty().with_ansi(ansi).with_writer(writer))
            .try_init(),
    };
    result.map_err(|e| CliError::Logging(e.to_string()))?;

    tracing::info!(
        level = level,
        format = format,
        log_file = ?log_file,
        "megreat logging initialized"
    );

    Ok(true)
}
