//! CLI configuration handling.

use std::path::{Path, PathBuf};

use megreat_config::ConfigError;

use crate::error::CliResult;

/// Default config file name (lives in the working directory)
pub const CONFIG_FILE_NAME: &str = "megreat.json";

/// Environment variable that overrides the config file path
pub const CONFIG_ENV_VAR: &str = "MEGREAT_CONFIG";

/// Log file written inside `log_output_directory`
pub const LOG_FILE_NAME: &str = "megreat.log";

/// Resolve the config file path against the working directory
pub fn resolve_config_path(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.join(CONFIG_FILE_NAME),
    }
}

/// Read a migration configuration file
pub async fn read(path: &Path) -> CliResult<String> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::io(path, source))?;
    Ok(content)
}
