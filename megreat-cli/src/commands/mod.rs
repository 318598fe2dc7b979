//! CLI command implementations.

pub mod show;
pub mod validate;
pub mod version;

use std::path::PathBuf;

use megreat_config::MigrationConfiguration;

use crate::error::CliResult;
use crate::{config, logging};

/// Settings shared by commands that read the migration configuration
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved path of the configuration file
    pub config_path: PathBuf,
    /// Number of `-v` flags
    pub verbose: u8,
}

impl Context {
    /// Load the configuration, then set up logging from it
    pub async fn load(&self) -> CliResult<MigrationConfiguration> {
        let content = config::read(&self.config_path).await?;
        self.configure(&content)
    }

    /// Validate already-read configuration text, then set up logging from it
    pub fn configure(&self, content: &str) -> CliResult<MigrationConfiguration> {
        let configuration = megreat_config::parse_configuration(content)?;
        logging::init(self.verbose, configuration.configured_log_directory())?;

        tracing::info!(
            path = %self.config_path.display(),
            directories = configuration.sql_files_directories().len(),
            sql_type = %configuration.db_connection().sql_type(),
            "Loaded migration configuration"
        );

        Ok(configuration)
    }
}
