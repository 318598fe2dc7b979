//! `megreat validate` command - Validate the migration configuration file.

use crate::commands::Context;
use crate::config;
use crate::error::CliResult;
use crate::output::{self, success};

/// Run the validate command
pub async fn run(ctx: Context) -> CliResult<()> {
    output::header("Validate Configuration");

    output::kv("Config", &ctx.config_path.display().to_string());
    output::newline();

    output::step(1, 2, "Reading configuration...");
    let content = config::read(&ctx.config_path).await?;

    output::step(2, 2, "Running validation checks...");
    let configuration = ctx.configure(&content)?;

    output::newline();
    success("Configuration is valid!");
    output::newline();

    output::section("SQL Directories");
    for (i, directory) in configuration.sql_files_directories().iter().enumerate() {
        output::numbered_item(i + 1, directory);
    }
    output::newline();

    let connection = configuration.db_connection();
    output::section("Database");
    output::kv("Type", connection.sql_type().as_str());
    output::kv("Connection", &connection.redacted_connection_string());
    output::newline();

    output::section("Logging");
    match configuration.configured_log_directory() {
        Some(dir) => output::kv("Output directory", dir),
        None => output::info("No log output directory configured"),
    }

    Ok(())
}
