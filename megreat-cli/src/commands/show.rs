//! `megreat show` command - Print the loaded migration configuration.

use crate::cli::{OutputFormat, ShowArgs};
use crate::commands::Context;
use crate::error::CliResult;
use crate::output;

/// Run the show command
pub async fn run(ctx: Context, args: ShowArgs) -> CliResult<()> {
    let configuration = ctx.load().await?;
    let configuration = if args.reveal {
        configuration
    } else {
        configuration.redacted()
    };

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&configuration)?);
        }
        OutputFormat::Text => {
            output::section("sql_files_directories");
            for directory in configuration.sql_files_directories() {
                println!("  {}", directory);
            }
            output::section("db_connection");
            output::kv("type", configuration.db_connection().sql_type().as_str());
            output::kv(
                "connection_string",
                configuration.db_connection().connection_string(),
            );
            if let Some(dir) = configuration.log_output_directory() {
                output::section("log_output_directory");
                println!("  {}", dir);
            }
        }
    }

    Ok(())
}
