//! megreat - Command-line interface for the megreat migration tool.

use clap::Parser;

use megreat_cli::cli::{Cli, Command};
use megreat_cli::commands::{self, Context};
use megreat_cli::config::resolve_config_path;
use megreat_cli::error::{CliError, CliResult};
use megreat_cli::output;

#[tokio::main]
async fn main() {
    // Run the CLI and handle errors
    if let Err(e) = run().await {
        tracing::error!(error = %e, "megreat failed");
        output::newline();
        output::error(&e.to_string());
        if let CliError::Configuration(err) = &e {
            if err.is_validation() {
                output::info("Fix the configuration file and run the command again.");
            }
        }
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let ctx = Context {
        config_path: resolve_config_path(cli.config.as_deref(), &cwd),
        verbose: cli.verbose,
    };

    match cli.command {
        Command::Validate => commands::validate::run(ctx).await,
        Command::Show(args) => commands::show::run(ctx, args).await,
        Command::Version => commands::version::run().await,
    }
}
