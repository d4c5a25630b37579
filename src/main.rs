//! Finsight CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use finsight::cli::{commands, handle_error, Cli, Commands};
use finsight::domain::models::Config;
use finsight::infrastructure::config::ConfigLoader;
use finsight::infrastructure::logging::{LogConfig, LoggerImpl};

fn load_settings(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(err) => {
            handle_error(&err, cli.json);
            return ExitCode::FAILURE;
        }
    };

    let _logger = match LoggerImpl::init(&LogConfig::from(&settings.logging)) {
        Ok(logger) => logger,
        Err(err) => {
            handle_error(&err, cli.json);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, &settings, cli.json).await,
        Commands::Verify(args) => commands::verify::execute(args, &settings, cli.json).await,
        Commands::Search(args) => commands::search::execute(args, cli.json),
        Commands::Inspect(args) => commands::inspect::execute(args, &settings, cli.json),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            handle_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}
