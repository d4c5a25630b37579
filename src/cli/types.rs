//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::{analyze::AnalyzeArgs, inspect::InspectArgs, search::SearchArgs, verify::VerifyArgs};

#[derive(Parser, Debug)]
#[command(name = "finsight")]
#[command(about = "Finsight - staged financial document analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Settings file (defaults to .finsight/config.yaml and .finsight/local.yaml)
    #[arg(short, long, global = true, env = "FINSIGHT_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify a report, then run the financial, investment and risk analyses
    Analyze(AnalyzeArgs),

    /// Only check that a report is a readable financial document
    Verify(VerifyArgs),

    /// Query the market-context search capability
    Search(SearchArgs),

    /// Show the agents and tasks of a pipeline without running it
    Inspect(InspectArgs),
}
