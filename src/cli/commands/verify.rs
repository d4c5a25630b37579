//! Verify CLI command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::commands::analyze::{exit_code, run_and_report};
use crate::cli::commands::build_orchestrator;
use crate::domain::models::{Config, RunInputs};
use crate::services::verification_pipeline;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to the financial report (.pdf or .txt)
    pub file: PathBuf,
}

pub async fn execute(args: VerifyArgs, settings: &Config, json_mode: bool) -> Result<ExitCode> {
    let pipeline = verification_pipeline().context("Built-in verification pipeline is invalid")?;
    let orchestrator = build_orchestrator(settings)?;
    let inputs = RunInputs::new(args.file.to_string_lossy(), "");

    run_and_report(&orchestrator, &pipeline, inputs, json_mode)
        .await
        .map(exit_code)
}
