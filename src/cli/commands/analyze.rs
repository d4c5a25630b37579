//! Analyze CLI command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::sync::mpsc;

use crate::cli::commands::{build_orchestrator, load_pipeline};
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{Config, GatingMode, PipelineConfig, PipelineRun, RunInputs, RunStatus};
use crate::services::{RunEvent, SequentialOrchestrator, DEFAULT_QUERY};

/// Exit code reported when the verification gate aborts a run.
pub const ABORTED_EXIT_CODE: u8 = 2;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the financial report (.pdf or .txt)
    pub file: PathBuf,

    /// Question that guides the analysis; empty means general analysis
    #[arg(short, long, default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Run every task even when verification cannot read the document
    #[arg(long)]
    pub ungated: bool,

    /// YAML pipeline definition to run instead of the built-in pipeline
    #[arg(short, long)]
    pub pipeline: Option<PathBuf>,
}

/// A finished run as shown to the user.
#[derive(Debug, Serialize)]
pub struct RunReport {
    #[serde(flatten)]
    pub run: PipelineRun,
}

impl CommandOutput for RunReport {
    fn to_human(&self) -> String {
        let run = &self.run;
        let mut lines = vec![
            format!("Run {}", run.id),
            format!("Document: {}", run.inputs.file_path),
            TableFormatter::new().format_run(run),
        ];

        for result in &run.results {
            lines.push(format!("\n=== {} ({}) ===\n", result.task, result.role));
            lines.push(result.produced_text.trim().to_string());
        }

        lines.push(String::new());
        lines.push(format!("Overall status: {}", run.overall_status));
        if let Some(reason) = &run.abort_reason {
            lines.push(format!("Aborted: {reason}"));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Map a run verdict to the process exit code.
pub fn exit_code(status: RunStatus) -> ExitCode {
    match status {
        RunStatus::Aborted => ExitCode::from(ABORTED_EXIT_CODE),
        RunStatus::Success | RunStatus::PartialSuccess => ExitCode::SUCCESS,
    }
}

/// Run `pipeline`, stream progress to stderr and print the report.
pub async fn run_and_report(
    orchestrator: &SequentialOrchestrator,
    pipeline: &PipelineConfig,
    inputs: RunInputs,
    json_mode: bool,
) -> Result<RunStatus> {
    orchestrator.validate(pipeline)?;

    let total = pipeline.tasks().len();
    let (event_tx, mut event_rx) = mpsc::channel(32);
    let progress = async move {
        while let Some(event) = event_rx.recv().await {
            if !json_mode {
                print_progress(&event, total);
            }
        }
    };

    let (run, ()) = tokio::join!(
        orchestrator.run_with_events(pipeline, inputs, event_tx),
        progress
    );

    let status = run.overall_status;
    output(&RunReport { run }, json_mode);
    Ok(status)
}

fn print_progress(event: &RunEvent, total: usize) {
    match event {
        RunEvent::TaskStarted { index, task, role } => {
            eprintln!("[{}/{total}] {task} ({role})...", index + 1);
        }
        RunEvent::TaskFinished { index, result } => {
            eprintln!(
                "[{}/{total}] {} -> {} in {} ms",
                index + 1,
                result.task,
                result.status,
                result.duration_ms
            );
        }
        RunEvent::Aborted { reason } => eprintln!("Run aborted: {reason}"),
        RunEvent::Started { .. } | RunEvent::Finished { .. } => {}
    }
}

pub async fn execute(args: AnalyzeArgs, settings: &Config, json_mode: bool) -> Result<ExitCode> {
    analyze(args, settings, json_mode).await.map(exit_code)
}

/// Run the analysis pipeline and return the run verdict.
pub async fn analyze(args: AnalyzeArgs, settings: &Config, json_mode: bool) -> Result<RunStatus> {
    let pipeline = load_pipeline(args.pipeline.as_deref(), settings)?;
    let mut orchestrator = build_orchestrator(settings)?;
    if args.ungated {
        orchestrator = orchestrator.with_gating(GatingMode::Ungated);
    }

    let inputs = RunInputs::new(args.file.to_string_lossy(), args.query);
    run_and_report(&orchestrator, &pipeline, inputs, json_mode).await
}
