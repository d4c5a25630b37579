//! Inspect CLI command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::commands::{build_orchestrator, load_pipeline};
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{Config, PipelineConfig, TaskKind, ToolStep};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// YAML pipeline definition to inspect instead of the built-in pipeline
    #[arg(short, long)]
    pub pipeline: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct AgentOutput {
    pub role: String,
    pub goal: String,
    pub capabilities: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TaskOutput {
    pub name: String,
    pub kind: TaskKind,
    pub agent: String,
    pub description: String,
    pub granted_capabilities: Vec<String>,
    pub steps: Vec<ToolStep>,
    pub expected_output: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PipelineOutput {
    pub gating: String,
    pub agents: Vec<AgentOutput>,
    pub tasks: Vec<TaskOutput>,
    #[serde(skip)]
    config: PipelineConfig,
}

impl PipelineOutput {
    pub fn new(config: PipelineConfig, gating: String) -> Self {
        let agents = config
            .agents()
            .iter()
            .map(|a| AgentOutput {
                role: a.role.clone(),
                goal: a.goal.clone(),
                capabilities: a.capabilities.iter().cloned().collect(),
            })
            .collect();
        let tasks = config
            .tasks()
            .iter()
            .map(|t| TaskOutput {
                name: t.name().to_string(),
                kind: t.kind(),
                agent: t.agent().role.clone(),
                description: t.description().to_string(),
                granted_capabilities: t.granted_capabilities().iter().cloned().collect(),
                steps: t.steps().to_vec(),
                expected_output: t.expected_output().to_vec(),
            })
            .collect();
        Self {
            gating,
            agents,
            tasks,
            config,
        }
    }
}

impl CommandOutput for PipelineOutput {
    fn to_human(&self) -> String {
        let config = &self.config;
        let formatter = TableFormatter::new();
        [
            format!("Gating: {}", self.gating),
            "\nAgents:".to_string(),
            formatter.format_agents(config.agents()),
            "\nTasks:".to_string(),
            formatter.format_pipeline(config),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: InspectArgs, settings: &Config, json_mode: bool) -> Result<ExitCode> {
    let pipeline = load_pipeline(args.pipeline.as_deref(), settings)?;
    let orchestrator = build_orchestrator(settings)?;
    orchestrator.validate(&pipeline)?;

    output(
        &PipelineOutput::new(pipeline, orchestrator.gating().to_string()),
        json_mode,
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::financial_pipeline;

    #[test]
    fn test_pipeline_output_json() {
        let config = financial_pipeline::financial_pipeline().unwrap();
        let json = PipelineOutput::new(config, "gated".to_string()).to_json();

        assert_eq!(json["gating"], "gated");
        assert_eq!(json["agents"].as_array().unwrap().len(), 2);
        assert_eq!(json["tasks"][0]["kind"], "verification");
        assert_eq!(json["tasks"][2]["steps"][1], "search");
    }
}
