//! Pipeline definition loader from YAML files

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::{Agent, PipelineConfig, Task, TaskKind, ToolStep};

/// Template structure for loading a pipeline from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineTemplate {
    #[serde(default)]
    pub name: Option<String>,
    pub agents: Vec<AgentTemplate>,
    pub tasks: Vec<TaskTemplate>,
}

/// Template for an agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentTemplate {
    pub role: String,
    pub goal: String,
    #[serde(default)]
    pub backstory: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub allow_delegation: bool,
}

/// Template for a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub name: String,
    #[serde(default)]
    pub kind: TaskKind,
    /// Role of the assigned agent
    pub agent: String,
    pub description: String,
    #[serde(default)]
    pub expected_output: Vec<String>,
    /// Granted capabilities; defaults to those the steps use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,
    #[serde(default)]
    pub steps: Vec<ToolStep>,
}

/// Loader for pipeline definitions
pub struct PipelineLoader;

impl PipelineLoader {
    /// Load a pipeline from a YAML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<PipelineConfig> {
        let path = path.as_ref();
        debug!("Loading pipeline definition from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pipeline file: {}", path.display()))?;

        Self::load_from_yaml(&content)
            .with_context(|| format!("Invalid pipeline definition in {}", path.display()))
    }

    /// Load a pipeline from a YAML string
    pub fn load_from_yaml(yaml: &str) -> Result<PipelineConfig> {
        let template: PipelineTemplate =
            serde_yaml::from_str(yaml).context("Failed to parse YAML pipeline definition")?;

        info!(
            name = template.name.as_deref().unwrap_or("unnamed"),
            agents = template.agents.len(),
            tasks = template.tasks.len(),
            "loading pipeline definition"
        );

        Ok(Self::template_to_pipeline(template)?)
    }

    /// Convert a template into a validated pipeline
    pub fn template_to_pipeline(template: PipelineTemplate) -> ConfigResult<PipelineConfig> {
        let agents: Vec<Arc<Agent>> = template
            .agents
            .into_iter()
            .map(|a| Arc::new(Self::template_to_agent(a)))
            .collect();

        let tasks = template
            .tasks
            .into_iter()
            .map(|t| Self::template_to_task(t, &agents))
            .collect::<ConfigResult<Vec<_>>>()?;

        PipelineConfig::new(agents, tasks)
    }

    fn template_to_agent(template: AgentTemplate) -> Agent {
        template
            .capabilities
            .into_iter()
            .fold(
                Agent::new(template.role, template.goal, template.backstory),
                Agent::with_capability,
            )
            .with_delegation(template.allow_delegation)
    }

    fn template_to_task(template: TaskTemplate, agents: &[Arc<Agent>]) -> ConfigResult<Task> {
        let agent = agents
            .iter()
            .find(|a| a.role == template.agent)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownAgent {
                task: template.name.clone(),
                role: template.agent.clone(),
            })?;

        let grants = template.capabilities.unwrap_or_else(|| {
            template
                .steps
                .iter()
                .map(|s| s.capability_name().to_string())
                .collect()
        });

        let builder = Task::builder(template.name, agent)
            .kind(template.kind)
            .description(template.description)
            .expect_sections(template.expected_output);
        let builder = grants.into_iter().fold(builder, |b, g| b.grant(g));
        template
            .steps
            .into_iter()
            .fold(builder, |b, s| b.step(s))
            .build()
    }
}
