//! Task domain model.
//!
//! A task is one unit of work bound to an agent. Tasks are built through
//! [`TaskBuilder`], which enforces that every granted capability is held by
//! the assigned agent and every declared step uses a granted capability.
//! A task that exists is therefore always valid configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use super::agent::Agent;
use super::capability::ToolStep;
use crate::domain::errors::{ConfigError, ConfigResult};

const SUMMARY_MAX_CHARS: usize = 80;

/// Role a task plays in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Confirms the document is a readable financial filing; may gate the run
    Verification,
    #[default]
    Analysis,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verification => "verification",
            Self::Analysis => "analysis",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated unit of work.
#[derive(Debug, Clone)]
pub struct Task {
    name: String,
    kind: TaskKind,
    description: String,
    expected_output: Vec<String>,
    agent: Arc<Agent>,
    granted_capabilities: BTreeSet<String>,
    steps: Vec<ToolStep>,
}

impl Task {
    /// Start building a task assigned to `agent`.
    pub fn builder(name: impl Into<String>, agent: Arc<Agent>) -> TaskBuilder {
        TaskBuilder::new(name, agent)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn is_verification(&self) -> bool {
        self.kind == TaskKind::Verification
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Ordered section labels the produced text must contain.
    pub fn expected_output(&self) -> &[String] {
        &self.expected_output
    }

    pub fn agent(&self) -> &Arc<Agent> {
        &self.agent
    }

    pub fn granted_capabilities(&self) -> &BTreeSet<String> {
        &self.granted_capabilities
    }

    pub fn steps(&self) -> &[ToolStep] {
        &self.steps
    }

    /// First sentence of the description, capped for display.
    pub fn description_summary(&self) -> String {
        summarize(&self.description)
    }
}

fn summarize(description: &str) -> String {
    let trimmed = description.trim();
    let sentence = trimmed
        .find(". ")
        .map_or(trimmed, |end| &trimmed[..=end]);

    if sentence.chars().count() <= SUMMARY_MAX_CHARS {
        return sentence.to_string();
    }
    let cut: String = sentence.chars().take(SUMMARY_MAX_CHARS - 3).collect();
    format!("{}...", cut.trim_end())
}

/// Builder for [`Task`].
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    name: String,
    kind: TaskKind,
    description: String,
    expected_output: Vec<String>,
    agent: Arc<Agent>,
    granted_capabilities: BTreeSet<String>,
    steps: Vec<ToolStep>,
}

impl TaskBuilder {
    pub fn new(name: impl Into<String>, agent: Arc<Agent>) -> Self {
        Self {
            name: name.into(),
            kind: TaskKind::default(),
            description: String::new(),
            expected_output: Vec::new(),
            agent,
            granted_capabilities: BTreeSet::new(),
            steps: Vec::new(),
        }
    }

    pub fn kind(mut self, kind: TaskKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn expect_section(mut self, label: impl Into<String>) -> Self {
        self.expected_output.push(label.into());
        self
    }

    pub fn expect_sections<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected_output.extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn grant(mut self, capability: impl Into<String>) -> Self {
        self.granted_capabilities.insert(capability.into());
        self
    }

    pub fn step(mut self, step: ToolStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Validate and produce the task.
    pub fn build(self) -> ConfigResult<Task> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyField("Task name".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(ConfigError::EmptyField(format!(
                "Description of task '{}'",
                self.name
            )));
        }
        self.agent.validate()?;

        for capability in &self.granted_capabilities {
            if !self.agent.holds(capability) {
                return Err(ConfigError::CapabilityNotGranted {
                    task: self.name,
                    role: self.agent.role.clone(),
                    capability: capability.clone(),
                });
            }
        }

        for step in &self.steps {
            if !self.granted_capabilities.contains(step.capability_name()) {
                return Err(ConfigError::StepNotGranted {
                    task: self.name,
                    capability: step.capability_name().to_string(),
                });
            }
        }

        if let Some(pos) = self.steps.iter().position(|s| *s == ToolStep::ReadDocument) {
            if pos != 0 {
                return Err(ConfigError::ReadDocumentNotFirst(self.name));
            }
        }

        Ok(Task {
            name: self.name,
            kind: self.kind,
            description: self.description,
            expected_output: self.expected_output,
            agent: self.agent,
            granted_capabilities: self.granted_capabilities,
            steps: self.steps,
        })
    }
}
