//! Pipeline configuration: the agents and the ordered tasks of a run.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;

use super::agent::Agent;
use super::task::Task;
use crate::domain::errors::{ConfigError, ConfigResult};

/// Whether a failed verification task stops the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatingMode {
    /// Abort after a verification tool failure
    #[default]
    Gated,
    /// Run every task regardless of verification
    Ungated,
}

impl GatingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gated => "gated",
            Self::Ungated => "ungated",
        }
    }
}

impl fmt::Display for GatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable, validated pipeline definition passed into the orchestrator.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    agents: Vec<Arc<Agent>>,
    tasks: Vec<Task>,
}

impl PipelineConfig {
    /// Validate agents and tasks together.
    ///
    /// Every task's agent must be one of `agents` (matched by role), roles
    /// and task names must be unique, and there must be at least one task.
    pub fn new(agents: Vec<Arc<Agent>>, tasks: Vec<Task>) -> ConfigResult<Self> {
        if tasks.is_empty() {
            return Err(ConfigError::EmptyPipeline);
        }

        let mut roles = HashSet::new();
        for agent in &agents {
            agent.validate()?;
            if !roles.insert(agent.role.as_str()) {
                return Err(ConfigError::Duplicate {
                    kind: "agent",
                    name: agent.role.clone(),
                });
            }
        }

        let mut names = HashSet::new();
        for task in &tasks {
            if !names.insert(task.name()) {
                return Err(ConfigError::Duplicate {
                    kind: "task",
                    name: task.name().to_string(),
                });
            }
            let known = agents.iter().any(|a| a.as_ref() == task.agent().as_ref());
            if !known {
                return Err(ConfigError::UnknownAgent {
                    task: task.name().to_string(),
                    role: task.agent().role.clone(),
                });
            }
        }

        Ok(Self { agents, tasks })
    }

    pub fn agents(&self) -> &[Arc<Agent>] {
        &self.agents
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn agent(&self, role: &str) -> Option<&Arc<Agent>> {
        self.agents.iter().find(|a| a.role == role)
    }

    /// Whether the run can be gated on its first task.
    pub fn starts_with_verification(&self) -> bool {
        self.tasks.first().is_some_and(Task::is_verification)
    }

    /// Every capability name any task may invoke.
    pub fn required_capabilities(&self) -> BTreeSet<&str> {
        self.tasks
            .iter()
            .flat_map(|t| t.granted_capabilities().iter().map(String::as_str))
            .collect()
    }

    /// Keep only the tasks whose names are listed, preserving order, and the
    /// agents those tasks are assigned to.
    pub fn restricted_to(&self, names: &[&str]) -> ConfigResult<Self> {
        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| names.contains(&t.name()))
            .cloned()
            .collect();
        let agents = self
            .agents
            .iter()
            .filter(|a| tasks.iter().any(|t| t.agent().role == a.role))
            .cloned()
            .collect();
        Self::new(agents, tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::capability::{ToolStep, READ_DOCUMENT, SEARCH};

    fn agent(role: &str) -> Arc<Agent> {
        Arc::new(
            Agent::new(role, "goal", "backstory")
                .with_capability(READ_DOCUMENT)
                .with_capability(SEARCH),
        )
    }

    fn task(name: &str, agent: &Arc<Agent>) -> Task {
        Task::builder(name, Arc::clone(agent))
            .description(format!("Run {name}"))
            .grant(READ_DOCUMENT)
            .step(ToolStep::ReadDocument)
            .build()
            .unwrap()
    }

    #[test]
    fn test_valid_pipeline() {
        let a = agent("Analyst");
        let config = PipelineConfig::new(vec![a.clone()], vec![task("one", &a), task("two", &a)])
            .unwrap();
        assert_eq!(config.tasks().len(), 2);
        assert!(!config.starts_with_verification());
        assert_eq!(config.required_capabilities(), BTreeSet::from([READ_DOCUMENT]));
        assert!(config.agent("Analyst").is_some());
    }

    #[test]
    fn test_empty_pipeline_rejected() {
        assert_eq!(
            PipelineConfig::new(vec![agent("A")], vec![]).unwrap_err(),
            ConfigError::EmptyPipeline
        );
    }

    #[test]
    fn test_duplicate_task_rejected() {
        let a = agent("Analyst");
        let err = PipelineConfig::new(vec![a.clone()], vec![task("one", &a), task("one", &a)])
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Duplicate {
                kind: "task",
                name: "one".to_string()
            }
        );
    }

    #[test]
    fn test_task_with_unlisted_agent_rejected() {
        let listed = agent("Analyst");
        let stray = agent("Stranger");
        let err = PipelineConfig::new(vec![listed], vec![task("one", &stray)]).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownAgent { role, .. } if role == "Stranger"));
    }

    #[test]
    fn test_restricted_to_preserves_order() {
        let a = agent("Analyst");
        let config = PipelineConfig::new(
            vec![a.clone()],
            vec![task("one", &a), task("two", &a), task("three", &a)],
        )
        .unwrap();
        let subset = config.restricted_to(&["three", "one"]).unwrap();
        let names: Vec<_> = subset.tasks().iter().map(Task::name).collect();
        assert_eq!(names, vec!["one", "three"]);
    }
}
