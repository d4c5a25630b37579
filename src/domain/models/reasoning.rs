//! Request handed to the reasoning collaborator.

use serde::{Deserialize, Serialize};

use super::run::{TaskResult, TaskStatus};
use super::task::Task;

/// Output of one capability, as seen by the reasoning collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub capability: String,
    pub text: String,
}

/// Grounding from an earlier task in the same run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorOutput {
    pub task: String,
    pub status: TaskStatus,
    pub text: String,
}

impl From<&TaskResult> for PriorOutput {
    fn from(result: &TaskResult) -> Self {
        Self {
            task: result.task.clone(),
            status: result.status,
            text: result.produced_text.clone(),
        }
    }
}

/// Everything the collaborator needs to produce a task's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningRequest {
    pub task: String,
    pub role: String,
    pub goal: String,
    pub backstory: String,
    pub description: String,
    pub expected_output: Vec<String>,
    pub query: String,
    pub tool_outputs: Vec<ToolOutput>,
    pub prior_outputs: Vec<PriorOutput>,
    #[serde(default)]
    pub warnings: Vec<String>,
    /// Set when the document loaded with warnings
    #[serde(default)]
    pub low_confidence: bool,
    /// Set when the preceding task did not succeed
    #[serde(default)]
    pub degraded_context: bool,
}

impl ReasoningRequest {
    /// Assemble the static parts of a request from the task definition.
    pub fn for_task(task: &Task, query: &str) -> Self {
        let agent = task.agent();
        Self {
            task: task.name().to_string(),
            role: agent.role.clone(),
            goal: agent.goal.clone(),
            backstory: agent.backstory.clone(),
            description: task.description().to_string(),
            expected_output: task.expected_output().to_vec(),
            query: query.to_string(),
            tool_outputs: Vec::new(),
            prior_outputs: Vec::new(),
            warnings: Vec::new(),
            low_confidence: false,
            degraded_context: false,
        }
    }

    pub fn tool_output(&self, capability: &str) -> Option<&str> {
        self.tool_outputs
            .iter()
            .find(|o| o.capability == capability)
            .map(|o| o.text.as_str())
    }
}
