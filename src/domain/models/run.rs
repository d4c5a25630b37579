//! Pipeline run domain model.
//!
//! A [`PipelineRun`] is one end-to-end execution of an ordered task list
//! against a single `{file_path, query}` input. It owns its results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Caller-supplied context threaded through every task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunInputs {
    pub file_path: String,
    /// Free text; empty means general analysis
    #[serde(default)]
    pub query: String,
}

impl RunInputs {
    pub fn new(file_path: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            query: query.into(),
        }
    }
}

/// Outcome of a single task execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Success,
    /// A capability failed; the reasoning collaborator was not called
    ToolFailure,
    /// The reasoning collaborator raised an error
    ReasoningFailure,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::ToolFailure => "tool_failure",
            Self::ReasoningFailure => "reasoning_failure",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one capability call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "text")]
pub enum ToolOutcome {
    Output(String),
    Error(String),
}

impl ToolOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Output(text) | Self::Error(text) => text,
        }
    }
}

/// Log entry of a capability call made by a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInvocation {
    pub capability: String,
    pub input: String,
    pub outcome: ToolOutcome,
}

/// What a task produced, including every failure in human-readable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResult {
    pub task: String,
    pub role: String,
    pub description_summary: String,
    pub status: TaskStatus,
    pub produced_text: String,
    pub tool_invocations: Vec<ToolInvocation>,
    /// Soft problems: document warnings, degraded upstream context
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// Expected sections absent from `produced_text`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_sections: Vec<String>,
    pub duration_ms: u64,
}

impl TaskResult {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The caller-facing view of this result.
    pub fn summary(&self) -> TaskSummary {
        TaskSummary {
            role: self.role.clone(),
            description_summary: self.description_summary.clone(),
            status: self.status,
            produced_text: self.produced_text.clone(),
        }
    }
}

/// Per-task output exposed by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub role: String,
    pub description_summary: String,
    pub status: TaskStatus,
    pub produced_text: String,
}

/// Orchestrator state for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "task_index")]
pub enum RunState {
    Pending,
    Running(usize),
    Completed,
    Aborted,
}

impl RunState {
    /// Valid transitions from this state.
    pub fn can_transition_to(&self, next: Self) -> bool {
        match (self, next) {
            (Self::Pending, Self::Running(0) | Self::Completed | Self::Aborted) => true,
            (Self::Running(i), Self::Running(j)) => j == i + 1,
            (Self::Running(_), Self::Completed | Self::Aborted) => true,
            _ => false,
        }
    }
}

/// Overall verdict of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Every task succeeded
    Success,
    /// The run completed but at least one task did not succeed
    PartialSuccess,
    /// The verification gate stopped the run
    Aborted,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::PartialSuccess => "partial_success",
            Self::Aborted => "aborted",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One execution of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineRun {
    pub id: Uuid,
    pub inputs: RunInputs,
    /// Names of the configured tasks, in execution order
    pub tasks: Vec<String>,
    pub results: Vec<TaskResult>,
    pub state: RunState,
    pub overall_status: RunStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abort_reason: Option<String>,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl PipelineRun {
    pub fn new(inputs: RunInputs, tasks: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            inputs,
            tasks,
            results: Vec::new(),
            state: RunState::Pending,
            overall_status: RunStatus::Success,
            abort_reason: None,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Move to `next`, ignoring transitions the state machine forbids.
    pub fn transition_to(&mut self, next: RunState) -> bool {
        if !self.state.can_transition_to(next) {
            tracing::warn!(run_id = %self.id, from = ?self.state, to = ?next, "rejected run state transition");
            return false;
        }
        self.state = next;
        true
    }

    pub fn record(&mut self, result: TaskResult) {
        self.results.push(result);
    }

    pub fn result(&self, task: &str) -> Option<&TaskResult> {
        self.results.iter().find(|r| r.task == task)
    }

    /// Stop the run early and record why.
    pub fn abort(&mut self, reason: impl Into<String>) {
        if self.transition_to(RunState::Aborted) {
            self.overall_status = RunStatus::Aborted;
            self.abort_reason = Some(reason.into());
            self.finished_at = Some(Utc::now());
        }
    }

    /// Finish normally and derive the overall status from the results.
    pub fn complete(&mut self) {
        if self.transition_to(RunState::Completed) {
            self.overall_status = if self.results.iter().all(TaskResult::is_success) {
                RunStatus::Success
            } else {
                RunStatus::PartialSuccess
            };
            self.finished_at = Some(Utc::now());
        }
    }

    pub fn summaries(&self) -> Vec<TaskSummary> {
        self.results.iter().map(TaskResult::summary).collect()
    }

    /// The produced text of the last task that ran.
    pub fn final_output(&self) -> Option<&str> {
        self.results.last().map(|r| r.produced_text.as_str())
    }

    /// All produced texts joined under per-task headings.
    pub fn combined_output(&self) -> String {
        self.results
            .iter()
            .map(|r| format!("## {} ({})\n\n{}", r.task, r.status, r.produced_text.trim()))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
