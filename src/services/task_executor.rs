//! Task executor service.
//!
//! Runs a single task: dispatches its declared tool steps in order, then
//! hands the assembled context to the reasoning collaborator. Every failure
//! is folded into the returned [`TaskResult`]; nothing propagates.

use std::sync::Arc;
use std::time::Instant;

use crate::domain::models::{
    PriorOutput, ReasoningRequest, RunInputs, Task, TaskResult, TaskStatus, ToolInvocation,
    ToolOutcome, ToolOutput,
};
use crate::domain::ports::ReasoningEngine;
use crate::infrastructure::validators::OutputValidator;
use crate::services::capability_registry::CapabilityRegistry;

/// Executes tasks against a capability registry and a reasoning engine.
#[derive(Clone)]
pub struct TaskExecutor {
    registry: Arc<CapabilityRegistry>,
    reasoner: Arc<dyn ReasoningEngine>,
    validator: OutputValidator,
}

impl TaskExecutor {
    pub fn new(registry: Arc<CapabilityRegistry>, reasoner: Arc<dyn ReasoningEngine>) -> Self {
        Self {
            registry,
            reasoner,
            validator: OutputValidator::new(),
        }
    }

    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }

    pub fn reasoner_name(&self) -> &'static str {
        self.reasoner.name()
    }

    /// Execute `task` with the run inputs and the results recorded so far.
    ///
    /// Only the most recent prior result is passed on as grounding.
    pub async fn execute(
        &self,
        task: &Task,
        inputs: &RunInputs,
        prior_results: &[TaskResult],
    ) -> TaskResult {
        let start = Instant::now();
        let mut request = ReasoningRequest::for_task(task, &inputs.query);
        let mut invocations = Vec::with_capacity(task.steps().len());
        let mut warnings = Vec::new();
        let mut tool_warnings = Vec::new();

        if let Some(prior) = prior_results.last() {
            request.prior_outputs.push(PriorOutput::from(prior));
            if !prior.is_success() {
                request.degraded_context = true;
                warnings.push(format!(
                    "upstream task '{}' finished with status {}",
                    prior.task, prior.status
                ));
            }
        }

        for step in task.steps() {
            let capability = step.capability_name();
            let input = step.input(inputs);
            tracing::debug!(task = task.name(), capability, input, "invoking capability");

            match self.registry.invoke(capability, input).await {
                Ok(output) => {
                    invocations.push(ToolInvocation {
                        capability: capability.to_string(),
                        input: input.to_string(),
                        outcome: ToolOutcome::Output(output.text.clone()),
                    });
                    tool_warnings.extend(output.warnings);
                    request.tool_outputs.push(ToolOutput {
                        capability: capability.to_string(),
                        text: output.text,
                    });
                }
                Err(e) => {
                    let detail = format!("Tool '{capability}' failed: {e}");
                    tracing::warn!(task = task.name(), capability, error = %e, "capability failed");
                    invocations.push(ToolInvocation {
                        capability: capability.to_string(),
                        input: input.to_string(),
                        outcome: ToolOutcome::Error(e.to_string()),
                    });
                    return finish(task, TaskStatus::ToolFailure, detail, invocations, warnings, vec![], start);
                }
            }
        }

        if !tool_warnings.is_empty() {
            request.low_confidence = true;
            warnings.extend(tool_warnings);
        }
        request.warnings = warnings.clone();

        match self.reasoner.generate(&request).await {
            Ok(text) => {
                let text = OutputValidator::strip_code_fence(&text);
                let missing = self.validator.missing_sections(&text, task.expected_output());
                if !missing.is_empty() {
                    tracing::warn!(
                        task = task.name(),
                        missing = ?missing,
                        "produced text is missing expected sections"
                    );
                }
                finish(task, TaskStatus::Success, text, invocations, warnings, missing, start)
            }
            Err(e) => {
                tracing::warn!(
                    task = task.name(),
                    backend = self.reasoner.name(),
                    error = %e,
                    "reasoning failed"
                );
                let summary = format!(
                    "Reasoning for task '{}' ({} backend) failed: {e}",
                    task.name(),
                    self.reasoner.name()
                );
                finish(task, TaskStatus::ReasoningFailure, summary, invocations, warnings, vec![], start)
            }
        }
    }
}

fn finish(
    task: &Task,
    status: TaskStatus,
    produced_text: String,
    tool_invocations: Vec<ToolInvocation>,
    warnings: Vec<String>,
    missing_sections: Vec<String>,
    start: Instant,
) -> TaskResult {
    TaskResult {
        task: task.name().to_string(),
        role: task.agent().role.clone(),
        description_summary: task.description_summary(),
        status,
        produced_text,
        tool_invocations,
        warnings,
        missing_sections,
        duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
    }
}
