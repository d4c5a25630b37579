//! Sequential orchestrator.
//!
//! Runs the tasks of a [`PipelineConfig`] strictly in declared order, one at
//! a time. In gated mode a verification task that cannot read the document
//! aborts the run before any analysis starts.

use std::sync::Arc;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::domain::errors::ConfigResult;
use crate::domain::models::{
    GatingMode, PipelineConfig, PipelineRun, RunInputs, RunState, RunStatus, TaskResult,
    TaskStatus,
};
use crate::domain::ports::ReasoningEngine;
use crate::services::capability_registry::CapabilityRegistry;
use crate::services::task_executor::TaskExecutor;

/// Event emitted while a pipeline runs.
#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum RunEvent {
    /// Run started.
    Started { run_id: Uuid, total_tasks: usize },
    /// A task is about to execute.
    TaskStarted { index: usize, task: String, role: String },
    /// A task finished, successfully or not.
    TaskFinished { index: usize, result: TaskResult },
    /// The verification gate stopped the run.
    Aborted { reason: String },
    /// The run reached a terminal state.
    Finished { status: RunStatus },
}

/// Runs pipelines sequentially against a capability registry and a reasoner.
#[derive(Clone)]
pub struct SequentialOrchestrator {
    executor: TaskExecutor,
    gating: GatingMode,
}

impl SequentialOrchestrator {
    pub fn new(registry: Arc<CapabilityRegistry>, reasoner: Arc<dyn ReasoningEngine>) -> Self {
        Self {
            executor: TaskExecutor::new(registry, reasoner),
            gating: GatingMode::default(),
        }
    }

    pub fn with_gating(mut self, gating: GatingMode) -> Self {
        self.gating = gating;
        self
    }

    pub fn gating(&self) -> GatingMode {
        self.gating
    }

    /// Reject a pipeline whose steps name capabilities this orchestrator
    /// cannot resolve.
    pub fn validate(&self, config: &PipelineConfig) -> ConfigResult<()> {
        self.executor.registry().ensure_covers(config)
    }

    /// Run the pipeline and return the finished run.
    ///
    /// A pipeline that fails [`validate`](Self::validate) is aborted before
    /// its first task.
    pub async fn run(&self, config: &PipelineConfig, inputs: RunInputs) -> PipelineRun {
        let (event_tx, _) = mpsc::channel(1);
        self.run_with_events(config, inputs, event_tx).await
    }

    /// Run the pipeline, reporting progress on `event_tx`.
    ///
    /// Send failures are ignored: a dropped receiver never stops a run.
    pub async fn run_with_events(
        &self,
        config: &PipelineConfig,
        inputs: RunInputs,
        event_tx: mpsc::Sender<RunEvent>,
    ) -> PipelineRun {
        let names = config.tasks().iter().map(|t| t.name().to_string()).collect();
        let mut run = PipelineRun::new(inputs, names);

        tracing::info!(
            run_id = %run.id,
            tasks = config.tasks().len(),
            gating = %self.gating,
            backend = self.executor.reasoner_name(),
            file = %run.inputs.file_path,
            "pipeline run started"
        );
        let _ = event_tx
            .send(RunEvent::Started {
                run_id: run.id,
                total_tasks: config.tasks().len(),
            })
            .await;

        if let Err(e) = self.validate(config) {
            let reason = format!("Pipeline configuration is invalid: {e}");
            tracing::warn!(run_id = %run.id, reason = %reason, "pipeline run rejected");
            run.abort(reason.clone());
            let _ = event_tx.send(RunEvent::Aborted { reason }).await;
            let _ = event_tx.send(RunEvent::Finished { status: run.overall_status }).await;
            return run;
        }

        for (index, task) in config.tasks().iter().enumerate() {
            run.transition_to(RunState::Running(index));
            let _ = event_tx
                .send(RunEvent::TaskStarted {
                    index,
                    task: task.name().to_string(),
                    role: task.agent().role.clone(),
                })
                .await;

            let result = self.executor.execute(task, &run.inputs, &run.results).await;
            tracing::info!(
                run_id = %run.id,
                task = task.name(),
                status = %result.status,
                duration_ms = result.duration_ms,
                "task finished"
            );

            let gate_closed = self.gating == GatingMode::Gated
                && index == 0
                && task.is_verification()
                && result.status == TaskStatus::ToolFailure;
            let failure_detail = result.produced_text.clone();

            let _ = event_tx.send(RunEvent::TaskFinished { index, result: result.clone() }).await;
            run.record(result);

            if gate_closed {
                let reason = format!(
                    "Verification task '{}' could not read the document: {failure_detail}",
                    task.name()
                );
                tracing::warn!(run_id = %run.id, reason = %reason, "pipeline run aborted");
                run.abort(reason.clone());
                let _ = event_tx.send(RunEvent::Aborted { reason }).await;
                let _ = event_tx.send(RunEvent::Finished { status: run.overall_status }).await;
                return run;
            }
        }

        run.complete();
        tracing::info!(run_id = %run.id, status = %run.overall_status, "pipeline run finished");
        let _ = event_tx.send(RunEvent::Finished { status: run.overall_status }).await;
        run
    }
}
