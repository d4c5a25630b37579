pub mod agent;
pub mod capability;
pub mod config;
pub mod document;
pub mod pipeline;
pub mod reasoning;
pub mod run;
pub mod task;

pub use agent::Agent;
pub use capability::{CapabilityOutput, ToolStep, READ_DOCUMENT, SEARCH};
pub use config::{Config, LoggingConfig, PipelineSettings, ReasoningConfig};
pub use document::{Document, DocumentFormat, EMPTY_DOCUMENT_WARNING, EMPTY_PDF_WARNING};
pub use pipeline::{GatingMode, PipelineConfig};
pub use reasoning::{PriorOutput, ReasoningRequest, ToolOutput};
pub use run::{
    PipelineRun, RunInputs, RunState, RunStatus, TaskResult, TaskStatus, TaskSummary,
    ToolInvocation, ToolOutcome,
};
pub use task::{Task, TaskBuilder, TaskKind};
