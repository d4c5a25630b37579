//! Finsight - staged financial document analysis
//!
//! Finsight verifies that a report (plain text or PDF) is a readable
//! financial document, then runs a fixed sequence of analyses, each owned by
//! a role-bound agent that may only invoke the capabilities it was granted.
//! Natural-language output comes from a pluggable reasoning engine.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): agents, tasks, runs, errors and port traits
//! - **Adapters** (`adapters`): built-in capabilities and reasoning engines
//! - **Service Layer** (`services`): capability registry, task execution and
//!   the sequential orchestrator
//! - **Infrastructure Layer** (`infrastructure`): document loading, settings,
//!   logging and YAML pipeline definitions
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use finsight::adapters::reasoning::OutlineReasoner;
//! use finsight::domain::models::RunInputs;
//! use finsight::services::{financial_pipeline, CapabilityRegistry, SequentialOrchestrator};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let pipeline = financial_pipeline()?;
//! let orchestrator = SequentialOrchestrator::new(
//!     Arc::new(CapabilityRegistry::with_defaults()),
//!     Arc::new(OutlineReasoner::new()),
//! );
//! let run = orchestrator
//!     .run(&pipeline, RunInputs::new("data/TSLA-Q2-2025-Update.pdf", "tesla outlook"))
//!     .await;
//! println!("{}", run.overall_status);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{CapabilityError, ConfigError, LoadError, ReasoningError};
pub use domain::models::{
    Agent, Config, Document, GatingMode, PipelineConfig, PipelineRun, RunInputs, RunStatus, Task,
    TaskResult, TaskStatus, ToolStep,
};
pub use domain::ports::{Capability, ReasoningEngine};
pub use infrastructure::config::ConfigLoader;
pub use infrastructure::document::DocumentLoader;
pub use services::{CapabilityRegistry, RunEvent, SequentialOrchestrator};
