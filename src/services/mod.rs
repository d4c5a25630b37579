pub mod capability_registry;
pub mod financial_pipeline;
pub mod orchestrator;
pub mod task_executor;

pub use capability_registry::CapabilityRegistry;
pub use financial_pipeline::{financial_pipeline, verification_pipeline, DEFAULT_QUERY};
pub use orchestrator::{RunEvent, SequentialOrchestrator};
pub use task_executor::TaskExecutor;
