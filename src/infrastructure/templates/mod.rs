//! YAML pipeline definitions

pub mod pipeline_loader;

pub use pipeline_loader::{AgentTemplate, PipelineLoader, PipelineTemplate, TaskTemplate};
