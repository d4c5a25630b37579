//! CLI command implementations.

pub mod analyze;
pub mod inspect;
pub mod search;
pub mod verify;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use crate::adapters::reasoning::{CommandReasoner, CommandReasonerConfig, OutlineReasoner};
use crate::domain::models::{Config, PipelineConfig, ReasoningConfig};
use crate::domain::ports::ReasoningEngine;
use crate::infrastructure::templates::PipelineLoader;
use crate::services::{financial_pipeline, CapabilityRegistry, SequentialOrchestrator};

/// Pick the reasoning backend named in the settings.
pub fn build_reasoner(config: &ReasoningConfig) -> Result<Arc<dyn ReasoningEngine>> {
    match config.backend.as_str() {
        "outline" => Ok(Arc::new(OutlineReasoner::new())),
        "command" => Ok(Arc::new(CommandReasoner::new(CommandReasonerConfig::from(config)))),
        other => anyhow::bail!("Unknown reasoning backend: {other}"),
    }
}

/// Orchestrator over the built-in capabilities and the configured reasoner.
pub fn build_orchestrator(settings: &Config) -> Result<SequentialOrchestrator> {
    let reasoner = build_reasoner(&settings.reasoning)?;
    Ok(
        SequentialOrchestrator::new(Arc::new(CapabilityRegistry::with_defaults()), reasoner)
            .with_gating(settings.pipeline.gating),
    )
}

/// Resolve the pipeline: an explicit file, then the configured definition,
/// then the built-in financial pipeline.
pub fn load_pipeline(explicit: Option<&Path>, settings: &Config) -> Result<PipelineConfig> {
    let configured = settings.pipeline.definition.as_deref().map(Path::new);
    match explicit.or(configured) {
        Some(path) => PipelineLoader::load_from_file(path),
        None => financial_pipeline::financial_pipeline()
            .context("Built-in financial pipeline is invalid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_reasoner_by_backend() {
        let mut config = ReasoningConfig::default();
        assert_eq!(build_reasoner(&config).unwrap().name(), "outline");

        config.backend = "command".to_string();
        config.command = "cat".to_string();
        assert_eq!(build_reasoner(&config).unwrap().name(), "command");

        config.backend = "oracle".to_string();
        assert!(build_reasoner(&config).is_err());
    }

    #[test]
    fn test_load_pipeline_defaults_to_builtin() {
        let pipeline = load_pipeline(None, &Config::default()).unwrap();
        assert_eq!(pipeline.tasks().len(), 4);
    }

    #[test]
    fn test_load_pipeline_missing_file() {
        let err = load_pipeline(Some(Path::new("/no/pipeline.yaml")), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to read pipeline file"));
    }
}
