//! Capability registry.
//!
//! The [`CapabilityRegistry`] maps capability names to shared
//! implementations. Agents and tasks hold names only; the registry resolves
//! them at invocation time.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::adapters::capabilities::{ReadDocumentCapability, SearchCapability};
use crate::domain::errors::{CapabilityError, ConfigError, ConfigResult};
use crate::domain::models::{CapabilityOutput, PipelineConfig};
use crate::domain::ports::Capability;

/// Central registry of invocable capabilities.
#[derive(Clone, Default)]
pub struct CapabilityRegistry {
    capabilities: BTreeMap<String, Arc<dyn Capability>>,
}

impl std::fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("capabilities", &self.capabilities.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl CapabilityRegistry {
    /// Returns an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in document reader and search.
    pub fn with_defaults() -> Self {
        Self::new()
            .with(Arc::new(ReadDocumentCapability::new()))
            .with(Arc::new(SearchCapability::new()))
    }

    /// Register a capability under its own name, replacing any previous one.
    pub fn register(&mut self, capability: Arc<dyn Capability>) -> Option<Arc<dyn Capability>> {
        let name = capability.name().to_string();
        self.capabilities.insert(name, capability)
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, capability: Arc<dyn Capability>) -> Self {
        self.register(capability);
        self
    }

    /// Look up a capability by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Capability>> {
        self.capabilities.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.capabilities.contains_key(name)
    }

    /// Returns the names of all registered capabilities, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.capabilities.keys().map(String::as_str).collect()
    }

    /// Fail if any capability a pipeline may invoke is not registered.
    pub fn ensure_covers(&self, config: &PipelineConfig) -> ConfigResult<()> {
        match config
            .required_capabilities()
            .into_iter()
            .find(|name| !self.contains(name))
        {
            Some(name) => Err(ConfigError::UnknownCapability(name.to_string())),
            None => Ok(()),
        }
    }

    /// Invoke the named capability.
    pub async fn invoke(&self, name: &str, input: &str) -> Result<CapabilityOutput, CapabilityError> {
        let capability = self
            .get(name)
            .ok_or_else(|| CapabilityError::NotRegistered(name.to_string()))?;
        capability.invoke(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::capabilities::FALLBACK_FACT;
    use crate::domain::models::{Agent, Task, ToolStep, READ_DOCUMENT, SEARCH};
    use async_trait::async_trait;

    struct FixedSearch;

    #[async_trait]
    impl Capability for FixedSearch {
        fn name(&self) -> &str {
            SEARCH
        }

        async fn invoke(&self, input: &str) -> Result<CapabilityOutput, CapabilityError> {
            Ok(CapabilityOutput::text(format!("live results for {input}")))
        }
    }

    #[test]
    fn test_default_registry() {
        let registry = CapabilityRegistry::with_defaults();
        assert_eq!(registry.names(), vec![READ_DOCUMENT, SEARCH]);
        assert!(!CapabilityRegistry::new().contains(SEARCH));
    }

    #[test]
    fn test_register_replaces_by_name() {
        let mut registry = CapabilityRegistry::with_defaults();
        let previous = registry.register(Arc::new(FixedSearch));
        assert!(previous.is_some());

        let output = tokio_test::block_on(registry.invoke(SEARCH, "tesla")).unwrap();
        assert_eq!(output.text, "live results for tesla");
    }

    #[tokio::test]
    async fn test_invoke_default_search() {
        let registry = CapabilityRegistry::with_defaults();
        let output = registry.invoke(SEARCH, "banana").await.unwrap();
        assert_eq!(output.text, FALLBACK_FACT);
    }

    #[tokio::test]
    async fn test_invoke_unknown_capability() {
        let err = CapabilityRegistry::new().invoke("calculator", "1+1").await.unwrap_err();
        assert_eq!(err, CapabilityError::NotRegistered("calculator".to_string()));
    }

    #[test]
    fn test_ensure_covers() {
        let agent = Arc::new(
            Agent::new("Analyst", "goal", "backstory")
                .with_capability(READ_DOCUMENT)
                .with_capability(SEARCH),
        );
        let task = Task::builder("investment", agent.clone())
            .description("Recommend")
            .grant(READ_DOCUMENT)
            .grant(SEARCH)
            .step(ToolStep::ReadDocument)
            .step(ToolStep::Search)
            .build()
            .unwrap();
        let config = PipelineConfig::new(vec![agent], vec![task]).unwrap();

        assert!(CapabilityRegistry::with_defaults().ensure_covers(&config).is_ok());

        let partial = CapabilityRegistry::new().with(Arc::new(ReadDocumentCapability::new()));
        assert_eq!(
            partial.ensure_covers(&config).unwrap_err(),
            ConfigError::UnknownCapability(SEARCH.to_string())
        );
    }
}
