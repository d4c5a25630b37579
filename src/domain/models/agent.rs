use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::errors::{ConfigError, ConfigResult};

/// A role-bound execution identity with a fixed set of capabilities.
///
/// Agents are immutable configuration; share them with `Arc<Agent>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Role name, unique within a pipeline (e.g. "Senior Financial Analyst")
    pub role: String,

    /// What the agent is trying to achieve
    pub goal: String,

    /// Context handed to the reasoning collaborator
    pub backstory: String,

    /// Names of capabilities this agent may invoke
    pub capabilities: BTreeSet<String>,

    /// Must stay false: agents never hand work to other agents
    #[serde(default)]
    pub allow_delegation: bool,
}

impl Agent {
    /// Create an agent without capabilities.
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
            capabilities: BTreeSet::new(),
            allow_delegation: false,
        }
    }

    pub fn with_capability(mut self, name: impl Into<String>) -> Self {
        self.capabilities.insert(name.into());
        self
    }

    pub fn with_delegation(mut self, allow: bool) -> Self {
        self.allow_delegation = allow;
        self
    }

    pub fn holds(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }

    /// Check the agent is usable by the sequential process.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.role.trim().is_empty() {
            return Err(ConfigError::EmptyField("Agent role".to_string()));
        }
        if self.goal.trim().is_empty() {
            return Err(ConfigError::EmptyField(format!("Goal of agent '{}'", self.role)));
        }
        if self.allow_delegation {
            return Err(ConfigError::DelegationUnsupported(self.role.clone()));
        }
        Ok(())
    }
}
