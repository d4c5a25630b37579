//! Capability names, tool steps and capability output.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::run::RunInputs;

/// Registry name of the document-reading capability.
pub const READ_DOCUMENT: &str = "read_financial_document";

/// Registry name of the market-search capability.
pub const SEARCH: &str = "search_financial_information";

/// One explicit tool invocation a task performs, in declared order.
///
/// Each step knows which capability it dispatches to and which part of the
/// run inputs it feeds that capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolStep {
    /// Read the document at `inputs.file_path`.
    ReadDocument,
    /// Search with `inputs.query`.
    Search,
}

impl ToolStep {
    pub fn capability_name(&self) -> &'static str {
        match self {
            Self::ReadDocument => READ_DOCUMENT,
            Self::Search => SEARCH,
        }
    }

    pub fn input<'a>(&self, inputs: &'a RunInputs) -> &'a str {
        match self {
            Self::ReadDocument => &inputs.file_path,
            Self::Search => &inputs.query,
        }
    }
}

impl fmt::Display for ToolStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadDocument => f.write_str("read_document"),
            Self::Search => f.write_str("search"),
        }
    }
}

/// Text returned by a capability, with any soft warnings it raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityOutput {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl CapabilityOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }
}

impl From<String> for CapabilityOutput {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_binds_to_run_inputs() {
        let inputs = RunInputs::new("data/report.pdf", "tesla outlook");
        assert_eq!(ToolStep::ReadDocument.input(&inputs), "data/report.pdf");
        assert_eq!(ToolStep::Search.input(&inputs), "tesla outlook");
        assert_eq!(ToolStep::ReadDocument.capability_name(), READ_DOCUMENT);
        assert_eq!(ToolStep::Search.capability_name(), SEARCH);
    }

    #[test]
    fn test_step_serializes_snake_case() {
        let yaml = serde_yaml::to_string(&vec![ToolStep::ReadDocument, ToolStep::Search]).unwrap();
        assert!(yaml.contains("read_document"));
        assert!(yaml.contains("search"));
    }
}
