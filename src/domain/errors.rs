//! Domain errors for the finsight pipeline.
//!
//! Only [`ConfigError`] ever escapes to a caller of the pipeline. The other
//! enums are converted into task statuses at the task boundary.

use thiserror::Error;

/// Errors produced while loading a document from disk.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("File not found at path: {0}")]
    NotFound(String),

    #[error("Unsupported file format '{0}'. Please provide a .pdf or .txt file")]
    UnsupportedFormat(String),

    #[error("Failed to extract text: {0}")]
    ExtractionFailed(String),
}

/// Errors raised by a capability invocation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CapabilityError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Capability '{0}' is not registered")]
    NotRegistered(String),

    #[error("Capability '{name}' failed: {message}")]
    Internal { name: String, message: String },
}

/// Errors raised by the reasoning collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReasoningError {
    #[error("Reasoning failed: {0}")]
    Failed(String),

    #[error("Reasoning timed out after {0}s")]
    Timeout(u64),

    #[error("Reasoning backend unavailable: {0}")]
    Unavailable(String),

    #[error("Reasoning backend returned an empty response")]
    EmptyResponse,
}

/// Pipeline configuration mistakes, detected before any run starts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Task '{task}' grants capability '{capability}' which agent '{role}' does not hold")]
    CapabilityNotGranted {
        task: String,
        role: String,
        capability: String,
    },

    #[error("Task '{task}' declares a step using capability '{capability}' that was not granted")]
    StepNotGranted { task: String, capability: String },

    #[error("Task '{0}' must read the document before any other step")]
    ReadDocumentNotFirst(String),

    #[error("Agent '{0}' allows delegation, which the sequential process does not support")]
    DelegationUnsupported(String),

    #[error("Task '{task}' is assigned to unknown agent '{role}'")]
    UnknownAgent { task: String, role: String },

    #[error("Capability '{0}' is not registered")]
    UnknownCapability(String),

    #[error("Duplicate {kind} '{name}'")]
    Duplicate { kind: &'static str, name: String },

    #[error("Pipeline has no tasks")]
    EmptyPipeline,

    #[error("{0} cannot be empty")]
    EmptyField(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
