//! Domain layer for the finsight pipeline
//!
//! This module contains the agent, task and run models plus the port traits
//! the pipeline depends on.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{CapabilityError, ConfigError, LoadError, ReasoningError};
