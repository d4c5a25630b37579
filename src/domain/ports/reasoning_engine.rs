//! Reasoning port - interface for the collaborator that writes task output.

use async_trait::async_trait;

use crate::domain::errors::ReasoningError;
use crate::domain::models::ReasoningRequest;

/// Produces a task's text from its role, instructions and tool outputs.
///
/// The pipeline treats implementations as opaque and fallible. Each call is
/// awaited to completion before the next task starts.
#[async_trait]
pub trait ReasoningEngine: Send + Sync {
    /// Backend name for logs.
    fn name(&self) -> &'static str;

    /// Generate the produced text for one task.
    async fn generate(&self, request: &ReasoningRequest) -> Result<String, ReasoningError>;
}
