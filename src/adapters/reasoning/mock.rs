//! Mock reasoning engine for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::errors::ReasoningError;
use crate::domain::models::ReasoningRequest;
use crate::domain::ports::ReasoningEngine;

/// Mock reasoning engine.
///
/// By default it echoes a deterministic digest of the request: the task
/// name, each expected section and each tool output. Individual tasks can
/// be given a fixed response or made to fail. Every request is recorded.
#[derive(Debug, Clone, Default)]
pub struct MockReasoner {
    responses: HashMap<String, String>,
    failures: HashMap<String, String>,
    requests: Arc<RwLock<Vec<ReasoningRequest>>>,
}

impl MockReasoner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `text` whenever `task` is executed.
    pub fn with_response(mut self, task: impl Into<String>, text: impl Into<String>) -> Self {
        self.responses.insert(task.into(), text.into());
        self
    }

    /// Fail with `message` whenever `task` is executed.
    pub fn failing_on(mut self, task: impl Into<String>, message: impl Into<String>) -> Self {
        self.failures.insert(task.into(), message.into());
        self
    }

    /// Requests received so far, in call order.
    pub async fn requests(&self) -> Vec<ReasoningRequest> {
        self.requests.read().await.clone()
    }

    /// Most recent request for `task`.
    pub async fn request_for(&self, task: &str) -> Option<ReasoningRequest> {
        self.requests
            .read()
            .await
            .iter()
            .rev()
            .find(|r| r.task == task)
            .cloned()
    }
}

fn digest(request: &ReasoningRequest) -> String {
    let mut lines = vec![format!("[{}] {}", request.task, request.role)];
    lines.extend(request.expected_output.iter().map(|s| format!("## {s}")));
    lines.extend(
        request
            .tool_outputs
            .iter()
            .map(|o| format!("{}: {}", o.capability, o.text)),
    );
    lines.join("\n")
}

#[async_trait]
impl ReasoningEngine for MockReasoner {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(&self, request: &ReasoningRequest) -> Result<String, ReasoningError> {
        self.requests.write().await.push(request.clone());

        if let Some(message) = self.failures.get(&request.task) {
            return Err(ReasoningError::Failed(message.clone()));
        }
        Ok(self
            .responses
            .get(&request.task)
            .cloned()
            .unwrap_or_else(|| digest(request)))
    }
}
