//! External-process reasoning backend.
//!
//! Spawns a configured command, writes the [`ReasoningRequest`] as JSON to
//! its stdin and takes its stdout as the produced text.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::{timeout, Duration};

use crate::domain::errors::ReasoningError;
use crate::domain::models::{ReasoningConfig, ReasoningRequest};
use crate::domain::ports::ReasoningEngine;

/// Command reasoner configuration.
#[derive(Debug, Clone)]
pub struct CommandReasonerConfig {
    /// Executable to spawn
    pub program: String,
    /// Arguments passed on every call
    pub args: Vec<String>,
    /// Seconds before the child is killed
    pub timeout_secs: u64,
}

impl Default for CommandReasonerConfig {
    fn default() -> Self {
        Self {
            program: String::new(),
            args: vec![],
            timeout_secs: 300,
        }
    }
}

impl From<&ReasoningConfig> for CommandReasonerConfig {
    fn from(config: &ReasoningConfig) -> Self {
        Self {
            program: config.command.clone(),
            args: config.args.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

/// Delegates generation to an external program.
#[derive(Debug, Clone)]
pub struct CommandReasoner {
    config: CommandReasonerConfig,
}

impl CommandReasoner {
    pub fn new(config: CommandReasonerConfig) -> Self {
        Self { config }
    }

    async fn run(&self, payload: Vec<u8>) -> Result<String, ReasoningError> {
        let mut child = Command::new(&self.config.program)
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                ReasoningError::Unavailable(format!("failed to spawn {}: {e}", self.config.program))
            })?;

        // stdin is fed while stdout drains; closing it on drop signals EOF
        let stdin = child.stdin.take();
        let feed = async move {
            if let Some(mut stdin) = stdin {
                // A child that exits without reading stdin is judged by its exit status
                if let Err(e) = stdin.write_all(&payload).await {
                    tracing::debug!(error = %e, "reasoning command did not accept request payload");
                }
            }
        };

        let ((), output) = tokio::join!(feed, child.wait_with_output());
        let output =
            output.map_err(|e| ReasoningError::Failed(format!("failed to wait for process: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if stderr.trim().is_empty() {
                format!("process exited with code: {:?}", output.status.code())
            } else {
                stderr.trim().to_string()
            };
            return Err(ReasoningError::Failed(message));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if text.is_empty() {
            return Err(ReasoningError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl ReasoningEngine for CommandReasoner {
    fn name(&self) -> &'static str {
        "command"
    }

    async fn generate(&self, request: &ReasoningRequest) -> Result<String, ReasoningError> {
        let payload = serde_json::to_vec(request)
            .map_err(|e| ReasoningError::Failed(format!("failed to encode request: {e}")))?;

        match timeout(Duration::from_secs(self.config.timeout_secs), self.run(payload)).await {
            Ok(result) => result,
            Err(_) => Err(ReasoningError::Timeout(self.config.timeout_secs)),
        }
    }
}
