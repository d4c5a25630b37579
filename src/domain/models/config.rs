use serde::{Deserialize, Serialize};

use super::pipeline::GatingMode;

/// Main configuration structure for finsight
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Pipeline execution configuration
    #[serde(default)]
    pub pipeline: PipelineSettings,

    /// Reasoning collaborator configuration
    #[serde(default)]
    pub reasoning: ReasoningConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; stderr only when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,

    /// File rotation: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

/// Pipeline execution configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PipelineSettings {
    /// Whether a failed verification stops the run
    #[serde(default)]
    pub gating: GatingMode,

    /// YAML pipeline definition; the built-in financial pipeline when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

/// Reasoning collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ReasoningConfig {
    /// Backend: outline (offline) or command (external process)
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Executable for the command backend
    #[serde(default)]
    pub command: String,

    /// Arguments for the command backend
    #[serde(default)]
    pub args: Vec<String>,

    /// Per-call timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_backend() -> String {
    "outline".to_string()
}

const fn default_timeout_secs() -> u64 {
    300
}

impl Default for ReasoningConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            command: String::new(),
            args: vec![],
            timeout_secs: default_timeout_secs(),
        }
    }
}
