//! TOML configuration (`fable.toml`).
//!
//! Everything is optional: a missing file yields the defaults, and the
//! built-in demo agents are used unless `[agents.*]` tables override them.

use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Top-level configuration loaded from `fable.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FableConfig {
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
    /// Agent definitions keyed by name.
    #[serde(default)]
    pub agents: HashMap<String, AgentConfig>,
}

/// `[log]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Default tracing filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// One `[agents.<name>]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Model the orchestrator should use for this agent.
    pub model: String,

    /// What the agent handles, for routing.
    #[serde(default)]
    pub description: Option<String>,

    /// System prompt for the agent.
    #[serde(default)]
    pub system_prompt: Option<String>,

    /// List of tool names this agent can use.
    #[serde(default)]
    pub tools: Vec<String>,

    /// Additional agent-specific configuration, passed through untouched.
    #[serde(flatten)]
    pub extra: HashMap<String, toml::Value>,
}

impl FableConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error; it yields [`FableConfig::default`].
    /// An unreadable or unparsable file is.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(AppError::Configuration(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        toml::from_str(&contents).map_err(|e| {
            AppError::Configuration(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}
