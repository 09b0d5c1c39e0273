//! Core types shared across the crate: the uniform tool response record,
//! tool definitions for orchestrator registration, and error handling.

use serde::{Deserialize, Serialize};

// ============= Tool Response Types =============

/// Outcome of a tool invocation.
///
/// Every tool reports exactly one of these two variants; a validation
/// failure is `Error`, never a process-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    /// The tool produced a payload.
    Success,
    /// The tool rejected its input; `error_message` explains why.
    Error,
}

/// The uniform response record returned by every tool function.
///
/// On success exactly the payload fields relevant to the tool are set; on
/// error only `error_message` is set. The constructors are the only way to
/// build a response, which keeps the two sides mutually exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Whether the invocation succeeded.
    pub status: ToolStatus,
    /// Human-readable report (weather, time, timezone tools).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    /// Computation result message (integer addition).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Ordered story drafts (story generation).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stories: Option<Vec<String>>,
    /// The story chosen by the matcher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_story: Option<String>,
    /// Why the matcher chose `selected_story`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Cleaned client requirements (requirement collection).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_description: Option<String>,
    /// Explanation of a rejected input; set only when `status` is `Error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ToolResponse {
    fn success() -> Self {
        Self {
            status: ToolStatus::Success,
            report: None,
            result: None,
            stories: None,
            selected_story: None,
            reason: None,
            client_description: None,
            error_message: None,
        }
    }

    /// Success carrying a `report` payload.
    pub fn report(report: impl Into<String>) -> Self {
        Self {
            report: Some(report.into()),
            ..Self::success()
        }
    }

    /// Success carrying a `result` payload.
    pub fn result(result: impl Into<String>) -> Self {
        Self {
            result: Some(result.into()),
            ..Self::success()
        }
    }

    /// Success carrying an ordered list of story drafts.
    pub fn stories(stories: Vec<String>) -> Self {
        Self {
            stories: Some(stories),
            ..Self::success()
        }
    }

    /// Success carrying the selected story and the selection reason.
    pub fn selection(selected_story: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            selected_story: Some(selected_story.into()),
            reason: Some(reason.into()),
            ..Self::success()
        }
    }

    /// Success carrying the cleaned client description.
    pub fn client_description(description: impl Into<String>) -> Self {
        Self {
            client_description: Some(description.into()),
            ..Self::success()
        }
    }

    /// Error response with a human-readable message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ToolStatus::Error,
            report: None,
            result: None,
            stories: None,
            selected_story: None,
            reason: None,
            client_description: None,
            error_message: Some(message.into()),
        }
    }

    /// Whether this response carries a success payload.
    pub fn is_success(&self) -> bool {
        self.status == ToolStatus::Success
    }
}

// ============= Tool Registration Types =============

/// Schema describing a tool to the external orchestrator.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ToolDefinition {
    /// Stable tool name the orchestrator invokes by.
    pub name: String,
    /// What the tool does, for intent matching.
    pub description: String,
    /// JSON schema of the tool's arguments.
    pub parameters: serde_json::Value,
}

// ============= Error Types =============

/// Process-level errors, distinct from a tool's `status: error` response
/// (which is part of the normal wire contract).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A tool was invoked with missing or mistyped arguments.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A tool or agent name is not registered.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Anything else.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AppError>;
