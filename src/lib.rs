//! # fable - demo tool agents for LLM orchestrators
//!
//! Two small demonstration agents built on a uniform tool contract: a
//! weather/time toolkit (weather lookup, current time, temperature
//! conversion, timezone table, integer addition) and a three-step
//! creative-writing workflow (collect requirements, generate options, pick
//! the best match).
//!
//! Every tool is a pure, stateless function over literal inputs exposed
//! through the async [`Tool`](tools::Tool) registration trait, returning the
//! uniform [`ToolResponse`](types::ToolResponse) record (`status: success`
//! with payload fields, or `status: error` with a message). The agent
//! objects themselves are opaque configuration records for an external
//! LLM orchestrator; that orchestrator is out of scope here.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fable::ToolRegistry;
//! use serde_json::json;
//!
//! let registry = ToolRegistry::with_default_tools();
//! let value = registry
//!     .execute("get_weather", json!({"city": "New York"}))
//!     .await?;
//! assert_eq!(value["status"], "success");
//! ```
//!
//! ## Registering the demo agents
//!
//! ```rust,ignore
//! use fable::{AgentRegistryBuilder, ToolRegistry};
//! use std::sync::Arc;
//!
//! let tools = Arc::new(ToolRegistry::with_default_tools());
//! let agents = AgentRegistryBuilder::new()
//!     .with_tool_registry(tools)
//!     .with_demo_agents()
//!     .build();
//!
//! // Hand these to the orchestrator's registration API.
//! let definitions = agents.tool_definitions_for("story_orchestrator")?;
//! ```
//!
//! ## Modules
//!
//! - [`tools`] - The tool functions and their registry
//! - [`agents`] - Agent definition records and their registry
//! - [`types`] - The response record, tool definitions, errors
//! - [`utils`] - TOML configuration
//! - [`cli`] - Command-line interface for the `fable` binary

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Agent definition records and their registry.
pub mod agents;
/// Command-line interface.
pub mod cli;
/// Demo tools (weather/time, story workflow) and the tool registry.
pub mod tools;
/// Core types (tool responses, definitions, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use agents::{AgentDefinition, AgentRegistry, AgentRegistryBuilder};
pub use tools::registry::{Tool, ToolRegistry};
pub use types::{AppError, Result, ToolDefinition, ToolResponse, ToolStatus};
pub use utils::config::{AgentConfig, FableConfig};
