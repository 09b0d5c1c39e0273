//! Demo tool functions and the registry that exposes them to an
//! orchestrator.
//!
//! # Module Structure
//!
//! - [`weather_time`](crate::tools::weather_time) - Weather, time, timezone,
//!   temperature, and addition tools
//! - [`story`](crate::tools::story) - The three-step story workflow tools
//! - [`registry`](crate::tools::registry) - Tool registration and discovery
//!
//! # The Tool Contract
//!
//! Every tool is a pure, synchronous computation behind the async
//! [`Tool`](registry::Tool) registration trait. Tools accept a JSON object
//! of primitive arguments and return the uniform
//! [`ToolResponse`](crate::types::ToolResponse) record: `status: success`
//! with payload fields, or `status: error` with a human-readable message.
//! Input validation failures are error *responses*, not Rust errors; `Err`
//! only signals a malformed invocation (missing or mistyped arguments).
//!
//! ```ignore
//! let registry = ToolRegistry::with_default_tools();
//! let value = registry
//!     .execute("get_weather", json!({"city": "New York"}))
//!     .await?;
//! assert_eq!(value["status"], "success");
//! ```

/// Tool registry for managing available tools.
pub mod registry;
/// Story-workflow tools (collect, generate, match).
pub mod story;
/// Weather, time, and arithmetic tools.
pub mod weather_time;

pub use registry::{Tool, ToolRegistry};
