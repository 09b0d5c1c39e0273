use crate::types::{AppError, Result, ToolDefinition, ToolResponse};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Extract a required string argument from a tool's JSON args.
pub(crate) fn require_str<'a>(args: &'a Value, key: &str) -> Result<&'a str> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| AppError::InvalidInput(format!("Missing '{}' parameter", key)))
}

/// Extract a required numeric argument from a tool's JSON args.
pub(crate) fn require_f64(args: &Value, key: &str) -> Result<f64> {
    args.get(key)
        .and_then(|v| v.as_f64())
        .ok_or_else(|| AppError::InvalidInput(format!("Missing '{}' parameter", key)))
}

/// Serialize a tool response into the JSON wire form.
pub(crate) fn to_json(response: ToolResponse) -> Result<Value> {
    serde_json::to_value(response).map_err(|e| AppError::Internal(e.to_string()))
}

/// The registration contract every tool exposes to the orchestrator.
///
/// Tools accept a JSON object of primitive-typed arguments and return a JSON
/// serialization of [`ToolResponse`](crate::types::ToolResponse). A tool that
/// rejects its input still returns `Ok` with `status: error`; `Err` is
/// reserved for malformed invocations (missing or mistyped arguments).
#[async_trait]
pub trait Tool: Send + Sync {
    /// Stable name the orchestrator invokes this tool by.
    fn name(&self) -> &str;
    /// Short description for the orchestrator's intent matching.
    fn description(&self) -> &str;
    /// JSON schema of the tool's arguments.
    fn parameters_schema(&self) -> Value;
    /// Run the tool against a JSON argument object.
    async fn execute(&self, args: Value) -> Result<Value>;
}

/// Registry of named tools, shared with agent definitions.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry with both demo toolkits registered: the five
    /// weather/time tools and the three story-workflow tools.
    pub fn with_default_tools() -> Self {
        let mut registry = Self::new();

        registry.register(Arc::new(crate::tools::weather_time::WeatherTool));
        registry.register(Arc::new(crate::tools::weather_time::CurrentTimeTool::new()));
        registry.register(Arc::new(crate::tools::weather_time::TemperatureTool));
        registry.register(Arc::new(crate::tools::weather_time::CityTimezoneTool));
        registry.register(Arc::new(crate::tools::weather_time::AddNumbersTool));

        registry.register(Arc::new(crate::tools::story::CollectRequirementsTool));
        registry.register(Arc::new(crate::tools::story::GenerateOptionsTool));
        registry.register(Arc::new(crate::tools::story::MatchStoryTool));

        registry
    }

    /// Register a tool under its own name, replacing any previous entry.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        tracing::debug!(tool = tool.name(), "registering tool");
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Definitions of every registered tool, for orchestrator registration.
    pub fn get_tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.parameters_schema(),
            })
            .collect()
    }

    /// Definitions restricted to the given tool names (an agent's allowed
    /// set). Unknown names are silently skipped.
    pub fn get_tool_definitions_for(&self, names: &[&str]) -> Vec<ToolDefinition> {
        names
            .iter()
            .filter_map(|name| self.tools.get(*name))
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.parameters_schema(),
            })
            .collect()
    }

    /// Execute a registered tool by name.
    pub async fn execute(&self, name: &str, args: Value) -> Result<Value> {
        match self.tools.get(name) {
            Some(tool) => {
                tracing::debug!(tool = name, "executing tool");
                tool.execute(args).await
            }
            None => Err(AppError::NotFound(format!("Tool not found: {}", name))),
        }
    }

    /// Names of all registered tools.
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Check whether a tool is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }
}
