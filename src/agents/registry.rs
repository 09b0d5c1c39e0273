//! Agent registry: named agent definitions plus the shared tool registry
//! they draw their tools from.
//!
//! Definitions come from three places, later ones replacing earlier ones by
//! name: the built-in demo agents, `[agents.*]` tables in `fable.toml`, and
//! explicit [`AgentRegistry::register`] calls.

use crate::agents::AgentDefinition;
use crate::tools::registry::ToolRegistry;
use crate::types::{AppError, Result, ToolDefinition};
use crate::utils::config::FableConfig;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of agent definitions, backed by a shared [`ToolRegistry`].
pub struct AgentRegistry {
    definitions: HashMap<String, AgentDefinition>,
    tool_registry: Arc<ToolRegistry>,
}

impl AgentRegistry {
    /// Create an empty registry over the given tool registry.
    pub fn new(tool_registry: Arc<ToolRegistry>) -> Self {
        Self {
            definitions: HashMap::new(),
            tool_registry,
        }
    }

    /// Registry pre-populated with the two demo agents.
    pub fn with_demo_agents(tool_registry: Arc<ToolRegistry>) -> Self {
        let mut registry = Self::new(tool_registry);
        registry.register(AgentDefinition::weather_time_agent());
        registry.register(AgentDefinition::story_orchestrator());
        registry
    }

    /// Register a definition under its own name, replacing any previous one.
    pub fn register(&mut self, definition: AgentDefinition) {
        tracing::debug!(agent = %definition.name, "registering agent");
        self.definitions
            .insert(definition.name.clone(), definition);
    }

    /// Look up an agent definition by name.
    pub fn get(&self, name: &str) -> Option<&AgentDefinition> {
        self.definitions.get(name)
    }

    /// Check whether an agent is registered.
    pub fn has_agent(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Names of all registered agents.
    pub fn agent_names(&self) -> Vec<String> {
        self.definitions.keys().cloned().collect()
    }

    /// The shared tool registry.
    pub fn tool_registry(&self) -> &Arc<ToolRegistry> {
        &self.tool_registry
    }

    /// Tool definitions for the named agent's allowed tools, ready to hand
    /// to the orchestrator. Tool names the registry does not know are
    /// skipped.
    pub fn tool_definitions_for(&self, name: &str) -> Result<Vec<ToolDefinition>> {
        let definition = self
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("Agent not found: {}", name)))?;
        let allowed: Vec<&str> = definition.tools.iter().map(|s| s.as_str()).collect();
        Ok(self.tool_registry.get_tool_definitions_for(&allowed))
    }
}

/// Builder for [`AgentRegistry`] with a fluent API.
pub struct AgentRegistryBuilder {
    definitions: HashMap<String, AgentDefinition>,
    tool_registry: Option<Arc<ToolRegistry>>,
}

impl AgentRegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
            tool_registry: None,
        }
    }

    /// Set the shared tool registry.
    pub fn with_tool_registry(mut self, registry: Arc<ToolRegistry>) -> Self {
        self.tool_registry = Some(registry);
        self
    }

    /// Add the two built-in demo agents.
    pub fn with_demo_agents(mut self) -> Self {
        for definition in [
            AgentDefinition::weather_time_agent(),
            AgentDefinition::story_orchestrator(),
        ] {
            self.definitions.insert(definition.name.clone(), definition);
        }
        self
    }

    /// Add a single agent definition.
    pub fn with_agent(mut self, definition: AgentDefinition) -> Self {
        self.definitions.insert(definition.name.clone(), definition);
        self
    }

    /// Add every `[agents.*]` table from the configuration, overriding
    /// same-named definitions added earlier.
    pub fn from_config(mut self, config: &FableConfig) -> Self {
        for (name, agent_config) in &config.agents {
            self.definitions.insert(
                name.clone(),
                AgentDefinition::from_config(name, agent_config),
            );
        }
        self
    }

    /// Build the registry. A missing tool registry defaults to the full
    /// demo tool set.
    pub fn build(self) -> AgentRegistry {
        let tool_registry = self
            .tool_registry
            .unwrap_or_else(|| Arc::new(ToolRegistry::with_default_tools()));

        AgentRegistry {
            definitions: self.definitions,
            tool_registry,
        }
    }
}

impl Default for AgentRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
