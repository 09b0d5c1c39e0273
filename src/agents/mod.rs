//! Agent definitions handed to an external orchestrator.
//!
//! An agent here is an opaque configuration record: a name, a model
//! reference, a description and system prompt for the orchestrator's intent
//! routing, and the list of tool names the agent may call. The orchestrator
//! itself (natural-language understanding, tool selection, workflow
//! sequencing) is an external collaborator and deliberately not implemented
//! in this crate.

pub mod registry;

pub use registry::{AgentRegistry, AgentRegistryBuilder};

use crate::utils::config::AgentConfig;
use serde::{Deserialize, Serialize};

/// Configuration record describing one agent to the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDefinition {
    /// Stable agent name.
    pub name: String,
    /// Model the orchestrator should drive this agent with.
    pub model: String,
    /// What the agent handles, for routing.
    pub description: String,
    /// System prompt handed to the model.
    pub instruction: String,
    /// Names of the tools this agent may call.
    pub tools: Vec<String>,
}

impl AgentDefinition {
    /// The weather/time demo agent with its five tools.
    pub fn weather_time_agent() -> Self {
        Self {
            name: "weather_time_agent".to_string(),
            model: "gemini-2.0-flash".to_string(),
            description: "Agent to answer questions about the time, integer addition, \
                          and weather in a city."
                .to_string(),
            instruction: "You are a helpful agent who can answer user questions about the \
                          time, integer addition, and weather in a city. Always respond \
                          using the response format returned by the tool functions."
                .to_string(),
            tools: vec![
                "get_weather".to_string(),
                "get_current_time".to_string(),
                "convert_temperature".to_string(),
                "get_city_timezone".to_string(),
                "add_two_numbers".to_string(),
            ],
        }
    }

    /// The story-workflow demo agent with its three tools.
    pub fn story_orchestrator() -> Self {
        Self {
            name: "story_orchestrator".to_string(),
            model: "gemini-2.0-flash".to_string(),
            description: "Agent that handles the complete story creation workflow: \
                          collecting requirements, generating options, and selecting \
                          the best match."
                .to_string(),
            instruction: "You are a story creation assistant that helps clients through a \
                          3-step process:\n\
                          1. First, collect detailed story requirements from the client \
                          using collect_client_story_requirements\n\
                          2. Then, generate 5 story options based on their requirements \
                          using generate_five_story_options\n\
                          3. Finally, select the best matching story using match_best_story\n\n\
                          Always follow this sequence and provide clear feedback at each \
                          step. Ask the client to describe what kind of story they want, \
                          then guide them through the complete process."
                .to_string(),
            tools: vec![
                "collect_client_story_requirements".to_string(),
                "generate_five_story_options".to_string(),
                "match_best_story".to_string(),
            ],
        }
    }

    /// Build a definition from a `[agents.*]` config table.
    ///
    /// Missing description/instruction fields fall back to a generic prompt
    /// derived from the agent name.
    pub fn from_config(name: &str, config: &AgentConfig) -> Self {
        Self {
            name: name.to_string(),
            model: config.model.clone(),
            description: config
                .description
                .clone()
                .unwrap_or_else(|| format!("The {} agent.", name)),
            instruction: config
                .system_prompt
                .clone()
                .unwrap_or_else(|| format!("You are a {} agent.", name)),
            tools: config.tools.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_time_agent_tools() {
        let agent = AgentDefinition::weather_time_agent();
        assert_eq!(agent.name, "weather_time_agent");
        assert_eq!(agent.tools.len(), 5);
        assert!(agent.tools.contains(&"get_weather".to_string()));
        assert!(agent.tools.contains(&"add_two_numbers".to_string()));
    }

    #[test]
    fn test_story_orchestrator_tools() {
        let agent = AgentDefinition::story_orchestrator();
        assert_eq!(agent.tools.len(), 3);
        assert!(agent.instruction.contains("match_best_story"));
    }

    #[test]
    fn test_from_config_fallback_prompt() {
        let config = AgentConfig {
            model: "default".to_string(),
            description: None,
            system_prompt: None,
            tools: vec!["get_weather".to_string()],
            extra: Default::default(),
        };

        let agent = AgentDefinition::from_config("forecaster", &config);
        assert_eq!(agent.model, "default");
        assert_eq!(agent.instruction, "You are a forecaster agent.");
        assert_eq!(agent.tools, vec!["get_weather".to_string()]);
    }
}
