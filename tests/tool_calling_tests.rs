//! Integration tests for the tool registration contract.
//!
//! These exercise the full path an orchestrator would take: discover tool
//! definitions, invoke tools with JSON arguments, and consume the uniform
//! success/error response record.

use fable::tools::{Tool, ToolRegistry};
use fable::types::ToolDefinition;
use serde_json::json;

#[test]
fn test_tool_registry_initialization() {
    let registry = ToolRegistry::with_default_tools();
    let tools = registry.tool_names();

    assert_eq!(tools.len(), 8, "both toolkits should be registered");
    assert!(registry.has_tool("get_weather"));
    assert!(registry.has_tool("get_current_time"));
    assert!(registry.has_tool("convert_temperature"));
    assert!(registry.has_tool("get_city_timezone"));
    assert!(registry.has_tool("add_two_numbers"));
    assert!(registry.has_tool("collect_client_story_requirements"));
    assert!(registry.has_tool("generate_five_story_options"));
    assert!(registry.has_tool("match_best_story"));
}

#[test]
fn test_tool_definitions_schema() {
    let registry = ToolRegistry::with_default_tools();
    let definitions = registry.get_tool_definitions();

    for def in &definitions {
        assert!(!def.name.is_empty(), "Tool name should not be empty");
        assert!(
            !def.description.is_empty(),
            "Tool description should not be empty"
        );
        assert!(
            def.parameters.is_object(),
            "Tool parameters should be an object"
        );

        // Function-calling compatibility: every schema is an object with
        // properties and a required list.
        let params = &def.parameters;
        assert_eq!(params["type"], "object");
        assert!(params.get("properties").is_some());
        assert!(params["required"].is_array());
    }
}

#[test]
fn test_tool_definitions_serialize_for_llm() {
    let registry = ToolRegistry::with_default_tools();

    for def in &registry.get_tool_definitions() {
        let serialized = serde_json::to_string(def).unwrap();
        let deserialized: ToolDefinition = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized.name, def.name);
        assert_eq!(deserialized.description, def.description);
    }
}

#[tokio::test]
async fn test_weather_tool_execution() {
    let registry = ToolRegistry::with_default_tools();

    let value = registry
        .execute("get_weather", json!({"city": "New York"}))
        .await
        .unwrap();
    assert_eq!(value["status"], "success");
    let report = value["report"].as_str().unwrap();
    assert!(report.contains("sunny"));
    assert!(report.contains("25 degrees"));

    let value = registry
        .execute("get_weather", json!({"city": "Paris"}))
        .await
        .unwrap();
    assert_eq!(value["status"], "error");
    assert!(value["error_message"].as_str().unwrap().contains("Paris"));
}

#[tokio::test]
async fn test_temperature_tool_execution() {
    let registry = ToolRegistry::with_default_tools();

    let value = registry
        .execute(
            "convert_temperature",
            json!({"temperature": 0.0, "from_unit": "C", "to_unit": "F"}),
        )
        .await
        .unwrap();
    assert_eq!(value["status"], "success");
    assert!(value["report"].as_str().unwrap().contains("32.00°F"));

    // Identity conversion, no drift.
    let value = registry
        .execute(
            "convert_temperature",
            json!({"temperature": 100.0, "from_unit": "C", "to_unit": "C"}),
        )
        .await
        .unwrap();
    assert!(value["report"].as_str().unwrap().contains("100.00°C"));

    // Invalid unit is an error response, not a transport failure.
    let value = registry
        .execute(
            "convert_temperature",
            json!({"temperature": 0.0, "from_unit": "X", "to_unit": "C"}),
        )
        .await
        .unwrap();
    assert_eq!(value["status"], "error");
}

#[tokio::test]
async fn test_timezone_tool_execution() {
    let registry = ToolRegistry::with_default_tools();

    let value = registry
        .execute("get_city_timezone", json!({"city": "Tokyo"}))
        .await
        .unwrap();
    assert_eq!(value["status"], "success");
    assert!(value["report"].as_str().unwrap().contains("Asia/Tokyo"));

    let value = registry
        .execute("get_city_timezone", json!({"city": "Berlin"}))
        .await
        .unwrap();
    assert_eq!(value["status"], "error");
}

#[tokio::test]
async fn test_addition_tool_execution() {
    let registry = ToolRegistry::with_default_tools();

    let value = registry
        .execute("add_two_numbers", json!({"num1": 19, "num2": 23}))
        .await
        .unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["result"], "The result is 42.");

    let value = registry
        .execute("add_two_numbers", json!({"num1": 1.5, "num2": 2}))
        .await
        .unwrap();
    assert_eq!(value["status"], "error");
}

#[tokio::test]
async fn test_story_workflow_end_to_end() {
    let registry = ToolRegistry::with_default_tools();

    // Step 1: collect requirements.
    let collected = registry
        .execute(
            "collect_client_story_requirements",
            json!({"description": "  an epic tale of magic and adventure  "}),
        )
        .await
        .unwrap();
    assert_eq!(collected["status"], "success");
    let description = collected["client_description"].as_str().unwrap();
    assert_eq!(description, "an epic tale of magic and adventure");

    // Step 2: generate options.
    let generated = registry
        .execute("generate_five_story_options", json!({"theme": "dragons"}))
        .await
        .unwrap();
    assert_eq!(generated["status"], "success");
    let stories = generated["stories"].as_array().unwrap();
    assert_eq!(stories.len(), 5);
    for story in stories {
        assert!(story.as_str().unwrap().contains("dragons"));
    }

    // Step 3: match, feeding step 2's output through unmodified.
    let matched = registry
        .execute(
            "match_best_story",
            json!({
                "client_description": description,
                "stories": stories,
            }),
        )
        .await
        .unwrap();
    assert_eq!(matched["status"], "success");
    assert!(matched["selected_story"]
        .as_str()
        .unwrap()
        .contains("fantasy epic"));
    assert!(matched["reason"].as_str().unwrap().contains("score"));
}

#[tokio::test]
async fn test_story_matching_is_stable_across_calls() {
    let registry = ToolRegistry::with_default_tools();

    let stories = registry
        .execute("generate_five_story_options", json!({"theme": "the sea"}))
        .await
        .unwrap()["stories"]
        .clone();

    let args = json!({
        "client_description": "a quest with hidden secrets",
        "stories": stories,
    });

    let first = registry
        .execute("match_best_story", args.clone())
        .await
        .unwrap();
    let second = registry.execute("match_best_story", args).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_invalid_tool_name() {
    let registry = ToolRegistry::with_default_tools();

    let result = registry.execute("nonexistent_tool", json!({})).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not found"));
}

#[tokio::test]
async fn test_missing_arguments_are_invocation_errors() {
    let registry = ToolRegistry::with_default_tools();

    // A missing argument is a malformed invocation (Err), unlike a bad
    // value, which is a normal error response.
    let result = registry.execute("get_weather", json!({})).await;
    assert!(result.is_err());

    let result = registry
        .execute("convert_temperature", json!({"temperature": 0.0}))
        .await;
    assert!(result.is_err());
}

#[test]
fn test_custom_tool_registration() {
    use async_trait::async_trait;
    use std::sync::Arc;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes back the input"
        }

        fn parameters_schema(&self) -> serde_json::Value {
            json!({
                "type": "object",
                "properties": {
                    "message": { "type": "string" }
                },
                "required": ["message"]
            })
        }

        async fn execute(&self, args: serde_json::Value) -> fable::types::Result<serde_json::Value> {
            Ok(json!({ "echo": args["message"] }))
        }
    }

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(EchoTool));

    assert!(registry.has_tool("echo"));
    assert_eq!(registry.tool_names().len(), 1);
}
