//! Story toolkit: the three tools behind the demo creative-writing workflow.
//!
//! The external orchestrator sequences them: collect the client's
//! requirements, generate five drafts from a theme, then match the best
//! draft against the requirements. Each tool is pure and deterministic; the
//! "generation" is template interpolation, not sampling.

use crate::tools::registry::{require_str, to_json, Tool};
use crate::types::{AppError, Result, ToolResponse};
use async_trait::async_trait;
use serde_json::{json, Value};

/// Minimum length (in characters, after trimming) for a usable client
/// description.
const MIN_DESCRIPTION_LEN: usize = 10;

/// The five narrative-genre templates, in fixed order. `{}` is the theme.
const STORY_TEMPLATES: [&str; 5] = [
    "A mystery tale about {} where the protagonist discovers hidden secrets in an unexpected place.",
    "An adventure story featuring {} with characters who must overcome personal fears to succeed.",
    "A romantic drama centered on {} exploring how relationships change under pressure.",
    "A fantasy epic involving {} where magic and reality collide in surprising ways.",
    "A coming-of-age story about {} following a character's journey of self-discovery.",
];

/// Keyword sets per genre label, used by the matching heuristic.
const GENRE_KEYWORDS: [(&str, &[&str]); 5] = [
    ("mystery", &["mystery", "secrets", "hidden", "discover"]),
    ("adventure", &["adventure", "journey", "quest", "overcome"]),
    ("romance", &["love", "romantic", "relationship", "heart"]),
    ("fantasy", &["magic", "fantasy", "magical", "epic"]),
    ("coming-of-age", &["growing", "learning", "discovery", "young"]),
];

/// Validate and clean a client's free-text story requirements.
///
/// Trims surrounding whitespace and rejects descriptions shorter than ten
/// characters; otherwise returns the trimmed text unchanged.
pub fn collect_client_story_requirements(description: &str) -> ToolResponse {
    let trimmed = description.trim();
    if trimmed.chars().count() < MIN_DESCRIPTION_LEN {
        return ToolResponse::error("Description is too brief. Please provide more details.");
    }
    ToolResponse::client_description(trimmed)
}

/// Produce the five story drafts for a theme, in fixed genre order.
///
/// Deterministic: the same theme always yields the same five strings.
pub fn generate_five_story_options(theme: &str) -> ToolResponse {
    if theme.trim().is_empty() {
        return ToolResponse::error(
            "No theme provided. Please give a theme to generate stories from.",
        );
    }

    let stories = STORY_TEMPLATES
        .iter()
        .map(|template| template.replacen("{}", theme, 1))
        .collect();
    ToolResponse::stories(stories)
}

/// Keyword-match score of one story against the client description.
///
/// For every keyword the description mentions: 2 points if the story
/// contains that exact keyword, otherwise 1 point if the story contains any
/// keyword from the same genre set. Both sides are compared lower-cased.
fn story_score(description_lower: &str, story_lower: &str) -> u32 {
    let mut score = 0;
    for (_, keywords) in GENRE_KEYWORDS.iter() {
        for keyword in keywords.iter() {
            if !description_lower.contains(keyword) {
                continue;
            }
            if story_lower.contains(keyword) {
                score += 2;
            } else if keywords.iter().any(|k| story_lower.contains(k)) {
                score += 1;
            }
        }
    }
    score
}

/// Pick the story that best matches the client description.
///
/// Scores every candidate with [`story_score`] and selects the maximum;
/// ties go to the earliest story in the list. Errors when either input is
/// empty.
pub fn match_best_story(client_description: &str, stories: &[String]) -> ToolResponse {
    if client_description.is_empty() || stories.is_empty() {
        return ToolResponse::error("Client description or story list is missing.");
    }

    let description_lower = client_description.to_lowercase();

    let mut best_index = 0;
    let mut best_score = 0;
    for (index, story) in stories.iter().enumerate() {
        let score = story_score(&description_lower, &story.to_lowercase());
        // Strictly greater keeps the earliest story on ties.
        if index == 0 || score > best_score {
            best_index = index;
            best_score = score;
        }
    }

    ToolResponse::selection(
        stories[best_index].clone(),
        format!(
            "Selected story {} based on thematic alignment (score: {})",
            best_index + 1,
            best_score
        ),
    )
}

// ============= Tool wrappers =============

/// Registry wrapper for [`collect_client_story_requirements`].
pub struct CollectRequirementsTool;

#[async_trait]
impl Tool for CollectRequirementsTool {
    fn name(&self) -> &str {
        "collect_client_story_requirements"
    }

    fn description(&self) -> &str {
        "Collects the client's desired story details"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "description": {
                    "type": "string",
                    "description": "Client's explanation of how they want the story to be"
                }
            },
            "required": ["description"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let description = require_str(&args, "description")?;
        to_json(collect_client_story_requirements(description))
    }
}

/// Registry wrapper for [`generate_five_story_options`].
pub struct GenerateOptionsTool;

#[async_trait]
impl Tool for GenerateOptionsTool {
    fn name(&self) -> &str {
        "generate_five_story_options"
    }

    fn description(&self) -> &str {
        "Generates 5 different story drafts based on a given theme"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "theme": {
                    "type": "string",
                    "description": "The main idea or direction to build stories around"
                }
            },
            "required": ["theme"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let theme = require_str(&args, "theme")?;
        to_json(generate_five_story_options(theme))
    }
}

/// Registry wrapper for [`match_best_story`].
pub struct MatchStoryTool;

#[async_trait]
impl Tool for MatchStoryTool {
    fn name(&self) -> &str {
        "match_best_story"
    }

    fn description(&self) -> &str {
        "Matches the best story based on client description"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "client_description": {
                    "type": "string",
                    "description": "What the client wants the story to be like"
                },
                "stories": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "List of 5 generated stories"
                }
            },
            "required": ["client_description", "stories"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let client_description = require_str(&args, "client_description")?;
        let stories: Vec<String> = args
            .get("stories")
            .and_then(|v| v.as_array())
            .ok_or_else(|| AppError::InvalidInput("Missing 'stories' parameter".to_string()))?
            .iter()
            .map(|v| {
                v.as_str().map(String::from).ok_or_else(|| {
                    AppError::InvalidInput("'stories' must be an array of strings".to_string())
                })
            })
            .collect::<Result<_>>()?;
        to_json(match_best_story(client_description, &stories))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragon_stories() -> Vec<String> {
        generate_five_story_options("dragons").stories.unwrap()
    }

    #[test]
    fn test_collect_trims_and_returns_description() {
        let response = collect_client_story_requirements("  a tale of two cities  ");
        assert!(response.is_success());
        assert_eq!(
            response.client_description.unwrap(),
            "a tale of two cities"
        );
    }

    #[test]
    fn test_collect_rejects_brief_description() {
        let response = collect_client_story_requirements("   short   ");
        assert!(!response.is_success());
        assert!(response.error_message.unwrap().contains("too brief"));
    }

    #[test]
    fn test_collect_boundary_length() {
        // Nine trimmed characters fail, ten pass.
        assert!(!collect_client_story_requirements("123456789").is_success());
        assert!(collect_client_story_requirements("1234567890").is_success());
    }

    #[test]
    fn test_generate_five_options_interpolates_theme() {
        let response = generate_five_story_options("dragons");
        assert!(response.is_success());
        let stories = response.stories.unwrap();
        assert_eq!(stories.len(), 5);
        for story in &stories {
            assert!(story.contains("dragons"));
        }
        // Fixed genre order.
        assert!(stories[0].starts_with("A mystery tale"));
        assert!(stories[1].starts_with("An adventure story"));
        assert!(stories[2].starts_with("A romantic drama"));
        assert!(stories[3].starts_with("A fantasy epic"));
        assert!(stories[4].starts_with("A coming-of-age story"));
    }

    #[test]
    fn test_generate_rejects_blank_theme() {
        assert!(!generate_five_story_options("").is_success());
        assert!(!generate_five_story_options("   ").is_success());
    }

    #[test]
    fn test_match_prefers_strongest_keyword_overlap() {
        let stories = dragon_stories();
        let response =
            match_best_story("I want a story full of magic and epic adventure", &stories);
        assert!(response.is_success());
        // "magic" and "epic" both appear literally in the fantasy draft.
        assert_eq!(response.selected_story.unwrap(), stories[3]);
        assert_eq!(
            response.reason.unwrap(),
            "Selected story 4 based on thematic alignment (score: 4)"
        );
    }

    #[test]
    fn test_match_is_deterministic() {
        let stories = dragon_stories();
        let first = match_best_story("a quest to discover hidden secrets", &stories);
        let second = match_best_story("a quest to discover hidden secrets", &stories);
        assert_eq!(first, second);
    }

    #[test]
    fn test_match_tie_breaks_to_first_story() {
        let stories = dragon_stories();
        // No keyword appears in this description, so every story scores 0.
        let response = match_best_story("something completely unrelated", &stories);
        assert!(response.is_success());
        assert_eq!(response.selected_story.unwrap(), stories[0]);
        assert!(response.reason.unwrap().contains("story 1"));
    }

    #[test]
    fn test_match_rejects_missing_inputs() {
        let stories = dragon_stories();
        assert!(!match_best_story("", &stories).is_success());
        assert!(!match_best_story("a long enough description", &[]).is_success());
    }

    #[test]
    fn test_partial_credit_for_same_genre_keywords() {
        // Description mentions "journey"; the coming-of-age draft contains
        // "journey" literally (2 points), the adventure draft carries
        // "adventure" and "overcome" from the same set (1 point).
        let stories = dragon_stories();
        let response = match_best_story("a journey far from home", &stories);
        assert_eq!(response.selected_story.unwrap(), stories[4]);
    }

    #[tokio::test]
    async fn test_match_tool_parses_story_array() {
        let tool = MatchStoryTool;
        let value = tool
            .execute(json!({
                "client_description": "magic and epic adventure",
                "stories": dragon_stories(),
            }))
            .await
            .unwrap();
        assert_eq!(value["status"], "success");
        assert!(value["selected_story"].as_str().unwrap().contains("fantasy epic"));
    }

    #[tokio::test]
    async fn test_match_tool_rejects_mistyped_stories() {
        let tool = MatchStoryTool;
        let result = tool
            .execute(json!({
                "client_description": "magic",
                "stories": [1, 2, 3],
            }))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_generate_tool_missing_theme() {
        let tool = GenerateOptionsTool;
        assert!(tool.execute(json!({})).await.is_err());
    }
}
