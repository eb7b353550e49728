//! Tag palette models.

use serde::{Deserialize, Serialize};

/// A tag offered by the palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub is_custom: bool,
}

impl TagDefinition {
    /// Create a custom tag definition.
    pub fn custom(
        name: impl Into<String>,
        description: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            example: example.into(),
            is_custom: true,
        }
    }

    fn builtin(name: &str, description: &str, example: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            example: example.to_string(),
            is_custom: false,
        }
    }
}

/// The tags every palette starts with.
pub fn default_tags() -> Vec<TagDefinition> {
    vec![
        TagDefinition::builtin(
            "instructions",
            "Main instructions and guidelines for the AI",
            "<instructions>\nYour task is to...\n</instructions>",
        ),
        TagDefinition::builtin(
            "context",
            "Background information and context",
            "<context>\nThe user is working on...\n</context>",
        ),
        TagDefinition::builtin(
            "examples",
            "Few-shot examples to guide behavior",
            "<examples>\n<example>\nInput: ...\nOutput: ...\n</example>\n</examples>",
        ),
        TagDefinition::builtin(
            "constraints",
            "Limitations and boundaries",
            "<constraints>\n- Must use Python 3.10+\n- Maximum 500 words\n</constraints>",
        ),
        TagDefinition::builtin(
            "thinking",
            "Section for reasoning and analysis",
            "<thinking>\nLet me analyze this step by step...\n</thinking>",
        ),
        TagDefinition::builtin(
            "analysis",
            "Detailed analysis section",
            "<analysis>\nKey factors to consider:\n1. ...\n</analysis>",
        ),
        TagDefinition::builtin(
            "output",
            "Expected output format and structure",
            "<output>\nProvide the result in the following format:\n...\n</output>",
        ),
        TagDefinition::builtin(
            "background_information",
            "Additional background context",
            "<background_information>\nRelevant history and context...\n</background_information>",
        ),
        TagDefinition::builtin(
            "rules",
            "Specific rules to follow",
            "<rules>\n1. Always validate input\n2. Handle errors gracefully\n</rules>",
        ),
        TagDefinition::builtin(
            "tools",
            "Available tools and their usage",
            "<tools>\nYou have access to:\n- search(query)\n- calculate(expression)\n</tools>",
        ),
    ]
}
