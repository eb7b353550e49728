//! Parsing of tag-suggestion replies from a completion model.
//!
//! Models are asked for raw JSON but regularly wrap it in Markdown fences
//! or add a sentence around it, so the JSON object is dug out first.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// One suggested tag and why it would help.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSuggestion {
    pub tag: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Deserialize)]
struct SuggestionReply {
    #[serde(default)]
    suggestions: Vec<TagSuggestion>,
}

/// Parse a `{ "suggestions": [...] }` reply.
///
/// Anything unparseable yields an empty list.
pub fn parse_suggestions(raw: &str) -> Vec<TagSuggestion> {
    let json = extract_json(raw);
    match serde_json::from_str::<SuggestionReply>(json) {
        Ok(reply) => reply.suggestions,
        Err(e) => {
            warn!(error = %e, "Could not parse tag suggestions, returning none");
            Vec::new()
        }
    }
}

/// Extract JSON from a string that might be wrapped in markdown code blocks.
fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(start) = trimmed.find("```json") {
        let after_marker = &trimmed[start + 7..];
        if let Some(end) = after_marker.find("```") {
            return after_marker[..end].trim();
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after_marker = &trimmed[start + 3..];
        if let Some(end) = after_marker.find("```") {
            return after_marker[..end].trim();
        }
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if end > start {
            return &trimmed[start..=end];
        }
    }

    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"{"suggestions":[{"tag":"context","reason":"Needs background"},{"tag":"output","reason":"No format given"}]}"#;

    #[test]
    fn test_raw_json() {
        let parsed = parse_suggestions(REPLY);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].tag, "context");
        assert_eq!(parsed[1].reason, "No format given");
    }

    #[test]
    fn test_fenced_json() {
        let raw = format!("```json\n{REPLY}\n```");
        assert_eq!(parse_suggestions(&raw).len(), 2);

        let raw = format!("```\n{REPLY}\n```\n");
        assert_eq!(parse_suggestions(&raw).len(), 2);
    }

    #[test]
    fn test_surrounding_prose() {
        let raw = format!("Here you go:\n{REPLY}\nHope this helps.");
        assert_eq!(parse_suggestions(&raw).len(), 2);
    }

    #[test]
    fn test_garbage_is_empty() {
        assert!(parse_suggestions("I cannot help with that.").is_empty());
        assert!(parse_suggestions("").is_empty());
        assert!(parse_suggestions(r#"{"suggestions": "nope"}"#).is_empty());
    }

    #[test]
    fn test_missing_fields() {
        assert!(parse_suggestions("{}").is_empty());
        let parsed = parse_suggestions(r#"{"suggestions":[{"tag":"rules"}]}"#);
        assert_eq!(parsed[0].reason, "");
    }
}
