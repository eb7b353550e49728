//! Tag suggestions.
//!
//! The model call lives outside this crate; this module turns its reply
//! into suggestions worth showing for a given prompt.

pub mod parser;

use std::collections::HashSet;

use tracing::debug;

use crate::xml::{extract_tags, is_valid_tag_name};

pub use parser::{parse_suggestions, TagSuggestion};

/// Drop suggestions for tags the prompt already opens, repeated tags, and
/// names that could never be recognized as a tag.
pub fn filter_present(suggestions: Vec<TagSuggestion>, content: &str) -> Vec<TagSuggestion> {
    let present = extract_tags(content);
    let mut seen = HashSet::new();

    suggestions
        .into_iter()
        .filter(|s| {
            if !is_valid_tag_name(&s.tag) {
                debug!(tag = %s.tag, "Dropping suggestion with invalid tag name");
                return false;
            }
            !present.contains(&s.tag) && seen.insert(s.tag.clone())
        })
        .collect()
}
