//! Tag balance checking.
//!
//! Walks the markers with a nesting stack. A closing marker always pops,
//! even when the names differ, so a single mismatch can cascade into
//! further diagnostics for later markers.

use serde::Serialize;
use thiserror::Error;

use super::scanner::{MarkerKind, Scanner};

/// A single nesting problem, located by the byte offset of its marker.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TagIssue {
    #[error("Unexpected closing tag: </{name}>")]
    UnexpectedClose { name: String, offset: usize },

    #[error("Tag mismatch: expected </{expected}>, found </{found}>")]
    Mismatch {
        expected: String,
        found: String,
        offset: usize,
    },

    /// `offset` points at the opening marker that was never closed.
    #[error("Unclosed tag: <{name}>")]
    Unclosed { name: String, offset: usize },
}

impl TagIssue {
    pub fn offset(&self) -> usize {
        match self {
            Self::UnexpectedClose { offset, .. }
            | Self::Mismatch { offset, .. }
            | Self::Unclosed { offset, .. } => *offset,
        }
    }
}

/// Outcome of [`validate`]. Valid iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_issues(issues: &[TagIssue]) -> Self {
        let errors: Vec<String> = issues.iter().map(ToString::to_string).collect();

        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Check tag nesting and report human-readable diagnostics.
pub fn validate(content: &str) -> ValidationResult {
    ValidationResult::from_issues(&validate_issues(content))
}

/// Structured diagnostics, in scan order followed by unclosed tags in push order.
pub fn validate_issues(content: &str) -> Vec<TagIssue> {
    let mut issues = Vec::new();
    let mut stack: Vec<(&str, usize)> = Vec::new();

    for marker in Scanner::new(content) {
        let offset = marker.span.start;
        match marker.kind {
            MarkerKind::Open => stack.push((marker.name, offset)),
            MarkerKind::Close => match stack.pop() {
                None => issues.push(TagIssue::UnexpectedClose {
                    name: marker.name.to_string(),
                    offset,
                }),
                Some((top, _)) if top != marker.name => issues.push(TagIssue::Mismatch {
                    expected: top.to_string(),
                    found: marker.name.to_string(),
                    offset,
                }),
                Some(_) => {}
            },
        }
    }

    issues.extend(stack.into_iter().map(|(name, offset)| TagIssue::Unclosed {
        name: name.to_string(),
        offset,
    }));

    issues
}

/// 1-based line and column (in characters) of a byte offset.
///
/// Offsets past the end clamp to the end of the input.
pub fn line_col(content: &str, offset: usize) -> (usize, usize) {
    let mut end = offset.min(content.len());
    while !content.is_char_boundary(end) {
        end -= 1;
    }
    let before = &content[..end];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
