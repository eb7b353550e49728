//! Pretty-printer for tagged prompts.
//!
//! Puts every marker and every text run on its own line, indented by
//! nesting depth. No validation happens here: indentation follows the
//! markers blindly and never goes below zero.

use super::scanner::{is_space, segments, MarkerKind, Segment};

/// Spaces per nesting level.
pub const INDENT_UNIT: usize = 2;

/// Re-render `content` with one marker or text run per line.
pub fn format(content: &str) -> String {
    let mut depth: usize = 0;
    let mut lines: Vec<String> = Vec::new();

    for segment in segments(content) {
        match segment {
            Segment::Marker(marker) => {
                let text = &content[marker.span.clone()];
                match marker.kind {
                    MarkerKind::Close => {
                        depth = depth.saturating_sub(1);
                        lines.push(indented(depth, text));
                    }
                    MarkerKind::Open => {
                        lines.push(indented(depth, text));
                        depth += 1;
                    }
                }
            }
            Segment::Text(text) => {
                let trimmed = text.trim_matches(is_space);
                if !trimmed.is_empty() {
                    lines.push(indented(depth, trimmed));
                }
            }
        }
    }

    lines.join("\n")
}

fn indented(depth: usize, text: &str) -> String {
    format!("{}{}", " ".repeat(depth * INDENT_UNIT), text)
}
