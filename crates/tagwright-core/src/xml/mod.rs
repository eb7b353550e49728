//! XML-style structure of a prompt.
//!
//! Prompts are free text interleaved with bare `<name>` / `</name>` markers.
//! This module checks their nesting, lists the tags in use and re-indents
//! the text. The grammar is intentionally looser than XML: anything that is
//! not a bare marker is text.

pub mod extract;
pub mod format;
pub mod scanner;
pub mod validate;

pub use extract::extract_tags;
pub use format::{format, INDENT_UNIT};
pub use scanner::{is_valid_tag_name, segments, Marker, MarkerKind, Scanner, Segment};
pub use validate::{line_col, validate, validate_issues, TagIssue, ValidationResult};
