//! Tagwright Core Library
//!
//! Structural checks and building blocks for XML-tagged prompts: tag
//! validation, extraction and formatting, the tag palette, prompt templates
//! and parsing of tag suggestions.

pub mod config;
pub mod error;
pub mod palette;
pub mod suggest;
pub mod template;
pub mod xml;

pub use error::{TagwrightError, TagwrightResult};
pub use xml::{extract_tags, format, validate, ValidationResult};
