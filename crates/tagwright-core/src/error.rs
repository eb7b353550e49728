//! Centralized error types for Tagwright.

use thiserror::Error;

/// Main error type for Tagwright operations.
///
/// Validation and formatting never fail; these errors come from the palette,
/// templates and configuration.
#[derive(Error, Debug)]
pub enum TagwrightError {
    #[error("Invalid tag name '{0}': expected a letter or '_' followed by letters, digits, '_' or '-'")]
    InvalidTagName(String),

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("Tag '{0}' is built in and cannot be redefined")]
    BuiltinTag(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Result type for Tagwright operations.
pub type TagwrightResult<T> = Result<T, TagwrightError>;

impl TagwrightError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
