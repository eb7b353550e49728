//! Template and category models.

use serde::{Deserialize, Serialize};

/// A grouping for prompts and templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Display color as a hex string, e.g. `#3b82f6`.
    pub color: String,
}

/// A ready-made tagged prompt to start from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub content: String,
}
