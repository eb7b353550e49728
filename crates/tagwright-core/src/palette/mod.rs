//! Tag palette.
//!
//! The set of tags a user can insert: the built-in tags plus any custom
//! tags defined for the project.

pub mod model;

use tracing::debug;

use crate::error::{TagwrightError, TagwrightResult};
use crate::xml::is_valid_tag_name;

pub use model::{default_tags, TagDefinition};

/// Text inserted into a prompt for a tag: an empty element with a blank line.
pub fn snippet(name: &str) -> String {
    format!("<{name}>\n\n</{name}>")
}

/// Built-in tags followed by custom tags.
#[derive(Debug, Clone)]
pub struct TagPalette {
    builtin: Vec<TagDefinition>,
    custom: Vec<TagDefinition>,
}

impl Default for TagPalette {
    fn default() -> Self {
        Self {
            builtin: default_tags(),
            custom: Vec::new(),
        }
    }
}

impl TagPalette {
    /// Create a palette with the built-in tags and the given custom tags.
    pub fn with_custom(custom: impl IntoIterator<Item = TagDefinition>) -> TagwrightResult<Self> {
        let mut palette = Self::default();
        for tag in custom {
            palette.add_custom(tag)?;
        }
        Ok(palette)
    }

    /// Add or replace a custom tag.
    ///
    /// Replacing keeps the tag's position. The stored tag is always marked custom.
    pub fn add_custom(&mut self, mut tag: TagDefinition) -> TagwrightResult<()> {
        if !is_valid_tag_name(&tag.name) {
            return Err(TagwrightError::InvalidTagName(tag.name));
        }
        if self.builtin.iter().any(|t| t.name == tag.name) {
            return Err(TagwrightError::BuiltinTag(tag.name));
        }

        tag.is_custom = true;
        match self.custom.iter_mut().find(|t| t.name == tag.name) {
            Some(existing) => {
                debug!(tag = %tag.name, "Replacing custom tag");
                *existing = tag;
            }
            None => {
                debug!(tag = %tag.name, "Adding custom tag");
                self.custom.push(tag);
            }
        }
        Ok(())
    }

    /// Remove a custom tag by name.
    pub fn remove_custom(&mut self, name: &str) -> TagwrightResult<TagDefinition> {
        let index = self
            .custom
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| TagwrightError::TagNotFound(name.to_string()))?;
        Ok(self.custom.remove(index))
    }

    /// Look up a built-in or custom tag.
    pub fn get(&self, name: &str) -> Option<&TagDefinition> {
        self.all().find(|t| t.name == name)
    }

    pub fn all(&self) -> impl Iterator<Item = &TagDefinition> {
        self.builtin.iter().chain(self.custom.iter())
    }

    pub fn custom(&self) -> &[TagDefinition] {
        &self.custom
    }

    pub fn len(&self) -> usize {
        self.builtin.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
