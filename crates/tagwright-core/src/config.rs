//! Project configuration.
//!
//! Read from `.tagwright.toml` in the project directory. A missing file
//! means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TagwrightError, TagwrightResult};
use crate::palette::{TagDefinition, TagPalette};

pub const CONFIG_FILE: &str = ".tagwright.toml";

/// Token counting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSettings {
    /// Token budget for reports. No budget check when unset.
    pub budget: Option<usize>,
    /// Mark counts that fell back to the length estimate.
    pub report_estimates: bool,
}

impl Default for TokenSettings {
    fn default() -> Self {
        Self {
            budget: None,
            report_estimates: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tokens: TokenSettings,
    pub custom_tags: Vec<TagDefinition>,
}

impl Config {
    pub fn path(project_dir: &Path) -> PathBuf {
        project_dir.join(CONFIG_FILE)
    }

    /// Load the project configuration, falling back to defaults when absent.
    pub fn load(project_dir: &Path) -> TagwrightResult<Self> {
        let path = Self::path(project_dir);
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        let mut config: Config = toml::from_str(&raw)?;
        for tag in &mut config.custom_tags {
            tag.is_custom = true;
        }
        debug!(path = %path.display(), custom_tags = config.custom_tags.len(), "Loaded config");
        Ok(config)
    }

    pub fn save(&self, project_dir: &Path) -> TagwrightResult<()> {
        let path = Self::path(project_dir);
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Palette with this project's custom tags.
    pub fn palette(&self) -> TagwrightResult<TagPalette> {
        TagPalette::with_custom(self.custom_tags.iter().cloned()).map_err(|e| {
            TagwrightError::config(format!("invalid custom tag in {CONFIG_FILE}: {e}"))
        })
    }

    /// Store the palette's custom tags back into this config.
    pub fn set_custom_tags(&mut self, palette: &TagPalette) {
        self.custom_tags = palette.custom().to_vec();
    }
}
