//! Tag palette commands.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use std::path::Path;
use tagwright_core::config::Config;
use tagwright_core::palette::{snippet, TagDefinition};
use tagwright_core::TagwrightError;

use crate::output;

#[derive(Subcommand)]
pub enum PaletteCommands {
    /// List built-in and custom tags
    List {
        /// Print the palette as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add or update a custom tag
    Add {
        /// Tag name, e.g. persona
        name: String,
        /// What the tag is for
        #[arg(short, long, default_value = "")]
        description: String,
        /// Example usage
        #[arg(short, long, default_value = "")]
        example: String,
    },

    /// Remove a custom tag
    Remove {
        /// Tag name
        name: String,
    },

    /// Print the text inserted for a tag
    Snippet {
        /// Tag name
        name: String,
    },
}

pub fn execute(cmd: PaletteCommands, project_dir: &Path) -> Result<()> {
    let mut config = Config::load(project_dir)?;
    let mut palette = config.palette()?;

    match cmd {
        PaletteCommands::List { json } => {
            let tags: Vec<&TagDefinition> = palette.all().collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&tags)?);
            } else {
                output::print_palette(&tags);
            }
        }
        PaletteCommands::Add {
            name,
            description,
            example,
        } => {
            palette.add_custom(TagDefinition::custom(&name, description, example))?;
            config.set_custom_tags(&palette);
            config
                .save(project_dir)
                .context("Failed to save custom tag")?;
            println!("{} {}", "Saved custom tag".green(), format!("<{}>", name).cyan());
        }
        PaletteCommands::Remove { name } => {
            palette.remove_custom(&name)?;
            config.set_custom_tags(&palette);
            config
                .save(project_dir)
                .context("Failed to save palette")?;
            println!("{} {}", "Removed custom tag".green(), format!("<{}>", name).cyan());
        }
        PaletteCommands::Snippet { name } => {
            if palette.get(&name).is_none() {
                return Err(TagwrightError::TagNotFound(name).into());
            }
            println!("{}", snippet(&name));
        }
    }

    Ok(())
}
