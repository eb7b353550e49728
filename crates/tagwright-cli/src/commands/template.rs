//! Template commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use tagwright_core::template::{default_categories, default_templates, find_template};

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List built-in templates
    List,

    /// Print a template's content
    Show {
        /// Template id, e.g. coding-assistant
        id: String,
        /// Run the formatter over the content
        #[arg(long)]
        format: bool,
    },
}

pub fn execute(cmd: TemplateCommands) -> Result<()> {
    match cmd {
        TemplateCommands::List => {
            let categories = default_categories();
            println!("{:<20} {:<20} {}", "ID", "Category", "Description");
            println!("{}", "─".repeat(70));
            for t in default_templates() {
                let category = categories
                    .iter()
                    .find(|c| c.id == t.category)
                    .map_or(t.category.as_str(), |c| c.name.as_str());
                println!("{:<20} {:<20} {}", t.id.cyan(), category, t.description.dimmed());
            }
        }
        TemplateCommands::Show { id, format } => {
            let template = find_template(&id)?;
            if format {
                println!("{}", tagwright_core::format(&template.content));
            } else {
                println!("{}", template.content);
            }
        }
    }
    Ok(())
}
