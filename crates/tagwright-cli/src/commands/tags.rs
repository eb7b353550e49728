//! Tag listing command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::read_input;

#[derive(Args)]
pub struct TagsArgs {
    /// Prompt file (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,

    /// Print the tags as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: TagsArgs) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let tags = tagwright_core::extract_tags(&input.content);

    if args.json {
        println!("{}", serde_json::to_string(&tags)?);
        return Ok(());
    }

    if tags.is_empty() {
        println!("{}", "No tags found.".dimmed());
        return Ok(());
    }
    for tag in &tags {
        println!("{}", format!("<{}>", tag).cyan());
    }
    Ok(())
}
