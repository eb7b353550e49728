//! Tag suggestion command.
//!
//! Reads the raw reply of a completion model asked for tag suggestions and
//! keeps the ones that are new for the prompt.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tagwright_core::palette::snippet;
use tagwright_core::suggest::{filter_present, parse_suggestions};

use super::{is_stdin, read_input};

#[derive(Args)]
pub struct SuggestArgs {
    /// File with the model's reply (`-` for stdin)
    pub response: PathBuf,

    /// Prompt the suggestions are for; tags it already uses are dropped
    #[arg(long)]
    pub prompt: Option<PathBuf>,

    /// Print the suggestions as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SuggestArgs) -> Result<()> {
    let prompt_from_stdin = args.prompt.as_deref().is_some_and(|p| is_stdin(Some(p)));
    if prompt_from_stdin && is_stdin(Some(args.response.as_path())) {
        bail!("Only one of the reply and the prompt can be read from stdin");
    }

    let reply =
        read_input(Some(args.response.as_path())).context("Failed to read model reply")?;
    let prompt = match args.prompt.as_deref() {
        Some(path) => read_input(Some(path))?.content,
        None => String::new(),
    };

    let suggestions = filter_present(parse_suggestions(&reply.content), &prompt);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("{}", "No suggestions available.".dimmed());
        return Ok(());
    }
    for (i, s) in suggestions.iter().enumerate() {
        println!("{}. {}", i + 1, format!("<{}>", s.tag).cyan().bold());
        if !s.reason.is_empty() {
            println!("   {}", s.reason);
        }
    }
    println!();
    println!("{}", "Insert with:".dimmed());
    for s in &suggestions {
        println!("{}", snippet(&s.tag));
    }
    Ok(())
}
