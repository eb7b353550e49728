//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

pub mod check;
pub mod format;
pub mod palette;
pub mod suggest;
pub mod tags;
pub mod template;
pub mod tokens;
pub mod validate;

/// Tagwright - structure checks and token counts for XML-tagged prompts
#[derive(Parser)]
#[command(name = "tagwright")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory holding .tagwright.toml (defaults to current directory)
    #[arg(short, long, global = true, env = "TAGWRIGHT_PROJECT")]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that tags are balanced and properly nested
    Validate(validate::ValidateArgs),

    /// Re-indent a prompt by tag depth
    Format(format::FormatArgs),

    /// List the distinct tags used in a prompt
    Tags(tags::TagsArgs),

    /// Token, character, word and line counts
    Stats(tokens::StatsArgs),

    /// One-line status: counts plus validation summary
    Check(check::CheckArgs),

    /// Built-in and custom tags
    #[command(subcommand)]
    Palette(palette::PaletteCommands),

    /// Built-in prompt templates
    #[command(subcommand)]
    Template(template::TemplateCommands),

    /// Filter a model's tag suggestions against a prompt
    Suggest(suggest::SuggestArgs),
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let project_dir = match self.project {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to resolve current directory")?,
        };

        match self.command {
            Commands::Validate(args) => validate::execute(args),
            Commands::Format(args) => format::execute(args),
            Commands::Tags(args) => tags::execute(args),
            Commands::Stats(args) => tokens::execute(args, &project_dir),
            Commands::Check(args) => check::execute(args, &project_dir),
            Commands::Palette(cmd) => palette::execute(cmd, &project_dir),
            Commands::Template(cmd) => template::execute(cmd),
            Commands::Suggest(args) => suggest::execute(args),
        }
    }
}

/// Prompt text and where it came from.
pub struct Input {
    pub source: String,
    pub content: String,
}

fn is_stdin(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p == Path::new("-"))
}

/// Read a file, or stdin when the path is omitted or `-`.
pub fn read_input(path: Option<&Path>) -> Result<Input> {
    match path {
        Some(p) if !is_stdin(Some(p)) => {
            let content = std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read: {}", p.display()))?;
            Ok(Input {
                source: p.display().to_string(),
                content,
            })
        }
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(Input {
                source: "<stdin>".to_string(),
                content,
            })
        }
    }
}
