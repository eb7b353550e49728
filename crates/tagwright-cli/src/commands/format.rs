//! Formatting command.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use super::{is_stdin, read_input};

#[derive(Args)]
pub struct FormatArgs {
    /// Prompt file (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,

    /// Rewrite the file in place
    #[arg(short, long, conflicts_with = "check")]
    pub write: bool,

    /// Fail if the file is not already formatted
    #[arg(long)]
    pub check: bool,
}

pub fn execute(args: FormatArgs) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let formatted = tagwright_core::format(&input.content);
    // a single trailing newline is not a formatting difference
    let current = input.content.strip_suffix('\n').unwrap_or(&input.content);

    if args.check {
        if current != formatted {
            bail!("{} is not formatted", input.source);
        }
        println!("{} {}", "✓".green(), input.source);
        return Ok(());
    }

    if args.write {
        let Some(path) = args.file.as_deref().filter(|p| !is_stdin(Some(*p))) else {
            bail!("--write needs a file path");
        };
        if current == formatted {
            info!(file = %input.source, "Already formatted");
            return Ok(());
        }
        let mut out = formatted;
        if !out.is_empty() {
            out.push('\n');
        }
        std::fs::write(path, out)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        println!("{} {}", "Formatted".green(), input.source);
        return Ok(());
    }

    println!("{}", formatted);
    Ok(())
}
