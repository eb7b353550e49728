//! Tag validation command.

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;
use tagwright_core::xml::{validate_issues, ValidationResult};

use super::read_input;
use crate::output;

#[derive(Args)]
pub struct ValidateArgs {
    /// Prompt file (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let issues = validate_issues(&input.content);

    if args.json {
        let result = ValidationResult::from_issues(&issues);
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_issues(&input, &issues);
    }

    if !issues.is_empty() {
        bail!("{} validation error(s) in {}", issues.len(), input.source);
    }
    Ok(())
}
