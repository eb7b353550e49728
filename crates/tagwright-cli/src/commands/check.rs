//! Status line command: what an editor shows under the prompt.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use tagwright_core::config::Config;
use tagwright_core::xml::validate_issues;
use tagwright_token::analyze_text;

use super::read_input;
use crate::output;

#[derive(Args)]
pub struct CheckArgs {
    /// Prompt file (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,
}

pub fn execute(args: CheckArgs, project_dir: &Path) -> Result<()> {
    let config = Config::load(project_dir)?;
    let input = read_input(args.file.as_deref())?;

    let analysis = analyze_text(tagwright_token::shared(), &input.source, &input.content);
    let issues = validate_issues(&input.content);
    let estimated = config.tokens.report_estimates && analysis.is_estimated();

    println!("{}", output::status_line(&analysis.stats, estimated, issues.len()));
    if !issues.is_empty() {
        println!();
        output::print_issues(&input, &issues);
    }
    Ok(())
}
