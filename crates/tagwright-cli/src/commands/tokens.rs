//! Token statistics command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tagwright_core::config::Config;
use tagwright_token::{analyze_file, analyze_text, TokenReport};

use super::read_input;

#[derive(Args)]
pub struct StatsArgs {
    /// Prompt files (reads stdin when none are given)
    pub files: Vec<PathBuf>,

    /// Token budget (overrides `[tokens] budget` in .tagwright.toml)
    #[arg(long)]
    pub budget: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: StatsArgs, project_dir: &Path) -> Result<()> {
    let config = Config::load(project_dir)?;
    let counter = tagwright_token::shared();

    let analyses = if args.files.is_empty() {
        let input = read_input(None)?;
        vec![analyze_text(counter, &input.source, &input.content)]
    } else {
        args.files
            .iter()
            .map(|path| analyze_file(counter, path))
            .collect::<Result<Vec<_>>>()?
    };

    let budget = args.budget.or(config.tokens.budget);
    let report = TokenReport::new(analyses, budget)
        .with_estimates_shown(config.tokens.report_estimates);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", report.to_display_string());
    if let Some(excess) = report.over_budget() {
        println!(
            "{} {} tokens need to be cut",
            "Over budget:".red().bold(),
            excess.to_string().red()
        );
    }
    Ok(())
}
