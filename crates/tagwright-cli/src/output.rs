//! Terminal output formatting.

use colored::Colorize;
use tagwright_core::palette::TagDefinition;
use tagwright_core::xml::{line_col, TagIssue};
use tagwright_token::TokenStats;

use crate::commands::Input;

/// Print validation diagnostics with their line and column.
pub fn print_issues(input: &Input, issues: &[TagIssue]) {
    if issues.is_empty() {
        println!("{} {}", "✓ Valid XML".green(), input.source.dimmed());
        return;
    }

    println!("{}", "XML Validation Errors:".red().bold());
    for issue in issues {
        let (line, col) = line_col(&input.content, issue.offset());
        println!(
            "  {} {}",
            format!("{}:{}:{}", input.source, line, col).dimmed(),
            issue.to_string().red()
        );
    }
}

/// The editor status bar: counts followed by the validation summary.
pub fn status_line(stats: &TokenStats, estimated: bool, errors: usize) -> String {
    let tokens = if estimated {
        format!("~{}", stats.tokens)
    } else {
        stats.tokens.to_string()
    };

    let validity = match errors {
        0 => "✓ Valid XML".green(),
        1 => "✗ 1 error".red(),
        n => format!("✗ {} errors", n).red(),
    };

    format!(
        "Tokens: {}  Characters: {}  Words: {}  Lines: {}  {}",
        tokens.bold(),
        stats.characters.to_string().bold(),
        stats.words.to_string().bold(),
        stats.lines.to_string().bold(),
        validity
    )
}

/// Print the tag palette.
pub fn print_palette(tags: &[&TagDefinition]) {
    println!("{:<26} {}", "Tag", "Description");
    println!("{}", "─".repeat(70));

    for tag in tags {
        let name = format!("<{}>", tag.name);
        let description = if tag.is_custom {
            format!("{} {}", tag.description, "(custom)".yellow())
        } else {
            tag.description.clone()
        };
        println!("{:<26} {}", name.cyan(), description);
    }
}
