//! Token usage reports.
//!
//! Totals and a per-source breakdown across several prompts, with an
//! optional token budget.

use serde::Serialize;

use crate::analyzer::Analysis;
use crate::stats::TokenStats;

/// Full token usage report.
#[derive(Debug, Clone, Serialize)]
pub struct TokenReport {
    pub total: TokenStats,
    pub sources: Vec<Analysis>,
    /// Sources whose token count is an estimate.
    pub estimated_sources: usize,
    pub budget: Option<usize>,
    #[serde(skip)]
    show_estimates: bool,
}

impl TokenReport {
    /// Create a report; sources are ordered by token count, largest first.
    pub fn new(mut sources: Vec<Analysis>, budget: Option<usize>) -> Self {
        sources.sort_by(|a, b| b.stats.tokens.cmp(&a.stats.tokens));

        let total = sources.iter().fold(TokenStats::default(), |acc, s| TokenStats {
            tokens: acc.tokens + s.stats.tokens,
            characters: acc.characters + s.stats.characters,
            words: acc.words + s.stats.words,
            lines: acc.lines + s.stats.lines,
        });
        let estimated_sources = sources.iter().filter(|s| s.is_estimated()).count();

        Self {
            total,
            sources,
            estimated_sources,
            budget,
            show_estimates: true,
        }
    }

    /// Whether the text report marks estimated counts.
    pub fn with_estimates_shown(mut self, show: bool) -> Self {
        self.show_estimates = show;
        self
    }

    /// Tokens beyond the budget, if any.
    pub fn over_budget(&self) -> Option<usize> {
        self.budget
            .filter(|budget| self.total.tokens > *budget)
            .map(|budget| self.total.tokens - budget)
    }

    /// Format the report as a human-readable string.
    pub fn to_display_string(&self) -> String {
        let mut output = String::new();

        output.push_str("Token Usage Report\n");
        output.push_str(&format!("{}\n", "─".repeat(50)));
        output.push_str(&format!("Total tokens:     {:>8}\n", self.total.tokens));
        output.push_str(&format!("Total characters: {:>8}\n", self.total.characters));
        output.push_str(&format!("Total words:      {:>8}\n", self.total.words));
        output.push_str(&format!("Total lines:      {:>8}\n", self.total.lines));
        output.push_str(&format!("{}\n", "─".repeat(50)));

        if !self.sources.is_empty() {
            output.push_str("\nBreakdown by source:\n");

            for source in &self.sources {
                let pct = if self.total.tokens > 0 {
                    source.stats.tokens * 100 / self.total.tokens
                } else {
                    0
                };

                let bar_len = (pct / 2).max(1);
                let bar: String = "█".repeat(bar_len);
                let marker = if self.show_estimates && source.is_estimated() {
                    "~"
                } else {
                    " "
                };

                output.push_str(&format!(
                    "  {}{:>6} ({:>2}%) {} {}\n",
                    marker,
                    source.stats.tokens,
                    pct,
                    bar,
                    short_source(&source.source)
                ));
            }
        }

        if self.show_estimates && self.estimated_sources > 0 {
            output.push_str(&format!(
                "\n  ~ {} source(s) estimated at ~4 characters per token\n",
                self.estimated_sources
            ));
        }

        if let Some(budget) = self.budget {
            match self.over_budget() {
                Some(excess) => output.push_str(&format!(
                    "\nBudget: {} tokens, over by {}\n",
                    budget, excess
                )),
                None => output.push_str(&format!(
                    "\nBudget: {} tokens, {} remaining\n",
                    budget,
                    budget - self.total.tokens
                )),
            }
        }

        output
    }
}

/// Shorten a source path for display.
fn short_source(source: &str) -> &str {
    source.rsplit('/').next().unwrap_or(source)
}
