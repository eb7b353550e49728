//! Token analysis of files and text.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::counter::{CountMethod, TokenCounter};
use crate::stats::TokenStats;

/// Stats for a single file or content source.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub source: String,
    #[serde(flatten)]
    pub stats: TokenStats,
    pub method: CountMethod,
}

impl Analysis {
    pub fn is_estimated(&self) -> bool {
        self.method == CountMethod::Estimated
    }
}

/// Analyze a string.
pub fn analyze_text(counter: &TokenCounter, source: &str, content: &str) -> Analysis {
    let count = counter.count(content);

    Analysis {
        source: source.to_string(),
        stats: TokenStats::new(content, count.tokens()),
        method: count.method(),
    }
}

/// Analyze a file.
pub fn analyze_file(counter: &TokenCounter, path: &Path) -> Result<Analysis> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;

    Ok(analyze_text(counter, &path.display().to_string(), &content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_text() {
        let counter = TokenCounter::estimate_only();
        let analysis = analyze_text(&counter, "inline", "<a>\nhello\n</a>");
        assert_eq!(analysis.source, "inline");
        assert_eq!(analysis.stats.tokens, 4);
        assert_eq!(analysis.stats.lines, 3);
        assert!(analysis.is_estimated());
    }

    #[test]
    fn test_analyze_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompt.md");
        std::fs::write(&path, "<rules>\nbe brief\n</rules>\n").unwrap();

        let analysis = analyze_file(&TokenCounter::estimate_only(), &path).unwrap();
        assert_eq!(analysis.stats.words, 4);
        assert_eq!(analysis.stats.lines, 4);
        assert!(analysis.source.ends_with("prompt.md"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = analyze_file(&TokenCounter::estimate_only(), &dir.path().join("nope.md"))
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }

    #[test]
    fn test_serialized_shape() {
        let analysis = analyze_text(&TokenCounter::estimate_only(), "s", "ab");
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "source": "s",
                "tokens": 1,
                "characters": 2,
                "words": 1,
                "lines": 1,
                "method": "estimated",
            })
        );
    }
}
