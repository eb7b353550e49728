//! Tag name extraction.

use std::collections::BTreeSet;

use super::scanner::scan_open_tags;

/// Distinct names of every opening marker in `content`.
///
/// Closing markers never contribute, so an orphaned `</x>` does not make
/// `x` count as present.
pub fn extract_tags(content: &str) -> BTreeSet<String> {
    scan_open_tags(content)
        .map(|marker| marker.name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup() {
        let tags = extract_tags("<a>x</a><a>y</a><b>z</b>");
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("a"));
        assert!(tags.contains("b"));
    }

    #[test]
    fn test_closing_only_ignored() {
        let tags = extract_tags("</orphan><kept>");
        assert_eq!(tags.into_iter().collect::<Vec<_>>(), vec!["kept".to_string()]);
    }

    #[test]
    fn test_empty_and_untagged() {
        assert!(extract_tags("").is_empty());
        assert!(extract_tags("a <b c> d <e/>").is_empty());
    }
}
