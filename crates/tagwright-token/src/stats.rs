//! Text statistics shown next to the token count.

use serde::Serialize;

/// Counts for one piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TokenStats {
    pub tokens: usize,
    pub characters: usize,
    pub words: usize,
    pub lines: usize,
}

impl TokenStats {
    /// Build stats for `text` given an already computed token count.
    pub fn new(text: &str, tokens: usize) -> Self {
        Self {
            tokens,
            characters: char_count(text),
            words: word_count(text),
            lines: line_count(text),
        }
    }
}

/// Length in UTF-16 code units, so characters outside the BMP count twice.
pub fn char_count(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Number of maximal non-whitespace runs.
pub fn word_count(text: &str) -> usize {
    text.split(is_space).filter(|w| !w.is_empty()).count()
}

/// Unicode `White_Space` plus the BOM, without NEL (U+0085).
fn is_space(ch: char) -> bool {
    ch == '\u{feff}' || (ch.is_whitespace() && ch != '\u{85}')
}

/// Newline count plus one, so empty text is one line.
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|b| *b == b'\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(
            TokenStats::new("", 0),
            TokenStats { tokens: 0, characters: 0, words: 0, lines: 1 }
        );
    }

    #[test]
    fn test_words_ignore_whitespace_runs() {
        assert_eq!(word_count("  a  b   c "), 3);
        assert_eq!(word_count("one\ttwo\nthree"), 3);
        assert_eq!(word_count(" \n\t "), 0);
    }

    #[test]
    fn test_lines() {
        assert_eq!(line_count("a"), 1);
        assert_eq!(line_count("a\n"), 2);
        assert_eq!(line_count("a\r\nb\nc"), 3);
    }

    #[test]
    fn test_characters_are_utf16_units() {
        assert_eq!(char_count("héllo"), 5);
        assert_eq!(char_count("日本語"), 3);
        assert_eq!(char_count("😀😀😀"), 6);
        assert_eq!(TokenStats::new("a😀", 1).characters, 3);
    }

    #[test]
    fn test_word_separators() {
        assert_eq!(word_count("a\u{feff}b"), 2);
        assert_eq!(word_count("a\u{85}b"), 1);
        assert_eq!(word_count("a\u{a0}b\u{2003}c"), 3);
    }
}
