//! Marker scanner.
//!
//! Recognizes exactly two shapes: `<name>` and `</name>`, where `name` is
//! `[A-Za-z_][A-Za-z0-9_-]*` and may be followed by whitespace before `>`.
//! Attributes, self-closing tags, comments and entities are not markers and
//! pass through as plain text.

use std::ops::Range;

/// Whether a marker opens or closes a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Open,
    Close,
}

/// A single tag marker found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker<'a> {
    pub kind: MarkerKind,
    pub name: &'a str,
    /// Byte range of the whole marker, `<` through `>`.
    pub span: Range<usize>,
}

impl Marker<'_> {
    pub fn is_close(&self) -> bool {
        self.kind == MarkerKind::Close
    }
}

/// A piece of the input: either a marker or the literal text between markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Marker(Marker<'a>),
    Text(&'a str),
}

/// Iterator over the markers of a string, in order of appearance.
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Marker<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(offset) = self.src[self.pos..].find('<') {
            let start = self.pos + offset;
            if let Some(marker) = match_marker(self.src, start) {
                self.pos = marker.span.end;
                return Some(marker);
            }
            // '<' is one byte, so start + 1 is always a char boundary
            self.pos = start + 1;
        }
        self.pos = self.src.len();
        None
    }
}

/// Try to read a marker starting at the `<` located at byte `start`.
fn match_marker(src: &str, start: usize) -> Option<Marker<'_>> {
    let bytes = src.as_bytes();
    let mut i = start + 1;

    let kind = if bytes.get(i) == Some(&b'/') {
        i += 1;
        MarkerKind::Close
    } else {
        MarkerKind::Open
    };

    let name_start = i;
    match bytes.get(i) {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => i += 1,
        _ => return None,
    }
    while let Some(b) = bytes.get(i) {
        if is_name_byte(*b) {
            i += 1;
        } else {
            break;
        }
    }
    let name_end = i;

    for ch in src[i..].chars() {
        if ch == '>' {
            return Some(Marker {
                kind,
                name: &src[name_start..name_end],
                span: start..i + 1,
            });
        }
        if !is_space(ch) {
            return None;
        }
        i += ch.len_utf8();
    }
    None
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Whitespace allowed before `>` and trimmed from text runs: Unicode
/// `White_Space` plus the BOM, without NEL (U+0085).
pub(crate) fn is_space(ch: char) -> bool {
    ch == '\u{feff}' || (ch.is_whitespace() && ch != '\u{85}')
}

/// Check whether `name` is a tag name the scanner would recognize.
pub fn is_valid_tag_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => bytes.all(is_name_byte),
        _ => false,
    }
}

/// Split the input into markers and the text between them.
///
/// Concatenating every segment reproduces the input. Empty text runs
/// (between adjacent markers, or at either end) are not emitted.
pub fn segments(src: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;

    for marker in Scanner::new(src) {
        if marker.span.start > last {
            out.push(Segment::Text(&src[last..marker.span.start]));
        }
        last = marker.span.end;
        out.push(Segment::Marker(marker));
    }
    if last < src.len() {
        out.push(Segment::Text(&src[last..]));
    }

    out
}

/// Only the opening markers of the input.
pub fn scan_open_tags(src: &str) -> impl Iterator<Item = Marker<'_>> {
    Scanner::new(src).filter(|m| m.kind == MarkerKind::Open)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(src: &str) -> Vec<(MarkerKind, &str)> {
        Scanner::new(src).map(|m| (m.kind, m.name)).collect()
    }

    #[test]
    fn test_open_and_close() {
        assert_eq!(
            names("<a>text</a>"),
            vec![(MarkerKind::Open, "a"), (MarkerKind::Close, "a")]
        );
    }

    #[test]
    fn test_trailing_whitespace_before_bracket() {
        let markers: Vec<_> = Scanner::new("<rules  >x</rules\n>").collect();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].name, "rules");
        assert_eq!(markers[0].span, 0..9);
        assert_eq!(markers[1].name, "rules");
    }

    #[test]
    fn test_attributes_are_not_markers() {
        assert!(names("<a href=\"x\">link</a x>").is_empty());
    }

    #[test]
    fn test_self_closing_is_not_a_marker() {
        assert!(names("<br/> <br />").is_empty());
    }

    #[test]
    fn test_name_grammar() {
        assert_eq!(
            names("<_x-1><background_information><1a><-a>"),
            vec![
                (MarkerKind::Open, "_x-1"),
                (MarkerKind::Open, "background_information"),
            ]
        );
    }

    #[test]
    fn test_resumes_after_failed_bracket() {
        assert_eq!(names("a << b <<c>"), vec![(MarkerKind::Open, "c")]);
        assert_eq!(names("1 < 2 and <x>"), vec![(MarkerKind::Open, "x")]);
    }

    #[test]
    fn test_unicode_text_around_markers() {
        let src = "héllo <tag>日本語</tag>";
        let markers: Vec<_> = Scanner::new(src).collect();
        assert_eq!(markers.len(), 2);
        assert_eq!(&src[markers[0].span.clone()], "<tag>");
        assert_eq!(&src[markers[1].span.clone()], "</tag>");
    }

    #[test]
    fn test_space_before_bracket_set() {
        assert_eq!(names("<a\u{feff}>"), vec![(MarkerKind::Open, "a")]);
        assert_eq!(names("</a\u{a0}\u{2028}>"), vec![(MarkerKind::Close, "a")]);
        assert!(names("<a\u{85}>").is_empty());
    }

    #[test]
    fn test_unterminated_marker() {
        assert!(names("<abc").is_empty());
        assert!(names("</abc   ").is_empty());
    }

    #[test]
    fn test_segments_cover_input() {
        let src = "  intro <a>one<b>two</b></a> outro";
        let joined: String = segments(src)
            .iter()
            .map(|s| match s {
                Segment::Marker(m) => &src[m.span.clone()],
                Segment::Text(t) => t,
            })
            .collect();
        assert_eq!(joined, src);
    }

    #[test]
    fn test_segments_skip_empty_text() {
        let segs = segments("<a></a>");
        assert_eq!(segs.len(), 2);
        assert!(matches!(segs[0], Segment::Marker(_)));
        assert!(matches!(segs[1], Segment::Marker(_)));
    }

    #[test]
    fn test_is_valid_tag_name() {
        assert!(is_valid_tag_name("instructions"));
        assert!(is_valid_tag_name("_private-note2"));
        assert!(!is_valid_tag_name(""));
        assert!(!is_valid_tag_name("2fast"));
        assert!(!is_valid_tag_name("has space"));
        assert!(!is_valid_tag_name("ns:tag"));
    }
}
