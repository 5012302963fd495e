//! Lexing
//!
//! Guides are line oriented: every instruction sits on its own line and the only structure
//! between lines comes from blank separators and from which prefix a line starts with. Lexing
//! is therefore two small passes:
//!
//! 1. [`split_lines`] turns the source into numbered, trimmed [`SourceLine`]s (dropping a
//!    leading byte order mark and tolerating `\r\n` endings).
//! 2. [`line_classification`] decides the [`LineKind`] of each line, in a fixed priority
//!    order, and offers the extraction helpers the block parsers use to pull payloads out.
//!
//! Inside a line, action segments are tokenized by the logos-based [`markers`] lexer which
//! recognizes character markers and the fail marker.

pub mod line_classification;
pub mod markers;

pub use line_classification::{classify_line, LineKind};
pub use markers::{MarkedSegment, MarkerToken};

/// One line of guide source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number in the source file.
    pub number: usize,
    /// The line with surrounding whitespace removed.
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// Splits `source` into trimmed, numbered lines.
///
/// A trailing newline does not produce an extra empty line.
pub fn split_lines(source: &str) -> Vec<SourceLine<'_>> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    source
        .lines()
        .enumerate()
        .map(|(index, raw)| SourceLine {
            number: index + 1,
            text: raw.trim(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_trims_and_numbers() {
        let lines = split_lines("Game\r\n  Any%  \n\n📦 Potion\n");
        let texts: Vec<_> = lines.iter().map(|l| l.text).collect();
        assert_eq!(texts, vec!["Game", "Any%", "", "📦 Potion"]);
        assert_eq!(lines[3].number, 4);
        assert!(lines[2].is_blank());
    }

    #[test]
    fn test_split_lines_strips_bom() {
        let lines = split_lines("\u{feff}Game\nAny%");
        assert_eq!(lines[0].text, "Game");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_split_lines_empty() {
        assert!(split_lines("").is_empty());
    }
}
