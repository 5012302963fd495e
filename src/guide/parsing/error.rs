//! Parse errors

use crate::guide::lexing::SourceLine;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The source has fewer than the two header lines (game, category).
    #[error("guide header needs a game line and a category line, found {found} line(s)")]
    MissingHeader { found: usize },

    /// A line doesn't fit the grammar of its block. Only raised under the strict policy.
    #[error("line {line}: {reason}: '{content}'")]
    Grammar {
        line: usize,
        content: String,
        reason: String,
    },
}

impl ParseError {
    pub fn grammar(line: &SourceLine<'_>, reason: impl Into<String>) -> Self {
        ParseError::Grammar {
            line: line.number,
            content: line.text.to_string(),
            reason: reason.into(),
        }
    }

    /// The 1-based source line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::MissingHeader { .. } => None,
            ParseError::Grammar { line, .. } => Some(*line),
        }
    }
}
