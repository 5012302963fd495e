//! Marker tokens
//!
//! A logos lexer for the inline markers that decorate an action segment: character markers
//! such as `(V)` and the `(FAIL)` marker. Everything else is text. A lone `(` that doesn't
//! open a marker is its own token so the text catch-all never has to swallow parentheses,
//! which keeps `Force (9)` from being mistaken for anything special.

use crate::guide::characters::Character;
use logos::Logos;

/// All tokens that can appear in an action segment.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum MarkerToken {
    #[token("(M)", |_| Character::Maelle)]
    #[token("(L)", |_| Character::Lune)]
    #[token("(S)", |_| Character::Sciel)]
    #[token("(V)", |_| Character::Verso)]
    #[token("(Mo)", |_| Character::Monoco)]
    Character(Character),

    #[token("(FAIL)", ignore(ascii_case))]
    Fail,

    #[token("(")]
    OpenParen,

    // Text content (catch-all for anything up to the next parenthesis)
    #[regex(r"[^(]+")]
    Text,
}

/// An action segment with its markers resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkedSegment {
    /// The first character marker found, if any.
    pub character: Option<Character>,
    /// True when a fail marker was present.
    pub fail: bool,
    /// The segment with the first character marker and the first fail marker removed, trimmed.
    pub text: String,
}

impl MarkedSegment {
    pub fn parse(segment: &str) -> Self {
        let mut character = None;
        let mut fail = false;
        let mut text = String::with_capacity(segment.len());

        let mut lexer = MarkerToken::lexer(segment);
        while let Some(token) = lexer.next() {
            match token {
                Ok(MarkerToken::Character(c)) if character.is_none() => character = Some(c),
                Ok(MarkerToken::Fail) if !fail => fail = true,
                _ => text.push_str(lexer.slice()),
            }
        }

        MarkedSegment {
            character,
            fail,
            text: text.trim().to_string(),
        }
    }
}

/// Tokenize a segment into `(token, slice)` pairs. Unlexable input is reported as text.
pub fn tokenize(segment: &str) -> Vec<(MarkerToken, &str)> {
    let mut lexer = MarkerToken::lexer(segment);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next() {
        tokens.push((token.unwrap_or(MarkerToken::Text), lexer.slice()));
    }
    tokens
}
