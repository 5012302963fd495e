//! Block parsers
//!
//! One parser per step category. Each takes the full line list and the index of the line that
//! opens its block, consumes as many lines as belong to the block and reports where the next
//! block starts through [`BlockResult::next_index`]. The opening line is always consumed, so
//! `next_index > start` holds for every parser.
//!
//! Combat and menu blocks stop where the [scanner state machine](super::state) says a line no
//! longer feeds them, so block boundaries are decided in a single place.
//!
//! Every parser takes a [`BlockContext`]: the parser configuration plus the act and chapter
//! in force, which are stamped on the produced step.

pub mod combat;
pub mod image;
pub mod loot;
pub mod menu;
pub mod note;
pub mod purchase;

use super::error::ParseError;
use crate::guide::ast::StepContext;
use crate::guide::config::ParserConfig;
use crate::guide::lexing::{classify_line, LineKind, SourceLine};
use log::warn;

/// The outcome of a block parser.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockResult<T> {
    pub step: T,
    /// Index of the first line after the block.
    pub next_index: usize,
}

impl<T> BlockResult<T> {
    pub fn new(step: T, next_index: usize) -> Self {
        BlockResult { step, next_index }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> BlockResult<U> {
        BlockResult {
            step: f(self.step),
            next_index: self.next_index,
        }
    }
}

/// What block parsers need to know about their surroundings.
#[derive(Debug, Clone)]
pub struct BlockContext<'c> {
    pub config: &'c ParserConfig,
    pub step: StepContext,
}

impl<'c> BlockContext<'c> {
    pub fn new(config: &'c ParserConfig, step: StepContext) -> Self {
        BlockContext { config, step }
    }

    pub fn classify(&self, line: &SourceLine<'_>) -> LineKind {
        classify_line(line.text, self.config.menu_keywords)
    }

    /// Reports a line that doesn't fit its block's grammar.
    ///
    /// Under the strict policy this is an error; otherwise it is logged and the caller keeps
    /// going with whatever it could make of the line.
    pub fn degrade(&self, line: &SourceLine<'_>, reason: &str) -> Result<(), ParseError> {
        if self.config.grammar.is_strict() {
            return Err(ParseError::grammar(line, reason));
        }
        warn!("line {}: {}: '{}'", line.number, reason, line.text);
        Ok(())
    }
}
