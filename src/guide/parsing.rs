//! Parsing
//!
//! Turns classified lines into a [`Guide`](crate::guide::ast::Guide).
//!
//! Structure:
//!     state       The scanner state machine (Search / InCombat / InMenu) and its transition table
//!     blocks      One block parser per step category; each reports where the next block starts
//!     assembler   The forward scan: dispatches lines to block parsers and builds action groups
//!     error       Parse errors
//!
//! Grammar policy
//!
//!     Guides are hand-written, so by default the parser is lenient: a line that doesn't fit
//!     its block is kept as well as possible (plain text, no character, no detail) and a
//!     warning is logged with its line number. With [`GrammarPolicy::Strict`] the same cases
//!     fail the parse with a [`ParseError::Grammar`] carrying the line number and content.
//!
//! [`GrammarPolicy::Strict`]: crate::guide::config::GrammarPolicy::Strict

pub mod assembler;
pub mod blocks;
pub mod error;
pub mod state;

pub use assembler::{parse_guide, GuideAssembler};
pub use error::ParseError;
pub use state::{LineAction, ParserMode, ScanState, Transition};
