//! # runguide
//!
//! A parser for plain-text speedrun guides.
//!
//! A guide file is a loosely structured, hand-authored text: a two-line header (game and
//! category) followed by acts, chapters, fights, menus, loot, purchases, notes and images,
//! one instruction per line, with blank lines separating display units. This crate turns such
//! a file into a typed [`Guide`](guide::ast::Guide) that a step-by-step overlay can walk through.
//!
//! File Layout
//!
//! src/guide
//!   ├── characters   Character codes, markers and display names
//!   ├── lexing       Line splitting, marker tokens and line classification
//!   ├── ast          The step model (closed sum types, serde friendly)
//!   ├── parsing      Block parsers, scanner state machine and assembler
//!   ├── navigation   Step cursor used by the consumer UI
//!   ├── config       Parser configuration
//!   ├── formats      Output formats (json, treeviz)
//!   └── loader       File IO: parse, load, atomic write
//!
//! For testing guidelines, see the [testing module](guide::testing).

pub mod guide;

pub use guide::ast::{ActionGroup, Guide, Step};
pub use guide::config::ParserConfig;
pub use guide::parsing::{parse_guide, ParseError};
