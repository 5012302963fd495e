//! Testing utilities for guide parsing
//!
//! # Parser Testing Guidelines
//!
//! This module provides two tools meant to be used together:
//!
//! 1. **[GuideSamples]** - curated guide sources under `samples/`
//! 2. **[assert_guide]** - a fluent API to verify a parsed guide
//!
//! ## Rule 1: Prefer the sample files for whole-guide tests
//!
//! Guide syntax is full of small traps (emoji variation selectors, keywords that match inside
//! words, notes that fold into menus). Writing a full guide inline in every test is how those
//! details end up wrong. The samples are reviewed once and reused everywhere:
//!
//! ```rust-example
//! use runguide::guide::testing::GuideSamples;
//!
//! let guide = GuideSamples::parse("020-combat.txt");
//! ```
//!
//! Short inline sources remain fine for block-level tests where the point is one line.
//!
//! **Available samples:**
//! - `010-loot-purchase.txt` - loot grouping, purchases, an image attached to loot
//! - `020-combat.txt` - fights, boss, fail markers, pseudo-turns
//! - `030-menus.txt` - every menu sub-type, inheritance, a note leading a menu
//! - `040-context.txt` - acts and chapters carried across groups
//! - `900-malformed.txt` - lines that only parse under the lenient policy
//!
//! ## Rule 2: Assert shapes with assert_guide
//!
//! ```rust-example
//! use runguide::guide::testing::assert_guide;
//!
//! assert_guide(&guide)
//!     .group_count(2)
//!     .group(0, |group| {
//!         group
//!             .kind(GroupKind::Combat)
//!             .title("🛡️ Sentinelle")
//!             .step(0, |step| step.turn_count(3));
//!     });
//! ```

mod assertions;
mod samples;

pub use assertions::{assert_guide, GroupAssertion, GuideAssertion, StepAssertion};
pub use samples::GuideSamples;
