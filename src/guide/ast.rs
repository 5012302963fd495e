//! The step model
//!
//! A parsed guide is a [`Guide`]: a header plus an ordered list of [`ActionGroup`]s. Each
//! group is one display unit of the overlay and holds one or more [`Step`]s. Steps are a
//! closed sum type; every variant has its own payload struct so consumers match exhaustively
//! instead of probing optional fields.
//!
//! Everything here is serde friendly and serializes to the JSON schema consumed by the
//! overlay: steps are tagged by a `type` field, keys are camelCase, and optional keys are
//! omitted when empty.
//!
//! Structure:
//!     step       Step, StepKind, StepContext and the simple payloads (items, notes, images)
//!     menu       MenuStep, MenuAction, MenuSubType, ActionDetail
//!     combat     CombatStep, TurnAction
//!     group      ActionGroup, GroupKind (type and title inference)
//!     document   Guide, ChapterInfo, validation

pub mod combat;
pub mod document;
pub mod group;
pub mod menu;
pub mod step;

pub use combat::{CombatStep, TurnAction};
pub use document::{ChapterInfo, Guide, ValidationError};
pub use group::{ActionGroup, GroupKind};
pub use menu::{ActionDetail, MenuAction, MenuActionKind, MenuStep, MenuSubType};
pub use step::{HeadingStep, ImageStep, ItemStep, NoteStep, Step, StepContext, StepKind};
