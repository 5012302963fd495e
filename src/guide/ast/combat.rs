//! Combat steps
//!
//! A fight is a title plus a list of turns. A turn is the list of actions written on one line,
//! separated by `>` in the source. Notes and images written inside a fight are kept in place as
//! single-action pseudo-turns flagged with `isNote` / `isImage`, so the overlay can show them
//! between the turns they belong to.

use super::step::StepContext;
use crate::guide::characters::{name_or_empty, Character};
use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnAction {
    pub action: String,
    #[serde(default, with = "name_or_empty")]
    pub character: Option<Character>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub fail: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_note: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_image: bool,
}

impl TurnAction {
    pub fn new(action: impl Into<String>, character: Option<Character>, fail: bool) -> Self {
        TurnAction {
            action: action.into(),
            character,
            fail,
            is_note: false,
            is_image: false,
        }
    }

    pub fn note(content: impl Into<String>) -> Self {
        TurnAction {
            is_note: true,
            ..TurnAction::new(content, None, false)
        }
    }

    pub fn image(path: impl Into<String>, character: Option<Character>) -> Self {
        TurnAction {
            is_image: true,
            ..TurnAction::new(path, character, false)
        }
    }

    pub fn is_pseudo(&self) -> bool {
        self.is_note || self.is_image
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStep {
    /// The full trimmed combat line, emoji included.
    pub titre: String,
    pub turns: Vec<Vec<TurnAction>>,
    #[serde(flatten)]
    pub context: StepContext,
}

impl CombatStep {
    /// Turns that are actual fight actions, i.e. not note or image pseudo-turns.
    pub fn action_turns(&self) -> impl Iterator<Item = &Vec<TurnAction>> {
        self.turns
            .iter()
            .filter(|turn| !turn.iter().all(TurnAction::is_pseudo))
    }
}
