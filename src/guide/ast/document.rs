//! The guide document

use super::group::ActionGroup;
use super::step::Step;
use serde::{Deserialize, Serialize};

/// A chapter entry of the guide, pointing at the first group of the chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterInfo {
    pub name: String,
    /// Index of the chapter's first group in [`Guide::action_groups`].
    pub index: usize,
}

/// Structural problems found by [`Guide::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("guide has an empty {0}")]
    EmptyHeader(&'static str),
    #[error("group {id} has no steps")]
    EmptyGroup { id: u32 },
    #[error("group id {id} does not follow {previous}")]
    NonIncreasingId { previous: u32, id: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    pub game: String,
    pub category: String,
    pub action_groups: Vec<ActionGroup>,
}

impl Guide {
    pub fn new(game: impl Into<String>, category: impl Into<String>) -> Self {
        Guide {
            game: game.into(),
            category: category.into(),
            action_groups: Vec::new(),
        }
    }

    pub fn add_action_group(&mut self, group: ActionGroup) {
        self.action_groups.push(group);
    }

    /// Every step of every group, in document order.
    pub fn all_steps(&self) -> impl Iterator<Item = &Step> {
        self.action_groups.iter().flat_map(|g| g.steps.iter())
    }

    pub fn step_count(&self) -> usize {
        self.action_groups.iter().map(|g| g.steps.len()).sum()
    }

    /// One entry per chapter change, in order. Groups without a chapter are not listed.
    pub fn chapters(&self) -> Vec<ChapterInfo> {
        let mut chapters: Vec<ChapterInfo> = Vec::new();
        let mut current: Option<&str> = None;
        for (index, group) in self.action_groups.iter().enumerate() {
            let name = group.chapitre.as_str();
            if name.is_empty() || current == Some(name) {
                continue;
            }
            current = Some(name);
            chapters.push(ChapterInfo {
                name: name.to_string(),
                index,
            });
        }
        chapters
    }

    /// Pretty-printed JSON (2-space indentation).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Checks the structural invariants of a parsed guide: a non-empty header, no empty
    /// groups and strictly increasing group ids.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.game.is_empty() {
            return Err(ValidationError::EmptyHeader("game"));
        }
        if self.category.is_empty() {
            return Err(ValidationError::EmptyHeader("category"));
        }
        let mut previous: Option<u32> = None;
        for group in &self.action_groups {
            if group.steps.is_empty() {
                return Err(ValidationError::EmptyGroup { id: group.id });
            }
            if let Some(previous) = previous {
                if group.id <= previous {
                    return Err(ValidationError::NonIncreasingId {
                        previous,
                        id: group.id,
                    });
                }
            }
            previous = Some(group.id);
        }
        Ok(())
    }
}
