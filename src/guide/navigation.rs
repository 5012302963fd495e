//! Step cursor
//!
//! The overlay walks a guide one action group at a time. Runners who already know a route
//! usually hide some categories (loot pickups, merchant purchases, notes); the cursor steps
//! over groups matching a skip predicate, most commonly a [`SkipPolicy`].
//!
//! Moving never leaves the guide: when no acceptable group exists in the requested
//! direction, the cursor stays where it is and the move returns `None`.

use crate::guide::ast::{ActionGroup, ChapterInfo, GroupKind, Guide};
use serde::{Deserialize, Serialize};

/// Which group categories the cursor steps over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SkipPolicy {
    pub loot: bool,
    pub purchase: bool,
    pub notes: bool,
}

impl SkipPolicy {
    pub fn none() -> Self {
        SkipPolicy::default()
    }

    pub fn skips(&self, group: &ActionGroup) -> bool {
        match group.kind {
            GroupKind::Loot => self.loot,
            GroupKind::Purchase => self.purchase,
            GroupKind::Note => self.notes,
            _ => false,
        }
    }
}

/// A position in a guide's action groups.
#[derive(Debug, Clone)]
pub struct StepCursor<'g> {
    groups: &'g [ActionGroup],
    chapters: Vec<ChapterInfo>,
    index: usize,
}

impl<'g> StepCursor<'g> {
    pub fn new(guide: &'g Guide) -> Self {
        StepCursor {
            groups: &guide.action_groups,
            chapters: guide.chapters(),
            index: 0,
        }
    }

    pub fn current(&self) -> Option<&'g ActionGroup> {
        self.groups.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn chapters(&self) -> &[ChapterInfo] {
        &self.chapters
    }

    /// The chapter the current group belongs to.
    pub fn current_chapter(&self) -> Option<&ChapterInfo> {
        self.chapters.iter().rev().find(|c| c.index <= self.index)
    }

    /// Moves to the next group not matched by `skip`.
    pub fn next(&mut self, skip: impl Fn(&ActionGroup) -> bool) -> Option<&'g ActionGroup> {
        let groups = self.groups;
        let (index, group) = groups
            .iter()
            .enumerate()
            .skip(self.index + 1)
            .find(|&(_, group)| !skip(group))?;
        self.index = index;
        Some(group)
    }

    /// Moves to the previous group not matched by `skip`.
    pub fn previous(&mut self, skip: impl Fn(&ActionGroup) -> bool) -> Option<&'g ActionGroup> {
        let groups = self.groups;
        let (index, group) = groups
            .iter()
            .enumerate()
            .take(self.index)
            .rev()
            .find(|&(_, group)| !skip(group))?;
        self.index = index;
        Some(group)
    }

    pub fn next_with(&mut self, policy: SkipPolicy) -> Option<&'g ActionGroup> {
        self.next(|group| policy.skips(group))
    }

    pub fn previous_with(&mut self, policy: SkipPolicy) -> Option<&'g ActionGroup> {
        self.previous(|group| policy.skips(group))
    }

    /// Moves to `index`. Out of range indices leave the cursor in place.
    pub fn jump_to(&mut self, index: usize) -> Option<&'g ActionGroup> {
        let group = self.groups.get(index)?;
        self.index = index;
        Some(group)
    }

    /// Moves to the first group of the chapter called `name`.
    pub fn jump_to_chapter(&mut self, name: &str) -> Option<&'g ActionGroup> {
        let index = self.chapters.iter().find(|c| c.name == name)?.index;
        self.jump_to(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::config::ParserConfig;
    use crate::guide::parsing::parse_guide;

    const ROUTE: &str = "Game X\nAny%\n\nT:Prologue\n🛡️ Gardien\n(V) Attaque\n\n📦 Potion\n\n💰 Épée\n\n(A) Aller à droite\n\nT:Lumière\n🎯 Évêque\n(M) Foudre\n";

    fn guide() -> Guide {
        parse_guide(ROUTE, &ParserConfig::default()).unwrap()
    }

    #[test]
    fn test_walk_without_skipping() {
        let guide = guide();
        let mut cursor = StepCursor::new(&guide);
        assert_eq!(cursor.len(), 5);
        assert_eq!(cursor.current().map(|g| g.id), Some(1));
        assert_eq!(cursor.next_with(SkipPolicy::none()).map(|g| g.id), Some(2));
        assert_eq!(cursor.previous_with(SkipPolicy::none()).map(|g| g.id), Some(1));
        assert_eq!(cursor.previous_with(SkipPolicy::none()), None);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_skip_policy() {
        let guide = guide();
        let mut cursor = StepCursor::new(&guide);
        let policy = SkipPolicy {
            loot: true,
            purchase: true,
            notes: true,
        };
        let next = cursor.next_with(policy).unwrap();
        assert_eq!(next.kind, GroupKind::Boss);
        assert_eq!(cursor.index(), 4);
        assert_eq!(cursor.previous_with(policy).map(|g| g.id), Some(1));
    }

    #[test]
    fn test_stays_put_when_everything_ahead_is_skipped() {
        let guide = guide();
        let mut cursor = StepCursor::new(&guide);
        cursor.jump_to(1);
        assert_eq!(cursor.next(|g| g.kind != GroupKind::Combat), None);
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_chapters() {
        let guide = guide();
        let mut cursor = StepCursor::new(&guide);
        assert_eq!(cursor.chapters().len(), 2);
        let group = cursor.jump_to_chapter("Lumière").unwrap();
        assert_eq!(group.titre, "🎯 Évêque");
        assert_eq!(cursor.current_chapter().map(|c| c.name.as_str()), Some("Lumière"));
        assert_eq!(cursor.jump_to_chapter("Inconnu"), None);
        assert_eq!(cursor.jump_to(99), None);
        assert_eq!(cursor.index(), 4);
    }
}
