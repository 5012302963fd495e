//! Fluent assertions over parsed guides

use crate::guide::ast::{ActionGroup, GroupKind, Guide, MenuSubType, Step, StepKind};

pub fn assert_guide(guide: &Guide) -> GuideAssertion<'_> {
    GuideAssertion { guide }
}

pub struct GuideAssertion<'a> {
    guide: &'a Guide,
}

impl<'a> GuideAssertion<'a> {
    pub fn game(self, expected: &str) -> Self {
        assert_eq!(self.guide.game, expected, "guide: unexpected game");
        self
    }

    pub fn category(self, expected: &str) -> Self {
        assert_eq!(self.guide.category, expected, "guide: unexpected category");
        self
    }

    pub fn group_count(self, expected: usize) -> Self {
        let actual = self.guide.action_groups.len();
        assert_eq!(
            actual, expected,
            "guide: expected {expected} groups, found {actual}"
        );
        self
    }

    pub fn group<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(GroupAssertion<'a>),
    {
        let group = self.guide.action_groups.get(index).unwrap_or_else(|| {
            panic!(
                "guide: group index {} out of bounds ({} groups)",
                index,
                self.guide.action_groups.len()
            )
        });
        assertion(GroupAssertion {
            group,
            context: format!("groups[{index}]"),
        });
        self
    }
}

pub struct GroupAssertion<'a> {
    group: &'a ActionGroup,
    context: String,
}

impl<'a> GroupAssertion<'a> {
    pub fn id(self, expected: u32) -> Self {
        assert_eq!(self.group.id, expected, "{}: unexpected id", self.context);
        self
    }

    pub fn kind(self, expected: GroupKind) -> Self {
        assert_eq!(self.group.kind, expected, "{}: unexpected kind", self.context);
        self
    }

    pub fn title(self, expected: &str) -> Self {
        assert_eq!(self.group.titre, expected, "{}: unexpected title", self.context);
        self
    }

    pub fn acte(self, expected: &str) -> Self {
        assert_eq!(self.group.acte, expected, "{}: unexpected act", self.context);
        self
    }

    pub fn chapitre(self, expected: &str) -> Self {
        assert_eq!(
            self.group.chapitre, expected,
            "{}: unexpected chapter",
            self.context
        );
        self
    }

    pub fn step_count(self, expected: usize) -> Self {
        let actual = self.group.steps.len();
        assert_eq!(
            actual, expected,
            "{}: expected {} steps, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn step<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(StepAssertion<'a>),
    {
        let step = self.group.steps.get(index).unwrap_or_else(|| {
            panic!(
                "{}: step index {} out of bounds ({} steps)",
                self.context,
                index,
                self.group.steps.len()
            )
        });
        assertion(StepAssertion {
            step,
            context: format!("{}:steps[{}]", self.context, index),
        });
        self
    }
}

pub struct StepAssertion<'a> {
    step: &'a Step,
    context: String,
}

impl<'a> StepAssertion<'a> {
    pub fn kind(self, expected: StepKind) -> Self {
        assert_eq!(self.step.kind(), expected, "{}: unexpected kind", self.context);
        self
    }

    /// Checks the step's title (or content, for notes and images).
    pub fn label(self, expected: &str) -> Self {
        assert_eq!(self.step.label(), expected, "{}: unexpected label", self.context);
        self
    }

    pub fn items(self, expected: &[&str]) -> Self {
        match self.step {
            Step::Loot(items) | Step::Purchase(items) => {
                assert_eq!(items.items, expected, "{}: unexpected items", self.context)
            }
            other => panic!(
                "{}: expected loot or purchase, found {}",
                self.context,
                other.kind()
            ),
        }
        self
    }

    pub fn image_count(self, expected: usize) -> Self {
        match self.step {
            Step::Loot(items) | Step::Purchase(items) => assert_eq!(
                items.images.len(),
                expected,
                "{}: unexpected image count",
                self.context
            ),
            other => panic!(
                "{}: expected loot or purchase, found {}",
                self.context,
                other.kind()
            ),
        }
        self
    }

    pub fn turn_count(self, expected: usize) -> Self {
        match self.step {
            Step::Combat(combat) | Step::Boss(combat) => assert_eq!(
                combat.turns.len(),
                expected,
                "{}: unexpected turn count",
                self.context
            ),
            other => panic!("{}: expected a fight, found {}", self.context, other.kind()),
        }
        self
    }

    pub fn action_count(self, expected: usize) -> Self {
        match self.step {
            Step::Menu(menu) => assert_eq!(
                menu.actions.len(),
                expected,
                "{}: unexpected action count",
                self.context
            ),
            other => panic!("{}: expected a menu, found {}", self.context, other.kind()),
        }
        self
    }

    pub fn menu_order(self, expected: &[MenuSubType]) -> Self {
        match self.step {
            Step::Menu(menu) => assert_eq!(
                menu.menu_order, expected,
                "{}: unexpected menu order",
                self.context
            ),
            other => panic!("{}: expected a menu, found {}", self.context, other.kind()),
        }
        self
    }

    pub fn chapitre(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.step.context().chapitre.as_deref(),
            expected,
            "{}: unexpected chapter",
            self.context
        );
        self
    }
}
