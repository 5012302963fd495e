//! Action groups
//!
//! An action group is one display unit of the overlay: the steps between two blank lines.
//! Its type and title are inferred from the steps it contains when it is built.

use super::step::{Step, StepKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Act,
    Chapter,
    Loot,
    Purchase,
    Note,
    Image,
    Menu,
    Combat,
    Boss,
    /// Steps of more than one kind.
    Mixte,
}

impl GroupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::Act => "act",
            GroupKind::Chapter => "chapter",
            GroupKind::Loot => "loot",
            GroupKind::Purchase => "purchase",
            GroupKind::Note => "note",
            GroupKind::Image => "image",
            GroupKind::Menu => "menu",
            GroupKind::Combat => "combat",
            GroupKind::Boss => "boss",
            GroupKind::Mixte => "mixte",
        }
    }
}

impl From<StepKind> for GroupKind {
    fn from(kind: StepKind) -> Self {
        match kind {
            StepKind::Act => GroupKind::Act,
            StepKind::Chapter => GroupKind::Chapter,
            StepKind::Loot => GroupKind::Loot,
            StepKind::Purchase => GroupKind::Purchase,
            StepKind::Note => GroupKind::Note,
            StepKind::Image => GroupKind::Image,
            StepKind::Menu => GroupKind::Menu,
            StepKind::Combat => GroupKind::Combat,
            StepKind::Boss => GroupKind::Boss,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionGroup {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: GroupKind,
    pub acte: String,
    pub chapitre: String,
    pub titre: String,
    pub steps: Vec<Step>,
}

impl ActionGroup {
    /// Builds a group, inferring its kind and title from `steps`.
    pub fn new(
        id: u32,
        acte: impl Into<String>,
        chapitre: impl Into<String>,
        steps: Vec<Step>,
    ) -> Self {
        ActionGroup {
            id,
            kind: infer_kind(&steps),
            acte: acte.into(),
            chapitre: chapitre.into(),
            titre: infer_title(&steps),
            steps,
        }
    }

    pub fn is_kind(&self, kind: GroupKind) -> bool {
        self.kind == kind
    }
}

fn infer_kind(steps: &[Step]) -> GroupKind {
    let mut kinds = steps.iter().map(Step::kind);
    match kinds.next() {
        Some(first) if kinds.all(|k| k == first) => first.into(),
        _ => GroupKind::Mixte,
    }
}

fn infer_title(steps: &[Step]) -> String {
    match steps {
        [] => return "Groupe d'actions".to_string(),
        [Step::Combat(combat)] | [Step::Boss(combat)] => return combat.titre.clone(),
        _ => {}
    }

    let all = |kind: StepKind| steps.iter().all(|s| s.kind() == kind);
    if all(StepKind::Menu) {
        return "⚙️ Menu".to_string();
    }
    if all(StepKind::Loot) {
        return "📦 Loot".to_string();
    }
    if all(StepKind::Purchase) {
        return "💰 Achat".to_string();
    }
    if all(StepKind::Image) {
        return "🖼️ Image".to_string();
    }

    steps.iter().map(|s| s.kind().emoji()).collect()
}
