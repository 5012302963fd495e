//! Steps and their simple payloads

use super::combat::CombatStep;
use super::menu::MenuStep;
use crate::guide::characters::{name_or_empty, Character};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The act and chapter in force when a step was produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapitre: Option<String>,
}

impl StepContext {
    pub fn new(acte: Option<&str>, chapitre: Option<&str>) -> Self {
        StepContext {
            acte: acte.map(str::to_string),
            chapitre: chapitre.map(str::to_string),
        }
    }
}

/// An act or chapter heading. Only produced when headings are enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingStep {
    pub titre: String,
    #[serde(flatten)]
    pub context: StepContext,
}

/// Items picked up (loot) or bought (purchase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStep {
    /// The items joined with `" | "`.
    pub titre: String,
    pub items: Vec<String>,
    /// Images that directly follow the step.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageStep>,
    #[serde(flatten)]
    pub context: StepContext,
}

impl ItemStep {
    pub fn new(items: Vec<String>, context: StepContext) -> Self {
        ItemStep {
            titre: items.join(" | "),
            items,
            images: Vec::new(),
            context,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteStep {
    pub content: String,
    #[serde(flatten)]
    pub context: StepContext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStep {
    pub image_path: String,
    #[serde(
        default,
        with = "name_or_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub character: Option<Character>,
    #[serde(flatten)]
    pub context: StepContext,
}

/// One instruction of the guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Step {
    Act(HeadingStep),
    Chapter(HeadingStep),
    Loot(ItemStep),
    Purchase(ItemStep),
    Note(NoteStep),
    Image(ImageStep),
    Menu(MenuStep),
    Combat(CombatStep),
    Boss(CombatStep),
}

/// The tag of a [`Step`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Act,
    Chapter,
    Loot,
    Purchase,
    Note,
    Image,
    Menu,
    Combat,
    Boss,
}

impl StepKind {
    pub fn emoji(self) -> &'static str {
        match self {
            StepKind::Act | StepKind::Chapter => "📍",
            StepKind::Loot => "📦",
            StepKind::Purchase => "💰",
            StepKind::Note => "💡",
            StepKind::Image => "🖼️",
            StepKind::Menu => "⚙️",
            StepKind::Combat => "🛡️",
            StepKind::Boss => "🎯",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Act => "act",
            StepKind::Chapter => "chapter",
            StepKind::Loot => "loot",
            StepKind::Purchase => "purchase",
            StepKind::Note => "note",
            StepKind::Image => "image",
            StepKind::Menu => "menu",
            StepKind::Combat => "combat",
            StepKind::Boss => "boss",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Step {
    pub fn kind(&self) -> StepKind {
        match self {
            Step::Act(_) => StepKind::Act,
            Step::Chapter(_) => StepKind::Chapter,
            Step::Loot(_) => StepKind::Loot,
            Step::Purchase(_) => StepKind::Purchase,
            Step::Note(_) => StepKind::Note,
            Step::Image(_) => StepKind::Image,
            Step::Menu(_) => StepKind::Menu,
            Step::Combat(_) => StepKind::Combat,
            Step::Boss(_) => StepKind::Boss,
        }
    }

    pub fn context(&self) -> &StepContext {
        match self {
            Step::Act(s) | Step::Chapter(s) => &s.context,
            Step::Loot(s) | Step::Purchase(s) => &s.context,
            Step::Note(s) => &s.context,
            Step::Image(s) => &s.context,
            Step::Menu(s) => &s.context,
            Step::Combat(s) | Step::Boss(s) => &s.context,
        }
    }

    /// A one-line label for the step: its title, or its content when it has no title.
    pub fn label(&self) -> &str {
        match self {
            Step::Act(s) | Step::Chapter(s) => &s.titre,
            Step::Loot(s) | Step::Purchase(s) => &s.titre,
            Step::Note(s) => &s.content,
            Step::Image(s) => &s.image_path,
            Step::Menu(s) => &s.titre,
            Step::Combat(s) | Step::Boss(s) => &s.titre,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_loot_serialization() {
        let step = Step::Loot(ItemStep::new(
            vec!["Potion".into(), "Chroma".into()],
            StepContext::new(Some("Act I"), None),
        ));
        assert_eq!(
            serde_json::to_value(&step).unwrap(),
            json!({
                "type": "loot",
                "titre": "Potion | Chroma",
                "items": ["Potion", "Chroma"],
                "acte": "Act I"
            })
        );
    }

    #[test]
    fn test_image_serialization() {
        let step = Step::Image(ImageStep {
            image_path: "carte.png".into(),
            character: Some(Character::Lune),
            context: StepContext::default(),
        });
        assert_eq!(
            serde_json::to_value(&step).unwrap(),
            json!({"type": "image", "imagePath": "carte.png", "character": "lune"})
        );
    }

    #[test]
    fn test_image_without_character_deserializes() {
        let step: Step =
            serde_json::from_value(json!({"type": "image", "imagePath": "a.png"})).unwrap();
        assert_eq!(step.kind(), StepKind::Image);
        assert_eq!(step.label(), "a.png");
    }

    #[test]
    fn test_note_label_and_context() {
        let step = Step::Note(NoteStep {
            content: "Aller à gauche".into(),
            context: StepContext::new(Some("Act I"), Some("Prologue")),
        });
        assert_eq!(step.label(), "Aller à gauche");
        assert_eq!(step.context().chapitre.as_deref(), Some("Prologue"));
    }
}
