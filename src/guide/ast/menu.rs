//! Menu steps
//!
//! A menu step gathers the actions performed in the game menus between two breaks: gear
//! (`ARME`, `PICTO`, `LUMINA`), upgrades (`UP ARME`, `UP LUMINA`), attribute points (`STAT`),
//! spells (`SORT`) and party formation (`FORMATION`). Each keyword line switches the current
//! [`MenuSubType`]; the entries below it are typed accordingly.

use super::step::StepContext;
use crate::guide::characters::{name_or_empty, Character};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The menu section a keyword line switches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuSubType {
    #[serde(rename = "arme")]
    Arme,
    #[serde(rename = "picto")]
    Picto,
    #[serde(rename = "lumina")]
    Lumina,
    #[serde(rename = "up arme")]
    UpArme,
    #[serde(rename = "up lumina")]
    UpLumina,
    #[serde(rename = "stat")]
    Stat,
    #[serde(rename = "sort")]
    Sort,
    #[serde(rename = "formation")]
    Formation,
}

impl MenuSubType {
    pub const ALL: [MenuSubType; 8] = [
        MenuSubType::Arme,
        MenuSubType::Picto,
        MenuSubType::Lumina,
        MenuSubType::UpArme,
        MenuSubType::UpLumina,
        MenuSubType::Stat,
        MenuSubType::Sort,
        MenuSubType::Formation,
    ];

    /// The keyword as written in guides, e.g. `UP ARME`.
    pub fn keyword(self) -> &'static str {
        match self {
            MenuSubType::Arme => "ARME",
            MenuSubType::Picto => "PICTO",
            MenuSubType::Lumina => "LUMINA",
            MenuSubType::UpArme => "UP ARME",
            MenuSubType::UpLumina => "UP LUMINA",
            MenuSubType::Stat => "STAT",
            MenuSubType::Sort => "SORT",
            MenuSubType::Formation => "FORMATION",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.keyword() == keyword)
    }

    /// The serialized name, e.g. `up arme`.
    pub fn as_str(self) -> &'static str {
        match self {
            MenuSubType::Arme => "arme",
            MenuSubType::Picto => "picto",
            MenuSubType::Lumina => "lumina",
            MenuSubType::UpArme => "up arme",
            MenuSubType::UpLumina => "up lumina",
            MenuSubType::Stat => "stat",
            MenuSubType::Sort => "sort",
            MenuSubType::Formation => "formation",
        }
    }

    /// The label used when building menu titles.
    pub fn label(self) -> &'static str {
        match self {
            MenuSubType::Arme => "Armes",
            MenuSubType::Picto => "Pictogrammes",
            MenuSubType::Lumina => "Lumina",
            MenuSubType::UpArme => "Amélioration Armes",
            MenuSubType::UpLumina => "Amélioration Lumina",
            MenuSubType::Stat => "Stats",
            MenuSubType::Sort => "Sorts",
            MenuSubType::Formation => "Formation",
        }
    }
}

impl fmt::Display for MenuSubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The type of a single menu action: a menu sub-type, or a note or image interleaved in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuActionKind {
    #[serde(rename = "arme")]
    Arme,
    #[serde(rename = "picto")]
    Picto,
    #[serde(rename = "lumina")]
    Lumina,
    #[serde(rename = "up arme")]
    UpArme,
    #[serde(rename = "up lumina")]
    UpLumina,
    #[serde(rename = "stat")]
    Stat,
    #[serde(rename = "sort")]
    Sort,
    #[serde(rename = "formation")]
    Formation,
    #[serde(rename = "note")]
    Note,
    #[serde(rename = "image")]
    Image,
}

impl From<MenuSubType> for MenuActionKind {
    fn from(sub_type: MenuSubType) -> Self {
        match sub_type {
            MenuSubType::Arme => MenuActionKind::Arme,
            MenuSubType::Picto => MenuActionKind::Picto,
            MenuSubType::Lumina => MenuActionKind::Lumina,
            MenuSubType::UpArme => MenuActionKind::UpArme,
            MenuSubType::UpLumina => MenuActionKind::UpLumina,
            MenuSubType::Stat => MenuActionKind::Stat,
            MenuSubType::Sort => MenuActionKind::Sort,
            MenuSubType::Formation => MenuActionKind::Formation,
        }
    }
}

/// Structured data parsed out of an entry's text. The text itself is always kept verbatim in
/// [`MenuAction::action`]; details only exist when the entry matches its sub-type's pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ActionDetail {
    /// `+9 Force (9)`: add 9 points to Force for a total of 9.
    Stat { name: String, to_add: u32, total: u32 },
    /// `Lanceram +1 (3)` for weapons, `+2 Lumina (8)` for lumina points.
    Upgrade {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        to_add: u32,
        total: u32,
    },
    /// `Fleuret (2)`: equip the spell in slot 2.
    Spell { slot: String },
    /// `+(V)` adds Verso to the party, `-(V)` removes them.
    Formation { to_add: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuAction {
    #[serde(rename = "type")]
    pub kind: MenuActionKind,
    pub action: String,
    #[serde(default, with = "name_or_empty")]
    pub character: Option<Character>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ActionDetail>,
}

impl MenuAction {
    pub fn new(kind: impl Into<MenuActionKind>, action: impl Into<String>) -> Self {
        MenuAction {
            kind: kind.into(),
            action: action.into(),
            character: None,
            detail: None,
        }
    }

    pub fn with_character(mut self, character: Option<Character>) -> Self {
        self.character = character;
        self
    }

    pub fn with_detail(mut self, detail: Option<ActionDetail>) -> Self {
        self.detail = detail;
        self
    }

    pub fn note(content: impl Into<String>) -> Self {
        MenuAction::new(MenuActionKind::Note, content)
    }

    pub fn image(path: impl Into<String>, character: Option<Character>) -> Self {
        MenuAction::new(MenuActionKind::Image, path).with_character(character)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuStep {
    pub titre: String,
    pub actions: Vec<MenuAction>,
    /// The distinct sub-types visited, in first-seen order.
    pub menu_order: Vec<MenuSubType>,
    #[serde(flatten)]
    pub context: StepContext,
}

/// `"Menu"` for no sub-type, the sub-type's label for one, `"Menu A + B"` for several.
pub fn menu_title(menu_order: &[MenuSubType]) -> String {
    match menu_order {
        [] => "Menu".to_string(),
        [single] => single.label().to_string(),
        several => {
            let labels: Vec<_> = several.iter().map(|s| s.label()).collect();
            format!("Menu {}", labels.join(" + "))
        }
    }
}
