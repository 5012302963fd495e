//! Treeviz formatter for guides
//!
//! Treeviz is a one line per node view of a parsed guide, handy to eyeball how a guide file
//! was understood: which lines ended up in which group, which fight a turn belongs to, which
//! menu section an entry was read under.
//!
//! The format is:
//! <prefix><connector> <icon> <label> (label truncated to 40 characters)
//!
//! Example:
//!
//!     ⧉ Clair Obscur (Any%)
//!     ├─ § 1 🛡️ Gardien
//!     │ └─ 🛡️ 🛡️ Gardien
//!     │   ├─ ↵ verso: Attaque > maelle: Foudre ✗
//!     │   └─ 💡 Viser la tête
//!     └─ § 2 📦 Loot
//!       └─ 📦 Potion | Chroma
//!
//! Icons
//!     Guide: ⧉
//!     Group: §
//!     Steps: the step's own emoji (📦 💰 💡 🖼️ ⚙️ 🛡️ 🎯 📍)
//!     Turn: ↵
//!     Menu entry: •
//!     Image: 🖼️
//!     Note inside a block: 💡

use super::registry::{FormatError, Formatter};
use crate::guide::ast::{ActionGroup, Guide, MenuAction, MenuActionKind, Step, TurnAction};

const LABEL_WIDTH: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// A node of the rendered tree.
struct TreeNode {
    icon: &'static str,
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(icon: &'static str, label: impl Into<String>) -> Self {
        TreeNode {
            icon,
            label: label.into(),
            children: Vec::new(),
        }
    }
}

fn group_node(group: &ActionGroup) -> TreeNode {
    TreeNode {
        icon: "§",
        label: format!("{} {}", group.id, group.titre),
        children: group.steps.iter().map(step_node).collect(),
    }
}

fn step_node(step: &Step) -> TreeNode {
    let kind = step.kind();
    let children = match step {
        Step::Loot(items) | Step::Purchase(items) => items
            .images
            .iter()
            .map(|image| TreeNode::leaf("🖼️", image.image_path.as_str()))
            .collect(),
        Step::Menu(menu) => menu.actions.iter().map(menu_action_node).collect(),
        Step::Combat(combat) | Step::Boss(combat) => {
            combat.turns.iter().map(|turn| turn_node(turn)).collect()
        }
        Step::Act(_) | Step::Chapter(_) | Step::Note(_) | Step::Image(_) => Vec::new(),
    };
    TreeNode {
        icon: kind.emoji(),
        label: step.label().to_string(),
        children,
    }
}

fn menu_action_node(action: &MenuAction) -> TreeNode {
    match action.kind {
        MenuActionKind::Note => TreeNode::leaf("💡", action.action.as_str()),
        MenuActionKind::Image => TreeNode::leaf("🖼️", action.action.as_str()),
        _ => {
            let who = action.character.map(|c| c.name()).unwrap_or("?");
            TreeNode::leaf("•", format!("{}: {}", who, action.action))
        }
    }
}

fn turn_node(turn: &[TurnAction]) -> TreeNode {
    match turn {
        [single] if single.is_note => TreeNode::leaf("💡", single.action.as_str()),
        [single] if single.is_image => TreeNode::leaf("🖼️", single.action.as_str()),
        actions => {
            let label = actions
                .iter()
                .map(|action| {
                    let mut text = match action.character {
                        Some(character) => format!("{}: {}", character, action.action),
                        None => action.action.clone(),
                    };
                    if action.fail {
                        text.push_str(" ✗");
                    }
                    text
                })
                .collect::<Vec<_>>()
                .join(" > ");
            TreeNode::leaf("↵", label)
        }
    }
}

fn format_node(node: &TreeNode, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        node.icon,
        truncate(&node.label, LABEL_WIDTH)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        format_node(child, &child_prefix, i == child_count - 1, output);
    }
}

pub fn to_treeviz_str(guide: &Guide) -> String {
    let mut output = format!("⧉ {} ({})\n", guide.game, guide.category);
    let groups: Vec<TreeNode> = guide.action_groups.iter().map(group_node).collect();
    let count = groups.len();
    for (i, group) in groups.iter().enumerate() {
        format_node(group, "", i == count - 1, &mut output);
    }
    output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, guide: &Guide) -> Result<String, FormatError> {
        Ok(to_treeviz_str(guide))
    }

    fn description(&self) -> &str {
        "Visual tree of groups, steps, turns and menu entries"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::config::ParserConfig;
    use crate::guide::parsing::parse_guide;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }

    #[test]
    fn test_treeviz_guide() {
        let source = "Clair Obscur\nAny%\n\n🛡️ Gardien\n(V) Attaque > (M) Foudre (FAIL)\n(A) Viser la tête\n\n📦 Potion\n📦 Chroma\n\nSTAT\n(V) +9 Force (9), +2 Esprit (5)\n";
        let guide = parse_guide(source, &ParserConfig::default()).unwrap();
        insta::assert_snapshot!(to_treeviz_str(&guide), @r###"
        ⧉ Clair Obscur (Any%)
        ├─ § 1 🛡️ Gardien
        │ └─ 🛡️ 🛡️ Gardien
        │   ├─ ↵ verso: Attaque > maelle: Foudre ✗
        │   └─ 💡 Viser la tête
        ├─ § 2 📦 Loot
        │ └─ 📦 Potion | Chroma
        └─ § 3 ⚙️ Menu
          └─ ⚙️ Stats
            ├─ • verso: +9 Force (9)
            └─ • verso: +2 Esprit (5)
        "###);
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let source = "Game X\nAny%\n\n(A) Une note beaucoup trop longue pour tenir sur une seule ligne\n";
        let guide = parse_guide(source, &ParserConfig::default()).unwrap();
        let output = to_treeviz_str(&guide);
        assert!(output.contains("💡 Une note beaucoup trop longue pour tenir..."));
    }
}
