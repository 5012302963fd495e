//! Line Classification
//!
//! Core classification logic for determining what a guide line introduces, plus the helpers
//! that extract a line's payload once its kind is known.
//!
//! Classification follows this specific order (important for correctness):
//! 1. Blank lines
//! 2. Act lines (`Act ...`)
//! 3. Chapter lines (`T:...`)
//! 4. Note lines (`(A)...`)
//! 5. Image lines (`(IMG)...`)
//! 6. Loot lines (`📦...`)
//! 7. Purchase lines (`💰...`)
//! 8. Menu keyword lines
//! 9. Combat lines (`🛡️...`) and boss lines (`🎯...`)
//! 10. Anything else
//!
//! The order matters: a loot line mentioning `ARME` is still a loot line, and a note that
//! talks about `STAT` is still a note.

use crate::guide::ast::MenuSubType;
use crate::guide::characters::{leading_character, Character};
use crate::guide::config::KeywordMatch;
use once_cell::sync::Lazy;
use regex::Regex;

pub const ACT_PREFIX: &str = "Act ";
pub const CHAPTER_PREFIX: &str = "T:";
pub const NOTE_PREFIX: &str = "(A)";
pub const IMAGE_PREFIX: &str = "(IMG)";
pub const LOOT_EMOJI: &str = "📦";
pub const PURCHASE_EMOJI: &str = "💰";
/// The shield, with or without its emoji variation selector.
pub const COMBAT_EMOJI: &str = "🛡";
pub const BOSS_EMOJI: &str = "🎯";
const VARIATION_SELECTOR: char = '\u{fe0f}';

// Longer keywords first so prefix matching picks "UP ARME" over nothing at position 0.
static MENU_KEYWORD_ANYWHERE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(UP ARME|UP LUMINA|ARME|PICTO|LUMINA|STAT|SORT|FORMATION)")
        .expect("menu keyword regex is valid")
});

static MENU_KEYWORD_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(UP ARME|UP LUMINA|ARME|PICTO|LUMINA|STAT|SORT|FORMATION)")
        .expect("menu keyword regex is valid")
});

static TURN_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\((M|L|S|V|Mo)\)|(?i:parry|dodge))").expect("turn prefix regex is valid")
});

/// What a single line introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Act,
    Chapter,
    Note,
    Image,
    Loot,
    Purchase,
    MenuKeyword(MenuSubType),
    Combat,
    Boss,
    Other,
}

/// Determine the kind of a trimmed line.
pub fn classify_line(line: &str, keywords: KeywordMatch) -> LineKind {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if is_act_line(line) {
        return LineKind::Act;
    }
    if is_chapter_line(line) {
        return LineKind::Chapter;
    }
    if is_note_line(line) {
        return LineKind::Note;
    }
    if is_image_line(line) {
        return LineKind::Image;
    }
    if is_loot_line(line) {
        return LineKind::Loot;
    }
    if is_purchase_line(line) {
        return LineKind::Purchase;
    }
    if let Some(sub_type) = menu_keyword(line, keywords) {
        return LineKind::MenuKeyword(sub_type);
    }
    if is_boss_line(line) {
        return LineKind::Boss;
    }
    if is_combat_line(line) {
        return LineKind::Combat;
    }
    LineKind::Other
}

pub fn is_act_line(line: &str) -> bool {
    line.starts_with(ACT_PREFIX)
}

pub fn is_chapter_line(line: &str) -> bool {
    line.starts_with(CHAPTER_PREFIX)
}

pub fn is_note_line(line: &str) -> bool {
    line.starts_with(NOTE_PREFIX)
}

pub fn is_image_line(line: &str) -> bool {
    line.starts_with(IMAGE_PREFIX)
}

pub fn is_loot_line(line: &str) -> bool {
    line.starts_with(LOOT_EMOJI)
}

pub fn is_purchase_line(line: &str) -> bool {
    line.starts_with(PURCHASE_EMOJI)
}

pub fn is_combat_line(line: &str) -> bool {
    line.starts_with(COMBAT_EMOJI)
}

pub fn is_boss_line(line: &str) -> bool {
    line.starts_with(BOSS_EMOJI)
}

/// Returns the menu sub-type named by the first keyword found in `line`.
pub fn menu_keyword(line: &str, keywords: KeywordMatch) -> Option<MenuSubType> {
    let regex = match keywords {
        KeywordMatch::Anywhere => &MENU_KEYWORD_ANYWHERE,
        KeywordMatch::Prefix => &MENU_KEYWORD_PREFIX,
    };
    regex
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| MenuSubType::from_keyword(m.as_str()))
}

/// A turn line starts with a character marker or with PARRY/DODGE (any case).
pub fn is_turn_line(line: &str) -> bool {
    TURN_PREFIX.is_match(line)
}

/// The text following `prefix`, trimmed. Returns the whole trimmed line if the prefix is absent.
pub fn extract_after<'a>(line: &'a str, prefix: &str) -> &'a str {
    line.strip_prefix(prefix).unwrap_or(line).trim()
}

pub fn extract_act(line: &str) -> &str {
    line.trim()
}

pub fn extract_chapter(line: &str) -> &str {
    extract_after(line, CHAPTER_PREFIX)
}

pub fn extract_note(line: &str) -> &str {
    extract_after(line, NOTE_PREFIX)
}

/// The loot item on a loot line, with a stray variation selector removed.
pub fn extract_loot_item(line: &str) -> &str {
    strip_variation_selector(extract_after(line, LOOT_EMOJI))
}

/// The purchase items on a purchase line, split on commas. Empty entries are dropped.
pub fn extract_purchase_items(line: &str) -> Vec<&str> {
    strip_variation_selector(extract_after(line, PURCHASE_EMOJI))
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// The image path and optional character of an image line.
pub fn extract_image(line: &str) -> (&str, Option<Character>) {
    let payload = extract_after(line, IMAGE_PREFIX);
    match leading_character(payload) {
        Some((character, path)) => (path, Some(character)),
        None => (payload, None),
    }
}

fn strip_variation_selector(text: &str) -> &str {
    text.strip_prefix(VARIATION_SELECTOR).unwrap_or(text).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", LineKind::Blank)]
    #[case("Act I", LineKind::Act)]
    #[case("T:Prologue", LineKind::Chapter)]
    #[case("(A) Prendre à gauche", LineKind::Note)]
    #[case("(IMG) map.png", LineKind::Image)]
    #[case("📦 Potion", LineKind::Loot)]
    #[case("💰 Item A, Item B", LineKind::Purchase)]
    #[case("STAT", LineKind::MenuKeyword(MenuSubType::Stat))]
    #[case("UP ARME", LineKind::MenuKeyword(MenuSubType::UpArme))]
    #[case("UP LUMINA", LineKind::MenuKeyword(MenuSubType::UpLumina))]
    #[case("🛡️ Gardien", LineKind::Combat)]
    #[case("🛡 Gardien", LineKind::Combat)]
    #[case("🎯 Évêque", LineKind::Boss)]
    #[case("(V) Attaque > (M) Foudre", LineKind::Other)]
    fn test_classify_line(#[case] line: &str, #[case] expected: LineKind) {
        assert_eq!(classify_line(line, KeywordMatch::Anywhere), expected);
    }

    #[test]
    fn test_priority_loot_over_menu_keyword() {
        assert_eq!(
            classify_line("📦 ARME Lanceram", KeywordMatch::Anywhere),
            LineKind::Loot
        );
        assert_eq!(
            classify_line("(A) ouvrir le menu STAT", KeywordMatch::Anywhere),
            LineKind::Note
        );
    }

    #[test]
    fn test_keyword_match_modes() {
        let line = "(V) Changer d'ARME";
        assert_eq!(
            classify_line(line, KeywordMatch::Anywhere),
            LineKind::MenuKeyword(MenuSubType::Arme)
        );
        assert_eq!(classify_line(line, KeywordMatch::Prefix), LineKind::Other);
        assert_eq!(
            classify_line("PICTO équiper", KeywordMatch::Prefix),
            LineKind::MenuKeyword(MenuSubType::Picto)
        );
    }

    #[test]
    fn test_turn_lines() {
        assert!(is_turn_line("(V) Attaque"));
        assert!(is_turn_line("(Mo) Marteau"));
        assert!(is_turn_line("PARRY x2"));
        assert!(is_turn_line("dodge"));
        assert!(!is_turn_line("Attendre"));
        assert!(!is_turn_line("(X) Rien"));
    }

    #[test]
    fn test_extractors() {
        assert_eq!(extract_chapter("T: Lumière"), "Lumière");
        assert_eq!(extract_note("(A)Aller à droite"), "Aller à droite");
        assert_eq!(extract_loot_item("📦\u{fe0f} Chroma"), "Chroma");
        assert_eq!(
            extract_purchase_items("💰 Item A, Item B,"),
            vec!["Item A", "Item B"]
        );
        assert_eq!(
            extract_image("(IMG) (L) carte.png"),
            ("carte.png", Some(Character::Lune))
        );
        assert_eq!(extract_image("(IMG) carte.png"), ("carte.png", None));
    }
}
