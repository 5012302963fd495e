//! Character registry
//!
//! Guides tag actions with a short parenthesized code naming the party member who performs
//! them, e.g. `(V) Attaque` or `(Mo) Marteau`. This module owns the fixed bijection between
//! those codes and the canonical (lowercase) character names written to the output, plus the
//! helpers used to pull a marker out of an action and clean the display text.
//!
//! Marker recognition itself is done by the [marker lexer](crate::guide::lexing::markers).

use crate::guide::lexing::markers::MarkedSegment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A playable character that can be referenced by a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Character {
    Maelle,
    Lune,
    Sciel,
    Verso,
    Monoco,
}

impl Character {
    pub const ALL: [Character; 5] = [
        Character::Maelle,
        Character::Lune,
        Character::Sciel,
        Character::Verso,
        Character::Monoco,
    ];

    /// The code used inside markers, without parentheses.
    pub fn code(self) -> &'static str {
        match self {
            Character::Maelle => "M",
            Character::Lune => "L",
            Character::Sciel => "S",
            Character::Verso => "V",
            Character::Monoco => "Mo",
        }
    }

    /// The canonical lowercase name written to guide files.
    pub fn name(self) -> &'static str {
        match self {
            Character::Maelle => "maelle",
            Character::Lune => "lune",
            Character::Sciel => "sciel",
            Character::Verso => "verso",
            Character::Monoco => "monoco",
        }
    }

    /// The full marker as it appears in source text, e.g. `(Mo)`.
    pub fn marker(self) -> String {
        format!("({})", self.code())
    }

    /// Codes are case-sensitive: `(m)` is not a marker.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is neither a character code nor a character name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown character '{0}'")]
pub struct UnknownCharacter(pub String);

impl FromStr for Character {
    type Err = UnknownCharacter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Character::from_code(s)
            .or_else(|| Character::from_name(s))
            .ok_or_else(|| UnknownCharacter(s.to_string()))
    }
}

/// Returns the character named by the first marker found anywhere in `text`.
pub fn extract_character(text: &str) -> Option<Character> {
    MarkedSegment::parse(text).character
}

/// Strips the first character marker and the first fail marker, then trims.
pub fn clean_action(text: &str) -> String {
    MarkedSegment::parse(text).text
}

pub fn has_fail_marker(text: &str) -> bool {
    MarkedSegment::parse(text).fail
}

/// If `text` starts with a character marker, returns the character and the trimmed remainder.
pub fn leading_character(text: &str) -> Option<(Character, &str)> {
    let rest = text.strip_prefix('(')?;
    let (code, rest) = rest.split_once(')')?;
    let character = Character::from_code(code)?;
    Some((character, rest.trim()))
}

/// Serde adapter writing an optional character as its name, or `""` when absent.
///
/// The consumer UI expects the `character` key on every menu and turn action, empty when
/// nobody in particular performs it.
pub mod name_or_empty {
    use super::Character;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Character>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map(Character::name).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Character>, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name.is_empty() {
            return Ok(None);
        }
        Character::from_name(&name)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("unknown character '{name}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_names_are_a_bijection() {
        for character in Character::ALL {
            assert_eq!(Character::from_code(character.code()), Some(character));
            assert_eq!(Character::from_name(character.name()), Some(character));
        }
        assert_eq!(Character::from_code("m"), None);
        assert_eq!(Character::from_code("X"), None);
    }

    #[test]
    fn test_from_str_accepts_codes_and_names() {
        assert_eq!("Mo".parse::<Character>(), Ok(Character::Monoco));
        assert_eq!("Verso".parse::<Character>(), Ok(Character::Verso));
        assert!("Gustave".parse::<Character>().is_err());
    }

    #[test]
    fn test_extract_and_clean() {
        assert_eq!(extract_character("(V) Attaque"), Some(Character::Verso));
        assert_eq!(extract_character("Marteau (Mo)"), Some(Character::Monoco));
        assert_eq!(extract_character("PARRY"), None);
        assert_eq!(clean_action("(V) Attaque (FAIL)"), "Attaque");
        assert!(has_fail_marker("(V) Attaque (FAIL)"));
        assert!(!has_fail_marker("(V) Attaque"));
    }

    #[test]
    fn test_leading_character() {
        assert_eq!(
            leading_character("(S) Screenshot_1.png"),
            Some((Character::Sciel, "Screenshot_1.png"))
        );
        assert_eq!(leading_character("Screenshot_1.png"), None);
        assert_eq!(leading_character("(9) Force"), None);
    }

    #[test]
    fn test_marker() {
        assert_eq!(Character::Monoco.marker(), "(Mo)");
        assert_eq!(Character::Lune.to_string(), "lune");
    }
}
