//! Curated sample guides

use crate::guide::ast::Guide;
use crate::guide::config::ParserConfig;
use crate::guide::loader::{parse_str, GuideError};

const SAMPLES: &[(&str, &str)] = &[
    (
        "010-loot-purchase.txt",
        include_str!("../../../samples/010-loot-purchase.txt"),
    ),
    (
        "020-combat.txt",
        include_str!("../../../samples/020-combat.txt"),
    ),
    ("030-menus.txt", include_str!("../../../samples/030-menus.txt")),
    (
        "040-context.txt",
        include_str!("../../../samples/040-context.txt"),
    ),
    (
        "900-malformed.txt",
        include_str!("../../../samples/900-malformed.txt"),
    ),
];

/// Access to the sample guides, embedded at compile time.
pub struct GuideSamples;

impl GuideSamples {
    pub fn names() -> impl Iterator<Item = &'static str> {
        SAMPLES.iter().map(|(name, _)| *name)
    }

    pub fn get(name: &str) -> Option<&'static str> {
        SAMPLES
            .iter()
            .find(|(sample, _)| *sample == name)
            .map(|(_, source)| *source)
    }

    /// Parses a sample with the given configuration.
    ///
    /// Panics if no sample has that name.
    pub fn parse_with(name: &str, config: &ParserConfig) -> Result<Guide, GuideError> {
        let source = Self::get(name).unwrap_or_else(|| panic!("no sample named '{name}'"));
        parse_str(source, config)
    }

    /// Parses a sample with the default configuration.
    ///
    /// Panics if no sample has that name or if it fails to parse.
    pub fn parse(name: &str) -> Guide {
        Self::parse_with(name, &ParserConfig::default())
            .unwrap_or_else(|e| panic!("sample '{name}' failed to parse: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sample_parses_leniently() {
        for name in GuideSamples::names() {
            let guide = GuideSamples::parse(name);
            assert_eq!(guide.game, "Clair Obscur", "{name}");
            assert!(!guide.action_groups.is_empty(), "{name}");
        }
    }

    #[test]
    fn test_unknown_sample() {
        assert_eq!(GuideSamples::get("nope.txt"), None);
    }
}
