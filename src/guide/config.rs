//! Parser configuration
//!
//! Configuration is a small YAML document with kebab-case keys. Every key is optional; a
//! missing key keeps its default, so an empty file is a valid configuration.
//!
//! ```yaml
//! grammar: strict          # lenient (default) | strict
//! menu-keywords: prefix    # anywhere (default) | prefix
//! headings: true           # emit act/chapter steps (default false)
//! skip:                    # groups the step cursor steps over
//!   loot: true
//!   purchase: false
//!   notes: false
//! ```

use crate::guide::loader::GuideError;
use crate::guide::navigation::SkipPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How the parser reacts to lines that don't fit the grammar of the block they are in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrammarPolicy {
    /// Degrade gracefully: keep the line as plain text, log a warning and carry on.
    #[default]
    Lenient,
    /// Reject the guide with a [`ParseError::Grammar`](crate::guide::parsing::ParseError).
    Strict,
}

impl GrammarPolicy {
    pub fn is_strict(self) -> bool {
        self == GrammarPolicy::Strict
    }
}

/// Where a menu keyword has to appear for a line to open or switch a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeywordMatch {
    /// Anywhere in the line. Existing guides rely on this.
    #[default]
    Anywhere,
    /// Only at the start of the line.
    Prefix,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ParserConfig {
    pub grammar: GrammarPolicy,
    pub menu_keywords: KeywordMatch,
    /// Emit act and chapter heading steps into the groups.
    pub headings: bool,
    pub skip: SkipPolicy,
}

impl ParserConfig {
    pub fn strict() -> Self {
        ParserConfig {
            grammar: GrammarPolicy::Strict,
            ..Default::default()
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GuideError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| GuideError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml).map_err(|source| GuideError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
