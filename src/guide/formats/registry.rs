//! Output formats for converted guides
//!
//! The CLI `--format` flag and `write_guide` both resolve a name here. A guide is written
//! as JSON for the viewer, or as a treeviz outline for checking a conversion by eye.

use crate::guide::ast::Guide;
use std::collections::HashMap;

/// Why a guide could not be written in the requested format
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// No formatter answers to this name
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// The formatter rejected the guide
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// One way of writing a parsed guide to text
pub trait Formatter: Send + Sync {
    /// Name used on the command line, `json` or `treeviz` for the built-ins
    fn name(&self) -> &str;

    fn serialize(&self, guide: &Guide) -> Result<String, FormatError>;

    /// Shown next to the name by `runguide list-formats`
    fn description(&self) -> &str {
        ""
    }
}

/// Formatters keyed by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Adds `formatter`; a later formatter with the same name wins
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Writes `guide` with the formatter called `format`
    pub fn serialize(&self, guide: &Guide, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(guide)
    }

    /// Formatter names in alphabetical order
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// JSON and treeviz, the two formats the converter ships with
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::JsonFormatter);
        registry.register(super::TreevizFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
