//! JSON output
//!
//! The guide file consumed by the overlay: pretty-printed with 2-space indentation and a
//! trailing newline.

use super::registry::{FormatError, Formatter};
use crate::guide::ast::Guide;

pub fn to_json_str(guide: &Guide) -> Result<String, FormatError> {
    let mut json = guide
        .to_json()
        .map_err(|e| FormatError::Serialization(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, guide: &Guide) -> Result<String, FormatError> {
        to_json_str(guide)
    }

    fn description(&self) -> &str {
        "Guide file for the overlay (pretty-printed JSON)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_guide() {
        let guide = Guide::new("Game X", "Any%");
        insta::assert_snapshot!(to_json_str(&guide).unwrap(), @r###"
        {
          "game": "Game X",
          "category": "Any%",
          "actionGroups": []
        }
        "###);
    }
}
