//! Loot blocks
//!
//! Loot is written one item per line. Consecutive loot lines collapse into a single step:
//!
//!     📦 Potion
//!     📦 Chroma
//!     📦 Pictos Vigueur
//!
//! gives one loot step with three items.

use super::{BlockContext, BlockResult};
use crate::guide::ast::ItemStep;
use crate::guide::lexing::line_classification::extract_loot_item;
use crate::guide::lexing::{LineKind, SourceLine};
use crate::guide::parsing::ParseError;
use log::debug;

pub fn parse_loot_block(
    lines: &[SourceLine<'_>],
    start: usize,
    ctx: &BlockContext<'_>,
) -> Result<BlockResult<ItemStep>, ParseError> {
    let mut items = Vec::new();
    let mut index = start;

    while let Some(line) = lines.get(index) {
        if index > start && ctx.classify(line) != LineKind::Loot {
            break;
        }
        let item = extract_loot_item(line.text);
        if item.is_empty() {
            ctx.degrade(line, "loot line without an item")?;
        } else {
            items.push(item.to_string());
        }
        index += 1;
    }

    debug!(
        "loot block at line {}: {} item(s)",
        lines.get(start).map_or(0, |l| l.number),
        items.len()
    );
    Ok(BlockResult::new(
        ItemStep::new(items, ctx.step.clone()),
        index.max(start + 1),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::config::ParserConfig;
    use crate::guide::lexing::split_lines as lines;

    #[test]
    fn test_consecutive_lines_are_grouped() {
        let config = ParserConfig::default();
        let ctx = BlockContext::new(&config, Default::default());
        let lines = lines("📦 Potion\n📦 Chroma\n📦️ Pictos Vigueur\n💰 Épée");
        let result = parse_loot_block(&lines, 0, &ctx).unwrap();
        assert_eq!(result.step.items, vec!["Potion", "Chroma", "Pictos Vigueur"]);
        assert_eq!(result.step.titre, "Potion | Chroma | Pictos Vigueur");
        assert_eq!(result.next_index, 3);
    }

    #[test]
    fn test_stops_at_blank() {
        let config = ParserConfig::default();
        let ctx = BlockContext::new(&config, Default::default());
        let lines = lines("📦 Potion\n\n📦 Chroma");
        let result = parse_loot_block(&lines, 0, &ctx).unwrap();
        assert_eq!(result.step.items, vec!["Potion"]);
        assert_eq!(result.next_index, 1);
    }

    #[test]
    fn test_empty_item() {
        let lenient = ParserConfig::default();
        let ctx = BlockContext::new(&lenient, Default::default());
        let lines = lines("📦\n📦 Chroma");
        let result = parse_loot_block(&lines, 0, &ctx).unwrap();
        assert_eq!(result.step.items, vec!["Chroma"]);

        let strict = ParserConfig::strict();
        let ctx = BlockContext::new(&strict, Default::default());
        let err = parse_loot_block(&lines, 0, &ctx).unwrap_err();
        assert_eq!(err.line(), Some(1));
    }
}
