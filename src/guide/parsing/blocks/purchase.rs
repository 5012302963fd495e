//! Purchase blocks
//!
//! Unlike loot, a purchase is a single line listing every item bought at a merchant,
//! separated by commas: `💰 Item A, Item B`. Two purchase lines in a row are two steps.

use super::{BlockContext, BlockResult};
use crate::guide::ast::ItemStep;
use crate::guide::lexing::line_classification::extract_purchase_items;
use crate::guide::lexing::SourceLine;
use crate::guide::parsing::ParseError;

pub fn parse_purchase_block(
    lines: &[SourceLine<'_>],
    start: usize,
    ctx: &BlockContext<'_>,
) -> Result<BlockResult<ItemStep>, ParseError> {
    let line = &lines[start];
    let items: Vec<String> = extract_purchase_items(line.text)
        .into_iter()
        .map(str::to_string)
        .collect();
    if items.is_empty() {
        ctx.degrade(line, "purchase line without an item")?;
    }
    Ok(BlockResult::new(
        ItemStep::new(items, ctx.step.clone()),
        start + 1,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::config::ParserConfig;
    use crate::guide::lexing::split_lines as lines;

    #[test]
    fn test_items_split_on_commas() {
        let config = ParserConfig::default();
        let ctx = BlockContext::new(&config, Default::default());
        let lines = lines("💰 Item A, Item B\n💰 Item C");
        let result = parse_purchase_block(&lines, 0, &ctx).unwrap();
        assert_eq!(result.step.items, vec!["Item A", "Item B"]);
        assert_eq!(result.step.titre, "Item A | Item B");
        assert_eq!(result.next_index, 1);
    }

    #[test]
    fn test_empty_purchase_is_strict_error() {
        let config = ParserConfig::strict();
        let ctx = BlockContext::new(&config, Default::default());
        let lines = lines("💰 ,");
        assert!(parse_purchase_block(&lines, 0, &ctx).is_err());
    }
}
