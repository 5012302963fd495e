//! Image lines
//!
//! `(IMG) path` or `(IMG) (V) path` when the screenshot is about a specific character.
//! Where the image ends up (inside a fight, inside a menu, on the preceding loot or purchase,
//! or on its own) is decided by whoever reads the line; this parser only reads it.

use super::{BlockContext, BlockResult};
use crate::guide::ast::ImageStep;
use crate::guide::lexing::line_classification::extract_image;
use crate::guide::lexing::SourceLine;
use crate::guide::parsing::ParseError;

pub fn parse_image_line(
    line: &SourceLine<'_>,
    ctx: &BlockContext<'_>,
) -> Result<ImageStep, ParseError> {
    let (path, character) = extract_image(line.text);
    if path.is_empty() {
        ctx.degrade(line, "image line without a path")?;
    }
    Ok(ImageStep {
        image_path: path.to_string(),
        character,
        context: ctx.step.clone(),
    })
}

pub fn parse_image_block(
    lines: &[SourceLine<'_>],
    start: usize,
    ctx: &BlockContext<'_>,
) -> Result<BlockResult<ImageStep>, ParseError> {
    let image = parse_image_line(&lines[start], ctx)?;
    Ok(BlockResult::new(image, start + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::characters::Character;
    use crate::guide::config::ParserConfig;
    use crate::guide::lexing::split_lines;

    #[test]
    fn test_image_with_character() {
        let config = ParserConfig::default();
        let ctx = BlockContext::new(&config, Default::default());
        let lines = split_lines("(IMG) (Mo) build_monoco.png");
        let result = parse_image_block(&lines, 0, &ctx).unwrap();
        assert_eq!(result.step.image_path, "build_monoco.png");
        assert_eq!(result.step.character, Some(Character::Monoco));
        assert_eq!(result.next_index, 1);
    }

    #[test]
    fn test_missing_path() {
        let lenient = ParserConfig::default();
        let lines = split_lines("(IMG)");
        let ctx = BlockContext::new(&lenient, Default::default());
        assert_eq!(parse_image_line(&lines[0], &ctx).unwrap().image_path, "");

        let strict = ParserConfig::strict();
        let ctx = BlockContext::new(&strict, Default::default());
        assert!(parse_image_line(&lines[0], &ctx).is_err());
    }
}
