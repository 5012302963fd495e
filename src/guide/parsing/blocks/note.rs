//! Note blocks
//!
//! A note (`(A) ...`) stands on its own, except when the next non-blank line opens a menu:
//! the note then introduces that menu and is folded into it as its first action.
//!
//! Blank lines between the note and the menu still end the current action group. The note
//! moves to the menu's group, so the parser reports whether it stepped over a blank line.

use super::menu::{parse_menu_block, MenuBlock};
use super::{BlockContext, BlockResult};
use crate::guide::ast::NoteStep;
use crate::guide::lexing::line_classification::extract_note;
use crate::guide::lexing::{LineKind, SourceLine};
use crate::guide::parsing::ParseError;
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum NoteBlock {
    Note(NoteStep),
    /// The note leads a menu. `across_blank` is set when blank lines separate the two.
    Menu { block: MenuBlock, across_blank: bool },
}

pub fn parse_note_block(
    lines: &[SourceLine<'_>],
    start: usize,
    ctx: &BlockContext<'_>,
) -> Result<BlockResult<NoteBlock>, ParseError> {
    let line = &lines[start];
    let content = extract_note(line.text).to_string();

    if let Some(menu_index) = menu_after(lines, start, ctx) {
        debug!(
            "note at line {} leads the menu at line {}",
            line.number, lines[menu_index].number
        );
        let across_blank = menu_index > start + 1;
        return Ok(parse_menu_block(lines, menu_index, ctx, Some(content))?
            .map(|block| NoteBlock::Menu {
                block,
                across_blank,
            }));
    }

    Ok(BlockResult::new(
        NoteBlock::Note(NoteStep {
            content,
            context: ctx.step.clone(),
        }),
        start + 1,
    ))
}

/// Index of the next non-blank line after `start`, if it is a menu keyword line.
fn menu_after(lines: &[SourceLine<'_>], start: usize, ctx: &BlockContext<'_>) -> Option<usize> {
    let (offset, line) = lines
        .iter()
        .enumerate()
        .skip(start + 1)
        .find(|(_, line)| !line.is_blank())?;
    matches!(ctx.classify(line), LineKind::MenuKeyword(_)).then_some(offset)
}
