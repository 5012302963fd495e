//! Guide assembler
//!
//! Drives the single forward scan over the body of a guide. For each line it asks the
//! [state machine](super::state) what the line starts, hands the line (and whatever follows)
//! to the matching [block parser](super::blocks), and collects the produced steps into the
//! current action group. Blank lines close the group.
//!
//! The act and chapter in force are explicit assembler fields. They are stamped on every
//! step when it is produced and on every group when its first step arrives, and they carry
//! forward until the next act or chapter line.

use super::blocks::combat::parse_combat_block;
use super::blocks::image::parse_image_block;
use super::blocks::loot::parse_loot_block;
use super::blocks::menu::parse_menu_block;
use super::blocks::note::{parse_note_block, NoteBlock};
use super::blocks::purchase::parse_purchase_block;
use super::blocks::BlockContext;
use super::error::ParseError;
use super::state::{LineAction, ScanState};
use crate::guide::ast::{ActionGroup, Guide, HeadingStep, ImageStep, Step, StepContext};
use crate::guide::config::ParserConfig;
use crate::guide::lexing::line_classification::{extract_act, extract_chapter};
use crate::guide::lexing::{classify_line, split_lines, LineKind, SourceLine};
use log::{debug, trace, warn};

/// Parses a complete guide source.
pub fn parse_guide(source: &str, config: &ParserConfig) -> Result<Guide, ParseError> {
    let lines = split_lines(source);
    let (game, category) = match lines.as_slice() {
        [game, category, ..] => (game.text, category.text),
        _ => return Err(ParseError::MissingHeader { found: lines.len() }),
    };

    let mut index = 2;
    match lines.get(index) {
        Some(line) if line.is_blank() => index += 1,
        Some(line) => warn!(
            "line {}: expected a blank line after the header, parsing '{}' as body",
            line.number, line.text
        ),
        None => {}
    }

    let mut assembler = GuideAssembler::new(config, game, category);
    while index < lines.len() {
        index = assembler.feed(&lines, index)?;
    }
    let guide = assembler.finish();
    debug!(
        "parsed '{}' ({}): {} group(s), {} step(s)",
        guide.game,
        guide.category,
        guide.action_groups.len(),
        guide.step_count()
    );
    Ok(guide)
}

pub struct GuideAssembler<'c> {
    config: &'c ParserConfig,
    guide: Guide,
    act: Option<String>,
    chapter: Option<String>,
    group: Vec<Step>,
    group_context: (String, String),
    next_id: u32,
}

impl<'c> GuideAssembler<'c> {
    pub fn new(config: &'c ParserConfig, game: &str, category: &str) -> Self {
        GuideAssembler {
            config,
            guide: Guide::new(game, category),
            act: None,
            chapter: None,
            group: Vec::new(),
            group_context: Default::default(),
            next_id: 1,
        }
    }

    /// Handles the block starting at `index` and returns the index of the next unread line.
    pub fn feed(&mut self, lines: &[SourceLine<'_>], index: usize) -> Result<usize, ParseError> {
        let line = &lines[index];
        let kind = classify_line(line.text, self.config.menu_keywords);
        trace!("line {}: {:?} '{}'", line.number, kind, line.text);

        // Blocks are consumed whole, so between blocks the scanner is always searching.
        let transition = ScanState::default().transition(kind);
        let ctx = self.block_context();

        let next_index = match transition.action {
            LineAction::EndGroup => {
                self.end_group();
                index + 1
            }
            LineAction::Heading => {
                self.heading(line, kind);
                index + 1
            }
            LineAction::Note => {
                let result = parse_note_block(lines, index, &ctx)?;
                match result.step {
                    NoteBlock::Note(note) => self.push(Step::Note(note)),
                    NoteBlock::Menu {
                        block,
                        across_blank,
                    } => {
                        if across_blank {
                            self.end_group();
                        }
                        self.push_all(block.into_steps());
                    }
                }
                result.next_index
            }
            LineAction::Image => {
                let result = parse_image_block(lines, index, &ctx)?;
                self.push_image(result.step);
                result.next_index
            }
            LineAction::Loot => {
                let result = parse_loot_block(lines, index, &ctx)?;
                self.push(Step::Loot(result.step));
                result.next_index
            }
            LineAction::Purchase => {
                let result = parse_purchase_block(lines, index, &ctx)?;
                self.push(Step::Purchase(result.step));
                result.next_index
            }
            LineAction::OpenMenu(_) => {
                let result = parse_menu_block(lines, index, &ctx, None)?;
                self.push_all(result.step.into_steps());
                result.next_index
            }
            LineAction::OpenCombat { .. } => {
                let result = parse_combat_block(lines, index, &ctx)?;
                self.push(result.step);
                result.next_index
            }
            LineAction::Feed | LineAction::Skip => {
                ctx.degrade(line, "line outside of any block")?;
                index + 1
            }
        };
        Ok(next_index.max(index + 1))
    }

    /// Closes the last group and returns the guide.
    pub fn finish(mut self) -> Guide {
        self.end_group();
        self.guide
    }

    fn block_context(&self) -> BlockContext<'c> {
        BlockContext::new(
            self.config,
            StepContext::new(self.act.as_deref(), self.chapter.as_deref()),
        )
    }

    fn heading(&mut self, line: &SourceLine<'_>, kind: LineKind) {
        let titre = if kind == LineKind::Act {
            let act = extract_act(line.text).to_string();
            self.act = Some(act.clone());
            act
        } else {
            let chapter = extract_chapter(line.text).to_string();
            self.chapter = Some(chapter.clone());
            chapter
        };
        debug!("line {}: now in '{}'", line.number, titre);

        if self.config.headings {
            let heading = HeadingStep {
                titre,
                context: self.block_context().step,
            };
            self.push(if kind == LineKind::Act {
                Step::Act(heading)
            } else {
                Step::Chapter(heading)
            });
        }
    }

    fn push(&mut self, step: Step) {
        if self.group.is_empty() {
            self.group_context = (
                self.act.clone().unwrap_or_default(),
                self.chapter.clone().unwrap_or_default(),
            );
        }
        self.group.push(step);
    }

    fn push_all(&mut self, steps: Vec<Step>) {
        for step in steps {
            self.push(step);
        }
    }

    /// Images directly after a loot or purchase step belong to that step.
    fn push_image(&mut self, image: ImageStep) {
        match self.group.last_mut() {
            Some(Step::Loot(items)) | Some(Step::Purchase(items)) => items.images.push(image),
            _ => self.push(Step::Image(image)),
        }
    }

    fn end_group(&mut self) {
        if self.group.is_empty() {
            return;
        }
        let steps = std::mem::take(&mut self.group);
        let (acte, chapitre) = std::mem::take(&mut self.group_context);
        let group = ActionGroup::new(self.next_id, acte, chapitre, steps);
        debug!(
            "group {} '{}' ({:?}, {} step(s))",
            group.id,
            group.titre,
            group.kind,
            group.steps.len()
        );
        self.guide.add_action_group(group);
        self.next_id += 1;
    }
}
