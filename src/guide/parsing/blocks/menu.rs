//! Menu blocks
//!
//! A menu opens on a keyword line and runs until the state machine closes it (blank line,
//! heading or a new fight). Keyword lines inside the block switch the current sub-type; other
//! lines are entries of the current sub-type:
//!
//!     STAT
//!     (V) +9 Force (9), +2 Esprit (5)
//!     SORT
//!     (L) Foudre (1), Soin (2)
//!     FORMATION
//!     +(Mo) / -(S)
//!
//! Loot and purchase lines written between entries don't end the menu. They become steps of
//! their own, placed after the menu in the group.
//!
//! Entries are split on commas, except formation entries which are split on `/`. For `stat`
//! and `sort` lines with several segments, every segment takes the character of the first
//! one. Other sub-types read each segment's own marker.

use super::loot::parse_loot_block;
use super::purchase::parse_purchase_block;
use super::{BlockContext, BlockResult};
use crate::guide::ast::menu::menu_title;
use crate::guide::ast::{ActionDetail, MenuAction, MenuStep, MenuSubType, Step};
use crate::guide::lexing::line_classification::{extract_image, extract_note};
use crate::guide::lexing::{LineKind, MarkedSegment, SourceLine};
use crate::guide::parsing::state::{LineAction, ParserMode, ScanState};
use crate::guide::parsing::ParseError;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static STAT_DETAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+(\d+)\s+(.+?)\s*\((\d+)\)$").expect("stat regex is valid"));

static UP_ARME_DETAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s+\+(\d+)\s*\((\d+)\)$").expect("up arme regex is valid"));

static UP_LUMINA_DETAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+(\d+)\s*(?:Lumina)?\s*\((\d+)\)$").expect("up lumina regex is valid")
});

static SPELL_SLOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.+?\s*\(([^()]+)\)$").expect("spell slot regex is valid"));

/// A menu and the loot or purchase steps written inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuBlock {
    pub menu: MenuStep,
    /// Loot and purchase steps met between the menu's entries, in source order.
    pub items: Vec<Step>,
}

impl MenuBlock {
    /// The menu step followed by the item steps.
    pub fn into_steps(self) -> Vec<Step> {
        std::iter::once(Step::Menu(self.menu))
            .chain(self.items)
            .collect()
    }
}

/// Reads a menu block starting at the keyword line `start`.
///
/// `leading_note` is a note written just above the keyword line; it becomes the first action.
pub fn parse_menu_block(
    lines: &[SourceLine<'_>],
    start: usize,
    ctx: &BlockContext<'_>,
    leading_note: Option<String>,
) -> Result<BlockResult<MenuBlock>, ParseError> {
    let opening = &lines[start];
    let mut builder = MenuBuilder::new(leading_note);
    let mut state = match ctx.classify(opening) {
        LineKind::MenuKeyword(sub_type) => {
            builder.switch(sub_type);
            ScanState::new(ParserMode::InMenu(sub_type))
        }
        _ => {
            ctx.degrade(opening, "menu block does not start with a menu keyword")?;
            ScanState::new(ParserMode::InMenu(MenuSubType::Arme))
        }
    };

    let mut items = Vec::new();
    let mut index = start + 1;
    while let Some(line) = lines.get(index) {
        let kind = ctx.classify(line);
        let transition = state.advance(kind);
        match transition.action {
            LineAction::Feed => {}
            LineAction::Loot if !transition.close_block => {
                let result = parse_loot_block(lines, index, ctx)?;
                items.push(Step::Loot(result.step));
                index = result.next_index;
                continue;
            }
            LineAction::Purchase if !transition.close_block => {
                let result = parse_purchase_block(lines, index, ctx)?;
                items.push(Step::Purchase(result.step));
                index = result.next_index;
                continue;
            }
            _ => break,
        }
        match kind {
            LineKind::MenuKeyword(sub_type) => builder.switch(sub_type),
            LineKind::Note => builder.push(MenuAction::note(extract_note(line.text))),
            LineKind::Image => {
                let (path, character) = extract_image(line.text);
                builder.push(MenuAction::image(path, character));
            }
            _ => {
                if let ParserMode::InMenu(sub_type) = state.mode() {
                    for action in parse_menu_entries(line, sub_type, ctx)? {
                        builder.push(action);
                    }
                }
            }
        }
        index += 1;
    }

    let menu = builder.finish(ctx);
    debug!(
        "menu at line {}: '{}' with {} action(s), {} item step(s)",
        opening.number,
        menu.titre,
        menu.actions.len(),
        items.len()
    );
    Ok(BlockResult::new(MenuBlock { menu, items }, index))
}

struct MenuBuilder {
    actions: Vec<MenuAction>,
    menu_order: Vec<MenuSubType>,
}

impl MenuBuilder {
    fn new(leading_note: Option<String>) -> Self {
        MenuBuilder {
            actions: leading_note.map(MenuAction::note).into_iter().collect(),
            menu_order: Vec::new(),
        }
    }

    fn switch(&mut self, sub_type: MenuSubType) {
        if !self.menu_order.contains(&sub_type) {
            self.menu_order.push(sub_type);
        }
    }

    fn push(&mut self, action: MenuAction) {
        self.actions.push(action);
    }

    fn finish(self, ctx: &BlockContext<'_>) -> MenuStep {
        MenuStep {
            titre: menu_title(&self.menu_order),
            actions: self.actions,
            menu_order: self.menu_order,
            context: ctx.step.clone(),
        }
    }
}

/// Parses one entry line of the given sub-type into its actions.
pub fn parse_menu_entries(
    line: &SourceLine<'_>,
    sub_type: MenuSubType,
    ctx: &BlockContext<'_>,
) -> Result<Vec<MenuAction>, ParseError> {
    if sub_type == MenuSubType::Formation {
        return parse_formation_entries(line, ctx);
    }

    let segments: Vec<MarkedSegment> = line
        .text
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(MarkedSegment::parse)
        .collect();

    let inherited = match sub_type {
        MenuSubType::Stat | MenuSubType::Sort if segments.len() > 1 => {
            Some(segments[0].character)
        }
        _ => None,
    };

    let mut actions = Vec::with_capacity(segments.len());
    for segment in segments {
        let character = inherited.unwrap_or(segment.character);
        if character.is_none() {
            ctx.degrade(line, &format!("{sub_type} entry without a character marker"))?;
        }
        let detail = parse_detail(&segment.text, sub_type);
        if detail.is_none() && sub_type_requires_detail(sub_type) {
            ctx.degrade(line, &format!("malformed {sub_type} entry '{}'", segment.text))?;
        }
        actions.push(
            MenuAction::new(sub_type, segment.text)
                .with_character(character)
                .with_detail(detail),
        );
    }
    Ok(actions)
}

fn parse_formation_entries(
    line: &SourceLine<'_>,
    ctx: &BlockContext<'_>,
) -> Result<Vec<MenuAction>, ParseError> {
    let mut actions = Vec::new();
    for raw in line.text.split('/').map(str::trim).filter(|s| !s.is_empty()) {
        let segment = MarkedSegment::parse(raw);
        if segment.character.is_none() {
            ctx.degrade(line, "formation entry without a character marker")?;
        }
        let detail = parse_detail(&segment.text, MenuSubType::Formation);
        if detail.is_none() {
            ctx.degrade(line, "formation entry without a +/- sign")?;
        }
        actions.push(
            MenuAction::new(MenuSubType::Formation, segment.text)
                .with_character(segment.character)
                .with_detail(detail),
        );
    }
    Ok(actions)
}

fn sub_type_requires_detail(sub_type: MenuSubType) -> bool {
    matches!(
        sub_type,
        MenuSubType::Stat | MenuSubType::UpArme | MenuSubType::UpLumina
    )
}

/// Structured data for an entry's marker-free text, when it matches its sub-type's pattern.
pub fn parse_detail(text: &str, sub_type: MenuSubType) -> Option<ActionDetail> {
    match sub_type {
        MenuSubType::Stat => {
            let caps = STAT_DETAIL.captures(text)?;
            Some(ActionDetail::Stat {
                name: caps[2].to_string(),
                to_add: caps[1].parse().ok()?,
                total: caps[3].parse().ok()?,
            })
        }
        MenuSubType::UpArme => {
            let caps = UP_ARME_DETAIL.captures(text)?;
            Some(ActionDetail::Upgrade {
                name: Some(caps[1].to_string()),
                to_add: caps[2].parse().ok()?,
                total: caps[3].parse().ok()?,
            })
        }
        MenuSubType::UpLumina => {
            let caps = UP_LUMINA_DETAIL.captures(text)?;
            Some(ActionDetail::Upgrade {
                name: None,
                to_add: caps[1].parse().ok()?,
                total: caps[2].parse().ok()?,
            })
        }
        MenuSubType::Sort => {
            let caps = SPELL_SLOT.captures(text)?;
            Some(ActionDetail::Spell {
                slot: caps[1].trim().to_string(),
            })
        }
        MenuSubType::Arme | MenuSubType::Picto | MenuSubType::Lumina => None,
        MenuSubType::Formation => {
            let sign = text.chars().next()?;
            matches!(sign, '+' | '-').then_some(ActionDetail::Formation { to_add: sign == '+' })
        }
    }
}
