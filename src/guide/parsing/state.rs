//! Scanner state machine
//!
//! The body of a guide is scanned one line at a time. The scanner is in one of three modes:
//! searching for the next block, inside a fight, or inside a menu (with a current menu
//! sub-type). For every classified line, [`ScanState::advance`] decides whether the open
//! block has to be closed first and what to do with the line, then moves to the next mode.
//!
//!     kind            Search        InCombat          InMenu
//!     blank           end group     close, end group  close, end group
//!     act / chapter   heading       close, heading    close, heading
//!     note / image    standalone    feed              feed
//!     loot/purchase   standalone    close, standalone standalone (menu stays open)
//!     menu keyword    open menu     close, open menu  feed (switch)
//!     combat / boss   open combat   close, open       close, open
//!     other           skip          feed (turn)       feed (entry)
//!
//! Block parsers use the same table to decide where their block stops: a block continues
//! for as long as the transition does not close it. Lines that are fed go to the block; a
//! loot or purchase line inside a menu becomes its own step and the menu stays open.

use crate::guide::ast::MenuSubType;
use crate::guide::lexing::LineKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserMode {
    #[default]
    Search,
    InCombat,
    InMenu(MenuSubType),
}

/// What to do with a line once the open block (if any) has been dealt with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    /// Finalize the current action group.
    EndGroup,
    /// Update the act or chapter context.
    Heading,
    /// Hand the line to the open block.
    Feed,
    Note,
    Image,
    Loot,
    Purchase,
    OpenMenu(MenuSubType),
    OpenCombat { boss: bool },
    /// Nothing to do with the line.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The open block must be closed before the line is handled.
    pub close_block: bool,
    pub action: LineAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanState {
    mode: ParserMode,
}

impl ScanState {
    pub fn new(mode: ParserMode) -> Self {
        ScanState { mode }
    }

    pub fn mode(&self) -> ParserMode {
        self.mode
    }

    /// Computes the transition for `kind` without changing state.
    pub fn transition(&self, kind: LineKind) -> Transition {
        let in_block = self.mode != ParserMode::Search;
        let close = |action: LineAction| Transition {
            close_block: in_block,
            action,
        };
        let feed_or = |action: LineAction| {
            if in_block {
                Transition {
                    close_block: false,
                    action: LineAction::Feed,
                }
            } else {
                close(action)
            }
        };

        let keep_menu_or = |action: LineAction| match self.mode {
            ParserMode::InMenu(_) => Transition {
                close_block: false,
                action,
            },
            _ => close(action),
        };

        match kind {
            LineKind::Blank => close(LineAction::EndGroup),
            LineKind::Act | LineKind::Chapter => close(LineAction::Heading),
            LineKind::Note => feed_or(LineAction::Note),
            LineKind::Image => feed_or(LineAction::Image),
            LineKind::Other => feed_or(LineAction::Skip),
            LineKind::Loot => keep_menu_or(LineAction::Loot),
            LineKind::Purchase => keep_menu_or(LineAction::Purchase),
            LineKind::MenuKeyword(sub_type) => match self.mode {
                ParserMode::InMenu(_) => feed_or(LineAction::OpenMenu(sub_type)),
                _ => close(LineAction::OpenMenu(sub_type)),
            },
            LineKind::Combat => close(LineAction::OpenCombat { boss: false }),
            LineKind::Boss => close(LineAction::OpenCombat { boss: true }),
        }
    }

    /// Computes the transition for `kind` and moves to the resulting mode.
    pub fn advance(&mut self, kind: LineKind) -> Transition {
        let transition = self.transition(kind);
        self.mode = match (transition.action, kind) {
            (LineAction::Feed, LineKind::MenuKeyword(sub_type)) => ParserMode::InMenu(sub_type),
            (LineAction::Feed, _) => self.mode,
            (LineAction::OpenMenu(sub_type), _) => ParserMode::InMenu(sub_type),
            (LineAction::OpenCombat { .. }, _) => ParserMode::InCombat,
            (LineAction::Loot | LineAction::Purchase, _) if !transition.close_block => self.mode,
            _ => ParserMode::Search,
        };
        transition
    }
}
