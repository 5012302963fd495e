//! Combat blocks
//!
//! A fight opens with a `🛡️` (regular fight) or `🎯` (boss) line whose whole text is the
//! fight title. Every following line that the state machine feeds to the fight is one turn:
//!
//!     🎯 Évêque
//!     (V) Attaque > (M) Foudre (FAIL) > (L) Soin
//!     PARRY x3
//!     (A) Viser la lanterne
//!     (IMG) lanterne.png
//!
//! Turn lines are split on `>`; each segment carries its own character and fail marker.
//! Note and image lines become single-action pseudo-turns.

use super::{BlockContext, BlockResult};
use crate::guide::ast::{CombatStep, Step, TurnAction};
use crate::guide::lexing::line_classification::{extract_image, extract_note, is_turn_line};
use crate::guide::lexing::{LineKind, MarkedSegment, SourceLine};
use crate::guide::parsing::state::{LineAction, ParserMode, ScanState};
use crate::guide::parsing::ParseError;
use log::debug;

pub const TURN_SEPARATOR: char = '>';

/// Splits a turn line into its actions.
///
/// Lines that don't start like a turn (a character marker, `PARRY` or `DODGE`) are still
/// read as a turn unless the grammar is strict.
pub fn parse_turn_line(
    line: &SourceLine<'_>,
    ctx: &BlockContext<'_>,
) -> Result<Vec<TurnAction>, ParseError> {
    if !is_turn_line(line.text) {
        ctx.degrade(line, "combat line does not start with a character or PARRY/DODGE")?;
    }

    let actions: Vec<TurnAction> = line
        .text
        .split(TURN_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let marked = MarkedSegment::parse(segment);
            TurnAction::new(marked.text, marked.character, marked.fail)
        })
        .collect();

    if actions.is_empty() {
        ctx.degrade(line, "combat line without any action")?;
    }
    Ok(actions)
}

pub fn parse_combat_block(
    lines: &[SourceLine<'_>],
    start: usize,
    ctx: &BlockContext<'_>,
) -> Result<BlockResult<Step>, ParseError> {
    let opening = &lines[start];
    let boss = ctx.classify(opening) == LineKind::Boss;
    let mut state = ScanState::new(ParserMode::InCombat);
    let mut turns = Vec::new();
    let mut index = start + 1;

    while let Some(line) = lines.get(index) {
        let kind = ctx.classify(line);
        if state.advance(kind).action != LineAction::Feed {
            break;
        }
        let turn = match kind {
            LineKind::Note => vec![TurnAction::note(extract_note(line.text))],
            LineKind::Image => {
                let (path, character) = extract_image(line.text);
                vec![TurnAction::image(path, character)]
            }
            _ => parse_turn_line(line, ctx)?,
        };
        if !turn.is_empty() {
            turns.push(turn);
        }
        index += 1;
    }

    debug!(
        "{} at line {}: '{}' with {} turn(s)",
        if boss { "boss" } else { "combat" },
        opening.number,
        opening.text,
        turns.len()
    );

    let combat = CombatStep {
        titre: opening.text.to_string(),
        turns,
        context: ctx.step.clone(),
    };
    let step = if boss {
        Step::Boss(combat)
    } else {
        Step::Combat(combat)
    };
    Ok(BlockResult::new(step, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::characters::Character;
    use crate::guide::config::ParserConfig;
    use crate::guide::lexing::split_lines;

    fn combat(step: Step) -> CombatStep {
        match step {
            Step::Combat(c) | Step::Boss(c) => c,
            other => panic!("expected a fight, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_turns_and_fail_marker() {
        let config = ParserConfig::default();
        let ctx = BlockContext::new(&config, Default::default());
        let lines = split_lines("🎯 Évêque\n(V) Attaque > (M) Foudre (FAIL)\nPARRY x3\n\nSTAT");
        let result = parse_combat_block(&lines, 0, &ctx).unwrap();
        assert_eq!(result.next_index, 3);
        assert!(matches!(result.step, Step::Boss(_)));

        let fight = combat(result.step);
        assert_eq!(fight.titre, "🎯 Évêque");
        assert_eq!(
            fight.turns[0],
            vec![
                TurnAction::new("Attaque", Some(Character::Verso), false),
                TurnAction::new("Foudre", Some(Character::Maelle), true),
            ]
        );
        assert_eq!(fight.turns[1], vec![TurnAction::new("PARRY x3", None, false)]);
    }

    #[test]
    fn test_note_and_image_pseudo_turns() {
        let config = ParserConfig::default();
        let ctx = BlockContext::new(&config, Default::default());
        let lines = split_lines("🛡️ Gardien\n(A) Viser la tête\n(IMG) (S) boss.png\n(S) Tir");
        let fight = combat(parse_combat_block(&lines, 0, &ctx).unwrap().step);
        assert_eq!(fight.turns.len(), 3);
        assert_eq!(fight.turns[0], vec![TurnAction::note("Viser la tête")]);
        assert_eq!(
            fight.turns[1],
            vec![TurnAction::image("boss.png", Some(Character::Sciel))]
        );
    }

    #[test]
    fn test_ends_on_loot_menu_and_new_fight() {
        let config = ParserConfig::default();
        let ctx = BlockContext::new(&config, Default::default());
        for stop in ["📦 Potion", "💰 Épée", "ARME", "🛡️ Suivant", "🎯 Boss", "Act II", "T:Suite"] {
            let source = format!("🛡️ Gardien\n(V) Attaque\n{stop}");
            let lines = split_lines(&source);
            let result = parse_combat_block(&lines, 0, &ctx).unwrap();
            assert_eq!(result.next_index, 2, "fight should stop before '{stop}'");
        }
    }

    #[test]
    fn test_non_turn_line_policy() {
        let lines = split_lines("🛡️ Gardien\nAttendre un tour");

        let lenient = ParserConfig::default();
        let ctx = BlockContext::new(&lenient, Default::default());
        let fight = combat(parse_combat_block(&lines, 0, &ctx).unwrap().step);
        assert_eq!(fight.turns[0], vec![TurnAction::new("Attendre un tour", None, false)]);

        let strict = ParserConfig::strict();
        let ctx = BlockContext::new(&strict, Default::default());
        let err = parse_combat_block(&lines, 0, &ctx).unwrap_err();
        assert_eq!(err.line(), Some(2));
    }
}
