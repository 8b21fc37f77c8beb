//! Risk-threshold hold/roll heuristic for the computer seat.

use crate::common::RuleMode;
use crate::config::{DOUBLE_DIE_HOLD_AT, SINGLE_DIE_HOLD_AT, TARGET_SCORE};
use crate::game::GameSnapshot;

/// What the computer wants to do with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Roll,
    Hold,
}

/// Decide hold vs roll for the active seat.
///
/// Stateless: every call looks only at the snapshot passed in. Callers
/// consult it once per turn step, on the computer's turn, while the game
/// is in progress.
pub fn decide(view: &GameSnapshot) -> Decision {
    if view.forced {
        // A non-one pair bars holding regardless of score.
        return Decision::Roll;
    }
    if view.turn_points == 0 {
        return Decision::Roll;
    }
    let banked = view.players[view.active].total;
    let hold_at = match view.mode {
        RuleMode::SingleDie => SINGLE_DIE_HOLD_AT,
        RuleMode::DoubleDie => DOUBLE_DIE_HOLD_AT,
    };
    if banked + view.turn_points >= TARGET_SCORE || view.turn_points >= hold_at {
        Decision::Hold
    } else {
        Decision::Roll
    }
}
