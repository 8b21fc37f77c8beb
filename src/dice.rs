//! Die-face generation. All randomness lives here; resolution is pure.

use rand::Rng;

use crate::common::{Roll, RuleMode};
use crate::config::DIE_SIDES;

/// Draw a single face in [1, `DIE_SIDES`].
pub fn roll_face<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(1..=DIE_SIDES)
}

/// Draw the face(s) one roll requires under `mode`.
pub fn draw<R: Rng + ?Sized>(mode: RuleMode, rng: &mut R) -> Roll {
    match mode {
        RuleMode::SingleDie => Roll::Single(roll_face(rng)),
        RuleMode::DoubleDie => Roll::Double(roll_face(rng), roll_face(rng)),
    }
}
