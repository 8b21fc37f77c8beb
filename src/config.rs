use crate::seat::Seat;

/// Banked total that wins the game on a hold.
pub const TARGET_SCORE: u32 = 100;

/// Faces on a die.
pub const DIE_SIDES: u8 = 6;

/// Turn score at which the computer banks under single-die rules.
pub const SINGLE_DIE_HOLD_AT: u32 = 20;

/// Turn score at which the computer banks under double-die rules.
pub const DOUBLE_DIE_HOLD_AT: u32 = 18;

/// Default seat names for a fresh engine.
pub const DEFAULT_NAMES: [&str; 2] = ["Player 1", "Player 2"];

/// Name given to a computer-controlled seat.
pub const COMPUTER_NAME: &str = "Computer";

/// Default display name for a seat.
pub fn default_name(seat: Seat) -> &'static str {
    DEFAULT_NAMES[seat.index()]
}
