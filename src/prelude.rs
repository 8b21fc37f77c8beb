//! Commonly used types and utilities for ease of import.

pub use crate::{
    decide, resolve, AiPlayer, Decision, GameEngine, GameSnapshot, Intent, OpponentKind, Player,
    Resolution, Roll, RuleMode, Scorecard, Seat, SeatPair,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer, GameSession};
