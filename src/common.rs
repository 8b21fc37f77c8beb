//! Common types for Pig: rule variants, roll outcomes and seat intents.

use core::fmt;

/// Which rule variant a session is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleMode {
    /// One die per roll; a 1 forfeits the turn score.
    #[default]
    SingleDie,
    /// Two dice per roll; ones bust, a matching pair forces another roll.
    DoubleDie,
}

impl fmt::Display for RuleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleMode::SingleDie => write!(f, "single die"),
            RuleMode::DoubleDie => write!(f, "double die"),
        }
    }
}

/// Who controls the second seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentKind {
    Human,
    Computer,
}

/// Faces shown by the most recent roll. Faces are always in [1, 6].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Roll {
    Single(u8),
    Double(u8, u8),
}

impl Roll {
    /// Sum of the rolled faces.
    pub fn sum(self) -> u32 {
        match self {
            Roll::Single(f) => u32::from(f),
            Roll::Double(a, b) => u32::from(a) + u32::from(b),
        }
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Roll::Single(a) => write!(f, "[{}]", a),
            Roll::Double(a, b) => write!(f, "[{}] [{}]", a, b),
        }
    }
}

/// An operation request from whoever controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Draw fresh dice for the active seat.
    Roll,
    /// Bank the turn score and pass the turn.
    Hold,
    /// Start a fresh game, keeping win/loss records.
    NewGame,
    /// Leave the session.
    Quit,
}
