//! The turn state machine: scores, handover, win detection.
//!
//! `GameEngine` is the single owner of all mutable session state. Every
//! externally triggered operation is guarded: a call that is not allowed in
//! the current state is a silent no-op, and the caller is expected to
//! consult [`GameEngine::can_roll`] / [`GameEngine::can_hold`] before
//! offering the corresponding affordance.

use alloc::string::{String, ToString};

use rand::Rng;

use crate::common::{OpponentKind, Roll, RuleMode};
use crate::config::{default_name, COMPUTER_NAME, TARGET_SCORE};
use crate::dice;
use crate::resolver::resolve;
use crate::seat::{Seat, SeatPair};

/// Per-seat score record: identity plus running totals.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Scorecard {
    pub name: String,
    /// Banked total, carried across turns.
    pub total: u32,
    pub wins: u32,
    pub losses: u32,
}

impl Scorecard {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            total: 0,
            wins: 0,
            losses: 0,
        }
    }
}

/// Immutable view of the whole session, rebuilt after every operation.
///
/// This is the engine's only read contract: the presentation layer renders
/// from snapshots on its own schedule and never observes engine internals.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub mode: RuleMode,
    pub players: SeatPair<Scorecard>,
    pub active: Seat,
    /// Points accumulated this turn, banked only on hold.
    pub turn_points: u32,
    /// Faces from the most recent roll, `None` before the first roll.
    pub last_roll: Option<Roll>,
    /// The active seat rolled a non-one pair and may not hold.
    pub forced: bool,
    pub game_over: bool,
    pub winner: Option<Seat>,
}

/// Core game logic for one in-memory session.
pub struct GameEngine {
    mode: RuleMode,
    players: SeatPair<Scorecard>,
    active: Seat,
    turn_points: u32,
    last_roll: Option<Roll>,
    forced: bool,
    // `Some` iff the game is over; the invariant lives in the type.
    winner: Option<Seat>,
}

impl GameEngine {
    /// Create a fresh engine: both totals zero, first seat to act.
    pub fn new(mode: RuleMode, opponent: OpponentKind) -> Self {
        let second = match opponent {
            OpponentKind::Human => default_name(Seat::Second),
            OpponentKind::Computer => COMPUTER_NAME,
        };
        Self {
            mode,
            players: SeatPair::new(
                Scorecard::new(default_name(Seat::First)),
                Scorecard::new(second),
            ),
            active: Seat::First,
            turn_points: 0,
            last_roll: None,
            forced: false,
            winner: None,
        }
    }

    /// Rule variant currently in play.
    pub fn mode(&self) -> RuleMode {
        self.mode
    }

    /// Whether the game has been won.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Guard for the roll affordance.
    pub fn can_roll(&self) -> bool {
        !self.is_over()
    }

    /// Guard for the hold affordance: something to bank and no forced
    /// continuation in effect.
    pub fn can_hold(&self) -> bool {
        !self.is_over() && self.turn_points > 0 && !self.forced
    }

    /// Draw fresh dice for the active seat and apply the outcome.
    ///
    /// No-op once the game is over. Rolling never performs a win check:
    /// only a hold can bank enough to cross the target.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_over() {
            return;
        }
        self.apply_roll(dice::draw(self.mode, rng));
    }

    /// Deterministic core of [`GameEngine::roll`]: apply already-drawn
    /// faces. Exposed so scripted games and tests can run without an RNG.
    pub fn apply_roll(&mut self, roll: Roll) {
        if self.is_over() {
            return;
        }
        let res = resolve(roll, self.turn_points);
        self.last_roll = Some(roll);
        self.turn_points = self.turn_points.saturating_add_signed(res.turn_delta);
        if res.resets_total {
            self.players[self.active].total = 0;
        }
        self.forced = res.must_roll_again;
        if res.ends_turn {
            self.pass_turn();
        }
    }

    /// Bank the turn score for the active seat.
    ///
    /// No-op if the game is over, there is nothing to bank, or a forced
    /// continuation is in effect. Reaching the target ends the game with
    /// no handover; otherwise the turn passes.
    pub fn hold(&mut self) {
        if !self.can_hold() {
            return;
        }
        let holder = self.active;
        self.players[holder].total += self.turn_points;
        self.turn_points = 0;
        if self.players[holder].total >= TARGET_SCORE {
            self.winner = Some(holder);
            self.players[holder].wins += 1;
            self.players[holder.other()].losses += 1;
        } else {
            self.pass_turn();
        }
    }

    /// Start over: totals, turn state, terminal state and recorded faces
    /// are cleared; win/loss records survive unless `preserve_stats` is
    /// false.
    pub fn reset(&mut self, preserve_stats: bool) {
        for seat in Seat::ALL {
            let card = &mut self.players[seat];
            card.total = 0;
            if !preserve_stats {
                card.wins = 0;
                card.losses = 0;
            }
        }
        self.active = Seat::First;
        self.turn_points = 0;
        self.last_roll = None;
        self.forced = false;
        self.winner = None;
    }

    /// Switch rule variant. Always restarts the game, keeping stats.
    pub fn set_rule_mode(&mut self, mode: RuleMode) {
        self.mode = mode;
        self.reset(true);
    }

    /// Repurpose the second seat for a different opponent and restart.
    /// The fresh opponent starts with a clean win/loss record.
    pub fn set_opponent(&mut self, kind: OpponentKind) {
        self.players[Seat::Second].name = match kind {
            OpponentKind::Human => default_name(Seat::Second).to_string(),
            OpponentKind::Computer => COMPUTER_NAME.to_string(),
        };
        self.reset(false);
    }

    /// Observable state for rendering and policy decisions.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            mode: self.mode,
            players: self.players.clone(),
            active: self.active,
            turn_points: self.turn_points,
            last_roll: self.last_roll,
            forced: self.forced,
            game_over: self.is_over(),
            winner: self.winner,
        }
    }

    // Hand the turn to the other seat. Never ends the game.
    fn pass_turn(&mut self) {
        self.turn_points = 0;
        self.forced = false;
        self.active = self.active.other();
    }
}
