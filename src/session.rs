#![cfg(feature = "std")]

//! Session orchestration: one driver loop around an engine and its two
//! seat controllers.
//!
//! The engine has no notion of time; any pacing of computer turns lives
//! here. Each paced step re-reads a snapshot after the pause and
//! re-validates it before acting, because the state may have been reset or the
//! game finished while the step was parked on the runtime.

use log::{debug, info};
use rand::rngs::SmallRng;
use tokio::time::{sleep, Duration};

use crate::common::Intent;
use crate::game::{GameEngine, GameSnapshot};
use crate::player::Player;
use crate::seat::{Seat, SeatPair};
use crate::ui;

pub struct GameSession {
    engine: GameEngine,
    players: SeatPair<Box<dyn Player>>,
    rng: SmallRng,
    think_delay: Duration,
    interactive: bool,
}

impl GameSession {
    pub fn new(
        engine: GameEngine,
        players: SeatPair<Box<dyn Player>>,
        rng: SmallRng,
        think_delay: Duration,
    ) -> Self {
        let interactive = players.iter().any(|p| !p.is_computer());
        Self {
            engine,
            players,
            rng,
            think_delay,
            interactive,
        }
    }

    /// Read access to the underlying engine (final standings etc.).
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Play until a controller quits or declines a rematch; with no human
    /// seat, a single game. Returns the final snapshot.
    pub async fn run(&mut self) -> anyhow::Result<GameSnapshot> {
        loop {
            let view = self.engine.snapshot();
            if view.game_over {
                if self.interactive {
                    ui::print_scoreboard(&view);
                    ui::print_winner(&view);
                }
                info!(
                    "game over, winner: {}",
                    view.winner
                        .map(|s| view.players[s].name.as_str())
                        .unwrap_or("none")
                );
                if self.rematch_requested(&view) {
                    self.engine.reset(true);
                    continue;
                }
                return Ok(self.engine.snapshot());
            }

            let seat = view.active;
            if self.players[seat].is_computer() {
                if !self.think_delay.is_zero() {
                    sleep(self.think_delay).await;
                }
                // Re-validate: the turn must still belong to this seat and
                // the game must still be running after the pause.
                let fresh = self.engine.snapshot();
                if fresh.game_over || fresh.active != seat {
                    continue;
                }
                if !self.apply(seat, &fresh) {
                    return Ok(self.engine.snapshot());
                }
            } else {
                ui::print_scoreboard(&view);
                if !self.apply(seat, &view) {
                    return Ok(self.engine.snapshot());
                }
            }
        }
    }

    // Apply one intent for `seat`. Returns false when the controller quit.
    fn apply(&mut self, seat: Seat, view: &GameSnapshot) -> bool {
        match self.players[seat].choose(view) {
            Intent::Roll => {
                self.engine.roll(&mut self.rng);
                let after = self.engine.snapshot();
                debug!(
                    "{} rolled {:?}, turn at {}",
                    view.players[seat].name, after.last_roll, after.turn_points
                );
                if self.interactive {
                    ui::print_roll_report(view, &after);
                }
            }
            Intent::Hold => {
                self.engine.hold();
                let after = self.engine.snapshot();
                debug!(
                    "{} held, total {}",
                    view.players[seat].name, after.players[seat].total
                );
                if self.interactive {
                    ui::print_hold_report(view, &after);
                }
            }
            Intent::NewGame => {
                info!("restart requested by {}", view.players[seat].name);
                self.engine.reset(true);
                if self.interactive {
                    println!("-- new game --");
                }
            }
            Intent::Quit => return false,
        }
        true
    }

    // The first human seat answers for the table; computer-only sessions
    // never rematch on their own.
    fn rematch_requested(&mut self, view: &GameSnapshot) -> bool {
        for seat in Seat::ALL {
            if !self.players[seat].is_computer() {
                return self.players[seat].wants_rematch(view);
            }
        }
        false
    }
}
