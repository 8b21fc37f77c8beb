use crate::common::Intent;
use crate::game::GameSnapshot;
use crate::player::Player;
use crate::policy::{decide, Decision};

/// Computer-controlled seat backed by the threshold policy.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn choose(&mut self, view: &GameSnapshot) -> Intent {
        match decide(view) {
            Decision::Roll => Intent::Roll,
            Decision::Hold => Intent::Hold,
        }
    }

    fn is_computer(&self) -> bool {
        true
    }
}
