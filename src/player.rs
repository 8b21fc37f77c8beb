use crate::common::Intent;
use crate::game::GameSnapshot;

/// Interface implemented by the different seat controllers.
pub trait Player {
    /// Choose the next intent for the active seat.
    fn choose(&mut self, view: &GameSnapshot) -> Intent;

    /// Whether the session should pace this controller's steps so a
    /// watching human can follow them.
    fn is_computer(&self) -> bool {
        false
    }

    /// Asked once per finished game; `true` requests a rematch.
    fn wants_rematch(&mut self, _view: &GameSnapshot) -> bool {
        false
    }
}
