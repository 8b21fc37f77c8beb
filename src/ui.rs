#![cfg(feature = "std")]

//! Terminal rendering for snapshots. Holds no state of its own: every
//! function prints from the snapshot(s) it is handed.

use crate::common::Roll;
use crate::game::GameSnapshot;

/// Print both scorecards with an active-seat marker and the unbanked
/// turn score, if any.
pub fn print_scoreboard(view: &GameSnapshot) {
    println!();
    for (seat, card) in view.players.enumerate() {
        let marker = if !view.game_over && seat == view.active {
            '>'
        } else {
            ' '
        };
        println!(
            "{} {:<10} {:>3} points   {}W / {}L",
            marker, card.name, card.total, card.wins, card.losses
        );
    }
    if view.turn_points > 0 {
        println!("  this turn: {} unbanked", view.turn_points);
    }
}

/// Describe the roll that took `before` to `after`.
pub fn print_roll_report(before: &GameSnapshot, after: &GameSnapshot) {
    let Some(roll) = after.last_roll else {
        return;
    };
    let roller = &before.players[before.active].name;
    if after.forced {
        println!(
            "{} rolled {}: doubles for {}! Must roll again.",
            roller,
            roll,
            roll.sum()
        );
    } else if after.active != before.active {
        match roll {
            Roll::Double(1, 1) => {
                println!("{} rolled {}: double ones! Banked total wiped.", roller, roll)
            }
            _ => println!("{} rolled {}: bust, turn over.", roller, roll),
        }
    } else {
        println!("{} rolled {}: turn at {}.", roller, roll, after.turn_points);
    }
}

/// Announce a banked turn score.
pub fn print_hold_report(before: &GameSnapshot, after: &GameSnapshot) {
    let seat = before.active;
    let (was, now) = (&before.players[seat], &after.players[seat]);
    if now.total > was.total {
        println!(
            "{} holds: banks {}, total {}.",
            was.name,
            now.total - was.total,
            now.total
        );
    }
}

/// Winner banner for a finished game.
pub fn print_winner(view: &GameSnapshot) {
    if let Some(seat) = view.winner {
        let card = &view.players[seat];
        println!(
            "\n{} wins with {} points!  Record: {}W / {}L",
            card.name, card.total, card.wins, card.losses
        );
    }
}
