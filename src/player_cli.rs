#![cfg(feature = "std")]

use std::io::{self, Write};

use crate::common::Intent;
use crate::game::GameSnapshot;
use crate::player::Player;

/// Human-controlled seat reading commands from stdin.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

// EOF and read failures both surface as `None`; callers quit cleanly.
fn read_line() -> Option<String> {
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf),
        Err(_) => None,
    }
}

impl Player for CliPlayer {
    fn choose(&mut self, view: &GameSnapshot) -> Intent {
        let me = &view.players[view.active];
        loop {
            // The prompt mirrors the engine guards: hold is only offered
            // when the engine would accept it.
            if view.forced {
                print!("{}: doubles, you must roll. [r]oll / [n]ew / [q]uit > ", me.name);
            } else if view.turn_points == 0 {
                print!("{}: [r]oll / [n]ew / [q]uit > ", me.name);
            } else {
                print!("{}: [r]oll / [h]old / [n]ew / [q]uit > ", me.name);
            }
            let _ = io::stdout().flush();
            let Some(line) = read_line() else {
                return Intent::Quit;
            };
            match line.trim().to_lowercase().as_str() {
                "r" | "roll" => return Intent::Roll,
                "h" | "hold" => {
                    if view.forced {
                        println!("Holding is barred after doubles. Roll again.");
                    } else if view.turn_points == 0 {
                        println!("Nothing to hold yet. Roll first.");
                    } else {
                        return Intent::Hold;
                    }
                }
                "n" | "new" => return Intent::NewGame,
                "q" | "quit" => return Intent::Quit,
                "" => {}
                other => println!("Unrecognized command: {:?}", other),
            }
        }
    }

    fn wants_rematch(&mut self, _view: &GameSnapshot) -> bool {
        loop {
            print!("Play again? [y/n] > ");
            let _ = io::stdout().flush();
            let Some(line) = read_line() else {
                return false;
            };
            match line.trim().to_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => {}
            }
        }
    }
}
