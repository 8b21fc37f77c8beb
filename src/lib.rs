#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
pub mod dice;
mod game;
mod player;
mod player_ai;
mod policy;
mod resolver;
mod seat;

#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
#[cfg(feature = "std")]
mod session;
#[cfg(feature = "std")]
pub mod ui;

pub use common::*;
pub use config::*;
pub use game::*;
pub use player::*;
pub use player_ai::*;
pub use policy::*;
pub use resolver::*;
pub use seat::*;

#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use session::*;
