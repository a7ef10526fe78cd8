#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod board;
mod cell;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod moves;
mod player;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
pub mod session;
pub mod source;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
pub use moves::*;
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use session::{run_session, SessionSummary};
pub use source::{Command, MoveSource, RandomSource};
