//! Commonly used types and utilities for ease of import.

pub use crate::{
    run_session, Command, Direction, Game, GameStatus, Move, MoveError, MoveSource, Outcome,
    PlayerId, RandomSource,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_game, render_board, CliPlayer};
