//! Orchestrator pairing two move sources with one game.

use crate::{
    common::Outcome,
    game::Game,
    source::{Command, MoveSource},
};

/// Totals for one session, returned when a seat quits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Moves accepted since the last restart.
    pub moves: usize,
    /// Moves rejected over the whole session.
    pub rejected: usize,
    /// Outcome of the game in play when the session ended, if it finished.
    pub outcome: Option<Outcome>,
}

/// Run a session until one of the seats quits.
///
/// The seat of the active player is asked for a command each round. Reports
/// and rejections go back to that seat. When a move finishes the game both
/// seats are told the outcome, the mover first.
pub fn run_session(game: &mut Game, seats: [&mut dyn MoveSource; 2]) -> SessionSummary {
    let mut summary = SessionSummary::default();
    loop {
        let seat = game.active_player().index();
        match seats[seat].next_command(game) {
            Command::Quit => {
                summary.outcome = game.outcome();
                log::debug!("{} quit after {} move(s)", game.active_player(), summary.moves);
                return summary;
            }
            Command::Restart => {
                game.restart();
                summary.moves = 0;
            }
            Command::Move(mv) => match game.apply_move(mv.row, mv.col, mv.direction) {
                Ok(report) => {
                    summary.moves += 1;
                    seats[seat].handle_move_result(mv, &report);
                    if let Some(outcome) = report.outcome {
                        seats[seat].handle_game_over(game, outcome);
                        seats[1 - seat].handle_game_over(game, outcome);
                    }
                }
                Err(e) => {
                    summary.rejected += 1;
                    seats[seat].handle_rejected(mv, e);
                }
            },
        }
    }
}
