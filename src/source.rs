use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    common::{MoveError, Outcome},
    game::{Game, MoveReport},
    moves::Move,
};

/// Instruction a seat gives the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Restart,
    Quit,
}

/// Interface implemented by anything that can sit at the board and issue
/// commands: a terminal player, a scripted replay, a random mover.
pub trait MoveSource {
    /// Choose the next command given the current game.
    fn next_command(&mut self, game: &Game) -> Command;

    /// Inform the source of the result of its last accepted move.
    fn handle_move_result(&mut self, _mv: Move, _report: &MoveReport) {}

    /// Inform the source that its last move was rejected.
    fn handle_rejected(&mut self, _mv: Move, _err: MoveError) {}

    /// Inform the source that the game has finished.
    fn handle_game_over(&mut self, _game: &Game, _outcome: Outcome) {}
}

/// Picks uniformly among the borders still open. Quits once the game is over.
pub struct RandomSource {
    rng: SmallRng,
}

impl RandomSource {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl MoveSource for RandomSource {
    fn next_command(&mut self, game: &Game) -> Command {
        if game.is_game_over() {
            return Command::Quit;
        }
        let open = game.board().open_edges().count();
        if open == 0 {
            return Command::Quit;
        }
        let pick = self.rng.random_range(0..open);
        match game.board().open_edges().nth(pick) {
            Some(mv) => Command::Move(mv),
            None => Command::Quit,
        }
    }
}
