use crate::{
    board::Board,
    cell::Activation,
    common::{Direction, MoveError, Outcome},
    player::{Player, PlayerId},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Over(Outcome),
}

/// Everything a single accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// Player who made the move.
    pub player: PlayerId,
    /// Border flags newly set: 0 for a redundant move, 1 on the edge of the
    /// board, 2 for a shared border.
    pub borders_set: usize,
    /// Cells enclosed by this move, as (row, col).
    pub captured: [Option<(usize, usize)>; 2],
    /// The mover captured at least one cell and moves again.
    pub extra_turn: bool,
    /// Player to move next.
    pub next_player: PlayerId,
    /// Set when this move enclosed the last open cell.
    pub outcome: Option<Outcome>,
}

impl MoveReport {
    pub fn captures(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.captured.iter().flatten().copied()
    }

    pub fn capture_count(&self) -> usize {
        self.captures().count()
    }
}

/// Serializable view of a game for front ends.
#[cfg(feature = "std")]
#[derive(Debug, Clone, serde::Serialize)]
pub struct GameSnapshot {
    pub active_player: PlayerId,
    pub players: [Player; 2],
    pub status: GameStatus,
    pub board: Board,
}

/// Game controller: owns the board and both players and applies moves.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    active: PlayerId,
    status: GameStatus,
}

impl Game {
    /// Create a new game with an empty board and Player 1 to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: PlayerId::ALL.map(Player::new),
            active: PlayerId::P1,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player allowed to make the next move.
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn score(&self, id: PlayerId) -> u32 {
        self.player(id).score()
    }

    pub fn is_cell_enclosed(&self, row: usize, col: usize) -> Result<bool, MoveError> {
        Ok(self.board.cell(row, col)?.is_enclosed())
    }

    /// Player who captured the cell at (`row`, `col`), if any.
    pub fn capturer(&self, row: usize, col: usize) -> Result<Option<PlayerId>, MoveError> {
        Ok(self.board.cell(row, col)?.captured_by())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::Over(_))
    }

    /// Winner or tie once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::Over(outcome) => Some(outcome),
            GameStatus::InProgress => None,
        }
    }

    /// Activate the border `direction` of the cell at (`row`, `col`) for the
    /// active player, mirroring it onto the neighbouring cell that shares it.
    ///
    /// The mover keeps the turn if either touched cell was enclosed by this
    /// move; otherwise the turn passes. Re-selecting a border that is already
    /// set is accepted, changes nothing and passes the turn.
    pub fn apply_move(
        &mut self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<MoveReport, MoveError> {
        if self.is_game_over() {
            log::debug!("rejected {} on ({}, {}): game is over", direction, row, col);
            return Err(MoveError::GameAlreadyOver);
        }
        if let Err(e) = self.board.cell(row, col) {
            log::debug!("rejected {} on ({}, {}): {}", direction, row, col, e);
            return Err(e);
        }

        let mover = self.active;
        let acting = &mut self.players[mover.index()];

        let clicked = self.board.cell_mut(row, col)?.activate_border(direction, acting);
        let mirrored = match self.board.neighbor(row, col, direction) {
            Some((r, c, d)) => Some((r, c, self.board.cell_mut(r, c)?.activate_border(d, acting))),
            None => None,
        };

        let mut report = MoveReport {
            player: mover,
            borders_set: usize::from(clicked.changed()),
            captured: [None, None],
            extra_turn: false,
            next_player: mover,
            outcome: None,
        };
        if clicked == Activation::Enclosed {
            report.captured[0] = Some((row, col));
        }
        if let Some((r, c, activation)) = mirrored {
            report.borders_set += usize::from(activation.changed());
            if activation == Activation::Enclosed {
                report.captured[1] = Some((r, c));
            }
        }

        log::debug!(
            "{} set {} on cell {} ({} flag(s) changed)",
            mover,
            direction,
            crate::config::cell_id(row, col),
            report.borders_set
        );
        for (r, c) in report.captures() {
            log::info!("{} captured cell {}", mover, crate::config::cell_id(r, c));
        }

        report.extra_turn = report.capture_count() > 0;
        if !report.extra_turn {
            self.active = mover.other();
        }
        report.next_player = self.active;

        if self.board.all_enclosed() {
            let outcome = Outcome::from_scores(self.score(PlayerId::P1), self.score(PlayerId::P2));
            log::info!(
                "game over: {} ({} {} - {} {})",
                outcome,
                PlayerId::P1,
                self.score(PlayerId::P1),
                PlayerId::P2,
                self.score(PlayerId::P2)
            );
            self.status = GameStatus::Over(outcome);
            report.outcome = Some(outcome);
        }
        Ok(report)
    }

    /// Reinitialise the board and both players; Player 1 moves first.
    pub fn restart(&mut self) {
        self.board.reset();
        for player in self.players.iter_mut() {
            player.reset();
        }
        self.active = PlayerId::P1;
        self.status = GameStatus::InProgress;
        log::info!("game restarted");
    }

    /// Generate a serializable snapshot of the current state.
    #[cfg(feature = "std")]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            active_player: self.active,
            players: self.players,
            status: self.status,
            board: self.board.clone(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
