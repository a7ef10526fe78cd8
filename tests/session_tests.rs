use std::collections::VecDeque;

use dots_and_boxes::{
    run_session, Command, Direction, Game, Move, MoveError, MoveReport, MoveSource, Outcome,
    PlayerId, RandomSource, NUM_CELLS, NUM_EDGES,
};

/// Seat that replays a fixed list of commands, then quits.
#[derive(Default)]
struct Scripted {
    commands: VecDeque<Command>,
    accepted: Vec<(Move, MoveReport)>,
    rejected: Vec<(Move, MoveError)>,
    finished: Option<Outcome>,
}

impl Scripted {
    fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl MoveSource for Scripted {
    fn next_command(&mut self, _game: &Game) -> Command {
        self.commands.pop_front().unwrap_or(Command::Quit)
    }

    fn handle_move_result(&mut self, mv: Move, report: &MoveReport) {
        self.accepted.push((mv, *report));
    }

    fn handle_rejected(&mut self, mv: Move, err: MoveError) {
        self.rejected.push((mv, err));
    }

    fn handle_game_over(&mut self, _game: &Game, outcome: Outcome) {
        self.finished = Some(outcome);
    }
}

#[test]
fn test_seats_are_asked_in_turn() {
    let mut game = Game::new();
    let mut p1 = Scripted::new([
        Command::Move(Move::new(0, 0, Direction::Top)),
        Command::Quit,
    ]);
    let mut p2 = Scripted::new([Command::Move(Move::new(3, 3, Direction::Bottom))]);

    let summary = run_session(&mut game, [&mut p1, &mut p2]);
    assert_eq!(summary.moves, 2);
    assert_eq!(summary.rejected, 0);
    assert_eq!(summary.outcome, None);
    assert_eq!(p1.accepted.len(), 1);
    assert_eq!(p2.accepted.len(), 1);
    assert_eq!(p1.accepted[0].1.next_player, PlayerId::P2);
    assert_eq!(p2.accepted[0].1.player, PlayerId::P2);
}

#[test]
fn test_rejections_go_back_to_the_mover_and_restart_resets() {
    let mut game = Game::new();
    let mut p1 = Scripted::new([
        Command::Move(Move::new(0, 0, Direction::Top)),
        Command::Quit,
    ]);
    let mut p2 = Scripted::new([
        Command::Move(Move::new(9, 9, Direction::Top)),
        Command::Restart,
    ]);

    let summary = run_session(&mut game, [&mut p1, &mut p2]);
    assert_eq!(summary.moves, 0);
    assert_eq!(summary.rejected, 1);
    assert_eq!(
        p2.rejected,
        vec![(
            Move::new(9, 9, Direction::Top),
            MoveError::InvalidPosition { row: 9, col: 9 }
        )]
    );
    assert!(p1.rejected.is_empty());
    assert_eq!(game.board(), Game::new().board());
    assert_eq!(game.active_player(), PlayerId::P1);
}

#[test]
fn test_random_session_plays_every_edge_once() {
    let mut game = Game::new();
    let mut p1 = RandomSource::from_seed(1);
    let mut p2 = RandomSource::from_seed(2);
    let summary = run_session(&mut game, [&mut p1, &mut p2]);

    assert_eq!(summary.moves, NUM_EDGES);
    assert_eq!(summary.rejected, 0);
    assert!(game.is_game_over());
    let p1_score = game.score(PlayerId::P1);
    let p2_score = game.score(PlayerId::P2);
    assert_eq!((p1_score + p2_score) as usize, NUM_CELLS);
    assert_eq!(summary.outcome, Some(Outcome::from_scores(p1_score, p2_score)));
}

#[test]
fn test_random_session_is_reproducible() {
    let play = |seed: u64| {
        let mut game = Game::new();
        let mut p1 = RandomSource::from_seed(seed);
        let mut p2 = RandomSource::from_seed(seed + 1);
        run_session(&mut game, [&mut p1, &mut p2]);
        game.board().clone()
    };
    assert_eq!(play(42), play(42));
}

/// Random seat that remembers whether it was told the game ended.
struct Recording {
    inner: RandomSource,
    finished: Option<Outcome>,
}

impl MoveSource for Recording {
    fn next_command(&mut self, game: &Game) -> Command {
        self.inner.next_command(game)
    }

    fn handle_game_over(&mut self, _game: &Game, outcome: Outcome) {
        self.finished = Some(outcome);
    }
}

#[test]
fn test_game_over_reported_to_both_seats() {
    for seed in [5, 11, 42] {
        let mut game = Game::new();
        let mut p1 = Recording { inner: RandomSource::from_seed(seed), finished: None };
        let mut p2 = Recording { inner: RandomSource::from_seed(seed + 1), finished: None };
        run_session(&mut game, [&mut p1, &mut p2]);

        let outcome = game.outcome().unwrap();
        assert_eq!(p1.finished, Some(outcome));
        assert_eq!(p2.finished, Some(outcome));
    }
}

#[test]
fn test_moves_after_game_over_are_rejected() {
    let mut game = Game::new();
    let mut p1 = RandomSource::from_seed(5);
    let mut p2 = RandomSource::from_seed(6);
    run_session(&mut game, [&mut p1, &mut p2]);
    let outcome = game.outcome().unwrap();

    let mut late = Scripted::new([Command::Move(Move::new(0, 0, Direction::Top))]);
    let mut other = Scripted::default();
    let summary = if game.active_player() == PlayerId::P1 {
        run_session(&mut game, [&mut late, &mut other])
    } else {
        run_session(&mut game, [&mut other, &mut late])
    };
    assert_eq!(summary.rejected, 1);
    assert_eq!(late.rejected[0].1, MoveError::GameAlreadyOver);
    assert!(late.finished.is_none());
    assert_eq!(summary.outcome, Some(outcome));
}
