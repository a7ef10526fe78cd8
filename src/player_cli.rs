#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{Direction, MoveError, Outcome},
    config::{COLS, ROWS},
    game::{Game, MoveReport},
    moves::{ColumnLabel, Move},
    player::PlayerId,
    source::{Command, MoveSource},
};

/// Terminal seat: reads commands from stdin and prints the board.
pub struct CliPlayer {
    show_result: bool,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self { show_result: true }
    }

    /// Second seat on a shared terminal; leaves the final result to the
    /// other seat so it is printed once.
    pub fn hot_seat_partner() -> Self {
        Self { show_result: false }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `None` on end of input or a read error.
fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

fn prompt(text: &str) {
    print!("{}", text);
    // A failed flush only delays the prompt.
    let _ = io::stdout().flush();
}

fn horizontal_line(out: &mut String, board: &Board, row: usize) {
    out.push_str("  ");
    for col in 0..COLS {
        let set = if row < ROWS {
            board.rows()[row][col].has_border(Direction::Top)
        } else {
            board.rows()[ROWS - 1][col].has_border(Direction::Bottom)
        };
        out.push('+');
        out.push_str(if set { "---" } else { "   " });
    }
    out.push_str("+\n");
}

/// Draw the dot grid: `---` and `|` for set borders, the capturer's number
/// inside enclosed boxes.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("  ");
    for col in 0..COLS {
        let _ = write!(out, "  {} ", ColumnLabel(col));
    }
    out.push('\n');

    for (r, row) in board.rows().iter().enumerate() {
        horizontal_line(&mut out, board, r);
        let _ = write!(out, "{:<2}", r + 1);
        for cell in row.iter() {
            out.push(if cell.has_border(Direction::Left) { '|' } else { ' ' });
            match cell.captured_by() {
                Some(PlayerId::P1) => out.push_str(" 1 "),
                Some(PlayerId::P2) => out.push_str(" 2 "),
                None => out.push_str("   "),
            }
        }
        let last = &row[COLS - 1];
        out.push(if last.has_border(Direction::Right) { '|' } else { ' ' });
        out.push('\n');
    }
    horizontal_line(&mut out, board, ROWS);
    out
}

/// Turn line and both point counters.
pub fn render_status(game: &Game) -> String {
    let mut out = String::new();
    if !game.is_game_over() {
        let _ = writeln!(out, "{}'s turn.", game.active_player());
    }
    for id in PlayerId::ALL {
        let _ = writeln!(out, "{} Points: {}", id, game.score(id));
    }
    out
}

/// Display the board followed by the turn and score lines.
pub fn print_game(game: &Game) {
    println!("{}", render_board(game.board()));
    print!("{}", render_status(game));
}

fn print_help() {
    println!("Enter a move as <column><row> <border>, e.g. A1 t or c4 right.");
    println!("Borders: t(op), l(eft), b(ottom), r(ight).");
    println!("Other commands: restart, quit.");
}

impl MoveSource for CliPlayer {
    fn next_command(&mut self, game: &Game) -> Command {
        println!();
        print_game(game);
        loop {
            if game.is_game_over() {
                prompt("Type 'restart' for a new game or 'quit' to exit: ");
            } else {
                prompt(&format!("{}'s move: ", game.active_player()));
            }
            let Some(line) = read_line() else {
                return Command::Quit;
            };
            let line = line.trim();
            match line.to_ascii_lowercase().as_str() {
                "" => continue,
                "q" | "quit" | "exit" => return Command::Quit,
                "restart" => return Command::Restart,
                "h" | "help" | "?" => print_help(),
                _ => match line.parse::<Move>() {
                    Ok(mv) => return Command::Move(mv),
                    Err(e) => println!("Invalid move: {}", e),
                },
            }
        }
    }

    fn handle_move_result(&mut self, mv: Move, report: &MoveReport) {
        println!("{} played {}", report.player, mv);
        for (r, c) in report.captures() {
            println!("{} captured {}{}!", report.player, ColumnLabel(c), r + 1);
        }
        if report.extra_turn && report.outcome.is_none() {
            println!("{} goes again.", report.player);
        }
    }

    fn handle_rejected(&mut self, mv: Move, err: MoveError) {
        println!("Move {} rejected: {}", mv, err);
    }

    fn handle_game_over(&mut self, game: &Game, outcome: Outcome) {
        if !self.show_result {
            return;
        }
        println!();
        print_game(game);
        println!("\nGame Over!\n{}", outcome);
    }
}
