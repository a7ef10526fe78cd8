//! Common types for Dots and Boxes: border directions, outcomes and errors.

use core::fmt;
use core::num::ParseIntError;
use core::str::FromStr;

use crate::player::PlayerId;

/// One of the four borders of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Direction {
    Top,
    Left,
    Bottom,
    Right,
}

impl Direction {
    /// All directions, in the order borders are listed on a cell.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Left,
        Direction::Bottom,
        Direction::Right,
    ];

    /// The same border as seen from the neighbouring cell.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Bit used for this border in a cell's border mask.
    pub(crate) const fn bit(self) -> u8 {
        match self {
            Direction::Top => 0b0001,
            Direction::Left => 0b0010,
            Direction::Bottom => 0b0100,
            Direction::Right => 0b1000,
        }
    }

    /// Single-letter code: `t`, `l`, `b` or `r`.
    pub const fn code(self) -> char {
        match self {
            Direction::Top => 't',
            Direction::Left => 'l',
            Direction::Bottom => 'b',
            Direction::Right => 'r',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Left => "left",
            Direction::Bottom => "bottom",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    /// Accepts the one-letter codes and the full names, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::MissingDirection);
        }
        let mut chars = s.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c.to_ascii_lowercase()),
            _ => None,
        };
        Direction::ALL
            .into_iter()
            .find(|d| single == Some(d.code()) || s.eq_ignore_ascii_case(d.name()))
            .ok_or(ParseError::BadDirection)
    }
}

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Outcome {
    Winner(PlayerId),
    Tie,
}

impl Outcome {
    /// Higher score wins, equal scores tie.
    pub fn from_scores(p1: u32, p2: u32) -> Self {
        if p1 > p2 {
            Outcome::Winner(PlayerId::P1)
        } else if p2 > p1 {
            Outcome::Winner(PlayerId::P2)
        } else {
            Outcome::Tie
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Outcome::Winner(id) => Some(*id),
            Outcome::Tie => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(id) => write!(f, "{} wins!", id),
            Outcome::Tie => write!(f, "You tied!"),
        }
    }
}

/// Errors returned when a move is rejected. A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Row or column is outside the board.
    InvalidPosition { row: usize, col: usize },
    /// The game is over; only a restart is accepted.
    GameAlreadyOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidPosition { row, col } => {
                write!(f, "Position out of bounds: row={}, col={}", row, col)
            }
            MoveError::GameAlreadyOver => write!(f, "Game is already over"),
        }
    }
}

/// Errors returned when parsing a move written in text notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing to parse.
    Empty,
    /// First character is not a column letter.
    BadColumn(char),
    /// Row number is missing or not a number.
    BadRow(ParseIntError),
    /// Coordinate is well formed but outside the board. Carries the column
    /// letter and row number as written.
    OutOfBounds { column: char, row: usize },
    /// No direction after the coordinate.
    MissingDirection,
    /// Direction is not one of top/left/bottom/right.
    BadDirection,
}

impl From<ParseIntError> for ParseError {
    fn from(err: ParseIntError) -> Self {
        ParseError::BadRow(err)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Empty input"),
            ParseError::BadColumn(c) => write!(f, "Invalid column '{}' - must be a letter", c),
            ParseError::BadRow(e) => write!(f, "Invalid row: {}", e),
            ParseError::OutOfBounds { column, row } => {
                write!(f, "Coordinate {}{} is outside the board", column, row)
            }
            ParseError::MissingDirection => {
                write!(f, "Missing direction - expected t, l, b or r")
            }
            ParseError::BadDirection => {
                write!(f, "Invalid direction - expected top, left, bottom or right")
            }
        }
    }
}
