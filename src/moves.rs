//! Border selections and their text notation, e.g. `A1 t` or `c4 right`.

use core::fmt;
use core::str::FromStr;

use crate::common::{Direction, ParseError};
use crate::config::{COLS, ROWS};

/// A border selection on one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Move {
    pub fn new(row: usize, col: usize, direction: Direction) -> Self {
        Self { row, col, direction }
    }
}

/// Column letter for display. Columns past `Z` continue as `AA`, `AB`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnLabel(pub usize);

impl fmt::Display for ColumnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 16];
        let mut i = buf.len();
        let mut n = self.0;
        loop {
            i -= 1;
            buf[i] = b'A' + (n % 26) as u8;
            if n < 26 {
                break;
            }
            n = n / 26 - 1;
        }
        let label = core::str::from_utf8(&buf[i..]).map_err(|_| fmt::Error)?;
        f.write_str(label)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}",
            ColumnLabel(self.col),
            self.row + 1,
            self.direction.code()
        )
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let col_ch = s.chars().next().ok_or(ParseError::Empty)?;
        if !col_ch.is_ascii_alphabetic() {
            return Err(ParseError::BadColumn(col_ch));
        }
        let col = (col_ch.to_ascii_uppercase() as u8 - b'A') as usize;

        let rest = &s[1..];
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let row: usize = rest[..digits].parse()?;
        if row == 0 || row > ROWS || col >= COLS {
            return Err(ParseError::OutOfBounds { column: col_ch, row });
        }

        let direction = rest[digits..].parse()?;
        Ok(Move {
            row: row - 1,
            col,
            direction,
        })
    }
}
