//! The fixed grid of cells, addressed directly by (row, col).

use core::fmt;

use crate::cell::Cell;
use crate::common::{Direction, MoveError};
use crate::config::{cell_id, COLS, ROWS};
use crate::moves::Move;

#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a board with every cell open.
    pub fn new() -> Self {
        let cells =
            core::array::from_fn(|row| core::array::from_fn(|col| Cell::new(cell_id(row, col))));
        Board { cells }
    }

    fn check_bounds(row: usize, col: usize) -> Result<(), MoveError> {
        if row >= ROWS || col >= COLS {
            return Err(MoveError::InvalidPosition { row, col });
        }
        Ok(())
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, MoveError> {
        Self::check_bounds(row, col)?;
        Ok(&self.cells[row][col])
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, MoveError> {
        Self::check_bounds(row, col)?;
        Ok(&mut self.cells[row][col])
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Cell across the border `direction` of (`row`, `col`), together with the
    /// mirrored direction on that cell. `None` on the edge of the board.
    pub fn neighbor(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Option<(usize, usize, Direction)> {
        let (r, c) = match direction {
            Direction::Top => (row.checked_sub(1)?, col),
            Direction::Bottom => (row + 1, col),
            Direction::Left => (row, col.checked_sub(1)?),
            Direction::Right => (row, col + 1),
        };
        if r >= ROWS || c >= COLS {
            return None;
        }
        Some((r, c, direction.opposite()))
    }

    /// Returns `true` when every cell is enclosed.
    pub fn all_enclosed(&self) -> bool {
        self.cells.iter().flatten().all(Cell::is_enclosed)
    }

    pub fn enclosed_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_enclosed()).count()
    }

    /// Every border not yet set, each shared border listed once.
    ///
    /// A shared border is named from the cell below it (top) or to its right
    /// (left); the outer bottom and right borders are named from the last row
    /// and column.
    pub fn open_edges(&self) -> impl Iterator<Item = Move> + '_ {
        (0..ROWS)
            .flat_map(|row| (0..COLS).map(move |col| (row, col)))
            .flat_map(|(row, col)| Direction::ALL.into_iter().map(move |d| (row, col, d)))
            .filter(|&(row, col, d)| match d {
                Direction::Top | Direction::Left => true,
                Direction::Bottom => row == ROWS - 1,
                Direction::Right => col == COLS - 1,
            })
            .filter(|&(row, col, d)| !self.cells[row][col].has_border(d))
            .map(|(row, col, direction)| Move { row, col, direction })
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.reset();
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in &self.cells {
            writeln!(f, "  {:?}", row)?;
        }
        write!(f, "}}")
    }
}
