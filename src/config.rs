/// Number of box rows on the board.
pub const ROWS: usize = 4;
/// Number of box columns on the board.
pub const COLS: usize = 4;
/// Total number of boxes; the game is over once all of them are enclosed.
pub const NUM_CELLS: usize = ROWS * COLS;
/// Distinct borders on the board, counting shared borders once.
pub const NUM_EDGES: usize = ROWS * (COLS + 1) + COLS * (ROWS + 1);

/// Environment variable read by [`init_logging`](crate::init_logging).
pub const LOG_ENV_VAR: &str = "DOTS_LOG";

/// Display label of the cell at (`row`, `col`): 1-based, row-major.
pub const fn cell_id(row: usize, col: usize) -> usize {
    ROWS * row + col + 1
}
