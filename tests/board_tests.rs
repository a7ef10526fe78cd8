use std::collections::HashSet;

use dots_and_boxes::{Board, Direction, MoveError, COLS, NUM_EDGES, ROWS};

#[test]
fn test_cell_ids_are_row_major_and_one_based() {
    let board = Board::new();
    assert_eq!(board.cell(0, 0).unwrap().id(), 1);
    assert_eq!(board.cell(0, 3).unwrap().id(), 4);
    assert_eq!(board.cell(1, 0).unwrap().id(), 5);
    assert_eq!(board.cell(3, 3).unwrap().id(), 16);

    let ids: HashSet<usize> = board.rows().iter().flatten().map(|c| c.id()).collect();
    assert_eq!(ids.len(), ROWS * COLS);
}

#[test]
fn test_out_of_bounds_lookup() {
    let mut board = Board::new();
    assert_eq!(
        board.cell(ROWS, 0).unwrap_err(),
        MoveError::InvalidPosition { row: ROWS, col: 0 }
    );
    assert_eq!(
        board.cell_mut(0, COLS).unwrap_err(),
        MoveError::InvalidPosition { row: 0, col: COLS }
    );
}

#[test]
fn test_neighbor_mirrors_direction() {
    let board = Board::new();
    assert_eq!(board.neighbor(1, 1, Direction::Top), Some((0, 1, Direction::Bottom)));
    assert_eq!(board.neighbor(1, 1, Direction::Bottom), Some((2, 1, Direction::Top)));
    assert_eq!(board.neighbor(1, 1, Direction::Left), Some((1, 0, Direction::Right)));
    assert_eq!(board.neighbor(1, 1, Direction::Right), Some((1, 2, Direction::Left)));
}

#[test]
fn test_no_neighbor_on_board_edge() {
    let board = Board::new();
    assert_eq!(board.neighbor(0, 2, Direction::Top), None);
    assert_eq!(board.neighbor(ROWS - 1, 2, Direction::Bottom), None);
    assert_eq!(board.neighbor(2, 0, Direction::Left), None);
    assert_eq!(board.neighbor(2, COLS - 1, Direction::Right), None);
}

#[test]
fn test_open_edges_lists_each_border_once() {
    let board = Board::new();
    let edges: Vec<_> = board.open_edges().collect();
    assert_eq!(edges.len(), NUM_EDGES);

    // no open edge may be the mirror of another
    let set: HashSet<_> = edges.iter().map(|m| (m.row, m.col, m.direction)).collect();
    for m in &edges {
        if let Some((r, c, d)) = board.neighbor(m.row, m.col, m.direction) {
            assert!(!set.contains(&(r, c, d)), "{} listed twice", m);
        }
    }
}

#[test]
fn test_fresh_board_state() {
    let board = Board::new();
    assert!(!board.all_enclosed());
    assert_eq!(board.enclosed_count(), 0);
    assert_eq!(board, Board::default());
}
