//! Board tests - grid, collision and line deletion through the public API

use tetra_grid::core::Board;
use tetra_grid::types::{CellState, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, row: i32) {
    for col in 0..BOARD_WIDTH as i32 {
        board.set(col, row, CellState::Filled);
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for row in 0..BOARD_HEIGHT as i32 {
        for col in 0..BOARD_WIDTH as i32 {
            assert!(board.is_free_block(col, row), "({}, {}) should be free", col, row);
        }
    }
    assert_eq!(board.filled_count(), 0);
    assert!(!board.is_game_over());
}

#[test]
fn test_board_cell_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.cell(-1, 0), None);
    assert_eq!(board.cell(0, -1), None);
    assert_eq!(board.cell(BOARD_WIDTH as i32, 0), None);
    assert_eq!(board.cell(0, BOARD_HEIGHT as i32), None);
    assert_eq!(board.cell(9, 19), Some(CellState::Free));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_is_free_block_out_of_bounds_panics() {
    let board = Board::new();
    board.is_free_block(BOARD_WIDTH as i32, 0);
}

#[test]
fn test_initialize_clears_everything() {
    let mut board = Board::new();
    fill_row(&mut board, 10);
    board.set(3, 0, CellState::Filled);

    board.initialize();
    assert_eq!(board.filled_count(), 0);
    assert!(!board.is_game_over());
}

// Scenario: a full bottom row disappears and nothing moves in from above.
#[test]
fn test_delete_bottom_row_on_empty_board() {
    let mut board = Board::new();
    fill_row(&mut board, 19);

    let cleared = board.delete_possible_lines();
    assert_eq!(cleared.as_slice(), &[19]);
    for col in 0..BOARD_WIDTH as i32 {
        assert!(board.is_free_block(col, 19));
    }
    assert_eq!(board.filled_count(), 0);
    assert!(!board.is_game_over());
}

#[test]
fn test_delete_shifts_rows_above_down() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    board.set(2, 18, CellState::Filled);
    board.set(7, 17, CellState::Filled);

    let cleared = board.delete_possible_lines();
    assert_eq!(cleared.len(), 1);

    assert!(!board.is_free_block(2, 19));
    assert!(!board.is_free_block(7, 18));
    assert!(board.is_free_block(2, 18));
    assert!(board.is_free_block(7, 17));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_delete_non_adjacent_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 15);
    fill_row(&mut board, 19);
    board.set(0, 17, CellState::Filled);

    let cleared = board.delete_possible_lines();
    assert_eq!(cleared.as_slice(), &[15, 19]);

    // Row 17 moved down once for the clear below it.
    assert!(!board.is_free_block(0, 18));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_delete_four_rows() {
    let mut board = Board::new();
    for row in 16..20 {
        fill_row(&mut board, row);
    }
    board.set(4, 15, CellState::Filled);

    let cleared = board.delete_possible_lines();
    assert_eq!(cleared.as_slice(), &[16, 17, 18, 19]);
    assert!(!board.is_free_block(4, 19));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_partial_rows_are_kept() {
    let mut board = Board::new();
    for col in 0..BOARD_WIDTH as i32 - 1 {
        board.set(col, 19, CellState::Filled);
    }

    assert!(board.delete_possible_lines().is_empty());
    assert_eq!(board.filled_count(), BOARD_WIDTH as usize - 1);
}

// Scenario: a single filled cell on the top row ends the game.
#[test]
fn test_game_over_single_top_cell() {
    let mut board = Board::new();
    board.set(3, 0, CellState::Filled);
    assert!(board.is_game_over());
}

#[test]
fn test_game_over_ignores_lower_rows() {
    let mut board = Board::new();
    for row in 1..BOARD_HEIGHT as i32 {
        board.set(5, row, CellState::Filled);
    }
    assert!(!board.is_game_over());
}

// Scenario: blocks above the visible board are allowed.
#[test]
fn test_movement_above_board_is_possible() {
    let mut board = Board::new();
    fill_row(&mut board, 0);

    // I North occupies mask row 2 only; at row -3 that is board row -1.
    assert!(board.is_possible_movement(4, -3, PieceKind::I, Rotation::North));
    // O occupies mask rows 2 and 3.
    assert!(board.is_possible_movement(4, -4, PieceKind::O, Rotation::North));
}

// Scenario: a block left of column 0 is rejected regardless of contents.
#[test]
fn test_movement_past_left_wall_is_rejected() {
    let board = Board::new();

    // I North occupies mask cols 1..=4.
    assert!(board.is_possible_movement(-1, 5, PieceKind::I, Rotation::North));
    assert!(!board.is_possible_movement(-2, 5, PieceKind::I, Rotation::North));
    // Still rejected above the board.
    assert!(!board.is_possible_movement(-2, -10, PieceKind::I, Rotation::North));
}

#[test]
fn test_movement_right_wall_and_floor() {
    let board = Board::new();

    // I North occupies cols 1..=4 and row 2.
    assert!(board.is_possible_movement(5, 17, PieceKind::I, Rotation::North));
    assert!(!board.is_possible_movement(6, 17, PieceKind::I, Rotation::North));
    assert!(!board.is_possible_movement(5, 18, PieceKind::I, Rotation::North));
}

#[test]
fn test_movement_blocked_by_settled_cell() {
    let mut board = Board::new();
    board.set(5, 12, CellState::Filled);

    // O occupies mask (2,2),(3,2),(2,3),(3,3).
    assert!(!board.is_possible_movement(3, 10, PieceKind::O, Rotation::North));
    assert!(!board.is_possible_movement(2, 9, PieceKind::O, Rotation::North));
    assert!(board.is_possible_movement(4, 10, PieceKind::O, Rotation::North));
}

#[test]
fn test_store_piece_fills_mask_cells() {
    let mut board = Board::new();
    board.store_piece(0, 16, PieceKind::O, Rotation::North);

    for (col, row) in [(2, 18), (3, 18), (2, 19), (3, 19)] {
        assert!(!board.is_free_block(col, row));
    }
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_store_piece_uses_row_major_masks() {
    // L North: vertical bar in mask col 2 (rows 1..=3) with a foot at (3, 3).
    let mut board = Board::new();
    board.store_piece(0, 0, PieceKind::L, Rotation::North);

    assert!(!board.is_free_block(2, 1));
    assert!(!board.is_free_block(2, 2));
    assert!(!board.is_free_block(2, 3));
    assert!(!board.is_free_block(3, 3));
    assert!(board.is_free_block(1, 2));
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_store_piece_drops_blocks_above_board() {
    let mut board = Board::new();
    // I East occupies mask col 2, rows 1..=4; at row -4 only row 0 lands.
    board.store_piece(0, -4, PieceKind::I, Rotation::East);

    assert!(!board.is_free_block(2, 0));
    assert_eq!(board.filled_count(), 1);
    assert!(board.is_game_over());
}

#[test]
fn test_rows_iterates_top_to_bottom() {
    let mut board = Board::new();
    board.set(0, 19, CellState::Filled);

    let rows: Vec<&[CellState]> = board.rows().collect();
    assert_eq!(rows.len(), BOARD_HEIGHT as usize);
    assert_eq!(rows[19][0], CellState::Filled);
    assert_eq!(rows[0][0], CellState::Free);
}
