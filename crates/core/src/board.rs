//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is free or filled.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (col, row) where col ranges 0..9 (left to right), row ranges 0..19 (top to bottom)
//!
//! Query paths that take piece positions ([`Board::is_possible_movement`]) accept any
//! coordinates. Direct cell access ([`Board::is_free_block`], [`Board::store_piece`])
//! requires in-bounds coordinates and panics otherwise.

use arrayvec::ArrayVec;

use crate::pieces::block_kind;
use crate::types::{CellState, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, PIECE_BLOCKS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Rows removed by a single [`Board::delete_possible_lines`] call, in scan order
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [CellState; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [CellState::Free; BOARD_SIZE],
        }
    }

    /// Set every cell to free
    pub fn initialize(&mut self) {
        self.cells.fill(CellState::Free);
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(col: i32, row: i32) -> Option<usize> {
        if col < 0 || col >= BOARD_WIDTH as i32 || row < 0 || row >= BOARD_HEIGHT as i32 {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    /// Flat index for a cell the caller guarantees is on the board
    #[inline(always)]
    fn checked_index(col: i32, row: i32) -> usize {
        match Self::index(col, row) {
            Some(idx) => idx,
            None => panic!(
                "board cell ({}, {}) out of bounds ({}x{})",
                col, row, BOARD_WIDTH, BOARD_HEIGHT
            ),
        }
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (col, row)
    /// Returns None if out of bounds
    pub fn cell(&self, col: i32, row: i32) -> Option<CellState> {
        Self::index(col, row).map(|idx| self.cells[idx])
    }

    /// Overwrite a single cell
    ///
    /// # Panics
    ///
    /// Panics if (col, row) is outside the board.
    pub fn set(&mut self, col: i32, row: i32, state: CellState) {
        let idx = Self::checked_index(col, row);
        self.cells[idx] = state;
    }

    /// Check whether the cell at (col, row) is free
    ///
    /// # Panics
    ///
    /// Panics if (col, row) is outside the board. Callers validate positions
    /// with [`Board::is_possible_movement`] first.
    pub fn is_free_block(&self, col: i32, row: i32) -> bool {
        self.cells[Self::checked_index(col, row)].is_free()
    }

    /// Check if a piece can sit at (col, row) with the given rotation
    ///
    /// Every occupied mask block must stay within the side walls and above the
    /// floor. Blocks above row 0 are allowed and skip the occupancy check;
    /// blocks on the board must land on free cells.
    pub fn is_possible_movement(
        &self,
        col: i32,
        row: i32,
        kind: PieceKind,
        rotation: Rotation,
    ) -> bool {
        let n = PIECE_BLOCKS as usize;
        for j in 0..n {
            for i in 0..n {
                if !block_kind(kind, rotation, j, i).is_occupied() {
                    continue;
                }

                let x = col + i as i32;
                let y = row + j as i32;

                // Walls and floor
                if x < 0 || x >= BOARD_WIDTH as i32 || y >= BOARD_HEIGHT as i32 {
                    return false;
                }

                // Settled blocks
                if y >= 0 && !self.is_free_block(x, y) {
                    return false;
                }
            }
        }

        true
    }

    /// Commit a piece's blocks into the grid
    ///
    /// The position must have been validated with [`Board::is_possible_movement`].
    /// Blocks above row 0 have no cell to fill and are dropped.
    ///
    /// # Panics
    ///
    /// Panics if any occupied block lands outside the side walls or below the floor.
    pub fn store_piece(&mut self, col: i32, row: i32, kind: PieceKind, rotation: Rotation) {
        let n = PIECE_BLOCKS as usize;
        for j in 0..n {
            for i in 0..n {
                if !block_kind(kind, rotation, j, i).is_occupied() {
                    continue;
                }

                let y = row + j as i32;
                if y < 0 {
                    continue;
                }
                self.set(col + i as i32, y, CellState::Filled);
            }
        }
    }

    /// The game is over once any block has settled on the top row
    pub fn is_game_over(&self) -> bool {
        self.cells[..BOARD_WIDTH as usize]
            .iter()
            .any(|cell| !cell.is_free())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = row * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| !cell.is_free())
    }

    /// Remove every full row, shifting the rows above down
    ///
    /// Rows are scanned top to bottom and each full row is deleted as soon as
    /// it is found. Returns the removed row indices in scan order.
    pub fn delete_possible_lines(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        for row in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(row) {
                self.delete_line(row);
                cleared.push(row);
            }
        }
        cleared
    }

    /// Delete one row and move every row above it down by one
    ///
    /// The vacated top row is cleared to free.
    fn delete_line(&mut self, row: usize) {
        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping source and destination
        for r in (1..=row).rev() {
            let src_start = (r - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, r * width);
        }

        self.cells[..width].fill(CellState::Free);
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_free()).count()
    }

    /// Iterate the rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<CellState>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [CellState::Free; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_WIDTH as usize + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<CellState>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
