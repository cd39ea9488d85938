//! Pieces module - the piece catalog
//!
//! Every piece kind has four 5x5 masks, one per rotation. A mask is indexed
//! `[row][col]`: `row` is the vertical offset (top to bottom) and `col` the
//! horizontal offset (left to right) from the piece position. The board is
//! addressed `(col, row)`, so a mask cell `[j][i]` lands on board cell
//! `(col + i, row + j)`.
//!
//! Codes: 0 = empty, 1 = body, 2 = pivot. The pivot sits at the mask center
//! (2, 2) and each rotation is the clockwise turn of the previous one about
//! it. The O piece is the exception and never moves.

use crate::types::{BlockKind, PieceKind, Rotation, PIECE_BLOCKS};

type Mask = [[u8; PIECE_BLOCKS as usize]; PIECE_BLOCKS as usize];

/// Masks indexed by `[PieceKind::index()][Rotation::index()]`
const MASKS: [[Mask; 4]; 7] = [
    // I
    [
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 1, 2, 1, 1],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 2, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [1, 1, 2, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 2, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
    ],
    // O
    [
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 2, 1, 0],
            [0, 0, 1, 1, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 2, 1, 0],
            [0, 0, 1, 1, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 2, 1, 0],
            [0, 0, 1, 1, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 2, 1, 0],
            [0, 0, 1, 1, 0],
            [0, 0, 0, 0, 0],
        ],
    ],
    // T
    [
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 1, 2, 1, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 1, 2, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 1, 2, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 2, 1, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
    ],
    // S
    [
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 2, 1, 0],
            [0, 1, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 1, 0, 0, 0],
            [0, 1, 2, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 1, 0],
            [0, 1, 2, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 2, 1, 0],
            [0, 0, 0, 1, 0],
            [0, 0, 0, 0, 0],
        ],
    ],
    // Z
    [
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 1, 2, 0, 0],
            [0, 0, 1, 1, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 1, 2, 0, 0],
            [0, 1, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 1, 1, 0, 0],
            [0, 0, 2, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 1, 0],
            [0, 0, 2, 1, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
    ],
    // J
    [
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 2, 0, 0],
            [0, 1, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 1, 0, 0, 0],
            [0, 1, 2, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 1, 0],
            [0, 0, 2, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 1, 2, 1, 0],
            [0, 0, 0, 1, 0],
            [0, 0, 0, 0, 0],
        ],
    ],
    // L
    [
        [
            [0, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 2, 0, 0],
            [0, 0, 1, 1, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 1, 2, 1, 0],
            [0, 1, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 1, 1, 0, 0],
            [0, 0, 2, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        [
            [0, 0, 0, 0, 0],
            [0, 0, 0, 1, 0],
            [0, 1, 2, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ],
    ],
];

/// Spawn offsets `(x, y)` indexed like [`MASKS`]
///
/// `x` is added to [`crate::types::SPAWN_COLUMN`]; `y` is the spawn row. Each
/// `y` puts the lowest occupied mask row on board row 0.
const INITIAL_OFFSETS: [[(i32, i32); 4]; 7] = [
    // I
    [(-2, -2), (-2, -4), (-2, -2), (-2, -3)],
    // O
    [(-2, -3), (-2, -3), (-2, -3), (-2, -3)],
    // T
    [(-2, -3), (-2, -3), (-2, -2), (-2, -3)],
    // S
    [(-2, -3), (-2, -3), (-2, -2), (-2, -3)],
    // Z
    [(-2, -3), (-2, -3), (-2, -2), (-2, -3)],
    // J
    [(-2, -3), (-2, -2), (-2, -3), (-2, -3)],
    // L
    [(-2, -3), (-2, -3), (-2, -3), (-2, -2)],
];

/// Raw catalog code (0 = empty, 1 = body, 2 = pivot) of one mask block
///
/// # Panics
///
/// Panics if `row` or `col` is outside `0..PIECE_BLOCKS`.
#[inline]
pub fn block_code(kind: PieceKind, rotation: Rotation, row: usize, col: usize) -> u8 {
    MASKS[kind.index()][rotation.index()][row][col]
}

/// Kind of one mask block, see [`block_code`]
///
/// # Panics
///
/// Panics if the catalog holds a code other than 0, 1 or 2.
#[inline]
pub fn block_kind(kind: PieceKind, rotation: Rotation, row: usize, col: usize) -> BlockKind {
    decode_block(block_code(kind, rotation, row, col))
}

fn decode_block(code: u8) -> BlockKind {
    match BlockKind::from_code(code) {
        Some(block) => block,
        None => panic!("invalid catalog block code {}", code),
    }
}

/// Spawn offset `(x, y)` for a piece kind and rotation
#[inline]
pub fn initial_offset(kind: PieceKind, rotation: Rotation) -> (i32, i32) {
    INITIAL_OFFSETS[kind.index()][rotation.index()]
}

/// Iterate the occupied blocks of a mask as `(col, row, kind)` offsets
pub fn occupied_cells(
    kind: PieceKind,
    rotation: Rotation,
) -> impl Iterator<Item = (i32, i32, BlockKind)> {
    let n = PIECE_BLOCKS as usize;
    (0..n).flat_map(move |row| {
        (0..n).filter_map(move |col| {
            let block = block_kind(kind, rotation, row, col);
            block
                .is_occupied()
                .then_some((col as i32, row as i32, block))
        })
    })
}
