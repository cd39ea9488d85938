//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board logic, session state machine, terminal rendering).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Piece mask**: 5x5 blocks per piece and rotation
//!
//! Pieces may extend above row 0 (negative rows) while spawning, but never
//! below the last row or past either side wall.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the terminal runner (~60 FPS) |
//! | `DEFAULT_GRAVITY_MS` | 700 | Interval between automatic one-row drops |
//! | `MIN_GRAVITY_MS` | 50 | Lower clamp for configured gravity |
//!
//! # Examples
//!
//! ```
//! use tetra_grid_types::{BlockKind, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL[PieceKind::T.index()], PieceKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//!
//! assert_eq!(BlockKind::from_code(2), Some(BlockKind::Pivot));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of a piece mask (5x5 blocks)
pub const PIECE_BLOCKS: u8 = 5;

/// Column the catalog's horizontal spawn offset is added to
pub const SPAWN_COLUMN: i32 = (BOARD_WIDTH / 2) as i32;

/// Fixed (column, row) where the next piece is shown, right of the board
pub const NEXT_PIECE_POSITION: (i32, i32) = (BOARD_WIDTH as i32 + 5, 5);

/// Frame interval of the terminal runner in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default interval between automatic one-row drops
pub const DEFAULT_GRAVITY_MS: u32 = 700;

/// Gravity intervals below this are clamped up
pub const MIN_GRAVITY_MS: u32 = 50;


/// The seven tetromino piece kinds
///
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position of this kind in [`PieceKind::ALL`] (0..7)
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Rotation states, indexed 0-3
///
/// - **North**: index 0
/// - **East**: index 1, rotated 90° clockwise
/// - **South**: index 2
/// - **West**: index 3
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Every rotation, in index order
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotation index (0..4)
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetra_grid_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90° or 270°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetra_grid_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Kind of a single block inside a 5x5 piece mask
///
/// The pivot marks the rotation center. It only matters for rendering;
/// collision treats it exactly like a body block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Empty,
    Body,
    Pivot,
}

impl BlockKind {
    /// Decode the catalog's numeric code (0 = empty, 1 = body, 2 = pivot)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(BlockKind::Empty),
            1 => Some(BlockKind::Body),
            2 => Some(BlockKind::Pivot),
            _ => None,
        }
    }

    /// True for body and pivot blocks
    pub fn is_occupied(&self) -> bool {
        !matches!(self, BlockKind::Empty)
    }
}

/// A cell on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Free,
    Filled,
}

impl CellState {
    pub fn is_free(&self) -> bool {
        matches!(self, CellState::Free)
    }
}

/// Game actions that can be applied to a session
///
/// These are produced by the input layer. Each action maps to one session
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down, locking it if that is not possible
    SoftDrop,
    /// Drop piece to the lowest legal row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Start a fresh session (the only action accepted after game over)
    Restart,
}

/// Lifecycle of the active piece within a session
///
/// `Locked` is transient: it is entered while the piece is committed and
/// left, within the same call, for `Spawned` or `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    Spawned,
    Falling,
    Locked,
    GameOver,
}

/// Core-side event emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Number of full rows removed by this lock
    pub lines_cleared: u32,
    /// Whether this lock ended the session
    pub game_over: bool,
}
