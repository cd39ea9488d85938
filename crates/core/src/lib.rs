//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the gameplay rules of the falling-block game: the board
//! grid, the piece catalog, collision checks, line clearing, and the session
//! state machine that ties them together. It has **no dependencies** on the
//! terminal, input devices, or timing:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is a plain function call on owned state
//! - **Single-threaded**: one session owns its board; callers serialize access
//!
//! # Module Structure
//!
//! - [`pieces`]: 5x5 masks per piece kind and rotation, plus spawn offsets
//! - [`board`]: 10x20 occupancy grid with collision detection and line deletion
//! - [`session`]: active/next piece and the spawn → fall → lock cycle
//! - [`rng`]: uniform, independent piece and rotation draws
//!
//! # Coordinates
//!
//! The board is addressed `(col, row)` with row 0 at the top. Piece masks are
//! indexed `[row][col]`; a piece at `(col, row)` puts mask block `[j][i]` on
//! board cell `(col + i, row + j)`.
//!
//! # Example
//!
//! ```
//! use tetra_grid_core::{GameSession, MoveOutcome};
//! use tetra_grid_types::GameAction;
//!
//! let mut session = GameSession::new(12345);
//!
//! session.apply_action(GameAction::MoveLeft);
//! session.apply_action(GameAction::RotateCw);
//!
//! // Fall until the piece locks.
//! while session.move_down() == MoveOutcome::Moved {}
//!
//! assert_eq!(session.pieces_spawned(), 2);
//! assert!(session.board().filled_count() > 0);
//! ```

pub mod board;
pub mod pieces;
pub mod rng;
pub mod session;

pub use tetra_grid_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use pieces::{block_code, block_kind, initial_offset, occupied_cells};
pub use rng::PieceRandomizer;
pub use session::{GameSession, MoveOutcome, Piece};
