//! Terminal "game renderer" module.
//!
//! Renders a session into a simple framebuffer and flushes it to the
//! terminal with `crossterm`. Nothing here mutates the session.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: board, walls, active piece, next piece and counters
//! - [`renderer`]: raw-mode terminal setup and diffed redraws

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetra_grid_core as core;
pub use tetra_grid_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
