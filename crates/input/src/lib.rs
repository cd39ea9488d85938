//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Each key
//! press becomes at most one session request; there is no auto-repeat state.

pub mod map;

pub use tetra_grid_types as types;

pub use map::{handle_key_event, should_quit};
