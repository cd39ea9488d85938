//! Tetra Grid (workspace facade crate).
//!
//! Gameplay rules live in `core`; `input` maps key events to actions and
//! `term` draws a session to the terminal. This crate re-exports them under
//! one name and owns the runtime configuration and gravity timing of the
//! binary.

pub mod config;
pub mod gravity;

pub use tetra_grid_core as core;
pub use tetra_grid_input as input;
pub use tetra_grid_term as term;
pub use tetra_grid_types as types;
