//! Runtime configuration read from the environment.
//!
//! | Variable               | Meaning                                 | Default  |
//! |------------------------|-----------------------------------------|----------|
//! | `TETRA_GRID_SEED`      | fixed piece seed                        | entropy  |
//! | `TETRA_GRID_GRAVITY_MS`| automatic fall interval in milliseconds | 700      |
//! | `TETRA_GRID_LOG_PATH`  | file that receives log output           | disabled |
//!
//! Unparseable values fall back to the default.

use std::env;

use crate::types::{DEFAULT_GRAVITY_MS, MIN_GRAVITY_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Piece seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Interval between automatic one-row falls.
    pub gravity_ms: u32,
    /// Log file; logging is off when unset.
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            gravity_ms: DEFAULT_GRAVITY_MS,
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TETRA_GRID_SEED").and_then(|s| s.trim().parse().ok());

        let gravity_ms = lookup("TETRA_GRID_GRAVITY_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_GRAVITY_MS)
            .max(MIN_GRAVITY_MS);

        let log_path = lookup("TETRA_GRID_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            gravity_ms,
            log_path,
        }
    }
}
