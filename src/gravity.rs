//! Gravity timer for the terminal runner.
//!
//! Accumulates elapsed milliseconds and reports when the active piece is due
//! to fall one row. The session itself has no notion of time.

use crate::types::{GameAction, LockEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityTimer {
    interval_ms: u32,
    drop_timer_ms: u32,
}

impl GravityTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            drop_timer_ms: 0,
        }
    }

    /// Start a fresh interval.
    pub fn reset(&mut self) {
        self.drop_timer_ms = 0;
    }

    /// Advance by `elapsed_ms`; true when a fall is due.
    ///
    /// A due fall starts the next interval from zero.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.interval_ms {
            return false;
        }
        self.drop_timer_ms = 0;
        true
    }

    /// Update after a player action.
    ///
    /// A fresh piece gets a full interval: after a lock that spawned the next
    /// piece, and after a restart.
    pub fn on_action(&mut self, action: GameAction, event: Option<LockEvent>) {
        let spawned = matches!(event, Some(e) if !e.game_over);
        if spawned || action == GameAction::Restart {
            self.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fall_due_after_interval() {
        let mut g = GravityTimer::new(100);
        assert!(!g.tick(60));
        assert!(g.tick(40));
        // Next interval starts over.
        assert!(!g.tick(99));
        assert!(g.tick(1));
    }

    #[test]
    fn test_restart_gets_full_interval() {
        let mut g = GravityTimer::new(100);
        assert!(!g.tick(90));

        g.on_action(GameAction::Restart, None);
        assert!(!g.tick(16));
        assert!(!g.tick(83));
        assert!(g.tick(1));
    }

    #[test]
    fn test_lock_that_spawns_resets() {
        let mut g = GravityTimer::new(100);
        g.tick(90);
        g.on_action(
            GameAction::HardDrop,
            Some(LockEvent {
                lines_cleared: 0,
                game_over: false,
            }),
        );
        assert!(!g.tick(16));
    }

    #[test]
    fn test_plain_moves_keep_timer() {
        let mut g = GravityTimer::new(100);
        g.tick(90);
        g.on_action(GameAction::MoveLeft, None);
        g.on_action(
            GameAction::HardDrop,
            Some(LockEvent {
                lines_cleared: 0,
                game_over: true,
            }),
        );
        assert!(g.tick(10));
    }
}
