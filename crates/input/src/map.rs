//! Key bindings.
//!
//! | Keys                | Action      |
//! |---------------------|-------------|
//! | `←` `h` `a`         | move left   |
//! | `→` `l` `d`         | move right  |
//! | `↓` `j` `s`         | soft drop   |
//! | `↑` `k` `w`         | rotate cw   |
//! | `z` `y`             | rotate ccw  |
//! | space               | hard drop   |
//! | `r`                 | restart     |
//! | `q`, `Ctrl-C`       | quit        |
//!
//! Letters match in either case. Any key held with `Ctrl` is not a game
//! action; `Ctrl-C` is only a quit chord.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const CHAR_BINDINGS: [(char, GameAction); 12] = [
    ('h', GameAction::MoveLeft),
    ('a', GameAction::MoveLeft),
    ('l', GameAction::MoveRight),
    ('d', GameAction::MoveRight),
    ('j', GameAction::SoftDrop),
    ('s', GameAction::SoftDrop),
    ('k', GameAction::RotateCw),
    ('w', GameAction::RotateCw),
    ('z', GameAction::RotateCcw),
    ('y', GameAction::RotateCcw),
    ('r', GameAction::Restart),
    (' ', GameAction::HardDrop),
];

/// Action bound to a key press, if any.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::RotateCw),
        KeyCode::Char(c) => char_action(c),
        _ => None,
    }
}

fn char_action(c: char) -> Option<GameAction> {
    let c = c.to_ascii_lowercase();
    CHAR_BINDINGS
        .iter()
        .find(|(key, _)| *key == c)
        .map(|(_, action)| *action)
}

/// `q` or `Ctrl-C`.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            c.eq_ignore_ascii_case(&'c')
        }
        KeyCode::Char(c) => c.eq_ignore_ascii_case(&'q'),
        _ => false,
    }
}
