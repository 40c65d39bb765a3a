//! Key mapping from terminal events to movement commands.

use crate::types::MovementCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key symbol to a movement command. Only lowercase `w`/`a`/`s`/`d`.
pub fn command_for_char(ch: char) -> Option<MovementCommand> {
    match ch {
        'w' => Some(MovementCommand::Up),
        's' => Some(MovementCommand::Down),
        'a' => Some(MovementCommand::Left),
        'd' => Some(MovementCommand::Right),
        _ => None,
    }
}

/// Map a keyboard event to a movement command.
///
/// Press and repeat events map; releases never do. Any modifier other than
/// shift disqualifies the key so `Ctrl-D` and friends stay free.
pub fn command_for_key(key: KeyEvent) -> Option<MovementCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if !(key.modifiers - KeyModifiers::SHIFT).is_empty() {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => command_for_char(ch),
        _ => None,
    }
}

/// Check if key should stop the session.
///
/// `q` is not a quit key: it must stay an ignored, command-free key.
pub fn should_quit(key: KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && (key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)))
}
