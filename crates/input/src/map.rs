//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map an arrow key to its command. Every other key is ignored.
pub fn command_for(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Up => Some(Command::Rotate),
        _ => None,
    }
}

/// Press and auto-repeat both count as key-down; releases do nothing.
pub fn is_key_down(kind: KeyEventKind) -> bool {
    matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

/// Command for a key-down event, `None` for releases and unmapped keys.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if !is_key_down(key.kind) {
        return None;
    }
    command_for(key.code)
}

/// Check if key should stop the game loop.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
