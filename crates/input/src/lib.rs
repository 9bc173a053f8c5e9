//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]. Only the four
//! arrow keys drive the game; `q`, `Esc` and `Ctrl-C` ask the host loop to
//! stop.

pub mod map;

pub use blockfall_types as types;

pub use map::{command_for, handle_key_event, is_key_down, should_quit};
