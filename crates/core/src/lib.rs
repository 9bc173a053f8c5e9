//! Core game logic - pure, deterministic, and testable
//!
//! All game rules live here with no dependency on terminal I/O, so the same
//! state machine can be driven by the terminal runner, tests or benches.
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with collision checks, locking and row clearing
//! - [`shape`]: small cell matrices and their clockwise rotation
//! - [`pieces`]: the seven-shape catalog
//! - [`piece`]: the active piece (shape plus position)
//! - [`rng`]: seeded uniform piece selection
//! - [`game_state`]: movement, rotation, gravity steps, lock and spawn
//! - [`game_loop`]: frame timing, gravity accumulator and stop condition
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameLoop, GameState};
//! use blockfall_types::Command;
//!
//! let mut game = GameLoop::new(GameState::new(GameConfig::default()));
//! game.handle(Command::MoveLeft);
//! game.handle(Command::Rotate);
//!
//! // 1001ms of frames trigger one gravity step.
//! let y = game.state().piece().y;
//! game.advance(1001);
//! assert_eq!(game.state().piece().y, y + 1);
//! ```

pub mod board;
pub mod game_loop;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod shape;

pub use blockfall_types as types;

pub use board::Board;
pub use game_loop::{FrameOutcome, GameLoop};
pub use game_state::{GameConfig, GameState, StackOut, StepResult};
pub use piece::Piece;
pub use pieces::spawn_shape;
pub use rng::{PieceSource, RandomPieces, SimpleRng};
pub use shape::Shape;
