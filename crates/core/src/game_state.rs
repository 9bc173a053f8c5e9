//! Game state module - board, active piece and piece source
//!
//! Every mutation of the active piece is tentative: the candidate is checked
//! against the board and only committed when it does not collide. A failed
//! downward step locks the piece, clears full rows and spawns the next one.

use log::{debug, info, trace};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::{PieceSource, RandomPieces};
use crate::types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_MS};

/// What happens when a freshly spawned piece already collides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackOut {
    /// Place the piece anyway; it may overlap locked cells
    #[default]
    Continue,
    /// End the game
    End,
}

impl StackOut {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "continue" => Some(StackOut::Continue),
            "end" => Some(StackOut::End),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StackOut::Continue => "continue",
            StackOut::End => "end",
        }
    }
}

/// Rules that are fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub drop_interval_ms: u32,
    pub seed: u32,
    pub stack_out: StackOut,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            drop_interval_ms: DROP_INTERVAL_MS,
            seed: 1,
            stack_out: StackOut::Continue,
        }
    }
}

/// Result of a downward step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The piece moved one row down
    Moved,
    /// The piece could not move and was locked into the board
    Locked { rows_cleared: usize },
}

/// Complete game state
pub struct GameState {
    config: GameConfig,
    board: Board,
    piece: Piece,
    source: Box<dyn PieceSource>,
    pieces_locked: u32,
    rows_cleared: u32,
    over: bool,
}

impl GameState {
    /// New game with a uniform random piece source seeded from `config.seed`
    pub fn new(config: GameConfig) -> Self {
        Self::with_source(config, Box::new(RandomPieces::new(config.seed)))
    }

    /// New game drawing pieces from `source`; the first piece is spawned
    /// immediately.
    pub fn with_source(config: GameConfig, mut source: Box<dyn PieceSource>) -> Self {
        let kind = source.next_kind();
        info!(
            "new game {}x{} drop={}ms stack_out={}",
            config.width,
            config.height,
            config.drop_interval_ms,
            config.stack_out.as_str()
        );

        Self {
            config,
            board: Board::new(config.width, config.height),
            piece: Piece::spawn(kind, config.width),
            source,
            pieces_locked: 0,
            rows_cleared: 0,
            over: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access, for setting up positions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Replace the active piece without any collision check
    pub fn set_piece(&mut self, piece: Piece) {
        self.piece = piece;
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// True once a spawn collided under [`StackOut::End`]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Whether the active piece overlaps a wall, the floor or a locked cell
    pub fn collides(&self) -> bool {
        self.board
            .collides(&self.piece.shape, self.piece.x, self.piece.y)
    }

    /// Shift the piece by `dx` columns, reverting on collision
    pub fn move_horizontal(&mut self, dx: i32) -> bool {
        if self.over {
            return false;
        }

        self.piece.x += dx;
        if self.collides() {
            self.piece.x -= dx;
            trace!("move {:+} blocked at x={}", dx, self.piece.x);
            return false;
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.move_horizontal(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_horizontal(1)
    }

    /// Gravity and soft drop: one row down, locking when blocked
    pub fn step_down(&mut self) -> StepResult {
        if self.over {
            return StepResult::Locked { rows_cleared: 0 };
        }

        self.piece.y += 1;
        if !self.collides() {
            return StepResult::Moved;
        }

        self.piece.y -= 1;
        let rows_cleared = self.lock_piece();
        self.spawn_piece();
        StepResult::Locked { rows_cleared }
    }

    /// Quarter turn clockwise; the old shape is kept when the turn collides
    pub fn rotate(&mut self) -> bool {
        if self.over {
            return false;
        }

        let rotated = self.piece.shape.rotated_cw();
        let original = std::mem::replace(&mut self.piece.shape, rotated);
        if self.collides() {
            self.piece.shape = original;
            trace!("rotation of {:?} blocked", self.piece.kind);
            return false;
        }
        true
    }

    /// Write the active piece into the board and clear full rows.
    /// Returns the number of rows cleared.
    pub fn lock_piece(&mut self) -> usize {
        let written = self
            .board
            .lock(&self.piece.shape, self.piece.x, self.piece.y);
        let cleared = self.board.clear_full_rows();

        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        self.rows_cleared = self.rows_cleared.wrapping_add(cleared as u32);
        debug!(
            "locked {:?} at ({}, {}) cells={} cleared={}",
            self.piece.kind, self.piece.x, self.piece.y, written, cleared
        );
        cleared
    }

    /// Replace the active piece with a fresh random one at the spawn position
    pub fn spawn_piece(&mut self) -> PieceKind {
        let kind = self.source.next_kind();
        self.piece = Piece::spawn(kind, self.config.width);

        if self.collides() {
            match self.config.stack_out {
                StackOut::Continue => debug!("spawned {:?} overlapping the stack", kind),
                StackOut::End => {
                    self.over = true;
                    info!(
                        "game over after {} pieces, {} rows",
                        self.pieces_locked, self.rows_cleared
                    );
                }
            }
        } else {
            debug!("spawned {:?}", kind);
        }
        kind
    }

    /// Apply a player command. Returns whether the state changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDrop => !self.over && {
                self.step_down();
                true
            },
            Command::Rotate => self.rotate(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("config", &self.config)
            .field("piece", &self.piece)
            .field("pieces_locked", &self.pieces_locked)
            .field("rows_cleared", &self.rows_cleared)
            .field("over", &self.over)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EMPTY;

    /// Always hands out the same kind
    struct Repeat(PieceKind);

    impl PieceSource for Repeat {
        fn next_kind(&mut self) -> PieceKind {
            self.0
        }
    }

    fn game_with(kind: PieceKind) -> GameState {
        GameState::with_source(GameConfig::default(), Box::new(Repeat(kind)))
    }

    #[test]
    fn test_new_game_spawns_first_piece() {
        let state = game_with(PieceKind::T);
        assert_eq!(state.piece().kind, PieceKind::T);
        assert_eq!((state.piece().x, state.piece().y), (4, 0));
        assert!(!state.collides());
        assert!(!state.is_over());
    }

    #[test]
    fn test_move_blocked_by_wall_is_reverted() {
        let mut state = game_with(PieceKind::O);
        while state.move_left() {}
        assert_eq!(state.piece().x, 0);
        assert!(!state.move_left());
        assert_eq!(state.piece().x, 0);
    }

    #[test]
    fn test_step_down_locks_on_floor() {
        let mut state = game_with(PieceKind::O);
        let mut steps = 0;
        while state.step_down() == StepResult::Moved {
            steps += 1;
        }
        assert_eq!(steps, 18);
        assert_eq!(state.pieces_locked(), 1);
        assert!(state.board().is_occupied(4, 19));
        assert!(state.board().is_occupied(5, 18));
        assert_eq!((state.piece().x, state.piece().y), (4, 0));
    }

    #[test]
    fn test_rotate_against_floor_is_discarded() {
        let mut state = game_with(PieceKind::I);
        state.set_piece(Piece {
            y: 19,
            ..Piece::spawn(PieceKind::I, 10)
        });

        let before = state.piece().shape.clone();
        assert!(!state.rotate());
        assert_eq!(state.piece().shape, before);
    }

    #[test]
    fn test_lock_clears_completed_row() {
        let mut state = game_with(PieceKind::I);
        for x in 0..6 {
            state.board_mut().set(x, 19, 7);
        }
        state.set_piece(Piece {
            x: 6,
            y: 19,
            ..Piece::spawn(PieceKind::I, 10)
        });

        assert_eq!(state.step_down(), StepResult::Locked { rows_cleared: 1 });
        assert!(state.board().row(19).iter().all(|&c| c == EMPTY));
        assert_eq!(state.rows_cleared(), 1);
    }

    #[test]
    fn test_stack_out_continue_overlaps() {
        let mut state = game_with(PieceKind::O);
        state.board_mut().set(4, 0, 3);
        state.spawn_piece();
        assert!(state.collides());
        assert!(!state.is_over());
        assert!(state.move_right());
    }

    #[test]
    fn test_stack_out_end_stops_game() {
        let config = GameConfig {
            stack_out: StackOut::End,
            ..GameConfig::default()
        };
        let mut state = GameState::with_source(config, Box::new(Repeat(PieceKind::O)));
        state.board_mut().set(5, 1, 3);
        state.spawn_piece();

        assert!(state.is_over());
        assert!(!state.apply(Command::MoveLeft));
        assert!(!state.apply(Command::SoftDrop));
        assert!(!state.apply(Command::Rotate));
    }

    #[test]
    fn test_stack_out_names() {
        assert_eq!(StackOut::from_str("END"), Some(StackOut::End));
        assert_eq!(StackOut::from_str("continue"), Some(StackOut::Continue));
        assert_eq!(StackOut::from_str("halt"), None);
    }
}
