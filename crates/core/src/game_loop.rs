//! Game loop module - frame-driven gravity and the stop condition
//!
//! The host calls [`GameLoop::frame`] once per rendered frame with a
//! monotonic timestamp. Elapsed time accumulates in a drop counter; once the
//! counter exceeds the drop interval the active piece takes one gravity step
//! and the counter resets. Soft drop shares the same counter.
//!
//! The loop keeps running until the host calls [`GameLoop::stop`] or the game
//! ends under [`StackOut::End`](crate::game_state::StackOut::End).

use log::info;

use crate::game_state::{GameState, StepResult};
use crate::types::Command;

/// What a single frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Time credited to this frame
    pub elapsed_ms: u32,
    /// Gravity step taken this frame, if any
    pub gravity: Option<StepResult>,
    /// Whether the loop wants another frame
    pub running: bool,
}

/// Owns the game state and drives it frame by frame
#[derive(Debug)]
pub struct GameLoop {
    state: GameState,
    drop_counter_ms: u32,
    last_time_ms: Option<u64>,
    frames: u64,
    running: bool,
}

impl GameLoop {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            drop_counter_ms: 0,
            last_time_ms: None,
            frames: 0,
            running: true,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Request the loop to end; later frames and commands are ignored
    pub fn stop(&mut self) {
        if self.running {
            info!("loop stopped after {} frames", self.frames);
        }
        self.running = false;
    }

    /// Advance to timestamp `now_ms`.
    ///
    /// The first frame credits no time. Timestamps that go backwards credit
    /// no time either.
    pub fn frame(&mut self, now_ms: u64) -> FrameOutcome {
        let elapsed = match self.last_time_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_time_ms = Some(now_ms);
        self.advance(u32::try_from(elapsed).unwrap_or(u32::MAX))
    }

    /// Advance by an explicit amount of elapsed time
    pub fn advance(&mut self, elapsed_ms: u32) -> FrameOutcome {
        if !self.running {
            return FrameOutcome {
                elapsed_ms: 0,
                gravity: None,
                running: false,
            };
        }

        self.frames += 1;
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);

        let mut gravity = None;
        if self.drop_counter_ms > self.state.config().drop_interval_ms {
            gravity = Some(self.state.step_down());
            self.drop_counter_ms = 0;
        }

        self.check_over();
        FrameOutcome {
            elapsed_ms,
            gravity,
            running: self.running,
        }
    }

    /// Apply a key command. Returns whether the state changed.
    pub fn handle(&mut self, command: Command) -> bool {
        if !self.running {
            return false;
        }

        let changed = self.state.apply(command);
        if command == Command::SoftDrop {
            self.drop_counter_ms = 0;
        }

        self.check_over();
        changed
    }

    fn check_over(&mut self) {
        if self.state.is_over() {
            self.stop();
        }
    }
}
