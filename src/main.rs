//! Terminal runner (default binary).
//!
//! Paints the game onto a pixel canvas every frame, composites it onto the
//! terminal and waits for key events until the next frame is due. The loop
//! ends on `q`/`Esc`/`Ctrl-C`, or when the game ends under the `end`
//! stack-out policy; the final board then stays up until a key is pressed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::{error, info};

use blockfall::config::AppConfig;
use blockfall::core::{GameLoop, GameState};
use blockfall::input::{handle_key_event, is_key_down, should_quit};
use blockfall::logging;
use blockfall::term::{
    compose_into, FrameBuffer, GameView, PixelCanvas, TerminalRenderer, Viewport,
};
use blockfall::types::FRAME_MS;

const HINT: &str = "←/→ move  ↓ drop  ↑ rotate  q quit";
const GAME_OVER_HINT: &str = "game over  press any key";

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(&config)?;
    info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    report("restore terminal", &term.exit());
    report("run", &result);
    result
}

/// Log a failed step. Returns whether it succeeded.
fn report(step: &str, result: &Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            error!("{} failed: {:#}", step, e);
            false
        }
    }
}

fn hint_for(game: &GameLoop) -> &'static str {
    if game.state().is_over() {
        GAME_OVER_HINT
    } else {
        HINT
    }
}

fn present(
    term: &mut TerminalRenderer,
    game: &GameLoop,
    view: &GameView,
    canvas: &mut PixelCanvas,
    fb: &mut FrameBuffer,
) -> Result<()> {
    view.draw(game.state(), canvas);
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    compose_into(canvas, Viewport::new(w, h), Some(hint_for(game)), fb);
    term.present(fb)
}

/// Keep the last frame up until any key goes down.
fn hold_final_frame(
    term: &mut TerminalRenderer,
    game: &GameLoop,
    view: &GameView,
    canvas: &mut PixelCanvas,
    fb: &mut FrameBuffer,
) -> Result<()> {
    present(term, game, view, canvas, fb)?;
    loop {
        match event::read()? {
            Event::Key(key) if is_key_down(key.kind) => return Ok(()),
            Event::Resize(..) => {
                term.invalidate();
                present(term, game, view, canvas, fb)?;
            }
            _ => {}
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut game = GameLoop::new(GameState::new(config.game));
    let view = GameView::new(config.block_size);
    let mut canvas = view.canvas_for(game.state().board());
    let mut fb = FrameBuffer::new(0, 0);

    let frame_len = Duration::from_millis(FRAME_MS as u64);
    let started = Instant::now();
    let mut next_frame = started;

    while game.is_running() {
        // Update, then draw.
        game.frame(started.elapsed().as_millis() as u64);
        present(term, &game, &view, &mut canvas, &mut fb)?;
        if !game.is_running() {
            break;
        }

        // Input until the next frame is due.
        next_frame += frame_len;
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if is_key_down(key.kind) => {
                    if should_quit(key) {
                        game.stop();
                        break;
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.handle(command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Don't try to catch up after a stall.
        let now = Instant::now();
        if next_frame < now {
            next_frame = now;
        }
    }

    let state = game.state();
    info!(
        "session over: {} frames, {} pieces locked, {} rows cleared",
        game.frames(),
        state.pieces_locked(),
        state.rows_cleared()
    );

    if state.is_over() {
        hold_final_frame(term, &game, &view, &mut canvas, &mut fb)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use blockfall::core::{GameConfig, PieceSource, StackOut};
    use blockfall::term::Palette;
    use blockfall::types::PieceKind;

    struct Always(PieceKind);

    impl PieceSource for Always {
        fn next_kind(&mut self) -> PieceKind {
            self.0
        }
    }

    fn stacked_out() -> GameLoop {
        let config = GameConfig {
            stack_out: StackOut::End,
            ..GameConfig::default()
        };
        let mut state = GameState::with_source(config, Box::new(Always(PieceKind::O)));
        state.board_mut().set(4, 2, 1);

        let mut game = GameLoop::new(state);
        game.advance(1_001);
        game
    }

    #[test]
    fn test_hint_switches_on_game_over() {
        let running = GameLoop::new(GameState::new(GameConfig::default()));
        assert_eq!(hint_for(&running), HINT);

        let over = stacked_out();
        assert!(!over.is_running());
        assert_eq!(hint_for(&over), GAME_OVER_HINT);
    }

    #[test]
    fn test_final_frame_shows_the_stack() {
        let game = stacked_out();
        let view = GameView::new(1);
        let mut canvas = view.canvas_for(game.state().board());
        view.draw(game.state(), &mut canvas);

        // The new O covers the locked one; the marker below stays visible.
        let palette = Palette::default();
        assert_eq!(canvas.count(palette.active), 4);
        assert_eq!(canvas.count(palette.locked), 1);
        assert_eq!(canvas.get(4, 2), Some(palette.locked));

        let mut fb = FrameBuffer::new(0, 0);
        let placed = compose_into(&canvas, Viewport::new(40, 24), Some(hint_for(&game)), &mut fb);
        assert!(fb.row_text(placed.y + placed.height).contains(GAME_OVER_HINT));
    }

    #[test]
    fn test_report_flags_failures() {
        assert!(report("restore terminal", &Ok(())));
        assert!(!report("restore terminal", &Err(anyhow!("tty gone"))));
    }
}
