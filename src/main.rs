//! Terminal gridfall runner (default binary).
//!
//! Wires the frame loop together: crossterm input, wall-clock `dt`, the
//! engine core, and the framebuffer renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};

use gridfall::core::{GameSnapshot, GameState};
use gridfall::input::{should_quit, InputHandler};
use gridfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Per-frame input poll budget (~60 FPS).
const FRAME_BUDGET: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(clock_seed());
    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snapshot = GameSnapshot::default();

    let mut last_frame = Instant::now();

    loop {
        // Input with timeout until the next frame.
        let timeout = FRAME_BUDGET
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if should_quit(key) {
                    return Ok(());
                }
                input.record(key);
            }
        }

        if last_frame.elapsed() < FRAME_BUDGET {
            continue;
        }
        let dt = last_frame.elapsed().as_secs_f64();
        last_frame = Instant::now();

        let actions = input.drain_frame();
        game.frame(&actions, dt);

        game.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;
    }
}

/// Seed the piece picker from wall time, like the original game.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
