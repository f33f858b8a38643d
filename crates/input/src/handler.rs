//! Per-frame input collection.
//!
//! The engine consumes edge-triggered "pressed this frame" events, so the
//! handler only records genuine key presses: terminal auto-repeat and
//! release events are ignored. Actions accumulate in a bounded buffer that
//! the frame loop drains exactly once per frame.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::GameAction;

/// Maximum actions buffered between frames. More presses than this within a
/// single frame are dropped.
const FRAME_ACTION_CAP: usize = 8;

/// Collects key presses between frames.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    pending: ArrayVec<GameAction, FRAME_ACTION_CAP>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event. Only `Press` events map to actions.
    pub fn record(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(action) = map_key(key.code) {
            // A full buffer drops the action rather than stalling the loop.
            let _ = self.pending.try_push(action);
        }
    }

    /// Take everything recorded since the last drain, in arrival order.
    pub fn drain_frame(&mut self) -> ArrayVec<GameAction, FRAME_ACTION_CAP> {
        std::mem::take(&mut self.pending)
    }
}
