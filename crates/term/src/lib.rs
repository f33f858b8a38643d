//! Terminal rendering for gridfall.
//!
//! A small game-oriented rendering layer: the engine stays headless and
//! deterministic, and this crate turns its read-only snapshot into styled
//! terminal cells. Rendering goes through a plain framebuffer so the view
//! logic can be unit-tested without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
