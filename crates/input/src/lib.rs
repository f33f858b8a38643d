//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] values and
//! collects them per frame. The engine treats every action as an
//! edge-triggered press, so no auto-repeat handling lives here.

pub mod handler;
pub mod map;

pub use gridfall_types as types;

pub use handler::InputHandler;
pub use map::{map_key, should_quit};
