//! Engine core - pure, deterministic, and testable.
//!
//! This crate owns all the falling-block rules: the occupancy field, the
//! piece catalog and rotation, gravity timing, collision, locking, and
//! row-clear cascade. It has **zero dependencies** on UI or I/O, so the
//! whole game can run headless in tests.
//!
//! # Module structure
//!
//! - [`field`]: 10x18 occupancy grid with row-full detection and the
//!   cascade clear
//! - [`pieces`]: the seven canonical shape matrices and pure rotation
//! - [`rng`]: seeded LCG and the piece-selection capability
//! - [`game_state`]: the active piece, drop controller, and per-frame
//!   orchestrator
//! - [`snapshot`]: read-only state for the renderer
//!
//! # Example
//!
//! ```
//! use gridfall_core::GameState;
//! use gridfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! // One frame: 16ms elapsed, player pressed left.
//! let outcome = game.frame(&[GameAction::MoveLeft], 0.016);
//! assert!(!outcome.locked);
//!
//! let snapshot = game.snapshot();
//! assert!(!snapshot.is_occupied(0, 0));
//! ```
//!
//! # Frame contract
//!
//! Each [`GameState::frame`](game_state::GameState::frame) call runs, in
//! order: row-clear pass, input actions, gravity/lock resolution. The caller
//! supplies the elapsed seconds; gravity is continuous (cells per second),
//! not tick-quantized.

pub mod field;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use gridfall_types as types;

// Re-export commonly used types for convenience
pub use field::Field;
pub use game_state::{ActivePiece, FrameOutcome, GameState};
pub use pieces::{matrix, PieceMatrix};
pub use rng::{PiecePicker, ScriptedPicker, SimpleRng, UniformPicker};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
