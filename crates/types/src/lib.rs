//! Shared types and constants for the gridfall engine.
//!
//! Pure data with no dependencies, usable from the engine core, the input
//! mapper, and the renderer alike.
//!
//! # Field coordinates
//!
//! The play field is 10 columns by 18 rows, indexed `(x, y)` with `x` running
//! left to right and `y` running **bottom to top** (row 0 is the floor).
//! Pieces spawn with their bounding box at column `FIELD_WIDTH / 2`, row
//! `FIELD_HEIGHT - 5`.
//!
//! # Timing constants
//!
//! Gravity is continuous, measured in cells per second:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FALL_SPEED` | 2.0 | Default descent rate |
//! | `SOFT_DROP_FALL_SPEED` | 20.0 | Descent rate while soft drop is engaged |

/// Field width in cells (10 columns).
pub const FIELD_WIDTH: i32 = 10;

/// Field height in cells (18 rows, bottom to top).
pub const FIELD_HEIGHT: i32 = 18;

/// Default fall speed in cells per second.
pub const BASE_FALL_SPEED: f64 = 2.0;

/// Fall speed while soft drop is engaged, in cells per second.
///
/// Soft drop stays engaged until the piece locks; locking resets the speed
/// to [`BASE_FALL_SPEED`].
pub const SOFT_DROP_FALL_SPEED: f64 = 20.0;

/// Spawn column for a fresh piece (left edge of its bounding box).
pub const SPAWN_X: i32 = FIELD_WIDTH / 2;

/// Spawn row for a fresh piece (bottom edge of its bounding box).
pub const SPAWN_Y: f64 = (FIELD_HEIGHT - 5) as f64;

/// The seven piece kinds.
///
/// `J`/`L` and `S`/`Z` are mirror pairs; `I` uses a 4x4 bounding box, `O` a
/// 2x2 box, and the rest 3x3 boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    I,
    J,
    L,
    S,
    Z,
    T,
}

impl PieceKind {
    /// All kinds, in catalog order. Uniform selection draws an index into
    /// this array.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];
}

/// Discrete per-frame input events consumed by the engine.
///
/// Each action is edge-triggered ("pressed this frame"). `SoftDrop` switches
/// the fall speed to [`SOFT_DROP_FALL_SPEED`] until the next lock; there is
/// no release event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the active piece one column left.
    MoveLeft,
    /// Move the active piece one column right.
    MoveRight,
    /// Boost the fall speed until the piece locks.
    SoftDrop,
    /// Rotate the active piece's matrix 90 degrees.
    RotateCw,
}
