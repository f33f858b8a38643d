//! Game state - the active piece, the drop controller, and the per-frame
//! orchestrator.
//!
//! One [`GameState`] value owns the field, the falling piece, and the fall
//! speed for the whole game; the host loop threads it through every frame.
//! Per-frame order is part of the observable contract: full rows clear
//! first, then this frame's input applies, then gravity advances and
//! resolves at most one lock.

use arrayvec::ArrayVec;

use gridfall_types::{
    GameAction, PieceKind, BASE_FALL_SPEED, FIELD_WIDTH, SOFT_DROP_FALL_SPEED, SPAWN_X, SPAWN_Y,
};

use crate::field::{Field, FIELD_ROWS};
use crate::pieces::{matrix, PieceMatrix};
use crate::rng::{PiecePicker, UniformPicker};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};

/// The currently falling piece.
///
/// Owns its (post-rotation) shape matrix. `x` is the column of the bounding
/// box's left edge; `y` is the fractional row of its bottom edge,
/// accumulating continuously and floored for board queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePiece {
    pub matrix: PieceMatrix,
    pub x: i32,
    pub y: f64,
}

impl ActivePiece {
    /// Create a fresh piece of `kind` at the spawn position.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            matrix: matrix(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Bounding box edge length, in field columns.
    pub fn size(&self) -> i32 {
        self.matrix.size() as i32
    }

    /// Board row of the bounding box's bottom edge.
    pub fn row(&self) -> i32 {
        self.y.floor() as i32
    }

    /// Replace the matrix with its 90-degree rotation.
    ///
    /// Unconditional: no bounds or collision validation (matching the
    /// original game).
    pub fn rotate(&mut self) {
        self.matrix = self.matrix.rotated();
    }

    /// Absolute field cells covered by the filled matrix cells, at the
    /// current floored row.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (x, row) = (self.x, self.row());
        self.matrix
            .filled_cells()
            .map(move |(m, n)| (x + n as i32, row + m as i32))
    }

    /// Check whether descent is blocked: some filled cell rests on the
    /// floor or directly above a locked cell.
    pub fn is_blocked_below(&self, field: &Field) -> bool {
        self.occupied_cells()
            .any(|(cx, cy)| cy - 1 < 0 || field.is_occupied(cx, cy - 1))
    }
}

/// What a single frame did, for observers and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Row indices at which this frame's clear pass fired (bottom to top).
    pub cleared: ArrayVec<usize, FIELD_ROWS>,
    /// Whether the active piece locked (and a fresh one spawned).
    pub locked: bool,
}

/// Complete game state.
///
/// Generic over the piece-selection capability; production code uses the
/// default seeded [`UniformPicker`], tests inject a scripted picker.
#[derive(Debug, Clone)]
pub struct GameState<P: PiecePicker = UniformPicker> {
    field: Field,
    active: ActivePiece,
    fall_speed: f64,
    picker: P,
}

impl GameState<UniformPicker> {
    /// Create a game with the default uniform picker and the given seed.
    pub fn new(seed: u32) -> Self {
        Self::with_picker(UniformPicker::new(seed))
    }
}

impl<P: PiecePicker> GameState<P> {
    /// Create a game drawing pieces from `picker`. The first piece is drawn
    /// immediately.
    pub fn with_picker(mut picker: P) -> Self {
        let active = ActivePiece::spawn(picker.pick());
        Self {
            field: Field::new(),
            active,
            fall_speed: BASE_FALL_SPEED,
            picker,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn fall_speed(&self) -> f64 {
        self.fall_speed
    }

    #[cfg(test)]
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    /// Advance one frame.
    ///
    /// Sequencing: clear full rows, apply `actions` in arrival order, then
    /// advance gravity by `dt` seconds (resolving at most one lock). A row
    /// cleared this frame is therefore reflected before this frame's piece
    /// movement.
    pub fn frame(&mut self, actions: &[GameAction], dt: f64) -> FrameOutcome {
        let cleared = self.field.clear_full_rows();
        for &action in actions {
            self.apply_action(action);
        }
        let locked = self.advance_gravity(dt);
        FrameOutcome { cleared, locked }
    }

    /// Apply a single input action.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => {
                self.try_shift(-1);
            }
            GameAction::MoveRight => {
                self.try_shift(1);
            }
            GameAction::SoftDrop => self.fall_speed = SOFT_DROP_FALL_SPEED,
            GameAction::RotateCw => self.active.rotate(),
        }
    }

    /// Try to move the active piece one column sideways.
    ///
    /// Rejected outright (no shift) if the bounding box would leave the
    /// field. Locked cells are not consulted (matching the original game).
    pub(crate) fn try_shift(&mut self, dx: i32) -> bool {
        let x = self.active.x + dx;
        if x < 0 || x + self.active.size() > FIELD_WIDTH {
            return false;
        }
        self.active.x = x;
        true
    }

    /// Advance gravity by `dt` seconds. Returns true if the piece locked.
    ///
    /// The descent probe runs against the current position before any
    /// movement commits, so a blocked frame never moves the piece: once
    /// blocked, the only transition is a lock.
    pub fn advance_gravity(&mut self, dt: f64) -> bool {
        if self.active.is_blocked_below(&self.field) {
            self.lock_active();
            return true;
        }
        self.active.y -= self.fall_speed * dt;
        false
    }

    /// Stamp the active piece into the field at its current floored row,
    /// reset the fall speed, and spawn the next piece in the same frame.
    fn lock_active(&mut self) {
        self.field.stamp_cells(self.active.occupied_cells());
        self.fall_speed = BASE_FALL_SPEED;
        self.active = ActivePiece::spawn(self.picker.pick());
    }

    /// Write a render snapshot into `out` without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.field.write_grid(&mut out.grid);
        out.active = ActiveSnapshot::from(&self.active);
        out.fall_speed = self.fall_speed;
    }

    /// Produce a fresh render snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
