//! RNG module - seeded randomness and piece selection.
//!
//! The engine draws each piece uniformly and independently from the seven
//! kinds; there is no bag or history. Selection sits behind the
//! [`PiecePicker`] trait so tests can substitute an exact scripted sequence
//! for the seeded generator.

use gridfall_types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in `[0, max)`.
    pub fn next_below(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Capability for choosing the next piece kind.
///
/// The drop controller calls `pick` exactly once per spawn, so a scripted
/// implementation controls the full piece sequence of a game.
pub trait PiecePicker {
    fn pick(&mut self) -> PieceKind;
}

/// Production picker: uniform over the seven kinds, independent per draw.
#[derive(Debug, Clone)]
pub struct UniformPicker {
    rng: SimpleRng,
}

impl UniformPicker {
    /// Create a picker with the given seed.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PiecePicker for UniformPicker {
    fn pick(&mut self) -> PieceKind {
        let idx = self.rng.next_below(PieceKind::ALL.len() as u32);
        PieceKind::ALL[idx as usize]
    }
}

/// Test picker that replays a fixed sequence, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedPicker {
    script: Vec<PieceKind>,
    next: usize,
}

impl ScriptedPicker {
    /// Create a picker replaying `script` in order. The script must be
    /// non-empty.
    pub fn new(script: Vec<PieceKind>) -> Self {
        assert!(!script.is_empty(), "scripted picker needs at least one kind");
        Self { script, next: 0 }
    }
}

impl PiecePicker for ScriptedPicker {
    fn pick(&mut self) -> PieceKind {
        let kind = self.script[self.next];
        self.next = (self.next + 1) % self.script.len();
        kind
    }
}
