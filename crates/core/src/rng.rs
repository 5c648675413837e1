//! RNG module - uniform random piece selection
//!
//! Every spawn is an independent uniform draw over the seven piece kinds.
//! There is no "bag" fairness mechanism, so repeats and droughts are
//! possible; that distribution is a documented property of the rules, not a
//! defect.
//!
//! Built on a simple seeded LCG so games are deterministic per seed, which
//! keeps the simulation replayable and testable.

use tetris_sim_types::{PieceKind, ALL_KINDS};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (for restarting with the same stream)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform random piece selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiecePicker {
    rng: SimpleRng,
}

impl PiecePicker {
    /// Create a new picker with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind: an independent uniform draw over all seven
    /// kinds. Consecutive repeats are possible.
    pub fn draw(&mut self) -> PieceKind {
        ALL_KINDS[self.rng.next_range(ALL_KINDS.len() as u32) as usize]
    }

    /// Current RNG state (for restarting a game with the same stream)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PiecePicker {
    fn default() -> Self {
        Self::new(1)
    }
}
