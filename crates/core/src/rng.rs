//! RNG module - piece generation
//!
//! [`PieceFactory`] hands out pieces with a uniformly chosen shape and a strictly
//! increasing id. The id counter lives in the factory itself, so every session
//! owns its own sequence and tests can run side by side.
//!
//! Also provides a simple LCG for deterministic testing.

use crate::types::{Piece, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Low bits of an LCG cycle with a short period, so the high half is used.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    /// Current internal state (usable as a seed to replay the sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Generator of new pieces
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: SimpleRng,
    /// Id handed to the next generated piece. 64 bits wide so it never wraps.
    next_id: u64,
}

impl PieceFactory {
    /// Create a factory with the given seed; ids start at 0.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 0,
        }
    }

    /// Generate a new piece.
    ///
    /// Advances the id counter by exactly one per call.
    pub fn generate(&mut self) -> Piece {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        let piece = Piece::new(PieceKind::ALL[idx], self.next_id);
        self.next_id += 1;
        piece
    }

    /// Id the next call to [`generate`](Self::generate) will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new(1)
    }
}
