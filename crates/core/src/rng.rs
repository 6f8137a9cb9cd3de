//! Random sources for piece selection
//!
//! The engine never reaches for process-wide randomness: every game owns a
//! [`RandomSource`] that is handed in at construction. [`SimpleRng`] is the
//! default seeded generator; [`SequenceRng`] replays a fixed script so tests
//! can decide exactly which pieces appear.

/// Injectable source of random numbers.
pub trait RandomSource {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, bound)`.
    ///
    /// Uses the high bits through a multiply-shift, which is what a
    /// low-quality LCG gets right.
    fn next_below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0);
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }
}

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

    /// Current internal state (seeding a new generator with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a scripted sequence of values, cycling when exhausted.
///
/// `next_below` returns `value % bound`, so a script of kind indices
/// (`0` = I, `1` = O, ... in [`PieceKind::ALL`](crate::types::PieceKind::ALL)
/// order) selects pieces directly.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    pos: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "SequenceRng needs at least one value");
        Self { values, pos: 0 }
    }

    /// Script that yields the given kinds in order.
    pub fn kinds(kinds: &[crate::types::PieceKind]) -> Self {
        let values: Vec<u32> = kinds
            .iter()
            .map(|k| {
                crate::types::PieceKind::ALL
                    .iter()
                    .position(|a| a == k)
                    .unwrap_or(0) as u32
            })
            .collect();
        Self::new(values)
    }
}

impl RandomSource for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let v = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        v
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}
