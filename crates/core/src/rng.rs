//! RNG module - seeded randomness for board generation
//!
//! Boards are built from a small LCG so that a seed fully determines the
//! layout (useful for tests, benchmarks and replaying a reported game).
//! Provides uniform shuffling (Fisher-Yates) and sampling without replacement.

use crate::types::PairKey;

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Pick `count` distinct keys uniformly from `1..=pool_size`.
    ///
    /// Partial Fisher-Yates: only the first `count` slots are settled.
    /// Returns fewer keys if the pool is smaller than `count`.
    pub fn sample_keys(&mut self, pool_size: PairKey, count: usize) -> Vec<PairKey> {
        let mut pool: Vec<PairKey> = (1..=pool_size).collect();
        let count = count.min(pool.len());
        for i in 0..count {
            let remaining = (pool.len() - i) as u32;
            let j = i + self.next_range(remaining) as usize;
            pool.swap(i, j);
        }
        pool.truncate(count);
        pool
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
