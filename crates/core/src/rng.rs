//! RNG module - deterministic random cell selection
//!
//! A small LCG is enough for apple placement and keeps games reproducible from
//! a seed (useful for tests and the headless protocol).

use crate::types::{GridSize, Point};

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
    /// Uses the high bits of the LCG output (multiply-shift); the low bits of a
    /// power-of-two LCG have very short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0, "next_range called with empty range");
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniformly random cell on the grid.
    pub fn next_point(&mut self, grid: GridSize) -> Point {
        let x = self.next_range(grid.x as u32) as i32;
        let y = self.next_range(grid.y as u32) as i32;
        Point::new(x, y)
    }

    /// Current RNG state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
