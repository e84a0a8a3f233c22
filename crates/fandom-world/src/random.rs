//! Injectable randomness for broadcast triggers.
//!
//! Environments never reach for a global RNG. They draw from a
//! [`RandomSource`], which production code backs with a `rand` generator and
//! tests back with [`FixedSource`] to force or suppress a broadcast.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the two random decisions a scripted broadcast needs.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn draw(&mut self) -> f64;

    /// Uniform index in `0..len`, or `None` when `len` is zero.
    fn pick_index(&mut self, len: usize) -> Option<usize>;
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub const fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<StdRng> {
    /// Deterministic source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    pub fn from_os() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn draw(&mut self) -> f64 {
        self.0.random::<f64>()
    }

    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.0.random_range(0..len))
    }
}

/// Source that always returns the same draw and index.
///
/// The index wraps modulo the pool length. Counts how often it was asked to
/// draw, so callers can check that the source was left alone.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedSource {
    draw: f64,
    index: usize,
    draws_taken: u64,
}

impl FixedSource {
    /// Source returning `draw` and `index` forever.
    pub const fn new(draw: f64, index: usize) -> Self {
        Self {
            draw,
            index,
            draws_taken: 0,
        }
    }

    /// Source whose draw is always below any positive probability.
    pub const fn always(index: usize) -> Self {
        Self::new(0.0, index)
    }

    /// Source whose draw never passes a probability below one.
    pub const fn never() -> Self {
        Self::new(0.999_999, 0)
    }

    /// Change the draw returned from now on.
    pub const fn set_draw(&mut self, draw: f64) {
        self.draw = draw;
    }

    /// Change the index returned from now on.
    pub const fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// How many draws have been taken.
    pub const fn draws_taken(&self) -> u64 {
        self.draws_taken
    }
}

impl RandomSource for FixedSource {
    fn draw(&mut self) -> f64 {
        self.draws_taken = self.draws_taken.saturating_add(1);
        self.draw
    }

    fn pick_index(&mut self, len: usize) -> Option<usize> {
        self.index.checked_rem(len)
    }
}
