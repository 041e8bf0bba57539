//! Random source for wall openings
//!
//! The simulation never touches a global RNG. It asks a [`GapSource`] for each
//! new wall's opening, so runs can be replayed from a seed and tests can script
//! exact layouts.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Supplies the vertical offset of each new wall's opening
pub trait GapSource {
    /// A value uniformly drawn from `0..span`. `span` is always positive.
    fn next_offset(&mut self, span: i32) -> i32;
}

impl GapSource for Pcg32 {
    fn next_offset(&mut self, span: i32) -> i32 {
        self.random_range(0..span)
    }
}

impl<G: GapSource + ?Sized> GapSource for &mut G {
    fn next_offset(&mut self, span: i32) -> i32 {
        (**self).next_offset(span)
    }
}

/// Seeded generator used by the game
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Seed derived from the wall clock
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
