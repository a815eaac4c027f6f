//! Deterministic generation RNG resource.
//!
//! Wraps `ChaCha8Rng` so that identical seeds produce identical layouts on
//! every platform. Every generator takes `&mut CityRng` instead of reaching
//! for `rand::thread_rng()`.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Derive a seed from the current system time.
pub fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}

/// RNG resource for all layout randomness.
///
/// Use `rng.0` directly (it implements `rand::Rng`). `seed` records the value
/// the stream was started from so a run can be reproduced.
#[derive(Resource)]
pub struct CityRng {
    pub seed: u64,
    pub rng: ChaCha8Rng,
}

impl Default for CityRng {
    /// Clock-seeded: every unseeded run produces a different city.
    fn default() -> Self {
        Self::from_seed_u64(clock_seed())
    }
}

impl CityRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Restart the stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::from_seed_u64(seed);
    }
}
