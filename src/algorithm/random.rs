//! Seed derivation and the seeded random source
//!
//! Seeds are arbitrary strings. Identical strings always hash to the same RNG
//! seed, so a run is fully reproducible from its seed text and parameters.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::RANDOM_SEED_SENTINEL;

/// 32-bit rolling string hash (`hash * 31 + unit` over UTF-16 code units)
pub fn hash_seed(seed: &str) -> i32 {
    seed.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Replace an empty or placeholder seed with one derived from the clock
pub fn resolve_seed(seed: &str) -> String {
    if seed.is_empty() || seed == RANDOM_SEED_SENTINEL {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default()
            .to_string()
    } else {
        seed.to_string()
    }
}

/// Seeded random source for reproducible stochastic choices
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a deterministic source from a numeric seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a deterministic source from seed text
    ///
    /// The text is hashed as-is; resolve placeholder seeds with
    /// [`resolve_seed`] first.
    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(u64::from(hash_seed(seed) as u32))
    }

    /// Uniform value in `[0, 1)`
    pub fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform value in `[low, high)`; returns `low` for an empty range
    pub fn range(&mut self, low: f64, high: f64) -> f64 {
        self.unit().mul_add(high - low, low)
    }

    /// Fair coin flip
    pub fn coin(&mut self) -> bool {
        self.unit() < 0.5
    }

    /// Uniform index in `[0, count)`; zero when `count` is zero
    pub fn index(&mut self, count: usize) -> usize {
        let draw = (self.unit() * count as f64).floor() as usize;
        draw.min(count.saturating_sub(1))
    }
}
