use rand::distributions::Open01;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Environment variable consulted for the seed when none is given.
pub const SEED_ENV: &str = "POLYGRAPH_RNG_SEED";

/// Seedable source of uniform numbers in (0, 1).
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    seed: u64,
    rng: StdRng,
}

impl RandomNumberGenerator {
    /// A seed of 0 picks the seed from [SEED_ENV], or from the clock if that is unset.
    pub fn new(seed: u64) -> Self {
        let seed = if seed != 0 {
            seed
        } else {
            std::env::var(SEED_ENV)
                .ok()
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|s| *s != 0)
                .unwrap_or_else(clock_seed)
        };
        debug!(seed, "random number generator");
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Excludes both 0 and 1.
    pub fn uniform_positive(&mut self) -> f64 {
        self.rng.sample(Open01)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |d| d.as_secs().max(1))
}
