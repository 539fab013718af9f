//! Random number source for the impure actions and offer sampling.
//!
//! Everything random in the crate is generic over [`rand::Rng`], so tests
//! can inject a fixed source such as `rand::rngs::mock::StepRng`.
//! [`GameRng`] is the production source: ChaCha8, seeded or from the OS.
//!
//! ```
//! use emoji_math::core::GameRng;
//! use rand::Rng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_range(2..=6), b.gen_range(2..=6));
//! ```

use rand::{Error, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8-backed RNG used in production.
///
/// Implements [`RngCore`], so the whole `rand::Rng` and
/// `rand::seq::SliceRandom` surface is available on it.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: Option<u64>,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// Seeded when `seed` is given, OS entropy otherwise.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this RNG was built from, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.inner.try_fill_bytes(dest)
    }
}
