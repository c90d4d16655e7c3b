//! Deterministic random number generation for shuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical permutation
//! - **Local**: Every shuffle builds its own generator, nothing is global
//! - **Clock fallback**: `ShuffleSeed::Clock` seeds from wall-clock time for real play
//!
//! ```
//! use card_deck::core::{DeckRng, ShuffleSeed};
//!
//! let mut a = DeckRng::from_seed(ShuffleSeed::Fixed(42));
//! let mut b = DeckRng::from_seed(ShuffleSeed::from(42_i64));
//!
//! assert_eq!(a.permutation(10), b.permutation(10));
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// How a shuffle is seeded.
///
/// Raw integer seeds follow the classic convention: `-1` means "use the clock",
/// anything else is a fixed seed suitable for reproducible tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShuffleSeed {
    /// Seed from the current wall-clock time (non-deterministic).
    #[default]
    Clock,
    /// Seed deterministically from the given value.
    Fixed(u64),
}

impl ShuffleSeed {
    /// Raw seed value that selects `ShuffleSeed::Clock`.
    pub const CLOCK_SENTINEL: i64 = -1;

    /// Resolve to a concrete 64-bit seed, reading the clock if needed.
    #[must_use]
    pub fn resolve(self) -> u64 {
        match self {
            Self::Fixed(seed) => seed,
            // A clock before the epoch is not worth failing a shuffle over.
            Self::Clock => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_nanos() as u64),
        }
    }

    /// Is this seed reproducible?
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

impl From<i64> for ShuffleSeed {
    fn from(raw: i64) -> Self {
        if raw == Self::CLOCK_SENTINEL {
            Self::Clock
        } else {
            Self::Fixed(raw as u64)
        }
    }
}

impl From<i32> for ShuffleSeed {
    fn from(raw: i32) -> Self {
        Self::from(i64::from(raw))
    }
}

impl From<u64> for ShuffleSeed {
    fn from(seed: u64) -> Self {
        Self::Fixed(seed)
    }
}

/// Seeded RNG used to permute a deck.
///
/// Uses ChaCha8 so that a given seed yields the same sequence on every
/// platform and every release of the crate.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given concrete seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a `ShuffleSeed`, reading the clock if required.
    #[must_use]
    pub fn from_seed(seed: ShuffleSeed) -> Self {
        Self::new(seed.resolve())
    }

    /// The concrete seed this generator was built from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a uniformly random permutation of `0..len`.
    ///
    /// Fisher-Yates over the identity permutation, so the result depends only
    /// on the seed and `len`.
    pub fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(&mut self.inner);
        indices
    }
}
