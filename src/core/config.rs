//! Deck configuration.
//!
//! Games configure a deck at construction time via `DeckConfig`:
//! - `DiscardPolicy`: whether returned cards are checked against what was dealt
//! - `ShuffleSeed`: the seed used by `Deck::reshuffle`
//!
//! ```
//! use card_deck::core::{DeckConfig, DiscardPolicy, ShuffleSeed};
//!
//! let config = DeckConfig::new().validating().with_seed(7_u64);
//! assert_eq!(config.discard_policy, DiscardPolicy::Validating);
//! assert_eq!(config.seed, ShuffleSeed::Fixed(7));
//! ```

use serde::{Deserialize, Serialize};

use super::rng::ShuffleSeed;

/// What the deck does with cards handed to `Deck::discard`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscardPolicy {
    /// Accept every card. Callers are trusted to only return cards they were dealt.
    #[default]
    Permissive,
    /// Reject cards that are not currently held outside the deck.
    Validating,
}

/// Configuration for a single deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Policy applied by `Deck::discard`.
    #[serde(default)]
    pub discard_policy: DiscardPolicy,

    /// Seed used by `Deck::reshuffle`.
    #[serde(default)]
    pub seed: ShuffleSeed,
}

impl DeckConfig {
    /// Permissive discards, clock-seeded reshuffles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject discards the deck cannot account for.
    #[must_use]
    pub fn validating(mut self) -> Self {
        self.discard_policy = DiscardPolicy::Validating;
        self
    }

    /// Set the seed used by `Deck::reshuffle`.
    #[must_use]
    pub fn with_seed(mut self, seed: impl Into<ShuffleSeed>) -> Self {
        self.seed = seed.into();
        self
    }
}
