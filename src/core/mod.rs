//! Core building blocks: seeded RNG, configuration, errors.
//!
//! Nothing here knows about cards; the `deck` module builds on these.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DeckConfig, DiscardPolicy};
pub use error::{DeckError, Result};
pub use rng::{DeckRng, ShuffleSeed};
