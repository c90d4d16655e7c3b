//! # card-deck
//!
//! A generic card deck engine: shuffle, deal, and discard for any card game.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: Games bring their own card and player types by
//!    implementing `Card` and `Recipient`. The deck never looks inside them.
//!
//! 2. **Deterministic When Asked**: Shuffles take a seed. A fixed seed always
//!    produces the same order; `-1` reads the clock for real play.
//!
//! 3. **Conservation**: Cards are only ever moved, never copied or dropped,
//!    between the undealt pile, recipients, and the discard pile.
//!
//! ## Modules
//!
//! - `core`: Seeded RNG, configuration, errors
//! - `cards`: `Card` / `Recipient` contracts, `Hand`, label rendering
//! - `deck`: The `Deck` engine and its dealt-card ledger

pub mod core;
pub mod cards;
pub mod deck;

// Re-export commonly used types
pub use crate::core::{DeckConfig, DeckError, DeckRng, DiscardPolicy, Result, ShuffleSeed};

pub use crate::cards::{render_many, Card, Hand, Recipient};

pub use crate::deck::{DealtLedger, Deck};
