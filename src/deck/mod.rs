//! The stateful deck engine.
//!
//! ## Key Types
//!
//! - `Deck`: undealt and discard piles with shuffle, deal, and discard
//! - `DealtLedger`: which cards are currently held outside the deck

pub mod engine;
pub mod ledger;

pub use engine::Deck;
pub use ledger::DealtLedger;
