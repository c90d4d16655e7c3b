//! The deck: undealt pile, discard pile, and the operations between them.
//!
//! A card cycles `Undealt -> (deal) -> held -> (discard) -> Discarded -> (shuffle) -> Undealt`
//! for as long as the deck lives. The deck never creates or destroys cards;
//! only `remove` takes one out of circulation.
//!
//! ## Usage
//!
//! ```
//! use card_deck::cards::{Card, Hand, Recipient};
//! use card_deck::deck::Deck;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Face(char);
//!
//! impl Card for Face {
//!     fn label(&self) -> String {
//!         self.0.to_string()
//!     }
//! }
//!
//! let mut deck = Deck::new("ABCD".chars().map(Face));
//! let mut hands = vec![Hand::new("P1"), Hand::new("P2"), Hand::new("P3")];
//!
//! assert_eq!(deck.deal_all(&mut hands), 4);
//! assert_eq!(hands[0].render(), "A D");
//! assert!(deck.is_empty());
//!
//! deck.discard(hands[0].drain()).unwrap();
//! deck.shuffle(42);
//! assert_eq!(deck.len(), 2);
//! ```

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace, warn};

use super::ledger::DealtLedger;
use crate::cards::{render_many, Card, Recipient};
use crate::core::config::{DeckConfig, DiscardPolicy};
use crate::core::error::{DeckError, Result};
use crate::core::rng::{DeckRng, ShuffleSeed};

/// A shuffleable, dealable collection of cards.
///
/// The deck owns its piles outright; inspection methods hand out copies or
/// shared borrows, so callers can never rearrange the deck behind its back.
///
/// Mutating operations take `&mut self`. Sharing a deck across threads
/// needs an external lock around each call.
#[derive(Clone, Debug)]
pub struct Deck<C> {
    /// Cards available to deal. Front is dealt first.
    undealt: VecDeque<C>,

    /// Cards returned but not yet shuffled back in.
    discarded: Vec<C>,

    /// Cards dealt and not yet returned.
    ledger: DealtLedger<C>,

    config: DeckConfig,
}

impl<C: Card> Deck<C> {
    /// Create a deck holding `cards` in the given order, with default config.
    ///
    /// The deck is not shuffled; call `shuffle` before dealing for random order.
    pub fn new(cards: impl IntoIterator<Item = C>) -> Self {
        Self::with_config(cards, DeckConfig::default())
    }

    /// Create a deck with an explicit configuration.
    pub fn with_config(cards: impl IntoIterator<Item = C>, config: DeckConfig) -> Self {
        let undealt: VecDeque<C> = cards.into_iter().collect();
        debug!(
            cards = undealt.len(),
            policy = ?config.discard_policy,
            "deck created"
        );

        Self {
            discarded: Vec::with_capacity(undealt.len()),
            undealt,
            ledger: DealtLedger::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Copy of the undealt cards, in dealing order.
    #[must_use]
    pub fn cards(&self) -> Vec<C> {
        self.undealt.iter().cloned().collect()
    }

    /// Copy of the discard pile, in the order cards were returned.
    #[must_use]
    pub fn discards(&self) -> Vec<C> {
        self.discarded.clone()
    }

    /// Labels of the undealt cards, space separated. Empty deck renders `""`.
    #[must_use]
    pub fn render(&self) -> String {
        render_many(&self.undealt)
    }

    /// Number of undealt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.undealt.len()
    }

    /// No undealt cards left? (Discards may still be waiting for a shuffle.)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.undealt.is_empty()
    }

    #[must_use]
    pub fn discard_count(&self) -> usize {
        self.discarded.len()
    }

    /// Number of cards dealt and not yet returned.
    #[must_use]
    pub fn outstanding_count(&self) -> usize {
        self.ledger.len()
    }

    /// The next card `deal` would hand out.
    #[must_use]
    pub fn top(&self) -> Option<&C> {
        self.undealt.front()
    }

    /// Merge the discard pile into the undealt cards and put them in random order.
    ///
    /// A seed of `-1` (or `ShuffleSeed::Clock`) reads the clock; any other seed
    /// gives the same order every time for the same number of cards.
    /// Returns the concrete seed used, so a clock-seeded shuffle can be replayed.
    pub fn shuffle(&mut self, seed: impl Into<ShuffleSeed>) -> u64 {
        let mut rng = DeckRng::from_seed(seed.into());
        let merged = self.discarded.len();

        let mut working: Vec<Option<C>> = self
            .undealt
            .drain(..)
            .chain(self.discarded.drain(..))
            .map(Some)
            .collect();

        self.undealt = rng
            .permutation(working.len())
            .into_iter()
            .filter_map(|i| working[i].take())
            .collect();

        debug!(
            seed = rng.seed(),
            cards = self.undealt.len(),
            merged,
            "deck shuffled"
        );
        rng.seed()
    }

    /// Shuffle with the seed from this deck's config.
    pub fn reshuffle(&mut self) -> u64 {
        self.shuffle(self.config.seed)
    }

    /// Give the front card to `recipient`.
    ///
    /// Returns `false`, changing nothing, when no undealt cards remain.
    pub fn deal<R: Recipient<C> + ?Sized>(&mut self, recipient: &mut R) -> bool {
        let Some(card) = self.undealt.pop_front() else {
            return false;
        };

        trace!(card = %card.label(), to = %recipient.label(), "dealt");
        self.ledger.record(&card);
        recipient.accept(card);
        true
    }

    /// Deal round-robin to `recipients` until the deck runs out.
    ///
    /// Recipients are served in slice order every round; the deal stops at the
    /// first recipient that cannot be served, so earlier recipients may end up
    /// with one more card than later ones. Returns the number of cards dealt.
    pub fn deal_all<R: Recipient<C>>(&mut self, recipients: &mut [R]) -> usize {
        if recipients.is_empty() {
            return 0;
        }

        let mut dealt = 0;
        'rounds: loop {
            for recipient in recipients.iter_mut() {
                if !self.deal(recipient) {
                    break 'rounds;
                }
                dealt += 1;
            }
        }

        debug!(dealt, recipients = recipients.len(), "deal_all finished");
        dealt
    }

    /// Deal up to `count` cards to a single recipient. Returns how many were dealt.
    pub fn deal_hand<R: Recipient<C> + ?Sized>(&mut self, recipient: &mut R, count: usize) -> usize {
        (0..count).take_while(|_| self.deal(recipient)).count()
    }

    /// Return cards to the discard pile, in the order given.
    ///
    /// Under `DiscardPolicy::Permissive` this always succeeds. Under
    /// `DiscardPolicy::Validating` every card must be one this deck dealt and
    /// has not yet taken back; otherwise nothing is discarded and the first
    /// offending card is reported.
    pub fn discard(&mut self, cards: impl IntoIterator<Item = C>) -> Result<()> {
        let cards: Vec<C> = cards.into_iter().collect();

        if self.config.discard_policy == DiscardPolicy::Validating {
            if let Some(card) = self.ledger.first_unmatched(&cards) {
                let err = self.classify_unmatched(card);
                warn!(card = %card.label(), error = %err, "discard rejected");
                return Err(err);
            }
        }

        for card in cards {
            if !self.ledger.check_off(&card) {
                warn!(card = %card.label(), "discarded card was not dealt by this deck");
            }
            self.discarded.push(card);
        }
        Ok(())
    }

    /// Take the first undealt card equal to `card` out of circulation.
    pub fn remove(&mut self, card: &C) -> Option<C> {
        let index = self.undealt.iter().position(|c| c == card)?;
        let removed = self.undealt.remove(index)?;

        debug!(card = %removed.label(), "card removed from deck");
        Some(removed)
    }

    fn classify_unmatched(&self, card: &C) -> DeckError {
        let label = card.label();
        let known = self.ledger.contains(card)
            || self.undealt.contains(card)
            || self.discarded.contains(card);

        if known {
            DeckError::DuplicateCard { label }
        } else {
            DeckError::UnknownCard { label }
        }
    }
}

impl<C: Card> fmt::Display for Deck<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
