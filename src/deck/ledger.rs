//! Bookkeeping for cards that have left the deck.
//!
//! Every successful deal records the card here; every discard checks one
//! matching entry off. Whatever remains is held by recipients.

use crate::cards::Card;

/// Multiset of cards dealt and not yet returned.
#[derive(Clone, Debug, PartialEq)]
pub struct DealtLedger<C> {
    outstanding: Vec<C>,
}

impl<C> Default for DealtLedger<C> {
    fn default() -> Self {
        Self {
            outstanding: Vec::new(),
        }
    }
}

impl<C: Card> DealtLedger<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `card` was handed to a recipient.
    pub fn record(&mut self, card: &C) {
        self.outstanding.push(card.clone());
    }

    /// Remove one entry equal to `card`. Returns `false` if none was outstanding.
    pub fn check_off(&mut self, card: &C) -> bool {
        match self.outstanding.iter().position(|held| held == card) {
            Some(index) => {
                self.outstanding.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Is at least one copy of `card` outstanding?
    #[must_use]
    pub fn contains(&self, card: &C) -> bool {
        self.outstanding.contains(card)
    }

    /// First card in `returned` that cannot be paired with its own outstanding entry.
    ///
    /// Each outstanding entry pairs with at most one returned card, so returning
    /// the same card twice after dealing it once fails on the second copy.
    #[must_use]
    pub fn first_unmatched<'a>(&self, returned: &'a [C]) -> Option<&'a C> {
        let mut claimed = vec![false; self.outstanding.len()];

        returned.iter().find(|card| {
            let slot = (0..self.outstanding.len())
                .find(|&i| !claimed[i] && self.outstanding[i] == **card);
            match slot {
                Some(i) => {
                    claimed[i] = true;
                    false
                }
                None => true,
            }
        })
    }

    /// Number of cards currently held outside the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outstanding.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outstanding.is_empty()
    }
}
