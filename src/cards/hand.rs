//! A named, ordered collection of cards held by a player.
//!
//! `Hand` is the ready-made `Recipient` for games that don't need anything
//! fancier: cards are appended in the order they are dealt.

use std::fmt;

use super::render::render_many;
use super::traits::{Card, Recipient};

/// Cards held by one recipient, in the order received.
#[derive(Clone, Debug, PartialEq)]
pub struct Hand<C> {
    name: String,
    cards: Vec<C>,
}

impl<C: Card> Hand<C> {
    /// Create an empty hand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// The hand owner's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards currently held, oldest first.
    #[must_use]
    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return the card at `index`, or `None` if out of range.
    pub fn play(&mut self, index: usize) -> Option<C> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Empty the hand, returning every card (e.g. to discard back to a deck).
    pub fn drain(&mut self) -> Vec<C> {
        std::mem::take(&mut self.cards)
    }

    /// Labels of held cards, space separated.
    #[must_use]
    pub fn render(&self) -> String {
        render_many(&self.cards)
    }
}

impl<C: Card> Recipient<C> for Hand<C> {
    fn accept(&mut self, card: C) {
        self.cards.push(card);
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl<C> fmt::Display for Hand<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
