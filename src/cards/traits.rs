//! Capability contracts a game's types implement to use a `Deck`.

/// A card that can be circulated by a deck.
///
/// Value equality is the only identity the deck relies on. The deck clones
/// cards for inspection copies but never mutates one.
pub trait Card: Clone + PartialEq {
    /// Stable, human-readable label (e.g. `"R7"`).
    fn label(&self) -> String;
}

/// Something that can be dealt cards.
///
/// The deck only hands cards over; how the recipient stores them is its own
/// business.
pub trait Recipient<C: Card> {
    /// Take possession of a card.
    fn accept(&mut self, card: C);

    /// Human-readable label of the recipient (e.g. a player name).
    fn label(&self) -> String;
}

impl<C: Card, R: Recipient<C> + ?Sized> Recipient<C> for &mut R {
    fn accept(&mut self, card: C) {
        (**self).accept(card);
    }

    fn label(&self) -> String {
        (**self).label()
    }
}

impl<C: Card, R: Recipient<C> + ?Sized> Recipient<C> for Box<R> {
    fn accept(&mut self, card: C) {
        (**self).accept(card);
    }

    fn label(&self) -> String {
        (**self).label()
    }
}
