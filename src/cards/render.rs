//! Label rendering shared by decks, hands, and anything else holding cards.

use super::traits::Card;

/// Render cards as their labels separated by single spaces.
///
/// ```
/// use card_deck::cards::{render_many, Card};
///
/// #[derive(Clone, PartialEq)]
/// struct Face(&'static str);
///
/// impl Card for Face {
///     fn label(&self) -> String {
///         self.0.to_string()
///     }
/// }
///
/// assert_eq!(render_many(&[Face("A"), Face("K")]), "A K");
///
/// let none: [Face; 0] = [];
/// assert_eq!(render_many(&none), "");
/// ```
pub fn render_many<'a, C, I>(cards: I) -> String
where
    C: Card + 'a,
    I: IntoIterator<Item = &'a C>,
{
    cards
        .into_iter()
        .map(Card::label)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Named(&'static str);

    impl Card for Named {
        fn label(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_empty() {
        let cards: Vec<Named> = Vec::new();
        assert_eq!(render_many(&cards), "");
    }

    #[test]
    fn test_single_card_has_no_separators() {
        assert_eq!(render_many(&[Named("Gx2")]), "Gx2");
    }

    #[test]
    fn test_order_preserved() {
        let cards = vec![Named("B1"), Named("Rx-1"), Named("Y10")];
        assert_eq!(render_many(&cards), "B1 Rx-1 Y10");
        assert_eq!(render_many(cards.iter().rev()), "Y10 Rx-1 B1");
    }
}
