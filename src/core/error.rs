//! Error types for deck operations.
//!
//! Running out of cards is not an error: `Deck::deal` reports it with `false`.
//! Errors only arise when a validating deck is handed cards it cannot account for.

use thiserror::Error;

/// Result alias for deck operations.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Why a deck refused an operation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    /// The card was never dealt by this deck.
    #[error("card {label} was not dealt by this deck")]
    UnknownCard { label: String },
    /// The card is already in the deck, or was returned more times than it was dealt.
    #[error("card {label} is already in the deck")]
    DuplicateCard { label: String },
}

impl DeckError {
    /// Label of the offending card.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::UnknownCard { label } | Self::DuplicateCard { label } => label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DeckError::UnknownCard { label: "R7".into() };
        assert_eq!(err.to_string(), "card R7 was not dealt by this deck");

        let err = DeckError::DuplicateCard { label: "Bx2".into() };
        assert_eq!(err.to_string(), "card Bx2 is already in the deck");
        assert_eq!(err.label(), "Bx2");
    }
}
