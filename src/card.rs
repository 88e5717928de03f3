//! Card types.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in deck construction order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

/// Court (face) rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Figure {
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Figure {
    /// All court ranks.
    pub const ALL: [Self; 3] = [Self::Jack, Self::Queen, Self::King];
}

/// Rank of a card.
///
/// Only an [`Rank::Ace`] has a value that depends on the rest of the hand;
/// see [`crate::hand::resolve_aces`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rank {
    /// Ace, worth 1 or 11.
    Ace,
    /// Number card, worth its rank (2 through 10).
    Number(u8),
    /// Court card, always worth 10.
    Court(Figure),
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    ///
    /// Number ranks are only checked by [`Card::number`]; prefer it for
    /// number cards.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates an ace.
    #[must_use]
    pub const fn ace(suit: Suit) -> Self {
        Self::new(suit, Rank::Ace)
    }

    /// Creates a number card.
    ///
    /// `value` must be in 2..=10; debug builds panic otherwise.
    #[must_use]
    pub const fn number(suit: Suit, value: u8) -> Self {
        debug_assert!(
            matches!(value, 2..=10),
            "number card value must be between 2 and 10"
        );
        Self::new(suit, Rank::Number(value))
    }

    /// Creates a court card.
    #[must_use]
    pub const fn court(suit: Suit, figure: Figure) -> Self {
        Self::new(suit, Rank::Court(figure))
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }

    /// Value of the card before ace resolution. Aces count as 1 here.
    #[must_use]
    pub const fn base_value(&self) -> u8 {
        match self.rank {
            Rank::Ace => 1,
            Rank::Number(n) => n,
            Rank::Court(_) => 10,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self.suit {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        };
        match self.rank {
            Rank::Ace => write!(f, "A{suit}"),
            Rank::Number(n) => write!(f, "{n}{suit}"),
            Rank::Court(Figure::Jack) => write!(f, "J{suit}"),
            Rank::Court(Figure::Queen) => write!(f, "Q{suit}"),
            Rank::Court(Figure::King) => write!(f, "K{suit}"),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_values_stay_within_one_to_ten() {
        assert_eq!(Card::ace(Suit::Hearts).base_value(), 1);
        assert_eq!(Card::number(Suit::Clubs, 2).base_value(), 2);
        assert_eq!(Card::number(Suit::Clubs, 10).base_value(), 10);
        for figure in Figure::ALL {
            assert_eq!(Card::court(Suit::Spades, figure).base_value(), 10);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "number card value must be between 2 and 10")]
    fn number_card_rejects_value_below_two() {
        let _ = Card::number(Suit::Diamonds, 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "number card value must be between 2 and 10")]
    fn number_card_rejects_value_above_ten() {
        let _ = Card::number(Suit::Diamonds, 11);
    }
}
