//! Hand scoring and player status.

use crate::card::Card;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest value a hand can have without busting.
pub const BLACKJACK: u8 = 21;

const ACE_BONUS: u8 = 10;

/// Value of an ace counted high.
const SOFT_ACE: u8 = 11;

/// Sum of already-resolved card values.
#[must_use]
pub fn hand_value(values: &[u8]) -> u8 {
    values.iter().fold(0_u8, |sum, &v| sum.saturating_add(v))
}

/// Resolves each card in `cards` to the value it counts for in this hand.
///
/// Every ace starts at 1. Then, walking the hand in order, an ace is promoted
/// to 11 whenever the running total plus 10 stays at or below 21. The
/// promotion is incremental in hand order rather than a global optimum.
#[must_use]
pub fn resolve_aces(cards: &[Card]) -> Vec<u8> {
    let mut values: Vec<u8> = cards.iter().map(Card::base_value).collect();
    let mut total = hand_value(&values);

    for (card, value) in cards.iter().zip(values.iter_mut()) {
        if card.is_ace() && total.saturating_add(ACE_BONUS) <= BLACKJACK {
            *value += ACE_BONUS;
            total += ACE_BONUS;
        }
    }

    values
}

/// Status of the player during and after a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlayerStatus {
    /// Dealt in, no move made yet.
    Playing,
    /// Took at least one card and may take another.
    Hit,
    /// Stopped drawing.
    Stand,
    /// Went over 21.
    Bust,
    /// Dealt 21 on the first two cards.
    Blackjack,
    /// Won the game.
    Win,
    /// Lost the game.
    Lose,
}

impl PlayerStatus {
    /// Returns whether the player can still hit or stand.
    #[must_use]
    pub const fn can_move(self) -> bool {
        matches!(self, Self::Playing | Self::Hit)
    }

    /// Returns whether the status is a final game result.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

/// Cards held by a participant together with their resolved values.
///
/// Card identities never change; the value each card counts for is
/// recomputed from the whole hand every time a card is added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    values: Vec<u8>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Adds a card and re-resolves the aces.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.values = resolve_aces(&self.cards);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the value each card currently counts for, in hand order.
    #[must_use]
    pub fn resolved_values(&self) -> &[u8] {
        &self.values
    }

    /// Total value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.values)
    }

    /// Returns whether an ace is currently counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.cards
            .iter()
            .zip(&self.values)
            .any(|(card, &value)| card.is_ace() && value == SOFT_ACE)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is 21 on exactly two cards.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let cards: Vec<Card> = iter.into_iter().collect();
        let values = resolve_aces(&cards);
        Self { cards, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Figure, Suit};

    fn hand(cards: &[Card]) -> Hand {
        cards.iter().copied().collect()
    }

    #[test]
    fn single_ace_is_soft_when_rest_is_at_most_ten() {
        for rest in 2..=10 {
            let h = hand(&[Card::ace(Suit::Spades), Card::number(Suit::Hearts, rest)]);
            assert_eq!(h.resolved_values()[0], 11, "rest = {rest}");
            assert_eq!(h.value(), 11 + rest);
            assert!(h.is_soft());
        }

        let h = hand(&[
            Card::number(Suit::Hearts, 4),
            Card::number(Suit::Clubs, 6),
            Card::ace(Suit::Spades),
        ]);
        assert_eq!(h.resolved_values(), &[4, 6, 11]);
        assert_eq!(h.value(), 21);
    }

    #[test]
    fn single_ace_is_hard_when_rest_exceeds_ten() {
        let h = hand(&[
            Card::court(Suit::Clubs, Figure::King),
            Card::number(Suit::Hearts, 2),
            Card::ace(Suit::Diamonds),
        ]);
        assert_eq!(h.resolved_values(), &[10, 2, 1]);
        assert_eq!(h.value(), 13);
        assert!(!h.is_soft());
    }

    #[test]
    fn ace_is_demoted_again_when_hand_grows() {
        let mut h = Hand::new();
        h.add_card(Card::ace(Suit::Hearts));
        h.add_card(Card::number(Suit::Clubs, 6));
        assert_eq!(h.value(), 17);
        assert!(h.is_soft());

        h.add_card(Card::number(Suit::Spades, 9));
        assert_eq!(h.resolved_values(), &[1, 6, 9]);
        assert_eq!(h.value(), 16);
        assert!(!h.is_bust());
    }

    #[test]
    fn only_first_of_two_aces_is_promoted() {
        let h = hand(&[Card::ace(Suit::Hearts), Card::ace(Suit::Spades)]);
        assert_eq!(h.resolved_values(), &[11, 1]);
        assert_eq!(h.value(), 12);
    }

    #[test]
    fn blackjack_and_bust_detection() {
        let natural = hand(&[
            Card::ace(Suit::Hearts),
            Card::court(Suit::Spades, Figure::Jack),
        ]);
        assert!(natural.is_blackjack());
        assert!(!natural.is_bust());

        let bust = hand(&[
            Card::number(Suit::Hearts, 10),
            Card::court(Suit::Spades, Figure::Queen),
            Card::number(Suit::Clubs, 2),
        ]);
        assert_eq!(bust.value(), 22);
        assert!(bust.is_bust());
        assert!(!bust.is_blackjack());
    }

    #[test]
    fn status_predicates() {
        assert!(PlayerStatus::Playing.can_move());
        assert!(PlayerStatus::Hit.can_move());
        assert!(!PlayerStatus::Blackjack.can_move());
        assert!(!PlayerStatus::Bust.can_move());
        assert!(PlayerStatus::Win.is_final());
        assert!(!PlayerStatus::Stand.is_final());
    }
}
