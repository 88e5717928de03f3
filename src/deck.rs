//! The single 52-card deck a game is dealt from.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Figure, Suit};
use crate::error::DeckError;

/// How [`Deck::draw`] picks the next card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DrawOrder {
    /// Uniformly random remaining position.
    Random,
    /// Front of the sequence, in the order the deck was stacked.
    Stacked,
}

/// A deck of cards that shrinks as cards are drawn.
///
/// The deck is never refilled; a new game builds a new deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    order: DrawOrder,
}

impl Deck {
    /// Builds all 52 cards and shuffles them with `rng`.
    #[must_use]
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut cards = Self::unshuffled();
        cards.shuffle(rng);
        Self {
            cards,
            order: DrawOrder::Random,
        }
    }

    /// Creates a deck that deals `cards` front to back, ignoring the
    /// random generator. Used to replay a known sequence of cards.
    #[must_use]
    pub fn stacked(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            order: DrawOrder::Stacked,
        }
    }

    /// The 52 cards in construction order: per suit, the ace, 2 through 10,
    /// then the court cards.
    fn unshuffled() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            cards.push(Card::ace(suit));
            for value in 2..=10 {
                cards.push(Card::number(suit, value));
            }
            for figure in Figure::ALL {
                cards.push(Card::court(suit, figure));
            }
        }

        cards
    }

    /// Removes and returns one card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }

        let index = match self.order {
            DrawOrder::Random => rng.random_range(0..self.cards.len()),
            DrawOrder::Stacked => 0,
        };

        Ok(self.cards.remove(index))
    }

    /// Returns the remaining cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::card::Rank;

    #[test]
    fn new_deck_has_52_unique_cards() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let deck = Deck::new(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);

        let aces = deck.cards().iter().filter(|c| c.is_ace()).count();
        let courts = deck
            .cards()
            .iter()
            .filter(|c| matches!(c.rank, Rank::Court(_)))
            .count();
        assert_eq!(aces, 4);
        assert_eq!(courts, 12);
    }

    #[test]
    fn shuffle_depends_on_seed() {
        let a = Deck::new(&mut ChaCha8Rng::seed_from_u64(1));
        let b = Deck::new(&mut ChaCha8Rng::seed_from_u64(1));
        let c = Deck::new(&mut ChaCha8Rng::seed_from_u64(2));

        assert_eq!(a.cards(), b.cards());
        assert_ne!(a.cards(), c.cards());
    }

    #[test]
    fn draw_shrinks_deck_without_repeats() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut deck = Deck::new(&mut rng);
        let mut seen = HashSet::new();

        while !deck.is_empty() {
            let before = deck.len();
            let card = deck.draw(&mut rng).unwrap();
            assert_eq!(deck.len(), before - 1);
            assert!(seen.insert(card));
        }

        assert_eq!(seen.len(), DECK_SIZE);
        assert_eq!(deck.draw(&mut rng), Err(DeckError::Empty));
    }

    #[test]
    fn stacked_deck_draws_in_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let first = Card::number(Suit::Clubs, 4);
        let second = Card::court(Suit::Hearts, Figure::Queen);
        let mut deck = Deck::stacked([first, second]);

        assert_eq!(deck.draw(&mut rng), Ok(first));
        assert_eq!(deck.draw(&mut rng), Ok(second));
        assert_eq!(deck.draw(&mut rng), Err(DeckError::Empty));
    }
}
