//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::options::TableOptions;
use crate::participant::{Dealer, Player};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use actions::Move;
pub use state::{GameStatus, Phase};

/// One game of blackjack between a player and the dealer.
///
/// The game owns its deck, both participants, and the random number
/// generator used for every draw. Operations must be called in order:
/// [`Game::deal`], [`Game::place_bet`], [`Game::play`] until the player's
/// turn ends, [`Game::dealer_play`], then [`Game::resolve`]. A call made out
/// of order, or rejected for any other reason, leaves the game unchanged.
/// The one exception is the deck running out during [`Game::dealer_play`]:
/// the dealer keeps the cards already drawn and the game is left to be
/// abandoned.
#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
    player: Player,
    dealer: Dealer,
    options: TableOptions,
    phase: Phase,
    player_wins: bool,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a game with a freshly shuffled deck, seeded from OS entropy.
    #[must_use]
    pub fn new(player: Player, options: TableOptions) -> Self {
        Self::from_rng(player, options, ChaCha8Rng::from_os_rng())
    }

    /// Creates a game whose shuffle and draws are determined by `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_core::{Game, Player, PlayerId, TableOptions, DECK_SIZE};
    ///
    /// let game = Game::with_seed(Player::new(PlayerId(1)), TableOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn with_seed(player: Player, options: TableOptions, seed: u64) -> Self {
        Self::from_rng(player, options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a game dealt from a prepared deck.
    #[must_use]
    pub fn with_deck(player: Player, options: TableOptions, deck: Deck, seed: u64) -> Self {
        Self::assemble(player, options, deck, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(player: Player, options: TableOptions, mut rng: ChaCha8Rng) -> Self {
        let deck = Deck::new(&mut rng);
        Self::assemble(player, options, deck, rng)
    }

    fn assemble(player: Player, options: TableOptions, deck: Deck, rng: ChaCha8Rng) -> Self {
        Self {
            deck,
            player,
            dealer: Dealer::new(),
            options,
            phase: Phase::Dealing,
            player_wins: false,
            rng,
        }
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Result<Card, DeckError> {
        self.deck.draw(&mut self.rng)
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the overall game status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.phase.status()
    }

    /// Returns whether the player won. Only meaningful once finished.
    #[must_use]
    pub const fn player_wins(&self) -> bool {
        self.player_wins
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
