//! Rules engine for a single-table blackjack game.
//!
//! The crate provides a [`Game`] type that runs one hand between a player and
//! the dealer: dealing, betting, hit/stand, dealer play, and outcome
//! resolution. Balances are not stored here; a finished game is settled
//! through a [`BalanceLedger`].
//!
//! # Example
//!
//! ```no_run
//! use blackjack_core::{Game, InMemoryLedger, Move, Player, PlayerId, TableOptions};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let ledger = InMemoryLedger::new();
//! ledger.open_account(PlayerId(1), 100);
//!
//! let mut game = Game::new(Player::new(PlayerId(1)), TableOptions::default());
//! game.deal()?;
//! if game.player().status().can_move() {
//!     game.bet_and_play(10, Move::Stand)?;
//! } else {
//!     game.place_bet(10)?;
//! }
//! game.dealer_play()?;
//! let result = game.resolve(&ledger).await?;
//! println!("{:?}", result.outcome);
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod participant;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Figure, Rank, Suit};
pub use deck::Deck;
pub use error::{
    BetError, DealError, DealerError, DeckError, LedgerError, MoveError, PlayError, ResolveError,
};
pub use game::{Game, GameStatus, Move, Phase};
pub use hand::{Hand, PlayerStatus, hand_value, resolve_aces};
pub use ledger::{BalanceLedger, InMemoryLedger, PlayerAccount};
pub use options::TableOptions;
pub use participant::{Dealer, Player, PlayerId};
pub use result::{Outcome, RoundResult};
