//! The player and the dealer.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::hand::{Hand, PlayerStatus};

/// Identifier of a persisted player profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The player seated at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    hand: Hand,
    status: PlayerStatus,
    bet: Option<u32>,
    games_won: u32,
}

impl Player {
    /// Creates a player with an empty hand and no bet.
    #[must_use]
    pub const fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Hand::new(),
            status: PlayerStatus::Playing,
            bet: None,
            games_won: 0,
        }
    }

    /// Sets the number of games already won, as loaded from the profile.
    #[must_use]
    pub const fn with_games_won(mut self, games_won: u32) -> Self {
        self.games_won = games_won;
        self
    }

    /// Returns the profile identifier.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the current hand value.
    #[must_use]
    pub fn hand_value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Returns the recorded bet, if any.
    #[must_use]
    pub const fn bet(&self) -> Option<u32> {
        self.bet
    }

    /// Returns the running count of games won.
    #[must_use]
    pub const fn games_won(&self) -> u32 {
        self.games_won
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub(crate) const fn set_status(&mut self, status: PlayerStatus) {
        self.status = status;
    }

    pub(crate) const fn set_bet(&mut self, bet: Option<u32>) {
        self.bet = bet;
    }

    pub(crate) const fn record_win(&mut self) {
        self.games_won = self.games_won.saturating_add(1);
    }
}

/// The dealer (croupier). Holds a hand and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the current hand value.
    #[must_use]
    pub fn hand_value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the dealer is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }
}
