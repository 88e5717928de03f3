#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MoveError, PlayError};
use crate::hand::{BLACKJACK, PlayerStatus};

use super::{Game, Phase};

/// A player move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    /// Take one more card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl Game {
    fn ensure_player_turn(&self) -> Result<(), MoveError> {
        if self.player.bet().is_none() {
            return Err(MoveError::NoBet);
        }

        if self.phase != Phase::PlayerTurn || !self.player.status().can_move() {
            return Err(MoveError::InvalidState);
        }

        Ok(())
    }

    /// Plays one move and returns the player's new status.
    ///
    /// The player's turn ends when they stand, reach 21, or bust.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed, it is not the player's
    /// turn, or the deck is empty on a hit.
    pub fn play(&mut self, mv: Move) -> Result<PlayerStatus, MoveError> {
        self.ensure_player_turn()?;

        match mv {
            Move::Hit => self.hit(),
            Move::Stand => Ok(self.stand()),
        }
    }

    /// Places a bet and plays the first move in one step.
    ///
    /// If the move is rejected the previously recorded bet is restored.
    ///
    /// # Errors
    ///
    /// Returns the bet error if the bet is rejected, otherwise any error from
    /// [`Game::play`].
    pub fn bet_and_play(&mut self, amount: u32, mv: Move) -> Result<PlayerStatus, PlayError> {
        let previous = self.player.bet();
        self.place_bet(amount)?;

        self.play(mv).map_err(|err| {
            self.player.set_bet(previous);
            PlayError::from(err)
        })
    }

    fn hit(&mut self) -> Result<PlayerStatus, MoveError> {
        let card = self.draw().map_err(|_| MoveError::EmptyDeck)?;
        self.player.add_card(card);

        let value = self.player.hand_value();
        let status = if value > BLACKJACK {
            PlayerStatus::Bust
        } else if value == BLACKJACK {
            PlayerStatus::Stand
        } else {
            PlayerStatus::Hit
        };

        debug!(%card, value, ?status, "player hits");
        self.player.set_status(status);
        if !status.can_move() {
            self.phase = Phase::DealerTurn;
        }

        Ok(status)
    }

    fn stand(&mut self) -> PlayerStatus {
        debug!(value = self.player.hand_value(), "player stands");
        self.player.set_status(PlayerStatus::Stand);
        self.phase = Phase::DealerTurn;
        PlayerStatus::Stand
    }
}
