use tracing::debug;

use crate::error::{BetError, DealError};
use crate::hand::PlayerStatus;

use super::{Game, Phase};

/// Cards needed for the initial deal: two each for the player and the dealer.
const INITIAL_DEAL: usize = 4;

impl Game {
    /// Deals two cards to the player, then two to the dealer.
    ///
    /// A player dealt 21 gets [`PlayerStatus::Blackjack`] and has no move to
    /// make; the game goes straight to the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if cards were already dealt or the deck holds fewer
    /// than four cards. Nothing is dealt in either case.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.phase != Phase::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.cards_remaining() < INITIAL_DEAL {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            let card = self.draw().map_err(|_| DealError::NotEnoughCards)?;
            debug!(%card, "dealt to player");
            self.player.add_card(card);
        }

        for _ in 0..2 {
            let card = self.draw().map_err(|_| DealError::NotEnoughCards)?;
            debug!(%card, "dealt to dealer");
            self.dealer.add_card(card);
        }

        if self.player.hand().is_blackjack() {
            self.player.set_status(PlayerStatus::Blackjack);
            self.phase = Phase::DealerTurn;
        } else {
            self.player.set_status(PlayerStatus::Playing);
            self.phase = Phase::PlayerTurn;
        }

        debug!(
            player_value = self.player.hand_value(),
            dealer_value = self.dealer.hand_value(),
            status = ?self.player.status(),
            "initial hands dealt"
        );

        Ok(())
    }

    /// Returns whether a bet can be placed right now.
    fn can_bet(&self) -> bool {
        matches!(
            self.phase,
            Phase::Dealing | Phase::PlayerTurn | Phase::DealerTurn
        ) && matches!(
            self.player.status(),
            PlayerStatus::Playing | PlayerStatus::Blackjack
        )
    }

    /// Records the player's bet, replacing any earlier one.
    ///
    /// A bet may be placed before or after the deal, as long as the player
    /// has not hit or stood yet.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is outside the table limits or the
    /// player has already acted.
    pub fn place_bet(&mut self, amount: u32) -> Result<(), BetError> {
        if !self.options.accepts_bet(amount) {
            return Err(BetError::OutOfRange {
                amount,
                min: self.options.min_bet,
                max: self.options.max_bet,
            });
        }

        if !self.can_bet() {
            return Err(BetError::InvalidState);
        }

        self.player.set_bet(Some(amount));
        debug!(player = %self.player.id(), amount, "bet placed");

        Ok(())
    }
}
