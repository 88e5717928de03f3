use tracing::{debug, info, warn};

use crate::card::Card;
use crate::error::{DealerError, LedgerError, ResolveError};
use crate::hand::{BLACKJACK, PlayerStatus};
use crate::ledger::BalanceLedger;
use crate::result::{Outcome, RoundResult};

use super::{Game, Phase};

impl Game {
    /// Dealer plays their hand: draws while below the table's stand value.
    ///
    /// Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the player's turn has not ended (or no bet was
    /// ever placed), or the deck runs out while the dealer must draw. An
    /// empty deck here means the game should be abandoned.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DealerError> {
        if self.phase != Phase::DealerTurn || self.player.bet().is_none() {
            return Err(DealerError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        while self.dealer.hand_value() < self.options.dealer_stands_on {
            let card = self.draw().map_err(|_| DealerError::EmptyDeck)?;
            self.dealer.add_card(card);
            debug!(%card, value = self.dealer.hand_value(), "dealer draws");
            drawn_cards.push(card);
        }

        self.phase = Phase::Resolution;

        Ok(drawn_cards)
    }

    /// Decides the outcome from the current hands and player status.
    ///
    /// Rules, first match wins:
    /// 1. Player has blackjack: win.
    /// 2. Player at or under 21 and above the dealer: win.
    /// 3. Player busted: lose, whatever the dealer holds.
    /// 4. Dealer over 21: win.
    /// 5. Player at or under 21 and not above the dealer: lose (ties lose).
    /// 6. Anything else: push.
    #[must_use]
    #[expect(
        clippy::if_same_then_else,
        reason = "one branch per rule keeps the priority order visible"
    )]
    pub fn determine_outcome(&self) -> Outcome {
        let status = self.player.status();
        let player = self.player.hand_value();
        let dealer = self.dealer.hand_value();

        if status == PlayerStatus::Blackjack {
            Outcome::Win
        } else if player <= BLACKJACK && player > dealer {
            Outcome::Win
        } else if status == PlayerStatus::Bust {
            Outcome::Lose
        } else if dealer > BLACKJACK {
            Outcome::Win
        } else if player <= BLACKJACK && player <= dealer {
            Outcome::Lose
        } else {
            Outcome::Push
        }
    }

    /// Resolves the game and settles it through `ledger`.
    ///
    /// On a win the player's status becomes [`PlayerStatus::Win`], their win
    /// count goes up, and the ledger is asked to credit the bet and record
    /// the win. On a loss the status becomes [`PlayerStatus::Lose`] and the
    /// ledger debits the bet. A push settles nothing. The game is finished
    /// before the ledger is called.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidState`] unless the dealer has played
    /// and the game is not yet resolved. Returns
    /// [`ResolveError::Settlement`] if a ledger call fails; the game stays
    /// finished and is not settled again.
    pub async fn resolve<L>(&mut self, ledger: &L) -> Result<RoundResult, ResolveError>
    where
        L: BalanceLedger + ?Sized,
    {
        if self.phase != Phase::Resolution {
            return Err(ResolveError::InvalidState);
        }

        let outcome = self.determine_outcome();
        match outcome {
            Outcome::Win => {
                self.player.set_status(PlayerStatus::Win);
                self.player.record_win();
                self.player_wins = true;
            }
            Outcome::Lose => {
                self.player.set_status(PlayerStatus::Lose);
                self.player_wins = false;
            }
            Outcome::Push => {
                warn!(status = ?self.player.status(), "no rule matched, treating as push");
                self.player_wins = false;
            }
        }
        self.phase = Phase::Finished;

        let result = RoundResult {
            outcome,
            player_status: self.player.status(),
            player_value: self.player.hand_value(),
            dealer_value: self.dealer.hand_value(),
            bet: self.player.bet().unwrap_or_default(),
        };

        info!(
            player = %self.player.id(),
            ?outcome,
            player_value = result.player_value,
            dealer_value = result.dealer_value,
            bet = result.bet,
            "game resolved"
        );

        if let Err(source) = self.settle(ledger, &result).await {
            warn!(player = %self.player.id(), error = %source, "settlement failed");
            return Err(ResolveError::Settlement { result, source });
        }

        Ok(result)
    }

    async fn settle<L>(&self, ledger: &L, result: &RoundResult) -> Result<(), LedgerError>
    where
        L: BalanceLedger + ?Sized,
    {
        let player = self.player.id();
        match result.outcome {
            Outcome::Win => {
                ledger.credit(player, result.bet).await?;
                ledger.record_win(player).await
            }
            Outcome::Lose => ledger.debit(player, result.bet).await,
            Outcome::Push => Ok(()),
        }
    }
}
