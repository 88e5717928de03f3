//! Balance and win-count settlement.
//!
//! The engine does not store balances itself. Once a game is resolved it
//! asks a [`BalanceLedger`] to move the bet and count the win.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::error::LedgerError;
use crate::participant::PlayerId;

/// Store of player balances and won-game counts.
#[async_trait]
pub trait BalanceLedger: Send + Sync {
    /// Adds `amount` to the player's balance.
    async fn credit(&self, player: PlayerId, amount: u32) -> Result<(), LedgerError>;

    /// Subtracts `amount` from the player's balance.
    async fn debit(&self, player: PlayerId, amount: u32) -> Result<(), LedgerError>;

    /// Increments the player's persisted won-game count.
    async fn record_win(&self, player: PlayerId) -> Result<(), LedgerError>;
}

/// Balance and win count held for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerAccount {
    /// Current balance. May go negative.
    pub balance: i64,
    /// Games won so far.
    pub games_won: u32,
}

/// A [`BalanceLedger`] kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    accounts: Mutex<HashMap<PlayerId, PlayerAccount>>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn accounts(&self) -> MutexGuard<'_, HashMap<PlayerId, PlayerAccount>> {
        self.accounts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Opens (or resets) an account with the given starting balance.
    pub fn open_account(&self, player: PlayerId, balance: i64) {
        self.accounts().insert(
            player,
            PlayerAccount {
                balance,
                games_won: 0,
            },
        );
    }

    /// Returns a copy of the player's account.
    #[must_use]
    pub fn account(&self, player: PlayerId) -> Option<PlayerAccount> {
        self.accounts().get(&player).copied()
    }

    fn update(
        &self,
        player: PlayerId,
        apply: impl FnOnce(&mut PlayerAccount),
    ) -> Result<(), LedgerError> {
        let mut accounts = self.accounts();
        let account = accounts
            .get_mut(&player)
            .ok_or(LedgerError::PlayerNotFound(player))?;
        apply(account);
        drop(accounts);
        Ok(())
    }
}

#[async_trait]
impl BalanceLedger for InMemoryLedger {
    async fn credit(&self, player: PlayerId, amount: u32) -> Result<(), LedgerError> {
        self.update(player, |account| {
            account.balance = account.balance.saturating_add(i64::from(amount));
        })
    }

    async fn debit(&self, player: PlayerId, amount: u32) -> Result<(), LedgerError> {
        self.update(player, |account| {
            account.balance = account.balance.saturating_sub(i64::from(amount));
        })
    }

    async fn record_win(&self, player: PlayerId) -> Result<(), LedgerError> {
        self.update(player, |account| {
            account.games_won = account.games_won.saturating_add(1);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn credit_debit_and_wins() {
        let ledger = InMemoryLedger::new();
        let id = PlayerId(7);
        ledger.open_account(id, 100);

        ledger.credit(id, 25).await.unwrap();
        ledger.record_win(id).await.unwrap();
        ledger.debit(id, 150).await.unwrap();

        assert_eq!(
            ledger.account(id),
            Some(PlayerAccount {
                balance: -25,
                games_won: 1,
            })
        );
    }

    #[tokio::test]
    async fn unknown_player_is_rejected() {
        let ledger = InMemoryLedger::new();
        let id = PlayerId(1);

        assert_eq!(
            ledger.credit(id, 5).await,
            Err(LedgerError::PlayerNotFound(id))
        );
        assert_eq!(ledger.record_win(id).await, Err(LedgerError::PlayerNotFound(id)));
        assert!(ledger.account(id).is_none());
    }
}
