//! Game result types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hand::PlayerStatus;

/// Outcome of a finished game from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// Player wins the bet.
    Win,
    /// Player loses the bet.
    Lose,
    /// Neither side wins; nothing is settled.
    Push,
}

/// Summary of a resolved game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome.
    pub outcome: Outcome,
    /// Player status after resolution.
    pub player_status: PlayerStatus,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// The bet that was settled.
    pub bet: u32,
}

impl RoundResult {
    /// Signed balance change for the player: `+bet` on a win, `-bet` on a
    /// loss, zero on a push.
    #[must_use]
    pub fn net(&self) -> i64 {
        match self.outcome {
            Outcome::Win => i64::from(self.bet),
            Outcome::Lose => -i64::from(self.bet),
            Outcome::Push => 0,
        }
    }
}
