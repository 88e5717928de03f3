//! Game state types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Overall game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// Cards are being dealt or played.
    InProgress,
    /// The outcome is decided; the game no longer changes.
    Finished,
}

/// Step of the game the engine is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Initial hands not yet dealt.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Player is done; dealer draws next.
    DealerTurn,
    /// Both hands are complete; waiting for resolution.
    Resolution,
    /// Outcome decided and settlement requested.
    Finished,
}

impl Phase {
    /// Maps the phase onto the coarse game status.
    #[must_use]
    pub const fn status(self) -> GameStatus {
        match self {
            Self::Finished => GameStatus::Finished,
            _ => GameStatus::InProgress,
        }
    }
}
