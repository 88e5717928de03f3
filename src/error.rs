//! Error types for game operations.

use thiserror::Error;

use crate::participant::PlayerId;
use crate::result::RoundResult;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    #[error("the deck is empty")]
    Empty,
}

/// Errors that can occur while dealing the initial hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Cards have already been dealt.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck for two hands of two.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The player has already acted or the game is over.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet is outside the table limits.
    #[error("bet of {amount} is outside the table limits (minimum {min}, maximum {max})")]
    OutOfRange {
        /// The rejected amount.
        amount: u32,
        /// Table minimum.
        min: u32,
        /// Table maximum.
        max: u32,
    },
}

/// Errors that can occur during a player move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// It is not the player's turn.
    #[error("invalid game state for this move")]
    InvalidState,
    /// No bet has been recorded yet.
    #[error("a bet must be placed before making a move")]
    NoBet,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors from placing a bet together with a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The bet was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The move was rejected.
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors that can occur while the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// The player's turn has not ended, or the dealer already played.
    #[error("invalid game state for the dealer turn")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors reported by a balance ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No account exists for the player.
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),
    /// The ledger could not be reached or failed internally.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur when resolving a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The dealer has not played yet, or the game was already resolved.
    #[error("invalid game state for resolution")]
    InvalidState,
    /// The game finished but the ledger call failed.
    ///
    /// The game is already marked finished; `result` holds the outcome so
    /// the caller can retry or compensate.
    #[error("settlement failed: {source}")]
    Settlement {
        /// Result of the game that could not be settled.
        result: RoundResult,
        /// The ledger failure.
        source: LedgerError,
    },
}
