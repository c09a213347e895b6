//! Error types for board operations.

use thiserror::Error;

/// Reasons a player command is not performed.
///
/// The board surfaces these as a `false` return; no state changes and nothing
/// is written to the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The command is not legal in the current stage.
    #[error("command not legal in the current stage")]
    InvalidStage,
    /// No wager has been placed.
    #[error("no wager has been placed")]
    NoWager,
    /// The balance does not cover the stake.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Lowering would take the wager to zero or below.
    #[error("wager cannot be lowered any further")]
    WagerFloor,
    /// Every bet is already finished.
    #[error("no bet has focus")]
    NoFocusedBet,
    /// Doubling is only allowed on a two-card hand that has not stood.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// The hand is not a splittable pair.
    #[error("cannot split this hand")]
    CannotSplit,
}

/// Errors that can occur while setting up a board.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The action worker thread could not be started.
    #[error("failed to spawn action worker: {0}")]
    Spawn(#[from] std::io::Error),
}
