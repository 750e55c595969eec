//! Error types for the turn engine.

use thiserror::Error;

/// Result type for session operations.
pub type GameResult<T> = Result<T, EngineError>;

/// Errors that can occur while driving a game session.
///
/// Every variant renders as a player-facing message; none of them leaves
/// the session in a changed state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// An event is waiting for the player's choice; only a numeric
    /// selection is accepted.
    #[error("You must make a choice first!")]
    ChoicePending,

    /// The player is dead; the session only accepts being replaced.
    #[error("GAME OVER! You have died. Start a new session to play again.")]
    GameOver,

    /// A choice was submitted while no event was awaiting one.
    #[error("no choice is pending")]
    NoChoicePending,
}
