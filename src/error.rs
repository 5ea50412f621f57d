//! Engine error type.
//!
//! Every fallible operation in the crate returns [`Result`]. Errors are raised
//! before any new board is produced, so a failed call never leaves partial
//! state behind.

use crate::core::Player;

/// Errors surfaced by the rules engine and the computer opponent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// `make_move` was called on a pit that fails `is_valid_move`.
    #[error("pit {pit} is not a playable pit for {player}")]
    PreconditionViolation { pit: usize, player: Player },

    /// The computer opponent was asked to move with nothing to play.
    #[error("no valid moves available for {0}")]
    NoValidMoves(Player),

    #[error("invalid player number {0} (expected 1 or 2)")]
    InvalidPlayer(u8),

    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    /// A move was submitted to a game that has already finished.
    #[error("the game is already over")]
    GameOver,

    /// A board whose stone total does not fit in a slot counter.
    #[error("board holds {0} stones, more than a slot can count")]
    TooManyStones(u64),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
