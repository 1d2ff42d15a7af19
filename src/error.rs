//! Error taxonomy
//!
//! Setup failures (`GameError`) abort game construction. In-play failures
//! (`RoundError`) are reported to the player and leave the round untouched.

use thiserror::Error;

/// Errors raised while building tiers, loading data, or starting a game
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Level {0} has no words to choose from")]
    EmptyLevel(usize),

    #[error("Level {level} is outside 1..={num_levels}")]
    LevelOutOfRange { level: usize, num_levels: usize },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed data at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error(transparent)]
    Round(#[from] RoundError),
}

impl GameError {
    /// Whether the game can carry on after this error
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Round(_))
    }
}

/// Recoverable errors for player commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error("'{0}' was already guessed")]
    DuplicateGuess(String),

    #[error("Guess is empty")]
    EmptyGuess,

    #[error("The round is already over")]
    RoundOver,

    #[error("The game is complete; restart to play again")]
    GameComplete,
}

pub type GameResult<T> = Result<T, GameError>;
