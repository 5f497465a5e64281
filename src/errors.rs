use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error type for the crate
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RpsError {
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("Player error: {0}")]
    Player(#[from] PlayerError),
}

/// Errors raised when a game rule is broken
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameError {
    #[error("{rule}")]
    RuleViolation { rule: String },
}

/// Errors raised while a player picks or builds a move
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerError {
    #[error("Unknown move: {name}")]
    UnknownMove { name: String },

    #[error("Player strategy error: {details}")]
    StrategyError { details: String },

    #[error("Input closed for player {player}")]
    InputClosed { player: String },

    #[error("Input failed: {details}")]
    InputFailed { details: String },

    #[error("Invalid player configuration: {details}")]
    InvalidConfig { details: String },
}

pub type RpsResult<T> = Result<T, RpsError>;
pub type GameResult<T> = Result<T, GameError>;
pub type PlayerResult<T> = Result<T, PlayerError>;

impl GameError {
    pub fn rule_violation(rule: impl Into<String>) -> Self {
        Self::RuleViolation { rule: rule.into() }
    }
}

impl PlayerError {
    pub fn unknown_move(name: impl Into<String>) -> Self {
        Self::UnknownMove { name: name.into() }
    }

    pub fn strategy(details: impl Into<String>) -> Self {
        Self::StrategyError {
            details: details.into(),
        }
    }
}

impl From<std::io::Error> for PlayerError {
    fn from(err: std::io::Error) -> Self {
        PlayerError::InputFailed {
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PlayerError {
    fn from(err: serde_json::Error) -> Self {
        PlayerError::InvalidConfig {
            details: err.to_string(),
        }
    }
}
