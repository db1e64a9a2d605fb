use thiserror::Error;

use crate::combat::AttackKind;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Not enough stamina for {kind}: need {required}, have {available}")]
    InsufficientStamina {
        kind: AttackKind,
        required: u32,
        available: u32,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl GameError {
    /// Recoverable errors leave game state untouched; the player may simply try again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InsufficientStamina { .. } | GameError::UnknownCommand(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
