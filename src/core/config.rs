//! Game configuration loaded from TOML
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! classic duel: 100 health each, a goblin that prefers water attacks.

use crate::combat::constants::{
    DEFAULT_ENEMY_LIGHT_WEIGHT, DEFAULT_ENEMY_MEDIUM_WEIGHT, STARTING_HEALTH,
};
use crate::core::error::{GameError, Result};
use crate::tasks::NotifyMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Relative odds of each attack the enemy may pick
///
/// Heavy is deliberately absent: the enemy never lands one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyWeights {
    pub light: f64,
    pub medium: f64,
}

impl Default for EnemyWeights {
    fn default() -> Self {
        Self {
            light: DEFAULT_ENEMY_LIGHT_WEIGHT,
            medium: DEFAULT_ENEMY_MEDIUM_WEIGHT,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display name of the human player
    #[serde(default = "default_player_name")]
    pub player_name: String,
    /// Display name of the opponent
    #[serde(default = "default_enemy_name")]
    pub enemy_name: String,
    /// Health both combatants start (and reset) with
    #[serde(default = "default_starting_health")]
    pub starting_health: i32,
    /// Enemy attack selection odds
    #[serde(default)]
    pub enemy_weights: EnemyWeights,
    /// Fixed RNG seed; `None` seeds from entropy
    #[serde(default)]
    pub seed: Option<u64>,
    /// How the to-do list shows its contents
    #[serde(default)]
    pub notify_mode: NotifyMode,
}

fn default_player_name() -> String {
    "Player".to_string()
}

fn default_enemy_name() -> String {
    "Goblin".to_string()
}

fn default_starting_health() -> i32 {
    STARTING_HEALTH
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            enemy_name: default_enemy_name(),
            starting_health: default_starting_health(),
            enemy_weights: EnemyWeights::default(),
            seed: None,
            notify_mode: NotifyMode::default(),
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.starting_health <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "starting_health must be positive, got {}",
                self.starting_health
            )));
        }

        let EnemyWeights { light, medium } = self.enemy_weights;
        if !light.is_finite() || !medium.is_finite() {
            return Err(GameError::InvalidConfig("enemy weights must be finite".into()));
        }
        if light < 0.0 || medium < 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "enemy weights must not be negative (light = {}, medium = {})",
                light, medium
            )));
        }
        if light + medium <= 0.0 {
            return Err(GameError::InvalidConfig(
                "at least one enemy weight must be positive".into(),
            ));
        }

        Ok(())
    }
}

/// Load and validate a config file
pub fn load_config(path: &Path) -> Result<GameConfig> {
    let contents = fs::read_to_string(path)?;
    let config = GameConfig::from_toml_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}
