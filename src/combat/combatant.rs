//! Combatants and the duel state they live in
//!
//! The presentation layer owns the only `GameState` and hands a mutable
//! reference to the resolver each turn.

use crate::combat::constants::{STARTING_HEALTH, STARTING_STAMINA};
use crate::core::config::GameConfig;
use crate::core::types::{Side, Turn};
use serde::{Deserialize, Serialize};

/// A health/stamina-bearing participant in the duel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    /// May dip below zero on the killing blow
    pub health: i32,
    /// Enemy stamina is always 0
    pub stamina: u32,
}

impl Combatant {
    pub fn new(name: impl Into<String>, health: i32) -> Self {
        Self {
            name: name.into(),
            health,
            stamina: STARTING_STAMINA,
        }
    }

    /// Health clamped to zero for bars and labels
    pub fn display_health(&self) -> u32 {
        self.health.max(0) as u32
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    fn restore(&mut self, health: i32) {
        self.health = health;
        self.stamina = STARTING_STAMINA;
    }
}

/// Complete duel state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Combatant,
    pub enemy: Combatant,
    /// Health both sides are restored to on reset
    pub starting_health: i32,
    /// Turns resolved in the current round
    pub turn: Turn,
    /// Rounds that ended in a win or a loss
    pub rounds: u64,
    pub wins: u64,
    pub losses: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new("Player", "Goblin", STARTING_HEALTH)
    }
}

impl GameState {
    pub fn new(player_name: &str, enemy_name: &str, starting_health: i32) -> Self {
        Self {
            player: Combatant::new(player_name, starting_health),
            enemy: Combatant::new(enemy_name, starting_health),
            starting_health,
            turn: 0,
            rounds: 0,
            wins: 0,
            losses: 0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(&config.player_name, &config.enemy_name, config.starting_health)
    }

    /// Restore both combatants and start a new round
    ///
    /// Tallies survive the reset.
    pub fn reset(&mut self) {
        let health = self.starting_health;
        self.player.restore(health);
        self.enemy.restore(health);
        self.turn = 0;
    }

    /// Close the current round in favour of `winner`, then reset
    pub(crate) fn finish_round(&mut self, winner: Side) {
        match winner {
            Side::Player => self.wins += 1,
            Side::Enemy => self.losses += 1,
        }
        self.rounds += 1;
        self.reset();
    }

    /// True when every numeric field matches a freshly started round
    pub fn is_fresh(&self) -> bool {
        self.player.health == self.starting_health
            && self.enemy.health == self.starting_health
            && self.player.stamina == STARTING_STAMINA
            && self.enemy.stamina == STARTING_STAMINA
    }
}
