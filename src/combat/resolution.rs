//! Turn resolution
//!
//! One call = one turn: the player's attack, the win check, the enemy's
//! counter and the loss check all happen before control returns. A round
//! that ends is reset inside the same call.

use crate::combat::constants::LIGHT_STAMINA_GAIN;
use crate::combat::enemy::{EnemyPolicy, WeightedEnemy};
use crate::combat::{damage, stamina_cost, AttackKind, Combatant, GameState};
use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::core::types::{Side, Turn};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Outcome of one resolver call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionResult {
    /// Both sides still standing
    Continue,
    /// Enemy fell to the player's attack; state already reset
    PlayerWins,
    /// Player fell to the counter-attack; state already reset
    PlayerLoses,
    /// Attack rejected; state unchanged
    InsufficientStamina,
}

impl ResolutionResult {
    /// Collapse a resolver return value into the outcome the UI reacts to
    pub fn from_turn(turn: &Result<TurnReport>) -> Option<Self> {
        match turn {
            Ok(report) => Some(report.result),
            Err(GameError::InsufficientStamina { .. }) => {
                Some(ResolutionResult::InsufficientStamina)
            }
            Err(_) => None,
        }
    }

    /// Did this turn end the round?
    pub fn is_terminal(self) -> bool {
        matches!(self, ResolutionResult::PlayerWins | ResolutionResult::PlayerLoses)
    }
}

/// Everything that happened during one resolved turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Turn number within the round (1-based)
    pub turn: Turn,
    pub player_attack: AttackKind,
    pub damage_dealt: i32,
    /// None when the enemy fell before it could answer
    pub enemy_attack: Option<AttackKind>,
    pub damage_taken: i32,
    pub result: ResolutionResult,
    /// Player as it stood at the end of the turn, before any reset
    pub final_player: Combatant,
    /// Enemy as it stood at the end of the turn, before any reset
    pub final_enemy: Combatant,
}

impl TurnReport {
    pub fn winner(&self) -> Option<Side> {
        match self.result {
            ResolutionResult::PlayerWins => Some(Side::Player),
            ResolutionResult::PlayerLoses => Some(Side::Enemy),
            _ => None,
        }
    }
}

/// Resolve a player attack and the enemy's answer
///
/// # Errors
/// `GameError::InsufficientStamina` when `kind` costs more stamina than the
/// player has. Nothing is mutated and no randomness is consumed.
pub fn resolve_player_attack(
    state: &mut GameState,
    kind: AttackKind,
    enemy: &dyn EnemyPolicy,
    rng: &mut dyn RngCore,
) -> Result<TurnReport> {
    let cost = stamina_cost(kind);
    if cost > state.player.stamina {
        tracing::warn!(
            "{} rejected: need {} stamina, have {}",
            kind,
            cost,
            state.player.stamina
        );
        return Err(GameError::InsufficientStamina {
            kind,
            required: cost,
            available: state.player.stamina,
        });
    }

    state.turn += 1;
    let turn = state.turn;

    // Step 1: Player strikes
    let dealt = damage(kind);
    state.enemy.health -= dealt;
    state.player.stamina -= cost;
    if kind == AttackKind::Light {
        state.player.stamina += LIGHT_STAMINA_GAIN;
    }

    // Step 2: Win is reported before the enemy can answer
    if state.enemy.is_defeated() {
        let report = TurnReport {
            turn,
            player_attack: kind,
            damage_dealt: dealt,
            enemy_attack: None,
            damage_taken: 0,
            result: ResolutionResult::PlayerWins,
            final_player: state.player.clone(),
            final_enemy: state.enemy.clone(),
        };
        tracing::info!("{} defeated {} on turn {}", state.player.name, state.enemy.name, turn);
        state.finish_round(Side::Player);
        return Ok(report);
    }

    // Step 3: Enemy counter-attacks
    let counter = enemy.choose_attack(rng);
    let taken = damage(counter);
    state.player.health -= taken;

    let result = if state.player.is_defeated() {
        ResolutionResult::PlayerLoses
    } else {
        ResolutionResult::Continue
    };

    let report = TurnReport {
        turn,
        player_attack: kind,
        damage_dealt: dealt,
        enemy_attack: Some(counter),
        damage_taken: taken,
        result,
        final_player: state.player.clone(),
        final_enemy: state.enemy.clone(),
    };

    tracing::debug!(
        "Turn {}: {} for {} / {} for {} (player {} hp {} st, enemy {} hp)",
        turn,
        kind,
        dealt,
        counter,
        taken,
        state.player.health,
        state.player.stamina,
        state.enemy.health
    );

    if result == ResolutionResult::PlayerLoses {
        tracing::info!("{} defeated {} on turn {}", state.enemy.name, state.player.name, turn);
        state.finish_round(Side::Enemy);
    }

    Ok(report)
}

/// A duel in progress: state, enemy policy and the random source
pub struct Battle {
    state: GameState,
    enemy: Box<dyn EnemyPolicy>,
    rng: ChaCha8Rng,
    seed: u64,
}

impl Battle {
    /// Create a battle, seeded from the config or from entropy
    pub fn new(config: &GameConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_seed(config, seed)
    }

    /// Create with specific RNG seed for deterministic behavior
    pub fn with_seed(config: &GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let enemy = WeightedEnemy::new(config.enemy_weights)?;
        Ok(Self::with_policy(config, Box::new(enemy), seed))
    }

    /// Create with a custom enemy policy
    pub fn with_policy(config: &GameConfig, enemy: Box<dyn EnemyPolicy>, seed: u64) -> Self {
        tracing::debug!("New battle with seed {}", seed);
        Self {
            state: GameState::from_config(config),
            enemy,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn resolve_player_attack(&mut self, kind: AttackKind) -> Result<TurnReport> {
        resolve_player_attack(&mut self.state, kind, self.enemy.as_ref(), &mut self.rng)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Abandon the current round without recording a result
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::enemy::FixedEnemy;

    fn attack(state: &mut GameState, kind: AttackKind, counter: AttackKind) -> Result<TurnReport> {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        resolve_player_attack(state, kind, &FixedEnemy(counter), &mut rng)
    }

    #[test]
    fn test_heavy_rejected_without_stamina() {
        let mut state = GameState::default();
        let before = state.clone();

        let result = attack(&mut state, AttackKind::Heavy, AttackKind::Light);

        assert!(matches!(
            result,
            Err(GameError::InsufficientStamina {
                kind: AttackKind::Heavy,
                required: 3,
                available: 0,
            })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_light_builds_stamina() {
        let mut state = GameState::default();
        let report = attack(&mut state, AttackKind::Light, AttackKind::Medium).unwrap();

        assert_eq!(report.result, ResolutionResult::Continue);
        assert_eq!(state.player.stamina, 1);
        assert_eq!(state.enemy.health, 95);
        assert_eq!(state.player.health, 90);
        assert_eq!(report.enemy_attack, Some(AttackKind::Medium));
        assert_eq!(report.turn, 1);
    }

    #[test]
    fn test_medium_spends_stamina() {
        let mut state = GameState::default();
        state.player.stamina = 2;

        attack(&mut state, AttackKind::Medium, AttackKind::Light).unwrap();

        assert_eq!(state.player.stamina, 0);
        assert_eq!(state.enemy.health, 90);
        assert_eq!(state.player.health, 95);
    }

    #[test]
    fn test_win_skips_counter_and_resets() {
        let mut state = GameState::default();
        state.enemy.health = 20;
        state.player.stamina = 3;
        state.player.health = 35;

        let report = attack(&mut state, AttackKind::Heavy, AttackKind::Medium).unwrap();

        assert_eq!(report.result, ResolutionResult::PlayerWins);
        assert_eq!(report.enemy_attack, None);
        assert_eq!(report.damage_taken, 0);
        assert_eq!(report.final_enemy.health, 0);
        assert_eq!(report.final_player.health, 35);
        assert!(state.is_fresh());
        assert_eq!(state.wins, 1);
    }

    #[test]
    fn test_loss_resets() {
        let mut state = GameState::default();
        state.player.health = 10;
        state.player.stamina = 2;

        let report = attack(&mut state, AttackKind::Light, AttackKind::Medium).unwrap();

        assert_eq!(report.result, ResolutionResult::PlayerLoses);
        assert_eq!(report.final_player.health, 0);
        assert_eq!(report.final_player.stamina, 3);
        assert!(state.is_fresh());
        assert_eq!(state.losses, 1);
        assert_eq!(report.winner(), Some(Side::Enemy));
    }

    #[test]
    fn test_from_turn() {
        let err: Result<TurnReport> = Err(GameError::InsufficientStamina {
            kind: AttackKind::Medium,
            required: 2,
            available: 1,
        });
        assert_eq!(ResolutionResult::from_turn(&err), Some(ResolutionResult::InsufficientStamina));

        let other: Result<TurnReport> = Err(GameError::UnknownCommand("x".into()));
        assert_eq!(ResolutionResult::from_turn(&other), None);
    }

    #[test]
    fn test_battle_same_seed_same_story() {
        let config = GameConfig::default();
        let mut a = Battle::with_seed(&config, 1234).unwrap();
        let mut b = Battle::with_seed(&config, 1234).unwrap();

        for _ in 0..10 {
            let ra = a.resolve_player_attack(AttackKind::Light).unwrap();
            let rb = b.resolve_player_attack(AttackKind::Light).unwrap();
            assert_eq!(ra, rb);
        }
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_battle_rejects_invalid_config() {
        let mut config = GameConfig::default();
        config.starting_health = -1;
        assert!(Battle::with_seed(&config, 1).is_err());
    }
}
