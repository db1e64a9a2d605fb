//! Enemy attack selection
//!
//! The enemy shares the player's damage table but not its choice of moves:
//! it draws from a weighted subset that never includes Heavy.

use crate::combat::AttackKind;
use crate::core::config::EnemyWeights;
use crate::core::error::{GameError, Result};
use rand::distributions::{Distribution, WeightedIndex};
use rand::RngCore;

/// Trait for enemy attack selection policies
pub trait EnemyPolicy {
    /// Pick the counter-attack for this turn
    fn choose_attack(&self, rng: &mut dyn RngCore) -> AttackKind;
}

/// Weighted draw over Light and Medium
#[derive(Debug, Clone)]
pub struct WeightedEnemy {
    kinds: [AttackKind; 2],
    index: WeightedIndex<f64>,
}

impl WeightedEnemy {
    pub fn new(weights: EnemyWeights) -> Result<Self> {
        let index = WeightedIndex::new([weights.light, weights.medium])
            .map_err(|e| GameError::InvalidConfig(format!("enemy weights: {}", e)))?;
        Ok(Self {
            kinds: [AttackKind::Light, AttackKind::Medium],
            index,
        })
    }
}

impl EnemyPolicy for WeightedEnemy {
    fn choose_attack(&self, rng: &mut dyn RngCore) -> AttackKind {
        self.kinds[self.index.sample(rng)]
    }
}

/// Always answers with the same attack
#[derive(Debug, Clone, Copy)]
pub struct FixedEnemy(pub AttackKind);

impl EnemyPolicy for FixedEnemy {
    fn choose_attack(&self, _rng: &mut dyn RngCore) -> AttackKind {
        self.0
    }
}
