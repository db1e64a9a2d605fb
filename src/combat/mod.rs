//! Combat system
//!
//! Player-vs-enemy duel: fixed damage table, stamina-gated attacks and a
//! weighted enemy counter-attack.

mod attack;
pub mod combatant;
pub mod constants;
pub mod enemy;
pub mod resolution;

pub use attack::{damage, stamina_cost, AttackKind};
pub use combatant::{Combatant, GameState};
pub use enemy::{EnemyPolicy, FixedEnemy, WeightedEnemy};
pub use resolution::{resolve_player_attack, Battle, ResolutionResult, TurnReport};
