//! Combat constants - the fixed tables every duel is played by
//!
//! Damage and stamina cost are indexed by attack weight, light to heavy.

// Damage dealt by each attack kind
pub const LIGHT_DAMAGE: i32 = 5;
pub const MEDIUM_DAMAGE: i32 = 10;
pub const HEAVY_DAMAGE: i32 = 20;

// Stamina spent to launch each attack kind
pub const LIGHT_STAMINA_COST: u32 = 0;
pub const MEDIUM_STAMINA_COST: u32 = 2;
pub const HEAVY_STAMINA_COST: u32 = 3;

// Stamina recovered by landing a light attack
pub const LIGHT_STAMINA_GAIN: u32 = 1;

// Starting values, also restored on reset
pub const STARTING_HEALTH: i32 = 100;
pub const STARTING_STAMINA: u32 = 0;

// Enemy attack odds
pub const DEFAULT_ENEMY_LIGHT_WEIGHT: f64 = 0.2;
pub const DEFAULT_ENEMY_MEDIUM_WEIGHT: f64 = 0.8;
