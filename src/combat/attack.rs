//! Attack kinds and the damage table shared by both sides

use crate::combat::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three attacks the player can launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackKind {
    /// Air attack: free, builds stamina
    Light,
    /// Water attack
    Medium,
    /// Land attack
    Heavy,
}

impl AttackKind {
    pub const ALL: [AttackKind; 3] = [AttackKind::Light, AttackKind::Medium, AttackKind::Heavy];

    /// Name shown on the attack button
    pub fn label(self) -> &'static str {
        match self {
            AttackKind::Light => "Air Attack",
            AttackKind::Medium => "Water Attack",
            AttackKind::Heavy => "Land Attack",
        }
    }

    /// Button caption, e.g. "Air Attack (5 Damage)"
    pub fn button_text(self) -> String {
        format!("{} ({} Damage)", self.label(), damage(self))
    }

    pub fn damage(self) -> i32 {
        damage(self)
    }

    pub fn stamina_cost(self) -> u32 {
        stamina_cost(self)
    }
}

impl fmt::Display for AttackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Damage dealt by an attack of this kind, whoever throws it
pub const fn damage(kind: AttackKind) -> i32 {
    match kind {
        AttackKind::Light => LIGHT_DAMAGE,
        AttackKind::Medium => MEDIUM_DAMAGE,
        AttackKind::Heavy => HEAVY_DAMAGE,
    }
}

/// Stamina the player must spend to launch this attack
pub const fn stamina_cost(kind: AttackKind) -> u32 {
    match kind {
        AttackKind::Light => LIGHT_STAMINA_COST,
        AttackKind::Medium => MEDIUM_STAMINA_COST,
        AttackKind::Heavy => HEAVY_STAMINA_COST,
    }
}
