//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Turn counter within a single round (one player action + retaliation)
pub type Turn = u64;

/// Which side of the duel a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}
