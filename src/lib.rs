//! Battle Game - turn-based attack duel and a pocket to-do list

pub mod combat;
pub mod core;
pub mod tasks;
pub mod ui;
