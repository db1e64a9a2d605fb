pub mod config;
pub mod error;
pub mod types;

pub use config::{load_config, EnemyWeights, GameConfig};
pub use error::{GameError, Result};
pub use types::{Side, Turn};
