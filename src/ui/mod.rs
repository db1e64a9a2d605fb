//! UI module - presentation-layer adapter for the terminal front ends

pub mod bar;
pub mod events;
pub mod input;
pub mod state;

pub use bar::HealthBar;
pub use events::{Dialog, DialogLevel, SoundCue, UiEvent};
pub use input::{Command, TaskCommand};
pub use state::{GameUI, LogCategory, LogEntry};
