//! Terminal input parsing
//!
//! The three attack buttons of the battle window become typed commands.

use crate::combat::AttackKind;
use crate::core::error::GameError;
use std::str::FromStr;

/// Battle front-end commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Attack(AttackKind),
    Status,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let command = match input.trim().to_lowercase().as_str() {
            "air" | "light" | "l" | "1" => Command::Attack(AttackKind::Light),
            "water" | "medium" | "m" | "2" => Command::Attack(AttackKind::Medium),
            "land" | "heavy" | "h" | "3" => Command::Attack(AttackKind::Heavy),
            "status" | "s" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "q" => Command::Quit,
            other => return Err(GameError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

/// To-do front-end commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    Add(String),
    Show,
    Clear,
    /// Flip between console output and message box
    ToggleDialog,
    /// Quit after confirmation
    Close,
    /// Quit without asking
    ForceClose,
}

impl FromStr for TaskCommand {
    type Err = GameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let (word, rest) = match input.split_once(' ') {
            Some((word, rest)) => (word, rest.trim()),
            None => (input, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "add" | "a" if !rest.is_empty() => TaskCommand::Add(rest.to_string()),
            "show" | "print" | "p" => TaskCommand::Show,
            "clear" | "c" => TaskCommand::Clear,
            "toggle" | "t" => TaskCommand::ToggleDialog,
            "close" | "quit" | "q" => TaskCommand::Close,
            "exit" | "close!" => TaskCommand::ForceClose,
            _ => return Err(GameError::UnknownCommand(input.to_string())),
        };
        Ok(command)
    }
}

/// Interpret a yes/no answer; anything but yes means no
pub fn confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
