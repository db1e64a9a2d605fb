//! UI state management for the battle window

use crate::combat::{ResolutionResult, TurnReport};
use crate::core::error::{GameError, Result};
use crate::core::types::Turn;
use crate::ui::events::{Dialog, SoundCue, UiEvent};
use std::collections::VecDeque;

/// Maximum action log entries to keep
const MAX_LOG_ENTRIES: usize = 50;

/// Game UI state
#[derive(Debug, Default)]
pub struct GameUI {
    /// Action log entries
    pub action_log: VecDeque<LogEntry>,
    /// Turn of the most recent resolved attack
    last_turn: Turn,
}

/// An entry in the action log
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub turn: Turn,
    pub message: String,
    pub category: LogCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    Combat,
    Warning,
    System,
}

impl GameUI {
    pub fn new() -> Self {
        Self {
            action_log: VecDeque::with_capacity(MAX_LOG_ENTRIES),
            last_turn: 0,
        }
    }

    /// Add an entry to the action log
    pub fn log(&mut self, turn: Turn, message: String, category: LogCategory) {
        if self.action_log.len() >= MAX_LOG_ENTRIES {
            self.action_log.pop_front();
        }
        self.action_log.push_back(LogEntry {
            turn,
            message,
            category,
        });
    }

    /// Translate a resolver result into presentation events
    ///
    /// Sound plays only for attacks that actually went through; `Refresh`
    /// always comes last.
    pub fn apply(&mut self, turn: &Result<TurnReport>) -> Vec<UiEvent> {
        let mut events = Vec::new();

        match turn {
            Ok(report) => {
                self.last_turn = report.turn;
                events.push(UiEvent::PlaySound(SoundCue(report.player_attack)));
                self.log_report(report);

                match report.result {
                    ResolutionResult::PlayerWins => {
                        events.push(UiEvent::ShowDialog(Dialog::info("Game Over", "You won!")));
                        self.log(report.turn, "New round".into(), LogCategory::System);
                    }
                    ResolutionResult::PlayerLoses => {
                        events.push(UiEvent::ShowDialog(Dialog::info("Game Over", "You lost!")));
                        self.log(report.turn, "New round".into(), LogCategory::System);
                    }
                    ResolutionResult::Continue | ResolutionResult::InsufficientStamina => {}
                }
            }
            Err(GameError::InsufficientStamina { kind, .. }) => {
                let message = format!("Not enough stamina for {}!", kind);
                self.log(self.last_turn, message.clone(), LogCategory::Warning);
                events.push(UiEvent::ShowDialog(Dialog::warning("Insufficient Stamina", message)));
            }
            Err(e) => {
                self.log(self.last_turn, e.to_string(), LogCategory::Warning);
            }
        }

        events.push(UiEvent::Refresh);
        events
    }

    fn log_report(&mut self, report: &TurnReport) {
        let player = &report.final_player.name;
        let enemy = &report.final_enemy.name;
        self.log(
            report.turn,
            format!("{} used {} for {} damage", player, report.player_attack, report.damage_dealt),
            LogCategory::Combat,
        );
        if let Some(counter) = report.enemy_attack {
            self.log(
                report.turn,
                format!("{} used {} for {} damage", enemy, counter, report.damage_taken),
                LogCategory::Combat,
            );
        }
    }

    /// Most recent log entries, newest last
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &LogEntry> {
        let skip = self.action_log.len().saturating_sub(count);
        self.action_log.iter().skip(skip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{AttackKind, Combatant};
    use crate::ui::events::DialogLevel;

    fn report(result: ResolutionResult, enemy_attack: Option<AttackKind>) -> TurnReport {
        TurnReport {
            turn: 3,
            player_attack: AttackKind::Light,
            damage_dealt: 5,
            enemy_attack,
            damage_taken: enemy_attack.map(|k| k.damage()).unwrap_or(0),
            result,
            final_player: Combatant::new("Player", 80),
            final_enemy: Combatant::new("Goblin", 85),
        }
    }

    #[test]
    fn test_continue_plays_sound_and_refreshes() {
        let mut ui = GameUI::new();
        let events = ui.apply(&Ok(report(ResolutionResult::Continue, Some(AttackKind::Medium))));

        assert_eq!(
            events,
            vec![UiEvent::PlaySound(SoundCue(AttackKind::Light)), UiEvent::Refresh]
        );
        assert_eq!(ui.action_log.len(), 2);
    }

    #[test]
    fn test_win_shows_game_over() {
        let mut ui = GameUI::new();
        let events = ui.apply(&Ok(report(ResolutionResult::PlayerWins, None)));

        assert!(events.contains(&UiEvent::ShowDialog(Dialog::info("Game Over", "You won!"))));
        assert_eq!(events.last(), Some(&UiEvent::Refresh));
    }

    #[test]
    fn test_loss_shows_game_over() {
        let mut ui = GameUI::new();
        let events = ui.apply(&Ok(report(ResolutionResult::PlayerLoses, Some(AttackKind::Medium))));

        assert_eq!(
            events,
            vec![
                UiEvent::PlaySound(SoundCue(AttackKind::Light)),
                UiEvent::ShowDialog(Dialog::info("Game Over", "You lost!")),
                UiEvent::Refresh,
            ]
        );
        assert_eq!(ui.action_log.back().map(|e| e.category), Some(LogCategory::System));
    }

    #[test]
    fn test_insufficient_stamina_warns_without_sound() {
        let mut ui = GameUI::new();
        let events = ui.apply(&Err(GameError::InsufficientStamina {
            kind: AttackKind::Medium,
            required: 2,
            available: 0,
        }));

        assert_eq!(events.len(), 2);
        match &events[0] {
            UiEvent::ShowDialog(dialog) => {
                assert_eq!(dialog.level, DialogLevel::Warning);
                assert_eq!(dialog.title, "Insufficient Stamina");
                assert_eq!(dialog.message, "Not enough stamina for Water Attack!");
            }
            other => panic!("expected dialog, got {:?}", other),
        }
        assert!(!events.iter().any(|e| matches!(e, UiEvent::PlaySound(_))));
    }

    #[test]
    fn test_log_is_bounded() {
        let mut ui = GameUI::new();
        for i in 0..(MAX_LOG_ENTRIES as u64 + 10) {
            ui.log(i, format!("entry {}", i), LogCategory::System);
        }
        assert_eq!(ui.action_log.len(), MAX_LOG_ENTRIES);
        assert_eq!(ui.action_log.front().map(|e| e.turn), Some(10));
        assert_eq!(ui.recent(3).count(), 3);
    }
}
