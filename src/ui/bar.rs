//! Text progress bars for health and stamina

use crate::combat::Combatant;

const BAR_WIDTH: usize = 20;

/// A 0..=100 percentage bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthBar {
    pub value: u32,
    pub max: u32,
}

impl HealthBar {
    pub fn new(value: u32, max: u32) -> Self {
        Self { value: value.min(max), max }
    }

    pub fn for_combatant(combatant: &Combatant, starting_health: i32) -> Self {
        Self::new(combatant.display_health(), starting_health.max(1) as u32)
    }

    pub fn percent(&self) -> u32 {
        if self.max == 0 {
            return 0;
        }
        (self.value.min(self.max) as u64 * 100 / self.max as u64) as u32
    }

    /// Render as `[#####---------------]  25%`
    pub fn render(&self) -> String {
        let filled = if self.max == 0 {
            0
        } else {
            (self.value.min(self.max) as u64 * BAR_WIDTH as u64 / self.max as u64) as usize
        };
        format!(
            "[{}{}] {:>3}%",
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            self.percent()
        )
    }
}
