//! What the presentation layer is asked to do after a turn

use crate::combat::AttackKind;

/// Severity of a modal message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogLevel {
    Information,
    Warning,
}

/// A modal message box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub level: DialogLevel,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self {
            level: DialogLevel::Information,
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn warning(title: &str, message: impl Into<String>) -> Self {
        Self {
            level: DialogLevel::Warning,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

/// Sound effect keyed by attack kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundCue(pub AttackKind);

impl SoundCue {
    /// Every attack currently shares the same claw sample
    pub fn asset(self) -> &'static str {
        "Thrall Claw Attack Sound Effect Third Variation.wav"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    PlaySound(SoundCue),
    ShowDialog(Dialog),
    /// Re-render bars and labels from the current state
    Refresh,
}
