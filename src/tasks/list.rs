//! Task list store
//!
//! Holds whatever the user typed. No structure is imposed on the text.

use serde::{Deserialize, Serialize};

pub const MESSAGE_BOX_TITLE: &str = "Message Box";

/// Where "show tasks" sends its output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyMode {
    /// Print to standard output
    #[default]
    Console,
    /// Pop a message box
    Dialog,
}

impl NotifyMode {
    /// `--dialog` forces the message box; without it the configured mode stands
    pub fn with_dialog_flag(self, dialog: bool) -> Self {
        if dialog {
            NotifyMode::Dialog
        } else {
            self
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            NotifyMode::Console => NotifyMode::Dialog,
            NotifyMode::Dialog => NotifyMode::Console,
        }
    }
}

/// What the presentation layer should do to show the tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskNotice {
    Print(String),
    Dialog { title: String, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    text: String,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line of text
    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }

    /// Replace the whole buffer
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn contents(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn show(&self, mode: NotifyMode) -> TaskNotice {
        match mode {
            NotifyMode::Console => TaskNotice::Print(self.text.clone()),
            NotifyMode::Dialog => TaskNotice::Dialog {
                title: MESSAGE_BOX_TITLE.to_string(),
                message: self.text.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_clear() {
        let mut tasks = TaskList::new();
        assert!(tasks.is_empty());

        tasks.append("buy milk");
        tasks.append("feed cat");
        assert_eq!(tasks.contents(), "buy milk\nfeed cat\n");

        tasks.clear();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_replace() {
        let mut tasks = TaskList::new();
        tasks.append("old");
        tasks.replace("new text");
        assert_eq!(tasks.contents(), "new text");
    }

    #[test]
    fn test_show_modes() {
        let mut tasks = TaskList::new();
        tasks.append("water plants");

        assert_eq!(
            tasks.show(NotifyMode::Console),
            TaskNotice::Print("water plants\n".into())
        );
        assert_eq!(
            tasks.show(NotifyMode::Dialog),
            TaskNotice::Dialog {
                title: "Message Box".into(),
                message: "water plants\n".into(),
            }
        );
    }

    #[test]
    fn test_dialog_flag_always_means_dialog() {
        assert_eq!(NotifyMode::Dialog.with_dialog_flag(true), NotifyMode::Dialog);
        assert_eq!(NotifyMode::Console.with_dialog_flag(true), NotifyMode::Dialog);
        assert_eq!(NotifyMode::Dialog.with_dialog_flag(false), NotifyMode::Dialog);
        assert_eq!(NotifyMode::Console.with_dialog_flag(false), NotifyMode::Console);
    }

    #[test]
    fn test_toggle_mode() {
        assert_eq!(NotifyMode::Console.toggled(), NotifyMode::Dialog);
        assert_eq!(NotifyMode::default(), NotifyMode::Console);
    }
}
