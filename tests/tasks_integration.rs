//! To-do list integration tests

use battle_game::core::config::GameConfig;
use battle_game::tasks::{NotifyMode, TaskList, TaskNotice};
use battle_game::ui::TaskCommand;

#[test]
fn test_command_session() {
    let mut tasks = TaskList::new();
    let mut mode = GameConfig::default().notify_mode;

    for line in ["add wash car", "add call mum", "toggle"] {
        match line.parse::<TaskCommand>().unwrap() {
            TaskCommand::Add(text) => tasks.append(&text),
            TaskCommand::ToggleDialog => mode = mode.toggled(),
            other => panic!("unexpected {:?}", other),
        }
    }

    assert_eq!(mode, NotifyMode::Dialog);
    match tasks.show(mode) {
        TaskNotice::Dialog { title, message } => {
            assert_eq!(title, "Message Box");
            assert_eq!(message, "wash car\ncall mum\n");
        }
        other => panic!("expected dialog, got {:?}", other),
    }

    tasks.clear();
    assert_eq!(tasks.show(NotifyMode::Console), TaskNotice::Print(String::new()));
}

#[test]
fn test_notify_mode_from_config() {
    let config = GameConfig::from_toml_str("notify_mode = \"dialog\"").unwrap();
    assert_eq!(config.notify_mode, NotifyMode::Dialog);
}

#[test]
fn test_dialog_flag_with_dialog_config() {
    let config = GameConfig::from_toml_str("notify_mode = \"dialog\"").unwrap();
    let mode = config.notify_mode.with_dialog_flag(true);

    let mut tasks = TaskList::new();
    tasks.append("sweep porch");
    assert!(matches!(tasks.show(mode), TaskNotice::Dialog { .. }));
}
