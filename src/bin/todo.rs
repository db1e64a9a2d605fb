//! To-do list
//!
//! Terminal rendition of the task window: type tasks, print them, clear them.

use battle_game::core::config::{load_config, GameConfig};
use battle_game::core::error::Result;
use battle_game::tasks::{TaskList, TaskNotice};
use battle_game::ui::input::confirmed;
use battle_game::ui::TaskCommand;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Pocket to-do list
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(about = "Keep a scratch list of tasks")]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show tasks in a message box instead of printing them
    #[arg(long)]
    dialog: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "battle_game=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    let mut mode = config.notify_mode.with_dialog_flag(args.dialog);

    let mut tasks = TaskList::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("\n=== Your tasks ===");
    println!("Commands: add <text>, show, clear, toggle, close, exit");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<TaskCommand>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            TaskCommand::Add(text) => tasks.append(&text),
            TaskCommand::Show => match tasks.show(mode) {
                TaskNotice::Print(text) => println!("{}", text),
                TaskNotice::Dialog { title, message } => {
                    println!("+--- {} ---", title);
                    for row in message.lines() {
                        println!("| {}", row);
                    }
                    println!("+---");
                }
            },
            TaskCommand::Clear => tasks.clear(),
            TaskCommand::ToggleDialog => {
                mode = mode.toggled();
                println!("Show messagebox: {:?}", mode);
            }
            TaskCommand::Close => {
                print!("[Quit] Wanna Quit? (y/n) ");
                io::stdout().flush()?;
                let Some(answer) = lines.next() else { break };
                if confirmed(&answer?) {
                    println!("Program closed");
                    break;
                }
            }
            TaskCommand::ForceClose => break,
        }
    }

    tracing::debug!("To-do list closed");
    Ok(())
}
