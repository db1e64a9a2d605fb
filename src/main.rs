//! Battle Game - Entry Point
//!
//! Terminal rendition of the attack duel. Each attack button becomes a
//! command; bars and dialogs are drawn as text after every turn.

use battle_game::combat::{AttackKind, Battle, GameState};
use battle_game::core::config::{load_config, GameConfig};
use battle_game::core::error::Result;
use battle_game::ui::{Command, DialogLevel, GameUI, HealthBar, UiEvent};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

/// Turn-based attack duel against a goblin
#[derive(Parser, Debug)]
#[command(name = "battle-game")]
#[command(about = "Turn-based attack duel in the terminal")]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs (overrides the config)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "battle_game=info".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut battle = Battle::new(&config)?;
    let mut ui = GameUI::new();
    tracing::info!("Battle Game starting (seed {})", battle.seed());

    println!("\n=== BATTLE GAME ===");
    print_help();
    display_status(battle.state());

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let command = match input.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}. Type 'help' for commands.", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => print_help(),
            Command::Status => {
                display_status(battle.state());
                for entry in ui.recent(5) {
                    println!("  turn {:>3}: {}", entry.turn, entry.message);
                }
            }
            Command::Attack(kind) => {
                let turn = battle.resolve_player_attack(kind);
                for event in ui.apply(&turn) {
                    render_event(&event, battle.state());
                }
            }
        }
    }

    let state = battle.state();
    println!(
        "\nGoodbye! {} round(s) played: {} won, {} lost.",
        state.rounds, state.wins, state.losses
    );
    Ok(())
}

fn print_help() {
    println!("Commands:");
    for (i, kind) in AttackKind::ALL.iter().enumerate() {
        println!(
            "  {} / {:<7} - {} (costs {} stamina)",
            i + 1,
            format!("{:?}", kind).to_lowercase(),
            kind.button_text(),
            kind.stamina_cost()
        );
    }
    println!("  status / s    - Show health, stamina and recent turns");
    println!("  help          - Show this list");
    println!("  quit / q      - Exit the game");
    println!();
}

fn render_event(event: &UiEvent, state: &GameState) {
    match event {
        UiEvent::PlaySound(cue) => {
            tracing::debug!("Playing {} for {}", cue.asset(), cue.0);
        }
        UiEvent::ShowDialog(dialog) => {
            let marker = match dialog.level {
                DialogLevel::Information => "*",
                DialogLevel::Warning => "!",
            };
            println!("{} [{}] {}", marker, dialog.title, dialog.message);
        }
        UiEvent::Refresh => display_status(state),
    }
}

fn display_status(state: &GameState) {
    let player = &state.player;
    let enemy = &state.enemy;
    println!();
    println!(
        "  {:<8} {} stamina {}",
        player.name,
        HealthBar::for_combatant(player, state.starting_health).render(),
        player.stamina
    );
    println!(
        "  {:<8} {}",
        enemy.name,
        HealthBar::for_combatant(enemy, state.starting_health).render()
    );
    println!();
}
