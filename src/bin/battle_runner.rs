//! Headless Battle Runner
//!
//! Plays a scripted sequence of player attacks against the seeded enemy and
//! prints a JSON summary. Same seed + same script = same output.

use battle_game::combat::{AttackKind, Battle, ResolutionResult};
use battle_game::core::config::{load_config, GameConfig};
use battle_game::core::error::{GameError, Result};
use battle_game::ui::Command;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

/// Headless Battle Runner - scripted duels with deterministic output
#[derive(Parser, Debug)]
#[command(name = "battle_runner")]
#[command(about = "Run a scripted duel and output the result as JSON")]
struct Args {
    /// Comma-separated player attacks, cycled until the round ends
    #[arg(long, default_value = "light,light,medium")]
    script: String,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum turns before giving up
    #[arg(long, default_value_t = 1000)]
    max_turns: u64,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

/// JSON output structure
#[derive(Serialize)]
struct RunResult {
    seed: u64,
    turns: u64,
    outcome: Option<ResolutionResult>,
    player_health: i32,
    player_stamina: u32,
    enemy_health: i32,
    rejected_attacks: u64,
}

fn parse_script(script: &str) -> Result<Vec<AttackKind>> {
    let mut attacks = Vec::new();
    for word in script.split(',').filter(|w| !w.trim().is_empty()) {
        match word.parse::<Command>()? {
            Command::Attack(kind) => attacks.push(kind),
            _ => return Err(GameError::UnknownCommand(word.trim().to_string())),
        }
    }
    if attacks.is_empty() {
        return Err(GameError::InvalidConfig("script has no attacks".into()));
    }
    Ok(attacks)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "battle_game=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    let script = parse_script(&args.script)?;

    let mut battle = Battle::with_seed(&config, seed)?;
    let mut turns = 0;
    let mut rejected_attacks = 0;
    let mut outcome = None;
    let mut last = None;

    for kind in script.iter().cycle() {
        if turns >= args.max_turns {
            break;
        }
        turns += 1;

        match battle.resolve_player_attack(*kind) {
            Ok(report) => {
                let result = report.result;
                last = Some(report);
                if result.is_terminal() {
                    outcome = Some(result);
                    break;
                }
            }
            Err(e) if e.is_recoverable() => rejected_attacks += 1,
            Err(e) => return Err(e),
        }
    }

    // A finished round has already been reset; report how it ended instead
    let (player, enemy) = match last {
        Some(report) if outcome.is_some() => (report.final_player, report.final_enemy),
        _ => (battle.state().player.clone(), battle.state().enemy.clone()),
    };

    let result = RunResult {
        seed,
        turns,
        outcome,
        player_health: player.health,
        player_stamina: player.stamina,
        enemy_health: enemy.health,
        rejected_attacks,
    };
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
