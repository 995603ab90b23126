//! Noughts & Crosses - command-line entry point.

use anyhow::Result;
use clap::Parser;
use noughts::AppConfig;
use noughts::cli::{Cli, Command};
use noughts_core::{Difficulty, Mode};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play {
        mode: None,
        difficulty: None,
        seed: None,
        ai_delay_ms: None,
    }) {
        Command::Play {
            mode,
            difficulty,
            seed,
            ai_delay_ms,
        } => run_play(config, mode, difficulty, seed, ai_delay_ms).await,
        Command::Simulate {
            games,
            cross,
            circle,
            seed,
        } => run_simulate(games, cross, circle, seed),
    }
}

/// Run the terminal UI with command-line overrides applied.
async fn run_play(
    mut config: AppConfig,
    mode: Option<Mode>,
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
    ai_delay_ms: Option<u64>,
) -> Result<()> {
    let mut game = *config.game();
    if let Some(mode) = mode {
        game = game.with_mode(mode);
    }
    if let Some(difficulty) = difficulty {
        game = game.with_difficulty(difficulty);
    }
    if let Some(seed) = seed {
        game = game.with_seed(seed);
    }
    config = config.with_game(game);
    if let Some(ms) = ai_delay_ms {
        config = config.with_ai_delay_ms(ms);
    }

    noughts::tui::init_file_tracing(config.tui().log_file())?;
    noughts::tui::run_tui(config).await
}

/// Run headless games and print the tallies.
fn run_simulate(games: u32, cross: Difficulty, circle: Difficulty, seed: Option<u64>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!(games, %cross, %circle, ?seed, "Starting simulation");
    let report = noughts::simulate(games, cross, circle, seed)?;
    println!("{}", report);
    Ok(())
}
