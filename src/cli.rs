//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::{Difficulty, Mode};
use std::path::PathBuf;

/// Noughts & Crosses - play in the terminal or pit advisors against each other
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it is missing)
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run; `play` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Game mode (player-vs-player, player-vs-ai, pvp, ai)
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Computer difficulty (easy, hard, aggressive)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before the computer moves, in milliseconds
        #[arg(long)]
        ai_delay_ms: Option<u64>,
    },

    /// Play advisor-vs-advisor games headlessly and print the tallies
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Difficulty of the advisor playing X
        #[arg(long, default_value = "hard")]
        cross: Difficulty,

        /// Difficulty of the advisor playing O
        #[arg(long, default_value = "hard")]
        circle: Difficulty,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
    }

    #[test]
    fn test_play_overrides() {
        let cli = Cli::try_parse_from(["noughts", "play", "--mode", "pvp", "-d", "easy", "--seed", "3"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Play {
                mode: Some(Mode::PlayerVsPlayer),
                difficulty: Some(Difficulty::Easy),
                seed: Some(3),
                ai_delay_ms: None,
            })
        );
    }

    #[test]
    fn test_simulate_defaults() {
        let cli = Cli::try_parse_from(["noughts", "simulate", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert_eq!(
            cli.command,
            Some(Command::Simulate {
                games: 100,
                cross: Difficulty::Hard,
                circle: Difficulty::Hard,
                seed: None,
            })
        );
    }

    #[test]
    fn test_bad_difficulty_rejected() {
        assert!(Cli::try_parse_from(["noughts", "play", "--difficulty", "impossible"]).is_err());
    }
}
