//! Headless advisor-versus-advisor games.

use noughts_core::{Difficulty, Game, GameSettings, GameStatus, Mark, Mode, MoveError, suggest_move};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info, info_span, instrument};

/// Outcome tallies of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimReport {
    /// Games played.
    pub games: u32,
    /// Games won by Cross.
    pub cross_wins: u32,
    /// Games won by Circle.
    pub circle_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl std::fmt::Display for SimReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Games:       {}", self.games)?;
        writeln!(f, "Cross wins:  {}", self.cross_wins)?;
        writeln!(f, "Circle wins: {}", self.circle_wins)?;
        write!(f, "Draws:       {}", self.draws)
    }
}

/// Plays `games` games with each side driven by the move advisor.
///
/// The game runs in player-vs-player mode so both sides go through
/// [`Game::apply_move`]; the score and restart logic are the same a human
/// front end sees. A seed makes the run reproducible.
///
/// # Errors
///
/// Propagates any [`MoveError`]; a rejected advisor move is a bug.
#[instrument]
pub fn simulate(
    games: u32,
    cross: Difficulty,
    circle: Difficulty,
    seed: Option<u64>,
) -> Result<SimReport, MoveError> {
    let mut settings = GameSettings::new().with_mode(Mode::PlayerVsPlayer);
    if let Some(seed) = seed {
        settings = settings.with_seed(seed);
    }
    let mut game = Game::new(settings);
    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let mut draws = 0;
    for round in 0..games {
        let _span = info_span!("sim_game", round).entered();
        while game.status() == GameStatus::InProgress {
            let mark = game.turn();
            let difficulty = match mark {
                Mark::Cross => cross,
                Mark::Circle => circle,
            };
            let position = suggest_move(game.board(), mark, difficulty, &mut rng)
                .ok_or(MoveError::NoMovesAvailable)?;
            game.apply_move(position.to_index())?;
        }
        debug!(status = %game.status(), board = %game.board().display(), "Game finished");
        if game.status() == GameStatus::Drawn {
            draws += 1;
        }
        game.restart();
    }

    let report = SimReport {
        games,
        cross_wins: game.score().wins(Mark::Cross),
        circle_wins: game.score().wins(Mark::Circle),
        draws,
    };
    info!(?report, "Simulation complete");
    Ok(report)
}
