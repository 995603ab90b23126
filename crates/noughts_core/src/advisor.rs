//! Heuristic move selection for the computer player.
//!
//! The advisor never searches ahead. It looks at the eight win lines and
//! picks a cell by fixed priority:
//!
//! 1. complete one of its own lines,
//! 2. ([`Difficulty::Aggressive`] only) add to a line holding just its mark,
//! 3. block a line the opponent is about to complete,
//! 4. any empty cell.
//!
//! Ties inside a tier are broken uniformly at random through the caller's
//! RNG, so a seeded RNG makes the whole game reproducible.

use crate::rules::WIN_LINES;
use crate::{Board, Cell, Difficulty, Mark, Position};
use rand::Rng;
use tracing::{debug, instrument, trace};

/// Tier that produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Reason {
    /// Completes a line for the advisor's side.
    Win,
    /// Second mark on an otherwise empty line.
    NearWin,
    /// Stops the opponent completing a line.
    Block,
    /// Nothing better, uniformly random empty cell.
    Random,
}

/// A suggested move and the tier it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    /// Cell to play.
    pub position: Position,
    /// Why it was picked.
    pub reason: Reason,
}

/// Counts of `me`, opponent and empty cells on a line.
fn tally(board: &Board, line: &[Position; 3], me: Mark) -> (usize, usize, Vec<Position>) {
    let mut mine = 0;
    let mut theirs = 0;
    let mut empty = Vec::with_capacity(3);
    for pos in line {
        match board.get(*pos) {
            Cell::Marked(mark) if mark == me => mine += 1,
            Cell::Marked(_) => theirs += 1,
            Cell::Empty => empty.push(*pos),
        }
    }
    (mine, theirs, empty)
}

/// Collects the empty cells of every line matching the given tallies.
fn candidates(board: &Board, me: Mark, want_mine: usize, want_theirs: usize) -> Vec<Position> {
    let mut found: Vec<Position> = Vec::new();
    for line in &WIN_LINES {
        let (mine, theirs, empty) = tally(board, line, me);
        if mine == want_mine && theirs == want_theirs {
            for pos in empty {
                if !found.contains(&pos) {
                    found.push(pos);
                }
            }
        }
    }
    found.sort();
    found
}

/// Cells that complete a line for `me` right now.
#[instrument(skip(board))]
pub fn winning_moves(board: &Board, me: Mark) -> Vec<Position> {
    candidates(board, me, 2, 0)
}

/// Cells that stop the opponent completing a line next turn.
#[instrument(skip(board))]
pub fn blocking_moves(board: &Board, me: Mark) -> Vec<Position> {
    candidates(board, me, 0, 2)
}

/// Empty cells on lines where `me` holds exactly one cell and the rest are empty.
#[instrument(skip(board))]
pub fn near_win_moves(board: &Board, me: Mark) -> Vec<Position> {
    candidates(board, me, 1, 0)
}

fn pick<R: Rng + ?Sized>(options: &[Position], rng: &mut R) -> Option<Position> {
    if options.is_empty() {
        None
    } else {
        Some(options[rng.random_range(0..options.len())])
    }
}

/// Picks a move for `me` on `board`.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board, rng))]
pub fn suggest<R: Rng + ?Sized>(
    board: &Board,
    me: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Suggestion> {
    let tiers: &[Reason] = match difficulty {
        Difficulty::Easy => &[Reason::Random],
        Difficulty::Hard => &[Reason::Win, Reason::Block, Reason::Random],
        Difficulty::Aggressive => &[Reason::Win, Reason::NearWin, Reason::Block, Reason::Random],
    };

    for reason in tiers {
        let options = match reason {
            Reason::Win => winning_moves(board, me),
            Reason::NearWin => near_win_moves(board, me),
            Reason::Block => blocking_moves(board, me),
            Reason::Random => board.empty_cells(),
        };
        trace!(%reason, count = options.len(), "Advisor tier candidates");
        if let Some(position) = pick(&options, rng) {
            debug!(%reason, %position, "Advisor chose position");
            return Some(Suggestion {
                position,
                reason: *reason,
            });
        }
    }

    debug!("No empty cells left to suggest");
    None
}

/// Convenience wrapper returning only the position.
pub fn suggest_move<R: Rng + ?Sized>(
    board: &Board,
    me: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    suggest(board, me, difficulty, rng).map(|s| s.position)
}
