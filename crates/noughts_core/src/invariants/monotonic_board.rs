//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::{Board, Cell, Game};

/// Invariant: replaying the history onto an empty board, each move lands on
/// an empty cell and the result equals the current board.
pub struct MonotonicBoardInvariant;

impl MonotonicBoardInvariant {
    /// Replays `history` and compares with `board`.
    pub fn holds_for(board: &Board, history: &[crate::Move]) -> bool {
        let mut reconstructed = Board::new();
        for mv in history {
            if !reconstructed.is_empty(mv.position) {
                return false;
            }
            reconstructed.set(mv.position, Cell::Marked(mv.mark));
        }
        reconstructed == *board
    }
}

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        Self::holds_for(game.board(), game.history())
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
