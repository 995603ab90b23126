//! Draw detection and end-of-move evaluation.

use super::win::is_winner;
use crate::{Board, Cell, GameStatus, Mark};
use tracing::instrument;

/// Checks if every cell is marked.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// Status after `mover` has just placed a mark.
///
/// Only the mover can have completed a line with this placement. A win is
/// reported even when the same placement filled the board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Mark) -> GameStatus {
    if is_winner(board, mover) {
        GameStatus::Won(mover)
    } else if is_full(board) {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}
