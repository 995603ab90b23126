//! Moves and the reasons a move can be turned away.

use crate::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A mark placed at a position. Accepted moves are kept in the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark.symbol(), self.position.label())
    }
}

/// Why a move request was rejected.
///
/// A rejection never changes the game and never notifies observers.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The requested cell index is not on the board.
    #[display("Cell index {} is outside 0-8", _0)]
    OutOfRange(usize),

    /// The cell already carries a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is won or drawn; restart to keep playing.
    #[display("Game is already over")]
    GameOver,

    /// The computer holds the turn, human input is ignored.
    #[display("It's {}'s turn", _0)]
    NotYourTurn(Mark),

    /// `play_ai_move` called while no computer move is due.
    #[display("The computer is not due to move")]
    NotComputersTurn,

    /// The advisor found no empty cell.
    #[display("No moves available")]
    NoMovesAvailable,

    /// A post-move check failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
