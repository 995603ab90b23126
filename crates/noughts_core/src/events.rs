//! State-change notifications sent to observers.

use crate::{Board, Difficulty, GameStatus, Mark, Mode, Move, Score};
use serde::{Deserialize, Serialize};

/// Everything a front end needs to redraw after a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board contents.
    pub board: Board,
    /// Mark to move next (the last mover once the game is over).
    pub turn: Mark,
    /// Current status.
    pub status: GameStatus,
    /// Session tallies.
    pub score: Score,
    /// Current mode.
    pub mode: Mode,
    /// Current advisor tier.
    pub difficulty: Difficulty,
}

/// What caused a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Change {
    /// A mark was placed. `by_computer` is set for advisor moves.
    MovePlayed {
        /// The accepted move.
        mv: Move,
        /// Whether the advisor produced it.
        by_computer: bool,
    },
    /// The board was cleared.
    Restarted,
    /// The mode changed (the board was cleared as well).
    ModeChanged(Mode),
    /// The advisor tier changed.
    DifficultyChanged(Difficulty),
    /// Both win counters were zeroed.
    ScoresReset,
}

/// A state change and the state after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Cause of the change.
    pub change: Change,
    /// State after the change.
    pub snapshot: Snapshot,
}
