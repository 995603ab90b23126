//! Alternating turn invariant: Cross, Circle, Cross, ...

use super::Invariant;
use crate::{Game, GameStatus, Mark, Move};

/// Invariant: history starts with Cross and alternates; the turn is the
/// next mark while in progress and the last mover once the game is over.
pub struct AlternatingTurnInvariant;

impl AlternatingTurnInvariant {
    /// Checks a history against the reported turn and status.
    pub fn holds_for(history: &[Move], turn: Mark, status: GameStatus) -> bool {
        if let Some(first) = history.first() {
            if first.mark != Mark::Cross {
                return false;
            }
        }
        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        match (status, history.last()) {
            (GameStatus::InProgress, None) => turn == Mark::Cross,
            (GameStatus::InProgress, Some(last)) => turn == last.mark.opponent(),
            (_, Some(last)) => turn == last.mark,
            (_, None) => false,
        }
    }
}

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        Self::holds_for(game.history(), game.turn(), game.status())
    }

    fn description() -> &'static str {
        "Marks alternate (Cross, Circle, Cross, ...)"
    }
}
