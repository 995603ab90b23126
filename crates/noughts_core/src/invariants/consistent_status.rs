//! Status consistency invariant: the status matches the board.

use super::Invariant;
use crate::rules::{check_winner, evaluate};
use crate::{Game, GameStatus};

/// Invariant: the status equals what [`evaluate`] reports for the last
/// mover, is `InProgress` before any move, and names the same winner as a
/// plain scan of the board.
pub struct ConsistentStatusInvariant;

impl Invariant<Game> for ConsistentStatusInvariant {
    fn holds(game: &Game) -> bool {
        let matches_last_move = match game.history().last() {
            None => game.status() == GameStatus::InProgress,
            Some(last) => game.status() == evaluate(game.board(), last.mark),
        };
        matches_last_move && game.status().winner() == check_winner(game.board())
    }

    fn description() -> &'static str {
        "Status matches the board after the last move"
    }
}
