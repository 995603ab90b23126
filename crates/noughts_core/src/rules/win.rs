//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};
use tracing::instrument;

/// The eight winning lines: rows, columns, then diagonals.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `mark` holds all three cells of any line.
#[instrument(skip(board))]
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == Cell::Marked(mark)))
}

/// Returns the first mark found holding a complete line.
///
/// Boards reached through legal play never have two winners, so the scan
/// order only matters for hand-built boards.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in WIN_LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return cell.mark();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in marks {
            board.set(*pos, Cell::Marked(*mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
        assert!(!is_winner(&Board::new(), Mark::Cross));
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Mark::Cross),
            (Position::TopCenter, Mark::Cross),
            (Position::TopRight, Mark::Cross),
        ]);
        assert_eq!(check_winner(&board), Some(Mark::Cross));
        assert!(is_winner(&board, Mark::Cross));
        assert!(!is_winner(&board, Mark::Circle));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Mark::Circle),
            (Position::Center, Mark::Circle),
            (Position::BottomLeft, Mark::Circle),
        ]);
        assert_eq!(check_winner(&board), Some(Mark::Circle));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::Cross),
            (Position::TopCenter, Mark::Circle),
            (Position::TopRight, Mark::Cross),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WIN_LINES {
            let board = board_with(&line.map(|pos| (pos, Mark::Circle)));
            assert!(is_winner(&board, Mark::Circle), "line {:?}", line);
        }
    }
}
