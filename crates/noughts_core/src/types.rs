//! Core domain types for tic-tac-toe.

use crate::position::Position;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::instrument;

/// A player's mark. Cross always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Mark {
    /// Cross (X), moves first.
    #[strum(to_string = "cross", serialize = "x")]
    Cross,
    /// Circle (O). The computer plays Circle in [`Mode::PlayerVsAi`].
    #[strum(to_string = "circle", serialize = "o")]
    Circle,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Circle,
            Mark::Circle => Mark::Cross,
        }
    }

    /// Single-character symbol for display.
    pub fn symbol(self) -> char {
        match self {
            Mark::Cross => 'X',
            Mark::Circle => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell carries a mark.
    Marked(Mark),
}

impl Cell {
    /// The mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// 3x3 board, cells stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw cells, mainly for tests and replays.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Overwrites the cell at `pos`. The game only ever calls this on empty cells.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Whether the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Positions still open for play, in index order.
    #[instrument(skip(self))]
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Marked(mark))
            .count()
    }

    /// Number of non-empty cells.
    pub fn marked(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Clears every cell.
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Formats the board as plain text, empty cells showing their 1-based key.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for pos in Position::ALL {
            let symbol = match self.get(pos) {
                Cell::Empty => char::from_digit(pos.to_index() as u32 + 1, 10).unwrap_or('?'),
                Cell::Marked(mark) => mark.symbol(),
            };
            result.push(symbol);
            match pos.col() {
                2 if pos.row() < 2 => result.push_str("\n-+-+-\n"),
                2 => {}
                _ => result.push('|'),
            }
        }
        result
    }
}

/// Status of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// The given mark completed a line.
    Won(Mark),
    /// The board filled up with no line.
    Drawn,
}

impl GameStatus {
    /// True once the game is won or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winner, if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(mark) => write!(f, "{} wins", mark.symbol()),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}

/// Win tallies for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct Score {
    /// Games won by Cross.
    cross: u32,
    /// Games won by Circle.
    circle: u32,
}

impl Score {
    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::Cross => self.cross,
            Mark::Circle => self.circle,
        }
    }

    /// Records one win for `mark`.
    pub(crate) fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::Cross => self.cross = self.cross.saturating_add(1),
            Mark::Circle => self.circle = self.circle.saturating_add(1),
        }
    }

    /// Total decided games.
    pub fn total(&self) -> u32 {
        self.cross.saturating_add(self.circle)
    }
}

/// Who controls the Circle side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Mode {
    /// Two humans share the board.
    #[strum(to_string = "player-vs-player", serialize = "pvp", serialize = "player")]
    PlayerVsPlayer,
    /// The human plays Cross, the move advisor plays Circle.
    #[default]
    #[strum(to_string = "player-vs-ai", serialize = "ai")]
    PlayerVsAi,
}

impl Mode {
    /// Mark played by the computer in this mode, if any.
    pub fn computer_mark(self) -> Option<Mark> {
        match self {
            Mode::PlayerVsPlayer => None,
            Mode::PlayerVsAi => Some(Mark::Circle),
        }
    }

    /// The other mode.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Mode::PlayerVsPlayer => Mode::PlayerVsAi,
            Mode::PlayerVsAi => Mode::PlayerVsPlayer,
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Mode::PlayerVsPlayer => "Player vs Player",
            Mode::PlayerVsAi => "Player vs AI",
        }
    }
}

/// How hard the move advisor plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Easy,
    /// Win now, else block, else random.
    #[default]
    Hard,
    /// Win now, else extend a lone mark, else block, else random.
    Aggressive,
}

impl Difficulty {
    /// Next tier, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Aggressive,
            Difficulty::Aggressive => Difficulty::Easy,
        }
    }
}
