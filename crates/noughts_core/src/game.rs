//! The game state machine.
//!
//! [`Game`] owns the board, the turn, the status and the session score.
//! Front ends drive it with commands ([`Game::apply_move`],
//! [`Game::restart`], [`Game::set_mode`], ...) and learn about changes
//! through callbacks registered with [`Game::subscribe`].
//!
//! ```text
//! InProgress --move completes a line--> Won(mover)
//! InProgress --move fills the board---> Drawn
//! Won | Drawn --restart / set_mode----> InProgress
//! ```

use crate::action::{Move, MoveError};
use crate::advisor;
use crate::events::{Change, GameEvent, Snapshot};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules;
use crate::settings::{AiReply, GameSettings};
use crate::{Board, Cell, Difficulty, GameStatus, Mark, Mode, Position, Score};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info, instrument};

type Observer = Box<dyn FnMut(&GameEvent)>;

/// A tic-tac-toe session: the current game plus the running score.
pub struct Game {
    board: Board,
    turn: Mark,
    status: GameStatus,
    score: Score,
    mode: Mode,
    difficulty: Difficulty,
    ai_reply: AiReply,
    history: Vec<Move>,
    rng: SmallRng,
    observers: Vec<Observer>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("turn", &self.turn)
            .field("status", &self.status)
            .field("score", &self.score)
            .field("mode", &self.mode)
            .field("difficulty", &self.difficulty)
            .field("ai_reply", &self.ai_reply)
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Game {
    /// Creates a game with an empty board, Cross to move and a zero score.
    #[instrument]
    pub fn new(settings: GameSettings) -> Self {
        let rng = match settings.seed() {
            Some(seed) => SmallRng::seed_from_u64(*seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        info!(mode = %settings.mode(), difficulty = %settings.difficulty(), "New game");
        Self {
            board: Board::new(),
            turn: Mark::Cross,
            status: GameStatus::InProgress,
            score: Score::default(),
            mode: *settings.mode(),
            difficulty: *settings.difficulty(),
            ai_reply: *settings.ai_reply(),
            history: Vec::new(),
            rng,
            observers: Vec::new(),
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move. Once the game is over this is the mark that moved last.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Session score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current advisor tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// When computer replies are applied.
    pub fn ai_reply(&self) -> AiReply {
        self.ai_reply
    }

    /// Moves accepted since the last restart.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True while the advisor is due to play.
    pub fn is_computers_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.mode.computer_mark() == Some(self.turn)
    }

    /// Copy of the state handed to observers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            turn: self.turn,
            status: self.status,
            score: self.score,
            mode: self.mode,
            difficulty: self.difficulty,
        }
    }

    /// Registers a callback fired after every state change.
    ///
    /// Rejected commands never fire it.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Places the current turn's mark at `index` on behalf of a human.
    ///
    /// In [`Mode::PlayerVsAi`] with [`AiReply::Immediate`] the computer's
    /// answer is played before this returns. Returns the status after all
    /// moves made by the call.
    ///
    /// # Errors
    ///
    /// Rejected requests leave the game untouched:
    /// - [`MoveError::OutOfRange`] for indices outside 0-8
    /// - [`MoveError::GameOver`] once the game is won or drawn
    /// - [`MoveError::NotYourTurn`] while the computer is due to move
    /// - [`MoveError::CellOccupied`] for a marked cell
    #[instrument(skip(self), fields(turn = %self.turn, mode = %self.mode))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;

        if self.status.is_over() {
            debug!("Move rejected, game over");
            return Err(MoveError::GameOver);
        }
        if self.is_computers_turn() {
            debug!("Move rejected, computer to move");
            return Err(MoveError::NotYourTurn(self.turn));
        }

        self.place(position, false)?;

        if self.ai_reply == AiReply::Immediate && self.is_computers_turn() {
            self.play_ai_move()?;
        }
        Ok(self.status)
    }

    /// Lets the advisor play the computer's move.
    ///
    /// # Errors
    ///
    /// [`MoveError::NotComputersTurn`] unless [`Game::is_computers_turn`].
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn play_ai_move(&mut self) -> Result<GameStatus, MoveError> {
        if !self.is_computers_turn() {
            return Err(MoveError::NotComputersTurn);
        }
        let suggestion = advisor::suggest(&self.board, self.turn, self.difficulty, &mut self.rng)
            .ok_or(MoveError::NoMovesAvailable)?;
        debug!(position = %suggestion.position, reason = %suggestion.reason, "Computer move");
        self.place(suggestion.position, true)?;
        Ok(self.status)
    }

    /// Clears the board and gives Cross the move. The score is kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.reset_board();
        info!("Game restarted");
        self.notify(Change::Restarted);
    }

    /// Switches mode and restarts the board.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset_board();
        info!(%mode, "Mode changed");
        self.notify(Change::ModeChanged(mode));
    }

    /// Switches to the other mode.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggle());
    }

    /// Changes the advisor tier. The current game continues.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        info!(%difficulty, "Difficulty changed");
        self.notify(Change::DifficultyChanged(difficulty));
    }

    /// Zeroes both win counters.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.score = Score::default();
        info!("Scores reset");
        self.notify(Change::ScoresReset);
    }

    /// Runs every game invariant against the current state.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvariantViolation`] listing the failed invariants.
    pub fn check_invariants(&self) -> Result<(), MoveError> {
        GameInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })
    }

    fn place(&mut self, position: Position, by_computer: bool) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(position) {
            debug!(%position, "Move rejected, cell occupied");
            return Err(MoveError::CellOccupied(position));
        }

        let mark = self.turn;
        let mv = Move::new(mark, position);
        self.board.set(position, Cell::Marked(mark));
        self.history.push(mv);
        self.status = rules::evaluate(&self.board, mark);

        match self.status {
            GameStatus::Won(winner) => {
                self.score.record_win(winner);
                info!(%winner, cross = self.score.cross(), circle = self.score.circle(), "Game won");
            }
            GameStatus::Drawn => info!("Game drawn"),
            GameStatus::InProgress => self.turn = mark.opponent(),
        }

        debug_assert!(
            self.check_invariants().is_ok(),
            "invariants broken after {}: {:?}",
            mv,
            self.check_invariants()
        );

        self.notify(Change::MovePlayed { mv, by_computer });
        Ok(())
    }

    fn reset_board(&mut self) {
        self.board.clear();
        self.turn = Mark::Cross;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    fn notify(&mut self, change: Change) {
        let event = GameEvent {
            change,
            snapshot: self.snapshot(),
        };
        for observer in self.observers.iter_mut() {
            observer(&event);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}
