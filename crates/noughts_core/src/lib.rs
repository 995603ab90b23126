//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Game**: state machine owning board, turn, status and score
//! - **Advisor**: fixed-priority heuristic for the computer side
//! - **Rules**: win lines, win/draw evaluation
//! - **Invariants**: properties checked after every accepted move
//!
//! # Example
//!
//! ```
//! use noughts_core::{Game, GameSettings, GameStatus, Mark, Mode};
//!
//! let mut game = Game::new(GameSettings::new().with_mode(Mode::PlayerVsPlayer));
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won(Mark::Cross));
//! assert_eq!(game.score().wins(Mark::Cross), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod advisor;
mod events;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod settings;
mod types;

pub use action::{Move, MoveError};
pub use advisor::{Reason, Suggestion, suggest, suggest_move};
pub use events::{Change, GameEvent, Snapshot};
pub use game::Game;
pub use position::Position;
pub use settings::{AiReply, GameSettings};
pub use types::{Board, Cell, Difficulty, GameStatus, Mark, Mode, Score};
