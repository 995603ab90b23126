//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the state machine so the move advisor and the invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::{evaluate, is_full};
pub use win::{WIN_LINES, check_winner, is_winner};
