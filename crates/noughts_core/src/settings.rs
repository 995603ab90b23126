//! Game settings — the knobs a front end can set when creating a game.

use crate::{Difficulty, Mode};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// When the computer's reply is applied.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AiReply {
    /// Inside the same `apply_move` call as the human move.
    #[default]
    Immediate,
    /// Left pending until the front end calls `play_ai_move`.
    Deferred,
}

/// Settings for a new [`Game`](crate::Game).
///
/// Deserializes from the `[game]` table of the config file; every field has
/// a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters, Setters)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct GameSettings {
    /// Who controls Circle.
    mode: Mode,
    /// Advisor tier for the computer side.
    difficulty: Difficulty,
    /// When computer replies are applied.
    ai_reply: AiReply,
    /// Fixed RNG seed for reproducible games.
    #[setters(strip_option)]
    seed: Option<u64>,
}

impl GameSettings {
    /// Settings with all defaults.
    pub fn new() -> Self {
        Self::default()
    }
}
