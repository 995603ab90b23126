//! Noughts & Crosses in the terminal.
//!
//! The game logic lives in [`noughts_core`]; this crate adds configuration,
//! the command line, a ratatui front end and a headless simulator.
//!
//! # Example
//!
//! ```
//! use noughts::sim::simulate;
//! use noughts_core::Difficulty;
//!
//! let report = simulate(10, Difficulty::Hard, Difficulty::Hard, Some(7)).unwrap();
//! assert_eq!(report.games, 10);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod sim;
pub mod tui;

pub use config::{AppConfig, ConfigError, TuiConfig};
pub use sim::{SimReport, simulate};
