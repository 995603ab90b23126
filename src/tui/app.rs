//! Application state and key handling.

use super::input::{digit_to_index, move_cursor};
use crossterm::event::KeyCode;
use crate::config::AppConfig;
use noughts_core::{
    AiReply, Change, Game, GameEvent, GameSettings, GameStatus, Mark, Position, Snapshot,
};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Main application state.
///
/// The app sends commands to the [`Game`] and redraws from the snapshots
/// that arrive on its event channel.
pub struct App {
    game: Game,
    events: mpsc::UnboundedReceiver<GameEvent>,
    view: Snapshot,
    cursor: Position,
    status_message: String,
    ai_delay: Duration,
    ai_due: Option<Instant>,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh game.
    #[instrument]
    pub fn new(settings: GameSettings, ai_delay: Duration) -> Self {
        let mut game = Game::new(settings);
        let (tx, events) = mpsc::unbounded_channel();
        game.subscribe(move |event| {
            // The receiver lives as long as the app; a send error means shutdown.
            let _ = tx.send(*event);
        });
        let view = game.snapshot();
        Self {
            game,
            events,
            view,
            cursor: Position::Center,
            status_message: "X to move. Arrows + Enter or 1-9 to play.".to_string(),
            ai_delay,
            ai_due: None,
            should_quit: false,
        }
    }

    /// Creates the app the terminal front end runs.
    ///
    /// A non-zero `ai_delay_ms` defers the computer's reply so it can be
    /// shown after the delay; zero applies it inside the human's move.
    pub fn from_config(config: &AppConfig) -> Self {
        let settings = *config.game();
        let delay = *config.tui().ai_delay_ms();
        let reply = if delay == 0 {
            AiReply::Immediate
        } else {
            AiReply::Deferred
        };
        Self::new(settings.with_ai_reply(reply), Duration::from_millis(delay))
    }

    /// Latest state received from the game.
    pub fn view(&self) -> &Snapshot {
        &self.view
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// When the pending computer move is due, if one is pending.
    pub fn ai_due(&self) -> Option<Instant> {
        self.ai_due
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => {
                self.ai_due = None;
                self.game.restart();
            }
            KeyCode::Char('m') => {
                self.ai_due = None;
                self.game.toggle_mode();
            }
            KeyCode::Char('d') => self.game.set_difficulty(self.game.difficulty().cycle()),
            KeyCode::Char('z') => self.game.reset_scores(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char(c) => {
                if let Some(index) = digit_to_index(c) {
                    self.play(index);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
        self.drain_events();
    }

    /// Plays the computer's move once its delay has passed.
    #[instrument(skip(self))]
    pub fn tick(&mut self, now: Instant) {
        let Some(due) = self.ai_due else {
            return;
        };
        if now < due {
            return;
        }
        self.ai_due = None;
        if let Err(e) = self.game.play_ai_move() {
            debug!(error = %e, "Computer move skipped");
        }
        self.drain_events();
    }

    fn play(&mut self, index: usize) {
        match self.game.apply_move(index) {
            Ok(_) => {
                if self.game.is_computers_turn() {
                    self.ai_due = Some(Instant::now() + self.ai_delay);
                }
            }
            Err(e) => debug!(index, error = %e, "Move rejected"),
        }
    }

    /// Applies every queued game event to the view.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
    }

    /// Handles a game event.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(change = ?event.change, "Handling game event");
        self.view = event.snapshot;

        let progress = match self.view.status {
            GameStatus::Won(mark) => {
                format!("{} wins! Press 'r' to restart or 'q' to quit.", mark.symbol())
            }
            GameStatus::Drawn => "Draw! Press 'r' to restart or 'q' to quit.".to_string(),
            GameStatus::InProgress => {
                if self.view.mode.computer_mark() == Some(self.view.turn) {
                    "Computer is thinking...".to_string()
                } else {
                    format!("{} to move.", self.view.turn.symbol())
                }
            }
        };

        self.status_message = match event.change {
            Change::MovePlayed { mv, by_computer } if !self.view.status.is_over() => {
                let who = if by_computer {
                    "Computer".to_string()
                } else {
                    mv.mark.symbol().to_string()
                };
                format!("{} played {}. {}", who, mv.position.label(), progress)
            }
            Change::ModeChanged(mode) => format!("{}. {}", mode.label(), progress),
            Change::DifficultyChanged(difficulty) => {
                format!("Difficulty: {}. {}", difficulty, progress)
            }
            Change::ScoresReset => format!("Scores reset. {}", progress),
            _ => progress,
        };
    }

    /// Score line shown above the board.
    pub fn score_line(&self) -> String {
        format!(
            "X {}  :  {} O    |  {}  |  {}",
            self.view.score.wins(Mark::Cross),
            self.view.score.wins(Mark::Circle),
            self.view.mode.label(),
            self.view.difficulty,
        )
    }
}
