//! Tests for the terminal app driven by key presses.

use crossterm::event::KeyCode;
use noughts::AppConfig;
use noughts::tui::App;
use noughts_core::{AiReply, Cell, Difficulty, GameSettings, GameStatus, Mark, Mode, Position};
use std::time::{Duration, Instant};

fn press(app: &mut App, keys: &str) {
    for c in keys.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

#[test]
fn test_full_pvp_game_to_draw() {
    let settings = GameSettings::new().with_mode(Mode::PlayerVsPlayer);
    let mut app = App::new(settings, Duration::ZERO);
    // X O X / X O O / O X X
    press(&mut app, "123547869");
    assert_eq!(app.view().status, GameStatus::Drawn);
    assert_eq!(app.status_message(), "Draw! Press 'r' to restart or 'q' to quit.");
    assert_eq!(app.view().score.total(), 0);

    press(&mut app, "r");
    assert_eq!(app.view().board.marked(), 0);
    assert_eq!(app.view().turn, Mark::Cross);
}

#[test]
fn test_immediate_reply_without_delay() {
    let settings = GameSettings::new()
        .with_ai_reply(AiReply::Immediate)
        .with_seed(5);
    let mut app = App::new(settings, Duration::ZERO);
    press(&mut app, "5");
    assert_eq!(app.view().board.count(Mark::Circle), 1);
    assert_eq!(app.view().turn, Mark::Cross);
    assert!(app.ai_due().is_none());
}

#[test]
fn test_deferred_reply_waits_for_delay() {
    let settings = GameSettings::new()
        .with_ai_reply(AiReply::Deferred)
        .with_difficulty(Difficulty::Hard)
        .with_seed(9);
    let mut app = App::new(settings, Duration::from_millis(500));

    press(&mut app, "5");
    // Not yet due.
    app.tick(Instant::now());
    assert_eq!(app.view().board.count(Mark::Circle), 0);
    app.tick(Instant::now() + Duration::from_secs(1));
    assert_eq!(app.view().board.count(Mark::Circle), 1);
}

#[test]
fn test_difficulty_and_score_keys() {
    let settings = GameSettings::new().with_mode(Mode::PlayerVsPlayer);
    let mut app = App::new(settings, Duration::ZERO);
    press(&mut app, "d");
    assert_eq!(app.view().difficulty, Difficulty::Aggressive);
    assert!(app.status_message().starts_with("Difficulty: aggressive"));

    press(&mut app, "14253");
    assert_eq!(app.view().score.wins(Mark::Cross), 1);
    press(&mut app, "z");
    assert_eq!(app.view().score.total(), 0);
    assert!(app.status_message().starts_with("Scores reset"));
    // Board is untouched by a score reset.
    assert_eq!(app.view().board.get(Position::TopLeft), Cell::Marked(Mark::Cross));
}

#[test]
fn test_configured_delay_defers_computer_reply() {
    let config = AppConfig::from_toml(
        r#"
        [game]
        mode = "player-vs-ai"
        difficulty = "hard"

        [tui]
        ai_delay_ms = 500
        "#,
    )
    .unwrap();
    let mut app = App::from_config(&config);

    press(&mut app, "5");
    assert_eq!(app.view().board.count(Mark::Circle), 0);
    assert!(app.ai_due().is_some());
    assert_eq!(app.status_message(), "X played Center. Computer is thinking...");

    app.tick(Instant::now() + Duration::from_secs(1));
    assert_eq!(app.view().board.count(Mark::Circle), 1);
    assert!(app.ai_due().is_none());
}

#[test]
fn test_default_config_defers_computer_reply() {
    let mut app = App::from_config(&AppConfig::default());
    press(&mut app, "5");
    assert!(app.ai_due().is_some());
    assert_eq!(app.view().board.count(Mark::Circle), 0);
}

#[test]
fn test_zero_delay_replies_inside_the_move() {
    let config = AppConfig::default().with_ai_delay_ms(0);
    let mut app = App::from_config(&config);
    press(&mut app, "5");
    assert!(app.ai_due().is_none());
    assert_eq!(app.view().board.count(Mark::Circle), 1);
    assert_eq!(app.view().turn, Mark::Cross);
}
