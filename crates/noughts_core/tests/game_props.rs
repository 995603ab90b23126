//! Property tests for the advisor and the state machine.

use noughts_core::advisor::{blocking_moves, winning_moves};
use noughts_core::{
    Difficulty, Game, GameSettings, GameStatus, Mark, Mode, MoveError, Position, Reason, suggest,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Plays `picks` as raw cell indices in player-vs-player mode, ignoring
/// rejected moves, and returns the game.
fn play(picks: &[usize]) -> Game {
    let mut game = Game::new(GameSettings::new().with_mode(Mode::PlayerVsPlayer).with_seed(0));
    for &index in picks {
        let _ = game.apply_move(index);
    }
    game
}

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Hard),
        Just(Difficulty::Aggressive),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn advisor_returns_empty_cell(
        picks in proptest::collection::vec(0usize..9, 0..9),
        seed in any::<u64>(),
        difficulty in difficulty(),
    ) {
        let game = play(&picks);
        let board = *game.board();
        let mut rng = SmallRng::seed_from_u64(seed);
        match suggest(&board, Mark::Circle, difficulty, &mut rng) {
            Some(s) => prop_assert!(board.is_empty(s.position)),
            None => prop_assert!(board.empty_cells().is_empty()),
        }
    }

    #[test]
    fn hard_advisor_takes_available_win(
        picks in proptest::collection::vec(0usize..9, 0..9),
        seed in any::<u64>(),
    ) {
        let game = play(&picks);
        let board = *game.board();
        let wins = winning_moves(&board, Mark::Circle);
        prop_assume!(!wins.is_empty());

        let mut rng = SmallRng::seed_from_u64(seed);
        let s = suggest(&board, Mark::Circle, Difficulty::Hard, &mut rng).unwrap();
        prop_assert_eq!(s.reason, Reason::Win);
        prop_assert!(wins.contains(&s.position));
    }

    #[test]
    fn hard_advisor_blocks_without_win(
        picks in proptest::collection::vec(0usize..9, 0..9),
        seed in any::<u64>(),
    ) {
        let game = play(&picks);
        let board = *game.board();
        prop_assume!(winning_moves(&board, Mark::Circle).is_empty());
        let blocks = blocking_moves(&board, Mark::Circle);
        prop_assume!(!blocks.is_empty());

        let mut rng = SmallRng::seed_from_u64(seed);
        let s = suggest(&board, Mark::Circle, Difficulty::Hard, &mut rng).unwrap();
        prop_assert_eq!(s.reason, Reason::Block);
        prop_assert!(blocks.contains(&s.position));
    }

    #[test]
    fn accepted_moves_change_exactly_one_cell(
        picks in proptest::collection::vec(0usize..12, 0..20),
    ) {
        let mut game = Game::new(GameSettings::new().with_mode(Mode::PlayerVsPlayer).with_seed(0));
        for index in picks {
            let before = game.snapshot();
            match game.apply_move(index) {
                Ok(_) => {
                    let after = *game.board();
                    let changed = Position::ALL
                        .iter()
                        .filter(|pos| before.board.get(**pos) != after.get(**pos))
                        .count();
                    prop_assert_eq!(changed, 1);
                    prop_assert!(game.score().total() >= before.score.total());
                }
                Err(e) => {
                    prop_assert_eq!(game.snapshot(), before);
                    if index >= 9 {
                        prop_assert_eq!(e, MoveError::OutOfRange(index));
                    }
                }
            }
            prop_assert!(game.check_invariants().is_ok());
        }
    }

    #[test]
    fn ai_games_always_finish(seed in any::<u64>(), difficulty in difficulty()) {
        let mut game = Game::new(
            GameSettings::new().with_difficulty(difficulty).with_seed(seed),
        );
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut turns = 0;
        while game.status() == GameStatus::InProgress {
            let human = noughts_core::suggest_move(game.board(), Mark::Cross, Difficulty::Easy, &mut rng)
                .unwrap();
            game.apply_move(human.to_index()).unwrap();
            turns += 1;
            prop_assert!(turns <= 5);
        }
        prop_assert!(game.status().is_over());
    }
}
