//! Property tests for the session state machine (pure domain).
//!
//! Every generated game plays a random guess sequence, always submitting as
//! the player whose turn it is, and checks the invariants after each call.

use proptest::prelude::*;

use crate::domain::test_gens::{guesses, secret_word, session, starting_player, variant};
use crate::domain::test_prelude;
use crate::domain::{OutcomeKind, SessionStatus};
use crate::errors::DomainError;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Mistakes never go down and never exceed the budget; guessed letters
    /// only grow.
    #[test]
    fn prop_counters_are_monotonic(
        variant in variant(),
        word in secret_word(),
        starting in starting_player(),
        seq in guesses(40),
    ) {
        let mut game = session(variant, &word, starting);
        let mut last_mistakes = 0u8;
        let mut last_letters = 0usize;

        for raw in &seq {
            let turn = game.turn();
            let _ = game.submit_guess(turn, raw);
            prop_assert!(game.mistakes() >= last_mistakes);
            prop_assert!(game.mistakes() <= game.max_mistakes());
            prop_assert!(game.guessed_letters().len() >= last_letters);
            last_mistakes = game.mistakes();
            last_letters = game.guessed_letters().len();
        }
    }

    /// Turn strictly alternates after every non-terminal accepted guess.
    #[test]
    fn prop_turn_alternates(
        variant in variant(),
        word in secret_word(),
        starting in starting_player(),
        seq in guesses(40),
    ) {
        let mut game = session(variant, &word, starting);
        for raw in &seq {
            let before = game.turn();
            match game.submit_guess(before, raw) {
                Ok(outcome) if outcome.kind == OutcomeKind::Continue => {
                    prop_assert_eq!(Some(game.turn()), game.opponent_of(before));
                    prop_assert_eq!(outcome.view.next_turn, Some(game.turn()));
                }
                Ok(_) => break,
                Err(DomainError::EmptyGuess) => prop_assert_eq!(game.turn(), before),
                Err(e) => prop_assert!(false, "unexpected error {e:?}"),
            }
        }
    }

    /// Full reveal if and only if the outcome is a win; hitting the budget
    /// loses on the same call.
    #[test]
    fn prop_outcomes_match_counters(
        variant in variant(),
        word in secret_word(),
        starting in starting_player(),
        seq in guesses(40),
    ) {
        let mut game = session(variant, &word, starting);
        let len = word.chars().count();

        for raw in &seq {
            let turn = game.turn();
            let Ok(outcome) = game.submit_guess(turn, raw) else { continue };
            let won = matches!(outcome.kind, OutcomeKind::WonByWord | OutcomeKind::WonByReveal);
            prop_assert_eq!(game.correct_positions() == len, won);
            if game.mistakes() == game.max_mistakes() {
                prop_assert_eq!(outcome.kind, OutcomeKind::Lost);
                prop_assert_eq!(game.status(), SessionStatus::LostMistakes);
            }
            if outcome.is_terminal() {
                break;
            }
        }
    }

    /// Once terminal, nothing observable changes.
    #[test]
    fn prop_terminal_sessions_are_frozen(
        variant in variant(),
        word in secret_word(),
        starting in starting_player(),
        seq in guesses(60),
        after in guesses(10),
        timeout_first in any::<bool>(),
    ) {
        let mut game = session(variant, &word, starting);
        if timeout_first {
            game.force_timeout().unwrap();
        } else {
            for raw in &seq {
                let turn = game.turn();
                let _ = game.submit_guess(turn, raw);
                if !game.is_active() {
                    break;
                }
            }
            if game.is_active() {
                game.force_timeout().unwrap();
            }
        }

        let frozen = game.view();
        for raw in &after {
            for player in game.players() {
                prop_assert_eq!(game.submit_guess(player, raw).unwrap_err(), DomainError::NotActive);
            }
            prop_assert_eq!(game.force_timeout().unwrap_err(), DomainError::NotActive);
        }
        prop_assert_eq!(game.view(), frozen);
    }

    /// Guessing the secret as a word always wins, whatever came before.
    #[test]
    fn prop_secret_word_always_wins_while_active(
        variant in variant(),
        word in "[a-z]{2,10}",
        starting in starting_player(),
        seq in guesses(5),
    ) {
        let mut game = session(variant, &word, starting);
        for raw in &seq {
            let turn = game.turn();
            let _ = game.submit_guess(turn, raw);
        }
        prop_assume!(game.is_active());
        let turn = game.turn();
        let outcome = game.submit_guess(turn, &word.to_uppercase()).unwrap();
        prop_assert_eq!(outcome.kind, OutcomeKind::WonByWord);
        prop_assert_eq!(outcome.view.winner, Some(turn));
    }
}
