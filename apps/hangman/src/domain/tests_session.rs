use crate::domain::test_gens::{session, ALICE, BOB};
use crate::domain::{EndReason, OutcomeKind, PlayerId, SessionStatus, StartingPlayer, Variant};
use crate::errors::DomainError;

#[test]
fn cat_is_won_by_reveal_on_the_third_letter() {
    let mut game = session(Variant::Gallows, "cat", StartingPlayer::Inviter);
    assert_eq!(game.max_mistakes(), 7);

    let first = game.submit_guess(ALICE, "c").unwrap();
    assert_eq!(first.kind, OutcomeKind::Continue);
    assert_eq!(first.view.next_turn, Some(BOB));

    let second = game.submit_guess(BOB, "a").unwrap();
    assert_eq!(second.kind, OutcomeKind::Continue);
    assert_eq!(second.view.reveal_mask.to_string(), "c a _");

    let third = game.submit_guess(ALICE, "t").unwrap();
    assert_eq!(third.kind, OutcomeKind::WonByReveal);
    assert_eq!(third.view.winner, Some(ALICE));
    assert_eq!(third.view.mistakes, 0);
    assert_eq!(game.correct_positions(), 3);
    assert_eq!(game.status(), SessionStatus::Won { winner: ALICE });
    assert_eq!(third.view.reason().as_deref(), Some("word guessed"));
}

#[test]
fn dog_is_lost_exactly_on_the_sixth_wrong_letter() {
    let mut game = session(Variant::Exercise, "dog", StartingPlayer::Invitee);
    assert_eq!(game.max_mistakes(), 6);

    let players = [BOB, ALICE];
    for (i, letter) in ["x", "y", "z", "q", "w"].iter().enumerate() {
        let outcome = game.submit_guess(players[i % 2], letter).unwrap();
        assert_eq!(outcome.kind, OutcomeKind::Continue, "guess {letter}");
        assert_eq!(outcome.view.mistakes as usize, i + 1);
        assert!(game.is_active());
    }

    let last = game.submit_guess(players[5 % 2], "e").unwrap();
    assert_eq!(last.kind, OutcomeKind::Lost);
    assert_eq!(game.status(), SessionStatus::LostMistakes);
    assert_eq!(last.view.mistakes, 6);
    assert_eq!(last.view.stage_index, 0);
    assert_eq!(last.view.secret_word.as_deref(), Some("dog"));
    assert_eq!(
        last.view.reason().as_deref(),
        Some("mistake budget exceeded; the word was dog")
    );
}

#[test]
fn out_of_turn_guess_is_rejected_without_side_effects() {
    let mut game = session(Variant::Gallows, "cat", StartingPlayer::Inviter);
    let before = game.view();

    let err = game.submit_guess(BOB, "c").unwrap_err();
    assert_eq!(err, DomainError::NotYourTurn { player: BOB, turn: ALICE });
    assert_eq!(game.view(), before);
}

#[test]
fn outsider_is_not_a_participant() {
    let mut game = session(Variant::Gallows, "cat", StartingPlayer::Inviter);
    let err = game.submit_guess(PlayerId(99), "c").unwrap_err();
    assert_eq!(err, DomainError::NotAParticipant { player: PlayerId(99) });
}

#[test]
fn whole_word_wins_immediately_regardless_of_budget() {
    let mut game = session(Variant::Gallows, "cat", StartingPlayer::Inviter);
    game.submit_guess(ALICE, "x").unwrap();
    game.submit_guess(BOB, "cow").unwrap();
    assert_eq!(game.mistakes(), 2);

    let outcome = game.submit_guess(ALICE, "CAT").unwrap();
    assert_eq!(outcome.kind, OutcomeKind::WonByWord);
    assert_eq!(outcome.view.winner, Some(ALICE));
    assert!(outcome.view.reveal_mask.is_complete());
    assert_eq!(game.correct_positions(), 3);
    assert_eq!(game.mistakes(), 2);
}

#[test]
fn wrong_word_costs_one_mistake_and_records_nothing() {
    let mut game = session(Variant::Gallows, "cat", StartingPlayer::Inviter);
    let outcome = game.submit_guess(ALICE, "cab").unwrap();
    assert_eq!(outcome.kind, OutcomeKind::Continue);
    assert_eq!(game.mistakes(), 1);
    assert!(game.guessed_letters().is_empty());
}

#[test]
fn repeated_letters_never_cost_twice() {
    let mut game = session(Variant::Gallows, "cat", StartingPlayer::Inviter);
    game.submit_guess(ALICE, "z").unwrap();
    game.submit_guess(BOB, "z").unwrap();
    game.submit_guess(ALICE, "c").unwrap();
    let outcome = game.submit_guess(BOB, "c").unwrap();

    assert_eq!(game.mistakes(), 1);
    assert_eq!(outcome.view.guessed_letters, vec!['c', 'z']);
    // The repeat still consumed Bob's turn.
    assert_eq!(game.turn(), ALICE);
}

#[test]
fn empty_guess_is_rejected() {
    let mut game = session(Variant::Gallows, "cat", StartingPlayer::Inviter);
    assert_eq!(game.submit_guess(ALICE, "  \t").unwrap_err(), DomainError::EmptyGuess);
    assert_eq!(game.turn(), ALICE);
    assert_eq!(game.mistakes(), 0);
}

#[test]
fn non_alphabetic_letter_counts_as_a_miss() {
    let mut game = session(Variant::Gallows, "cat", StartingPlayer::Inviter);
    game.submit_guess(ALICE, "7").unwrap();
    assert_eq!(game.mistakes(), 1);
}

#[test]
fn uppercase_input_is_normalized() {
    let mut game = session(Variant::Gallows, "cat", StartingPlayer::Inviter);
    let outcome = game.submit_guess(ALICE, "C").unwrap();
    assert_eq!(outcome.view.reveal_mask.to_string(), "c _ _");
    assert_eq!(game.mistakes(), 0);
}

#[test]
fn timeout_is_absorbing() {
    let mut game = session(Variant::Exercise, "owl", StartingPlayer::Inviter);
    game.submit_guess(ALICE, "o").unwrap();
    game.force_timeout().unwrap();
    let frozen = game.view();

    assert_eq!(frozen.status, SessionStatus::TimedOut);
    assert_eq!(frozen.end_reason, Some(EndReason::TimedOut));
    assert_eq!(frozen.next_turn, None);
    assert_eq!(game.force_timeout().unwrap_err(), DomainError::NotActive);
    assert_eq!(game.submit_guess(BOB, "w").unwrap_err(), DomainError::NotActive);
    assert_eq!(game.view(), frozen);
    assert_eq!(frozen.reason().as_deref(), Some("timed out; the word was owl"));
}

#[test]
fn won_session_rejects_timeout() {
    let mut game = session(Variant::Gallows, "ox", StartingPlayer::Invitee);
    game.submit_guess(BOB, "ox").unwrap();
    assert_eq!(game.force_timeout().unwrap_err(), DomainError::NotActive);
    assert_eq!(game.status(), SessionStatus::Won { winner: BOB });
}

#[test]
fn stage_index_counts_down_from_the_budget() {
    let mut game = session(Variant::Gallows, "cat", StartingPlayer::Inviter);
    assert_eq!(game.stage_index(), 7);
    game.submit_guess(ALICE, "q").unwrap();
    assert_eq!(game.stage_index(), 6);
    game.submit_guess(BOB, "r").unwrap();
    assert_eq!(game.view().stage_index, 5);
}

#[test]
fn view_hides_the_word_while_active() {
    let game = session(Variant::Gallows, "secret", StartingPlayer::Inviter);
    let view = game.view();
    assert_eq!(view.secret_word, None);
    assert_eq!(view.word_length, 6);
    assert_eq!(view.reveal_mask.to_string(), "_ _ _ _ _ _");
    assert_eq!(view.next_turn, Some(ALICE));
}

#[test]
fn guessed_letters_display_is_sorted_uppercase() {
    let mut game = session(Variant::Gallows, "cat", StartingPlayer::Inviter);
    game.submit_guess(ALICE, "t").unwrap();
    game.submit_guess(BOB, "b").unwrap();
    game.submit_guess(ALICE, "a").unwrap();
    assert_eq!(game.view().guessed_letters_display(), "A, B, T");
}

#[test]
fn opponent_lookup() {
    let game = session(Variant::Gallows, "cat", StartingPlayer::Inviter);
    assert_eq!(game.opponent_of(ALICE), Some(BOB));
    assert_eq!(game.opponent_of(BOB), Some(ALICE));
    assert_eq!(game.opponent_of(PlayerId(5)), None);
}
