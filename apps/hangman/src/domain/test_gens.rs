//! Proptest generators for sessions and guess sequences.

use proptest::prelude::*;

use crate::domain::{GameSession, PlayerId, SessionId, StartingPlayer, Variant};

pub const ALICE: PlayerId = PlayerId(1);
pub const BOB: PlayerId = PlayerId(2);

pub fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Gallows), Just(Variant::Exercise)]
}

pub fn secret_word() -> impl Strategy<Value = String> {
    "[a-z]{1,10}"
}

pub fn starting_player() -> impl Strategy<Value = StartingPlayer> {
    prop_oneof![Just(StartingPlayer::Inviter), Just(StartingPlayer::Invitee)]
}

/// Mostly single letters, some whole words, the odd blank.
pub fn raw_guess() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => "[a-zA-Z]",
        2 => "[a-z]{2,8}",
        1 => Just("   ".to_string()),
    ]
}

pub fn guesses(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(raw_guess(), 1..=max)
}

pub fn session(variant: Variant, word: &str, starting: StartingPlayer) -> GameSession {
    GameSession::new(SessionId::new(), ALICE, BOB, variant, word, starting)
}
