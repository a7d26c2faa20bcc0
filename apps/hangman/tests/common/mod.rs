#![allow(dead_code)]

use std::sync::Arc;

use hangman::{
    ChannelAnnouncer, GameConfig, GameEvent, GameService, PlayerId, SessionView, Variant, WordList,
};
use tokio::sync::mpsc::UnboundedReceiver;

pub const ALICE: PlayerId = PlayerId(1);
pub const BOB: PlayerId = PlayerId(2);
pub const CAROL: PlayerId = PlayerId(3);
pub const DAVE: PlayerId = PlayerId(4);

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    hangman_test_support::logging::init();
}

/// Service whose vocabulary is exactly `word`.
pub fn service(word: &str, config: GameConfig) -> (GameService, UnboundedReceiver<GameEvent>) {
    let words = WordList::from_words([word], Some(5)).expect("word list");
    let (announcer, events) = ChannelAnnouncer::new();
    let service = GameService::new(&config, Arc::new(words), Arc::new(announcer)).expect("service");
    (service, events)
}

/// Invites and accepts; returns the starting view.
pub fn start(service: &GameService, inviter: PlayerId, invitee: PlayerId) -> SessionView {
    service
        .invite(inviter, invitee, Variant::Gallows)
        .expect("invite");
    service.accept(invitee).expect("accept")
}

pub fn opponent(view: &SessionView, player: PlayerId) -> PlayerId {
    if view.players[0] == player {
        view.players[1]
    } else {
        view.players[0]
    }
}

/// Every event currently queued.
pub fn drain(events: &mut UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut out = Vec::new();
    while let Ok(event) = events.try_recv() {
        out.push(event);
    }
    out
}
