#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;

// Re-exports for public API
pub use config::{ChannelAllowlist, ChannelContext, ChannelGate, GameConfig};
pub use domain::{
    AsciiStages, GuessOutcome, Invite, OutcomeKind, PlayerId, SessionId, SessionStatus,
    SessionView, StageTable, Variant, WordList, WordSource,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use services::{Announcer, ChannelAnnouncer, GameEvent, GameService, NoopAnnouncer};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    hangman_test_support::logging::init();
}
