//! Domain-level error type returned by every session-mutating operation.
//!
//! Every variant is an expected, recoverable condition. Operations that fail
//! with a `DomainError` leave sessions and registries untouched; presenting the
//! condition to a player is the caller's job.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::PlayerId;
use crate::errors::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Inviter or invitee already has an active session or a pending invite.
    AlreadyInSession { player: PlayerId },
    /// No (unexpired) invite is waiting for this player.
    NoPendingInvite { invitee: PlayerId },
    /// The inviter joined another session before the invite was accepted.
    InviterBusy { inviter: PlayerId },
    /// The session already reached a terminal status.
    NotActive,
    /// The actor is not one of the two session participants.
    NotAParticipant { player: PlayerId },
    /// The actor is a participant but it is the other player's turn.
    NotYourTurn { player: PlayerId, turn: PlayerId },
    /// A player tried to invite themselves.
    SelfInvite { player: PlayerId },
    /// The guess was empty after trimming whitespace.
    EmptyGuess,
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::AlreadyInSession { player } => {
                write!(f, "player {player} is already in a game or invite")
            }
            DomainError::NoPendingInvite { invitee } => {
                write!(f, "no pending invite for player {invitee}")
            }
            DomainError::InviterBusy { inviter } => {
                write!(f, "inviter {inviter} is already in another game")
            }
            DomainError::NotActive => write!(f, "game is no longer active"),
            DomainError::NotAParticipant { player } => {
                write!(f, "player {player} is not part of this game")
            }
            DomainError::NotYourTurn { player, turn } => {
                write!(f, "not {player}'s turn (waiting on {turn})")
            }
            DomainError::SelfInvite { player } => {
                write!(f, "player {player} cannot invite themselves")
            }
            DomainError::EmptyGuess => write!(f, "guess is empty"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    /// Stable machine-readable code for this condition.
    pub const fn code(&self) -> ErrorCode {
        match self {
            DomainError::AlreadyInSession { .. } => ErrorCode::AlreadyInSession,
            DomainError::NoPendingInvite { .. } => ErrorCode::NoPendingInvite,
            DomainError::InviterBusy { .. } => ErrorCode::InviterBusy,
            DomainError::NotActive => ErrorCode::NotActive,
            DomainError::NotAParticipant { .. } => ErrorCode::NotAParticipant,
            DomainError::NotYourTurn { .. } => ErrorCode::NotYourTurn,
            DomainError::SelfInvite { .. } => ErrorCode::SelfInvite,
            DomainError::EmptyGuess => ErrorCode::EmptyGuess,
        }
    }
}
