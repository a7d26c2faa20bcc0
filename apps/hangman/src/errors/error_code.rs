//! Error codes for the hangman core.
//!
//! Chat adapters key their user-facing messages off these codes. Add new codes
//! here; never pass ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Invites
    /// Player already in a game or pending invite
    AlreadyInSession,
    /// No pending invite to accept or decline
    NoPendingInvite,
    /// Inviter joined another game before acceptance
    InviterBusy,
    /// Player invited themselves
    SelfInvite,

    // Turns
    /// Game already finished
    NotActive,
    /// Player is not in this game
    NotAParticipant,
    /// Out of turn
    NotYourTurn,
    /// Empty guess
    EmptyGuess,

    // System Errors
    /// Configuration error
    ConfigError,
    /// Word list could not be loaded
    WordListError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AlreadyInSession => "ALREADY_IN_SESSION",
            Self::NoPendingInvite => "NO_PENDING_INVITE",
            Self::InviterBusy => "INVITER_BUSY",
            Self::SelfInvite => "SELF_INVITE",

            Self::NotActive => "NOT_ACTIVE",
            Self::NotAParticipant => "NOT_A_PARTICIPANT",
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::EmptyGuess => "EMPTY_GUESS",

            Self::ConfigError => "CONFIG_ERROR",
            Self::WordListError => "WORD_LIST_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
