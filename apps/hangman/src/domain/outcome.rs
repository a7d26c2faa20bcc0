//! Values handed to external collaborators after every state change.
//!
//! Everything a chat adapter needs to render a board lives here; the core
//! never formats messages itself.

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::{PlayerId, RevealMask, SessionId, SessionStatus, Variant};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    WordGuessed,
    MistakeBudgetExceeded,
    TimedOut,
}

impl EndReason {
    pub const fn describe(self) -> &'static str {
        match self {
            EndReason::WordGuessed => "word guessed",
            EndReason::MistakeBudgetExceeded => "mistake budget exceeded",
            EndReason::TimedOut => "timed out",
        }
    }
}

/// What a single `submit_guess` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Game goes on; the turn passed to the other player.
    Continue,
    /// The whole word was guessed.
    WonByWord,
    /// The last hidden letter was revealed.
    WonByReveal,
    /// The mistake budget ran out.
    Lost,
}

impl OutcomeKind {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, OutcomeKind::Continue)
    }
}

/// Read-only snapshot of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub players: [PlayerId; 2],
    pub variant: Variant,
    pub status: SessionStatus,
    pub winner: Option<PlayerId>,
    pub reveal_mask: RevealMask,
    pub mistakes: u8,
    pub max_mistakes: u8,
    pub stage_index: u8,
    /// Whose move is next; `None` once the session is terminal.
    pub next_turn: Option<PlayerId>,
    /// Guessed letters, sorted and de-duplicated.
    pub guessed_letters: Vec<char>,
    pub word_length: usize,
    /// Only disclosed once the session is terminal.
    pub secret_word: Option<String>,
    pub end_reason: Option<EndReason>,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
}

impl SessionView {
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Human-readable reason for terminal sessions.
    ///
    /// Losses and timeouts include the secret word.
    pub fn reason(&self) -> Option<String> {
        let reason = self.end_reason?;
        Some(match (reason, &self.secret_word) {
            (EndReason::WordGuessed, _) | (_, None) => reason.describe().to_string(),
            (_, Some(word)) => format!("{}; the word was {word}", reason.describe()),
        })
    }

    /// Guessed letters as `A, C, T`.
    pub fn guessed_letters_display(&self) -> String {
        self.guessed_letters
            .iter()
            .map(|c| c.to_uppercase().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Result of a successful `submit_guess`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessOutcome {
    pub kind: OutcomeKind,
    pub actor: PlayerId,
    pub view: SessionView,
}

impl GuessOutcome {
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }
}
