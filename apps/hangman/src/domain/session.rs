//! One hangman match and its state machine.
//!
//! ```text
//! Active ──▶ Won { winner }
//!        ├─▶ LostMistakes
//!        └─▶ TimedOut
//! ```
//!
//! All terminal states are absorbing: once a session leaves `Active`, every
//! mutating call fails with [`DomainError::NotActive`] and the session is
//! left exactly as it was.

use std::collections::BTreeSet;

use rand::Rng;
use serde::Serialize;
use time::OffsetDateTime;
use tokio::time::Instant;

use crate::domain::guess::evaluate;
use crate::domain::outcome::{EndReason, GuessOutcome, OutcomeKind, SessionView};
use crate::domain::{Guess, PlayerId, RevealMask, SessionId, Variant};
use crate::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    Won { winner: PlayerId },
    LostMistakes,
    TimedOut,
}

impl SessionStatus {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::Active)
    }

    pub const fn end_reason(self) -> Option<EndReason> {
        match self {
            SessionStatus::Active => None,
            SessionStatus::Won { .. } => Some(EndReason::WordGuessed),
            SessionStatus::LostMistakes => Some(EndReason::MistakeBudgetExceeded),
            SessionStatus::TimedOut => Some(EndReason::TimedOut),
        }
    }
}

/// Which participant moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartingPlayer {
    Inviter,
    Invitee,
}

impl StartingPlayer {
    /// Fair coin flip.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            StartingPlayer::Inviter
        } else {
            StartingPlayer::Invitee
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    /// The inviter.
    player_a: PlayerId,
    /// The invitee.
    player_b: PlayerId,
    variant: Variant,
    secret_word: String,
    max_mistakes: u8,
    mistakes: u8,
    guessed_letters: BTreeSet<char>,
    correct_positions: usize,
    turn: PlayerId,
    started_at: Instant,
    started_wall: OffsetDateTime,
    status: SessionStatus,
}

impl GameSession {
    /// Creates an active session.
    ///
    /// `secret_word` is lowercased; callers (word sources) are expected to hand
    /// in non-empty alphabetic words.
    pub fn new(
        id: SessionId,
        inviter: PlayerId,
        invitee: PlayerId,
        variant: Variant,
        secret_word: impl Into<String>,
        starting: StartingPlayer,
    ) -> Self {
        debug_assert_ne!(inviter, invitee, "a session needs two distinct players");
        let turn = match starting {
            StartingPlayer::Inviter => inviter,
            StartingPlayer::Invitee => invitee,
        };
        Self {
            id,
            player_a: inviter,
            player_b: invitee,
            variant,
            secret_word: secret_word.into().to_lowercase(),
            max_mistakes: variant.max_mistakes(),
            mistakes: 0,
            guessed_letters: BTreeSet::new(),
            correct_positions: 0,
            turn,
            started_at: Instant::now(),
            started_wall: OffsetDateTime::now_utc(),
            status: SessionStatus::Active,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn players(&self) -> [PlayerId; 2] {
        [self.player_a, self.player_b]
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn max_mistakes(&self) -> u8 {
        self.max_mistakes
    }

    pub fn mistakes(&self) -> u8 {
        self.mistakes
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    pub fn correct_positions(&self) -> usize {
        self.correct_positions
    }

    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    pub fn is_participant(&self, player: PlayerId) -> bool {
        player == self.player_a || player == self.player_b
    }

    pub fn opponent_of(&self, player: PlayerId) -> Option<PlayerId> {
        if player == self.player_a {
            Some(self.player_b)
        } else if player == self.player_b {
            Some(self.player_a)
        } else {
            None
        }
    }

    /// `max_mistakes - mistakes`: the highest index is the most intact graphic.
    pub fn stage_index(&self) -> u8 {
        self.max_mistakes.saturating_sub(self.mistakes)
    }

    pub fn reveal_mask(&self) -> RevealMask {
        match self.status {
            SessionStatus::Won { .. } => RevealMask::fully_revealed(&self.secret_word),
            _ => RevealMask::compute(&self.secret_word, &self.guessed_letters),
        }
    }

    /// Applies one guess from `actor`.
    ///
    /// Rejections never touch the session. A letter that was already guessed
    /// costs nothing (even when it is absent from the word) but still uses up
    /// the turn; every wrong whole-word guess costs one mistake.
    pub fn submit_guess(&mut self, actor: PlayerId, raw: &str) -> Result<GuessOutcome, DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::NotActive);
        }
        if !self.is_participant(actor) {
            return Err(DomainError::NotAParticipant { player: actor });
        }
        if actor != self.turn {
            return Err(DomainError::NotYourTurn {
                player: actor,
                turn: self.turn,
            });
        }
        let evaluation =
            evaluate(&self.secret_word, &self.guessed_letters, raw).ok_or(DomainError::EmptyGuess)?;

        match evaluation.guess {
            Guess::Word(_) if evaluation.is_word_match => {
                self.correct_positions = evaluation.correct_positions;
                self.status = SessionStatus::Won { winner: actor };
                return Ok(self.outcome(OutcomeKind::WonByWord, actor));
            }
            Guess::Word(_) => {
                self.mistakes += 1;
            }
            Guess::Letter(letter) => {
                self.guessed_letters.insert(letter);
                if !evaluation.is_letter_present && !evaluation.is_repeat {
                    self.mistakes += 1;
                }
            }
        }

        if self.mistakes >= self.max_mistakes {
            self.correct_positions = evaluation.correct_positions;
            self.status = SessionStatus::LostMistakes;
            return Ok(self.outcome(OutcomeKind::Lost, actor));
        }

        self.correct_positions = evaluation.correct_positions;
        if self.correct_positions == self.secret_word.chars().count() {
            self.status = SessionStatus::Won { winner: actor };
            return Ok(self.outcome(OutcomeKind::WonByReveal, actor));
        }

        self.turn = if self.turn == self.player_a {
            self.player_b
        } else {
            self.player_a
        };
        Ok(self.outcome(OutcomeKind::Continue, actor))
    }

    /// Ends an active session because its time budget ran out.
    pub fn force_timeout(&mut self) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::NotActive);
        }
        self.status = SessionStatus::TimedOut;
        Ok(())
    }

    pub fn view(&self) -> SessionView {
        let terminal = self.status.is_terminal();
        SessionView {
            session_id: self.id,
            players: self.players(),
            variant: self.variant,
            status: self.status,
            winner: match self.status {
                SessionStatus::Won { winner } => Some(winner),
                _ => None,
            },
            reveal_mask: self.reveal_mask(),
            mistakes: self.mistakes,
            max_mistakes: self.max_mistakes,
            stage_index: self.stage_index(),
            next_turn: (!terminal).then_some(self.turn),
            guessed_letters: self.guessed_letters.iter().copied().collect(),
            word_length: self.secret_word.chars().count(),
            secret_word: terminal.then(|| self.secret_word.clone()),
            end_reason: self.status.end_reason(),
            started_at: self.started_wall,
        }
    }

    fn outcome(&self, kind: OutcomeKind, actor: PlayerId) -> GuessOutcome {
        GuessOutcome {
            kind,
            actor,
            view: self.view(),
        }
    }
}
