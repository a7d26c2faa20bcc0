//! Plain-text rendering of views, invites, events and rejections.

use std::fmt::Write as _;

use crate::domain::{Invite, PlayerId, SessionStatus, SessionView, StageTable};
use crate::errors::DomainError;
use crate::services::GameEvent;

/// Resolves player ids to display names.
pub trait Names {
    fn name(&self, player: PlayerId) -> String;
}

impl<F: Fn(PlayerId) -> String> Names for F {
    fn name(&self, player: PlayerId) -> String {
        self(player)
    }
}

pub fn board(view: &SessionView, stages: &dyn StageTable, names: &dyn Names) -> String {
    let [a, b] = view.players;
    let mut out = String::new();
    let _ = writeln!(out, "Hangman: {} vs {} [{}]", names.name(a), names.name(b), view.variant);
    let _ = writeln!(out, "{}", stages.graphic(view.variant, view.stage_index));
    let _ = writeln!(out, "Word: {} ({} letters)", view.reveal_mask, view.word_length);
    if !view.guessed_letters.is_empty() {
        let _ = writeln!(out, "Guessed: {}", view.guessed_letters_display());
    }
    let _ = write!(out, "Mistakes: {}/{}", view.mistakes, view.max_mistakes);

    match (view.status, view.next_turn) {
        (SessionStatus::Active, Some(turn)) => {
            let _ = write!(out, "\nTurn: {}", names.name(turn));
        }
        _ => {
            let _ = write!(out, "\n{}", result_line(view, names));
        }
    }
    out
}

/// One-line result for a terminal view.
pub fn result_line(view: &SessionView, names: &dyn Names) -> String {
    let reason = view.reason().unwrap_or_default();
    match view.winner {
        Some(winner) => format!("Winner: {} ({reason})", names.name(winner)),
        None => format!("No winner ({reason})"),
    }
}

pub fn invite(invite: &Invite, stages: &dyn StageTable, names: &dyn Names) -> String {
    let invitee = names.name(invite.invitee);
    format!(
        "{} invited {invitee} to hangman ({}, {} mistakes allowed)\n{}\n{invitee}: /accept or /decline",
        names.name(invite.inviter),
        invite.variant,
        invite.variant.max_mistakes(),
        stages.preview(invite.variant),
    )
}

pub fn event(event: &GameEvent, stages: &dyn StageTable, names: &dyn Names) -> String {
    match event {
        GameEvent::SessionStarted { view } => format!("Game on!\n{}", board(view, stages, names)),
        GameEvent::SessionEnded { view } => {
            let [a, b] = view.players;
            format!(
                "Game over! {} vs {} has ended. {}",
                names.name(a),
                names.name(b),
                result_line(view, names)
            )
        }
    }
}

pub fn rejection(err: &DomainError, names: &dyn Names) -> String {
    let text = match err {
        DomainError::AlreadyInSession { player } => {
            format!("{} is already in a game or has a pending invite", names.name(*player))
        }
        DomainError::NoPendingInvite { invitee } => {
            format!("{} has no pending invite", names.name(*invitee))
        }
        DomainError::InviterBusy { inviter } => {
            format!("{} has started another game in the meantime", names.name(*inviter))
        }
        DomainError::NotActive => "that game is already over".to_string(),
        DomainError::NotAParticipant { player } => {
            format!("{} is not playing", names.name(*player))
        }
        DomainError::NotYourTurn { turn, .. } => {
            format!("not your turn, waiting on {}", names.name(*turn))
        }
        DomainError::SelfInvite { .. } => "you can't invite yourself".to_string(),
        DomainError::EmptyGuess => "guess a letter or the whole word".to_string(),
    };
    format!("[{}] {text}", err.code())
}
