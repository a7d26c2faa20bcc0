//! Line syntax for the console adapter.
//!
//! ```text
//! [#channel] player: message
//! ```
//!
//! Messages starting with `/` are commands; anything else is a guess.

use thiserror::Error;

use crate::domain::Variant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub channel: Option<&'a str>,
    pub player: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Invite { opponent: String, variant: Variant },
    Accept,
    Decline,
    Status,
    Guess(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("expected `player: message`")]
    Malformed,
    #[error("usage: /invite <player> [gallows|exercise]")]
    MissingOpponent,
    #[error("unknown layout `{0}` (try gallows or exercise)")]
    UnknownVariant(String),
    #[error("unknown command `/{0}`")]
    UnknownCommand(String),
}

/// Splits a raw line. Blank lines yield `None`.
pub fn split_line(raw: &str) -> Option<Result<Line<'_>, CommandError>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let (channel, rest) = match raw.strip_prefix('#') {
        Some(tagged) => match tagged.split_once(char::is_whitespace) {
            Some((channel, rest)) => (Some(channel), rest.trim_start()),
            None => return Some(Err(CommandError::Malformed)),
        },
        None => (None, raw),
    };

    Some(match rest.split_once(':') {
        Some((player, message)) if !player.trim().is_empty() => Ok(Line {
            channel,
            player: player.trim(),
            message: message.trim(),
        }),
        _ => Err(CommandError::Malformed),
    })
}

pub fn parse_command(message: &str) -> Result<Command, CommandError> {
    let Some(command) = message.strip_prefix('/') else {
        return Ok(Command::Guess(message.to_string()));
    };

    let mut words = command.split_whitespace();
    let name = words.next().unwrap_or_default().to_lowercase();
    match name.as_str() {
        "invite" => {
            let opponent = words
                .next()
                .map(|o| o.trim_start_matches('@').to_string())
                .filter(|o| !o.is_empty())
                .ok_or(CommandError::MissingOpponent)?;
            let variant = match words.next() {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| CommandError::UnknownVariant(raw.to_string()))?,
                None => Variant::default(),
            };
            Ok(Command::Invite { opponent, variant })
        }
        "accept" => Ok(Command::Accept),
        "decline" => Ok(Command::Decline),
        "status" => Ok(Command::Status),
        _ => Err(CommandError::UnknownCommand(name)),
    }
}
