//! Stdin stand-in for a chat platform.
//!
//! Each input line is one chat message. Player names are mapped to stable
//! numeric ids on first sight.

pub mod commands;
pub mod render;

use std::collections::HashMap;

use tracing::debug;

use self::commands::{parse_command, split_line, Command};
use crate::config::{ChannelCheck, ChannelContext, ChannelGate};
use crate::domain::{PlayerId, StageTable};
use crate::services::{GameEvent, GameService};

#[derive(Debug, Default)]
struct Roster {
    ids: HashMap<String, PlayerId>,
    names: HashMap<PlayerId, String>,
}

impl Roster {
    fn id_for(&mut self, name: &str) -> PlayerId {
        let key = name.to_lowercase();
        if let Some(id) = self.ids.get(&key) {
            return *id;
        }
        let id = PlayerId(self.ids.len() as u64 + 1);
        self.ids.insert(key, id);
        self.names.insert(id, name.to_string());
        id
    }

    fn get(&self, name: &str) -> Option<PlayerId> {
        self.ids.get(&name.to_lowercase()).copied()
    }

    fn name(&self, player: PlayerId) -> String {
        self.names
            .get(&player)
            .cloned()
            .unwrap_or_else(|| player.to_string())
    }
}

pub struct Console<G, S> {
    service: GameService,
    gate: G,
    stages: S,
    default_channel: String,
    roster: Roster,
}

impl<G: ChannelGate, S: StageTable> Console<G, S> {
    pub fn new(service: GameService, gate: G, stages: S, default_channel: impl Into<String>) -> Self {
        Self {
            service,
            gate,
            stages,
            default_channel: default_channel.into(),
            roster: Roster::default(),
        }
    }

    pub fn player_id(&mut self, name: &str) -> PlayerId {
        self.roster.id_for(name)
    }

    /// Handles one input line and returns the reply, if any. Ordinary chat
    /// from players who are not in a game gets no reply.
    pub fn handle_line(&mut self, raw: &str) -> Option<String> {
        let line = match split_line(raw)? {
            Ok(line) => line,
            Err(err) => return Some(err.to_string()),
        };

        let ctx = ChannelContext::new(line.channel.unwrap_or(self.default_channel.as_str()));
        let refusal = match self.gate.check(&ctx) {
            ChannelCheck::Allowed => None,
            ChannelCheck::NotConfigured => Some("hangman is not set up for any channel".to_string()),
            ChannelCheck::WrongChannel => {
                Some(format!("hangman can't be played in #{}", ctx.channel))
            }
        };
        if let Some(refusal) = refusal {
            // Only commands and players mid-game hear about it.
            if line.message.starts_with('/') || self.is_playing(line.player) {
                return Some(refusal);
            }
            debug!(channel = %ctx.channel, "chatter from unlisted channel ignored");
            return None;
        }

        let player = self.roster.id_for(line.player);
        let command = match parse_command(line.message) {
            Ok(command) => command,
            Err(err) => return Some(err.to_string()),
        };
        self.run(player, command)
    }

    fn run(&mut self, player: PlayerId, command: Command) -> Option<String> {
        let reply = match command {
            Command::Invite { opponent, variant } => {
                let invitee = self.roster.id_for(&opponent);
                self.service
                    .invite(player, invitee, variant)
                    .map(|invite| render::invite(&invite, &self.stages, &self.names()))
            }
            Command::Accept => self.service.accept(player).map(|view| {
                format!(
                    "{} accepted {}'s invite",
                    self.roster.name(player),
                    self.roster.name(view.players[0])
                )
            }),
            Command::Decline => self.service.decline(player).map(|invite| {
                format!(
                    "{} declined {}'s invite",
                    self.roster.name(player),
                    self.roster.name(invite.inviter)
                )
            }),
            Command::Status => Ok(match self.service.session_for(player) {
                Some(view) => render::board(&view, &self.stages, &self.names()),
                None => format!("{} is not in a game", self.roster.name(player)),
            }),
            Command::Guess(text) => {
                self.service.session_for(player)?;
                self.service
                    .submit_guess(player, &text)
                    .map(|outcome| render::board(&outcome.view, &self.stages, &self.names()))
            }
        };
        Some(reply.unwrap_or_else(|err| render::rejection(&err, &self.names())))
    }

    fn is_playing(&self, name: &str) -> bool {
        self.roster
            .get(name)
            .is_some_and(|player| self.service.session_for(player).is_some())
    }

    pub fn render_event(&self, event: &GameEvent) -> String {
        render::event(event, &self.stages, &self.names())
    }

    fn names(&self) -> impl Fn(PlayerId) -> String + '_ {
        |player| self.roster.name(player)
    }
}
