//! Channel allowlist for the chat adapter.
//!
//! The core never consults this itself; adapters check the gate before
//! routing a message into the service.

use std::env;

/// Where a message came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelContext {
    pub channel: String,
}

impl ChannelContext {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelCheck {
    Allowed,
    /// No channels configured at all.
    NotConfigured,
    WrongChannel,
}

pub trait ChannelGate: Send + Sync {
    fn check(&self, ctx: &ChannelContext) -> ChannelCheck;

    fn is_authorized(&self, ctx: &ChannelContext) -> bool {
        self.check(ctx) == ChannelCheck::Allowed
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChannelAllowlist {
    channels: Vec<String>,
}

impl ChannelAllowlist {
    /// Parses a comma-separated list, dropping blanks. Names compare
    /// case-insensitively.
    pub fn parse(raw: &str) -> Self {
        Self {
            channels: raw
                .split(',')
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Reads `HANGMAN_CHANNELS`. Unset yields an empty (deny-all) list.
    pub fn from_env() -> Self {
        env::var("HANGMAN_CHANNELS")
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl ChannelGate for ChannelAllowlist {
    fn check(&self, ctx: &ChannelContext) -> ChannelCheck {
        if self.channels.is_empty() {
            return ChannelCheck::NotConfigured;
        }
        let wanted = ctx.channel.trim().to_lowercase();
        if self.channels.iter().any(|c| *c == wanted) {
            ChannelCheck::Allowed
        } else {
            ChannelCheck::WrongChannel
        }
    }
}
