use serde::Serialize;
use tokio::time::{Duration, Instant};

use crate::domain::{PlayerId, Variant};

/// A pending game invitation, keyed by its invitee in the invite registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invite {
    pub inviter: PlayerId,
    pub invitee: PlayerId,
    pub variant: Variant,
    #[serde(skip)]
    pub created_at: Instant,
}

impl Invite {
    pub fn new(inviter: PlayerId, invitee: PlayerId, variant: Variant, created_at: Instant) -> Self {
        Self {
            inviter,
            invitee,
            variant,
            created_at,
        }
    }

    pub fn involves(&self, player: PlayerId) -> bool {
        self.inviter == player || self.invitee == player
    }

    /// An invite expires once it is strictly older than `ttl`.
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) > ttl
    }
}
