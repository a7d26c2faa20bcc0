//! Pending invitations, at most one per invitee.
//!
//! Like [`SessionRegistry`], this type is unsynchronized and lives behind the
//! lobby lock so that checking both registries and converting an invite into
//! a session is one atomic step.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::time::{Duration, Instant};
use tracing::debug;

use super::sessions::{SessionHandle, SessionRegistry};
use crate::domain::{Invite, PlayerId, Variant};
use crate::errors::DomainError;

#[derive(Debug)]
pub struct InviteRegistry {
    pending: HashMap<PlayerId, Invite>,
    ttl: Duration,
}

impl InviteRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            pending: HashMap::new(),
            ttl,
        }
    }

    /// Drops every invite older than the TTL. Returns how many were dropped.
    pub fn purge_expired(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.pending.len();
        self.pending.retain(|_, invite| {
            let keep = !invite.is_expired(now, ttl);
            if !keep {
                debug!(inviter = %invite.inviter, invitee = %invite.invitee, "invite expired");
            }
            keep
        });
        before - self.pending.len()
    }

    fn is_involved(&self, player: PlayerId) -> bool {
        self.pending.values().any(|invite| invite.involves(player))
    }

    pub fn invite(
        &mut self,
        inviter: PlayerId,
        invitee: PlayerId,
        variant: Variant,
        sessions: &SessionRegistry,
        now: Instant,
    ) -> Result<Invite, DomainError> {
        if inviter == invitee {
            return Err(DomainError::SelfInvite { player: inviter });
        }
        self.purge_expired(now);

        for player in [inviter, invitee] {
            if sessions.is_busy(player) || self.is_involved(player) {
                return Err(DomainError::AlreadyInSession { player });
            }
        }

        let invite = Invite::new(inviter, invitee, variant, now);
        self.pending.insert(invitee, invite.clone());
        Ok(invite)
    }

    /// Converts the invitee's pending invite into a registered session.
    ///
    /// `build` runs only once every check has passed. The invite is removed
    /// only after registration succeeds, so a rejected accept leaves it in
    /// place.
    pub fn accept<F>(
        &mut self,
        invitee: PlayerId,
        sessions: &mut SessionRegistry,
        now: Instant,
        build: F,
    ) -> Result<Arc<SessionHandle>, DomainError>
    where
        F: FnOnce(&Invite) -> SessionHandle,
    {
        self.purge_expired(now);

        let invite = self
            .pending
            .get(&invitee)
            .ok_or(DomainError::NoPendingInvite { invitee })?;
        if sessions.is_busy(invite.inviter) {
            return Err(DomainError::InviterBusy {
                inviter: invite.inviter,
            });
        }
        if sessions.is_busy(invitee) {
            return Err(DomainError::AlreadyInSession { player: invitee });
        }

        let handle = Arc::new(build(invite));
        sessions.register(handle.clone())?;
        self.pending.remove(&invitee);
        Ok(handle)
    }

    pub fn decline(&mut self, invitee: PlayerId, now: Instant) -> Result<Invite, DomainError> {
        self.purge_expired(now);
        self.pending
            .remove(&invitee)
            .ok_or(DomainError::NoPendingInvite { invitee })
    }

    /// The live invite addressed to `invitee`, if any.
    pub fn pending_for(&self, invitee: PlayerId, now: Instant) -> Option<&Invite> {
        self.pending
            .get(&invitee)
            .filter(|invite| !invite.is_expired(now, self.ttl))
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
