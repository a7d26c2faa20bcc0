//! Session registry: which player is in which game.
//!
//! Both participants map to the same [`SessionHandle`]. The registry itself
//! is not synchronized; [`GameService`](super::games::GameService) keeps it
//! behind the lobby lock together with the invite registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::domain::{GameSession, PlayerId, SessionId};
use crate::errors::DomainError;

/// Shared handle to one live session.
///
/// The mutex serializes guesses and the timeout path; the cancellation token
/// stops the session's timeout supervisor.
#[derive(Debug)]
pub struct SessionHandle {
    id: SessionId,
    players: [PlayerId; 2],
    started_at: Instant,
    state: Mutex<GameSession>,
    announce: Mutex<()>,
    cancel: CancellationToken,
}

impl SessionHandle {
    pub fn new(session: GameSession) -> Self {
        Self {
            id: session.id(),
            players: session.players(),
            started_at: session.started_at(),
            state: Mutex::new(session),
            announce: Mutex::new(()),
            cancel: CancellationToken::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn players(&self) -> [PlayerId; 2] {
        self.players
    }

    /// Copy of the session's creation instant, readable without the lock.
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn lock(&self) -> MutexGuard<'_, GameSession> {
        self.state.lock()
    }

    /// Orders this session's announcements: held while announcing its start
    /// and its end. Never taken together with the state lock.
    pub fn announce_lock(&self) -> MutexGuard<'_, ()> {
        self.announce.lock()
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }
}

#[derive(Debug, Default)]
pub struct SessionRegistry {
    by_player: HashMap<PlayerId, Arc<SessionHandle>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps both participants to `handle`. Fails without touching the map if
    /// either of them is already in a session.
    pub fn register(&mut self, handle: Arc<SessionHandle>) -> Result<(), DomainError> {
        if let Some(busy) = handle.players().into_iter().find(|p| self.is_busy(*p)) {
            return Err(DomainError::AlreadyInSession { player: busy });
        }
        for player in handle.players() {
            self.by_player.insert(player, handle.clone());
        }
        Ok(())
    }

    pub fn lookup(&self, player: PlayerId) -> Option<Arc<SessionHandle>> {
        self.by_player.get(&player).cloned()
    }

    pub fn find(&self, id: SessionId) -> Option<Arc<SessionHandle>> {
        self.by_player.values().find(|h| h.id() == id).cloned()
    }

    /// Removes both participant mappings, but only those still pointing at
    /// this session. Returns whether anything was removed.
    pub fn unregister(&mut self, handle: &SessionHandle) -> bool {
        let mut removed = false;
        for player in handle.players() {
            if self
                .by_player
                .get(&player)
                .is_some_and(|current| current.id() == handle.id())
            {
                self.by_player.remove(&player);
                removed = true;
            }
        }
        removed
    }

    pub fn is_busy(&self, player: PlayerId) -> bool {
        self.by_player.contains_key(&player)
    }

    pub fn active_count(&self) -> usize {
        self.by_player.len() / 2
    }

    /// Drains every handle (one per session).
    pub fn drain(&mut self) -> Vec<Arc<SessionHandle>> {
        let mut seen = Vec::new();
        for (_, handle) in self.by_player.drain() {
            if !seen.iter().any(|h: &Arc<SessionHandle>| h.id() == handle.id()) {
                seen.push(handle);
            }
        }
        seen
    }
}
