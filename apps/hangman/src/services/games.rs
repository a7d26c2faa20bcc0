//! The game service: the one entry point adapters talk to.
//!
//! Locking rules:
//! - the lobby mutex guards the invite and session registries together, so
//!   accepting an invite is one atomic step;
//! - each session has its own mutex, taken for guesses and timeouts;
//! - the two are never held at the same time. Whoever performs a session's
//!   terminal transition releases the session lock, then deregisters and
//!   announces. That caller is unique, so every end is announced once.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::Instant;
use tracing::{debug, info};

use super::events::{Announcer, GameEvent};
use super::invites::InviteRegistry;
use super::sessions::{SessionHandle, SessionRegistry};
use super::timeout::{SessionExpiry, TimeoutSupervisor};
use crate::config::GameConfig;
use crate::domain::{
    GameSession, GuessOutcome, Invite, PlayerId, SessionId, SessionView, StartingPlayer, Variant,
    WordList, WordSource,
};
use crate::error::AppError;
use crate::errors::DomainError;

struct Lobby {
    invites: InviteRegistry,
    sessions: SessionRegistry,
}

struct Inner {
    lobby: Mutex<Lobby>,
    words: Arc<dyn WordSource>,
    announcer: Arc<dyn Announcer>,
    supervisor: TimeoutSupervisor,
    rng: Mutex<StdRng>,
}

/// Cheap to clone; all clones share the same registries.
#[derive(Clone)]
pub struct GameService {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for GameService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameService")
            .field("supervisor", &self.inner.supervisor)
            .finish_non_exhaustive()
    }
}

impl GameService {
    /// Validates the config and binds timeout supervision to the current
    /// Tokio runtime; the service itself may then be used from any thread.
    pub fn new(
        config: &GameConfig,
        words: Arc<dyn WordSource>,
        announcer: Arc<dyn Announcer>,
    ) -> Result<Self, AppError> {
        config.validate()?;
        let supervisor = TimeoutSupervisor::new(config.time_limit, config.check_interval)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            inner: Arc::new(Inner {
                lobby: Mutex::new(Lobby {
                    invites: InviteRegistry::new(config.invite_ttl),
                    sessions: SessionRegistry::new(),
                }),
                words,
                announcer,
                supervisor,
                rng: Mutex::new(rng),
            }),
        })
    }

    /// Builds the service with the word list named by the config, or the
    /// built-in vocabulary.
    pub fn from_config(config: &GameConfig, announcer: Arc<dyn Announcer>) -> Result<Self, AppError> {
        let words = match &config.words_file {
            Some(path) => WordList::load(path, config.seed)?,
            None => WordList::builtin(config.seed)?,
        };
        Self::new(config, Arc::new(words), announcer)
    }

    pub fn invite(
        &self,
        inviter: PlayerId,
        invitee: PlayerId,
        variant: Variant,
    ) -> Result<Invite, DomainError> {
        let now = Instant::now();
        let mut lobby = self.inner.lobby.lock();
        let Lobby { invites, sessions } = &mut *lobby;
        let invite = invites
            .invite(inviter, invitee, variant, sessions, now)
            .inspect_err(|err| {
                debug!(inviter = %inviter, invitee = %invitee, error = %err, "invite rejected")
            })?;
        info!(inviter = %inviter, invitee = %invitee, variant = %variant, "invite created");
        Ok(invite)
    }

    /// Accepts the invitee's pending invite and starts the session.
    pub fn accept(&self, invitee: PlayerId) -> Result<SessionView, DomainError> {
        let now = Instant::now();
        let mut lobby = self.inner.lobby.lock();
        let Lobby { invites, sessions } = &mut *lobby;

        let mut started = None;
        let handle = invites
            .accept(invitee, sessions, now, |invite| {
                let session = self.inner.new_session(invite);
                started = Some(session.view());
                SessionHandle::new(session)
            })
            .inspect_err(|err| debug!(invitee = %invitee, error = %err, "accept rejected"))?;
        let view = started.unwrap_or_else(|| handle.lock().view());

        // Taken while the lobby still hides the session, so any end waits for
        // the start announcement. Announcers run without the lobby lock.
        let announcing = handle.announce_lock();
        drop(lobby);

        self.inner
            .supervisor
            .spawn(Arc::downgrade(&self.inner), handle.clone());
        info!(
            session_id = %view.session_id,
            inviter = %view.players[0],
            invitee = %view.players[1],
            variant = %view.variant,
            "session started"
        );
        self.inner.announcer.announce(GameEvent::SessionStarted { view: view.clone() });
        drop(announcing);
        Ok(view)
    }

    pub fn decline(&self, invitee: PlayerId) -> Result<Invite, DomainError> {
        let declined = self
            .inner
            .lobby
            .lock()
            .invites
            .decline(invitee, Instant::now())
            .inspect_err(|err| debug!(invitee = %invitee, error = %err, "decline rejected"))?;
        info!(inviter = %declined.inviter, invitee = %invitee, "invite declined");
        Ok(declined)
    }

    /// Routes a guess to the actor's session. A player with no session is
    /// not a participant of anything.
    pub fn submit_guess(&self, actor: PlayerId, raw: &str) -> Result<GuessOutcome, DomainError> {
        let handle = self
            .inner
            .lobby
            .lock()
            .sessions
            .lookup(actor)
            .ok_or(DomainError::NotAParticipant { player: actor })?;

        let result = handle.lock().submit_guess(actor, raw);
        let outcome = result.inspect_err(|err| {
            debug!(session_id = %handle.id(), player = %actor, error = %err, "guess rejected")
        })?;

        debug!(
            session_id = %handle.id(),
            player = %actor,
            kind = ?outcome.kind,
            mistakes = outcome.view.mistakes,
            "guess applied"
        );
        if outcome.is_terminal() {
            self.inner.finish(&handle, outcome.view.clone());
        }
        Ok(outcome)
    }

    /// Ends a session as timed out. Sessions that already ended (and are
    /// therefore deregistered) report `NotActive`.
    pub fn force_timeout(&self, session_id: SessionId) -> Result<SessionView, DomainError> {
        let handle = self
            .inner
            .lobby
            .lock()
            .sessions
            .find(session_id)
            .ok_or(DomainError::NotActive)?;
        self.inner.expire(&handle)
    }

    pub fn session_for(&self, player: PlayerId) -> Option<SessionView> {
        let handle = self.inner.lobby.lock().sessions.lookup(player)?;
        let view = handle.lock().view();
        Some(view)
    }

    pub fn pending_invite(&self, invitee: PlayerId) -> Option<Invite> {
        self.inner
            .lobby
            .lock()
            .invites
            .pending_for(invitee, Instant::now())
            .cloned()
    }

    pub fn active_sessions(&self) -> usize {
        self.inner.lobby.lock().sessions.active_count()
    }

    /// Forgets every session and invite and stops all supervisors. Sessions
    /// are dropped without an end announcement.
    pub fn shutdown(&self) {
        let handles = {
            let mut lobby = self.inner.lobby.lock();
            lobby.invites.clear();
            lobby.sessions.drain()
        };
        for handle in &handles {
            handle.cancel_token().cancel();
        }
        info!(sessions = handles.len(), "game service shut down");
    }
}

impl Inner {
    fn new_session(&self, invite: &Invite) -> GameSession {
        let starting = StartingPlayer::random(&mut *self.rng.lock());
        GameSession::new(
            SessionId::new(),
            invite.inviter,
            invite.invitee,
            invite.variant,
            self.words.random_word(),
            starting,
        )
    }

    /// Post-terminal bookkeeping. Only the caller that made the session
    /// terminal may call this, with the session lock already released.
    fn finish(&self, handle: &SessionHandle, view: SessionView) {
        handle.cancel_token().cancel();
        self.lobby.lock().sessions.unregister(handle);
        let _announcing = handle.announce_lock();
        info!(
            session_id = %view.session_id,
            status = ?view.status,
            mistakes = view.mistakes,
            "session ended"
        );
        self.announcer.announce(GameEvent::SessionEnded { view });
    }
}

impl SessionExpiry for Inner {
    fn expire(&self, handle: &Arc<SessionHandle>) -> Result<SessionView, DomainError> {
        let view = {
            let mut session = handle.lock();
            session.force_timeout()?;
            session.view()
        };
        self.finish(handle, view.clone());
        Ok(view)
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        for handle in self.lobby.get_mut().sessions.drain() {
            handle.cancel_token().cancel();
        }
    }
}
