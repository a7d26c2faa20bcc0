//! Lifecycle events pushed to whatever adapter fronts the service.

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::SessionView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    SessionStarted { view: SessionView },
    SessionEnded { view: SessionView },
}

impl GameEvent {
    pub fn view(&self) -> &SessionView {
        match self {
            GameEvent::SessionStarted { view } | GameEvent::SessionEnded { view } => view,
        }
    }
}

/// Receives lifecycle events. Called from timer tasks as well as from the
/// caller's task, so implementations must not block.
///
/// No service lock is held during the call: implementations may query the
/// service (`session_for`, `pending_invite`, `active_sessions`). They must not
/// submit guesses or force timeouts on the session being announced.
pub trait Announcer: Send + Sync {
    fn announce(&self, event: GameEvent);
}

/// Forwards events into an unbounded tokio channel.
#[derive(Debug, Clone)]
pub struct ChannelAnnouncer {
    tx: mpsc::UnboundedSender<GameEvent>,
}

impl ChannelAnnouncer {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Announcer for ChannelAnnouncer {
    fn announce(&self, event: GameEvent) {
        if self.tx.send(event).is_err() {
            warn!("announcement dropped: receiver closed");
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnnouncer;

impl Announcer for NoopAnnouncer {
    fn announce(&self, _event: GameEvent) {}
}
