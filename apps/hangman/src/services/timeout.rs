//! Per-session wall-clock limit.
//!
//! Each session gets one background task that polls its age on a fixed
//! interval. When the limit is passed the task hands the session to the
//! owning service's expiry path and exits. The session's cancellation token
//! stops the task as soon as the game ends through play.

use std::sync::{Arc, Weak};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::sessions::SessionHandle;
use crate::domain::SessionView;
use crate::error::AppError;
use crate::errors::DomainError;

/// The termination path a supervisor calls once a session overstays.
///
/// Implementations force the timeout under the session lock, deregister the
/// players and announce the end. A session that already ended must yield
/// `NotActive` and have no side effects.
pub trait SessionExpiry: Send + Sync + 'static {
    fn expire(&self, handle: &Arc<SessionHandle>) -> Result<SessionView, DomainError>;
}

/// Spawns one watcher per session onto the runtime it was created in, so
/// sessions may be started from any thread.
#[derive(Debug, Clone)]
pub struct TimeoutSupervisor {
    time_limit: Duration,
    check_interval: Duration,
    runtime: Handle,
}

impl TimeoutSupervisor {
    /// Fails on zero durations, and when called outside a Tokio runtime.
    pub fn new(time_limit: Duration, check_interval: Duration) -> Result<Self, AppError> {
        if time_limit.is_zero() {
            return Err(AppError::config("session time limit must be greater than zero"));
        }
        if check_interval.is_zero() {
            return Err(AppError::config("timeout check interval must be greater than zero"));
        }
        let runtime = Handle::try_current().map_err(|e| {
            AppError::config(format!("timeout supervisor needs a Tokio runtime: {e}"))
        })?;
        Ok(Self {
            time_limit,
            check_interval,
            runtime,
        })
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    pub fn check_interval(&self) -> Duration {
        self.check_interval
    }

    /// Whether a session started at `started_at` has run past the limit.
    pub fn is_overdue(&self, started_at: Instant) -> bool {
        started_at.elapsed() > self.time_limit
    }

    /// Starts watching `handle`. The task holds only a weak reference to the
    /// service, so a dropped service ends it on the next tick.
    pub fn spawn<E: SessionExpiry>(
        &self,
        expiry: Weak<E>,
        handle: Arc<SessionHandle>,
    ) -> JoinHandle<()> {
        let supervisor = self.clone();
        self.runtime
            .spawn(async move { supervisor.run(expiry, handle).await })
    }

    async fn run<E: SessionExpiry>(self, expiry: Weak<E>, handle: Arc<SessionHandle>) {
        let session_id = handle.id();
        let cancel = handle.cancel_token().clone();
        let mut ticker = interval_at(Instant::now() + self.check_interval, self.check_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        debug!(session_id = %session_id, limit_secs = self.time_limit.as_secs(), "timeout supervisor started");

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!(session_id = %session_id, "timeout supervisor cancelled");
                    return;
                }
                _ = ticker.tick() => {
                    if !self.is_overdue(handle.started_at()) {
                        continue;
                    }
                    let Some(expiry) = expiry.upgrade() else {
                        debug!(session_id = %session_id, "service gone; supervisor exiting");
                        return;
                    };
                    match expiry.expire(&handle) {
                        Ok(view) => {
                            info!(session_id = %session_id, mistakes = view.mistakes, "session timed out");
                        }
                        Err(DomainError::NotActive) => {
                            debug!(session_id = %session_id, "late tick on finished session");
                        }
                        Err(err) => {
                            warn!(session_id = %session_id, error = %err, "timeout expiry failed");
                        }
                    }
                    return;
                }
            }
        }
    }
}
