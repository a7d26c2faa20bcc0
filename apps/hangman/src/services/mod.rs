//! Concurrency and lifecycle around the pure domain: registries, timers and
//! the service facade.

pub mod events;
pub mod games;
pub mod invites;
pub mod sessions;
pub mod timeout;

pub use events::{Announcer, ChannelAnnouncer, GameEvent, NoopAnnouncer};
pub use games::GameService;
pub use invites::InviteRegistry;
pub use sessions::{SessionHandle, SessionRegistry};
pub use timeout::{SessionExpiry, TimeoutSupervisor};
