pub mod channel;
pub mod game;

pub use channel::{ChannelAllowlist, ChannelCheck, ChannelContext, ChannelGate};
pub use game::GameConfig;
