//! Domain layer: pure hangman rules and session state.
//!
//! Nothing in here touches the clock beyond reading `Instant::now()` at
//! session creation, spawns tasks, or takes locks; the services layer owns
//! concurrency and lifecycle.

pub mod guess;
pub mod invite;
pub mod outcome;
pub mod player;
pub mod session;
pub mod stages;
pub mod variant;
pub mod words;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_session;
#[cfg(test)]
mod tests_session;

// Re-exports for ergonomics
pub use guess::{evaluate, Evaluation, Guess, RevealMask};
pub use invite::Invite;
pub use outcome::{EndReason, GuessOutcome, OutcomeKind, SessionView};
pub use player::{PlayerId, SessionId};
pub use session::{GameSession, SessionStatus, StartingPlayer};
pub use stages::{AsciiStages, StageTable};
pub use variant::Variant;
pub use words::{WordList, WordSource};
