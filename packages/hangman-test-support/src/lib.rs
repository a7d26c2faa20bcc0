//! Hangman test support utilities
//!
//! Shared helpers for the integration test binaries of the `hangman` crate,
//! currently the unified logging initialization.

pub mod logging;
