//! Per-chat game sessions
//!
//! The [`SessionRegistry`] owns every running game, keyed by an opaque session
//! id, and one inactivity timer per game. All mutation goes through the
//! registry; a timer can only remove the exact game instance it was armed for.

mod config;
mod registry;

pub use config::{DEFAULT_DICTIONARY, DEFAULT_LENGTH, DEFAULT_TIMEOUT, SessionConfig};
pub use registry::{HintOutcome, SessionRegistry, StartInfo, TimeoutNotice};
