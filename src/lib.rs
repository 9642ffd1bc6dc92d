//! Wordle Sessions
//!
//! Concurrent Wordle games for chat bots: every chat session plays its own game
//! against a random dictionary word, with colored feedback, cumulative hints and
//! an inactivity timeout.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sessions::core::{Feedback, Word};
//!
//! let guess = Word::new("paper").unwrap();
//! let target = Word::new("apple").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &target);
//! assert_eq!(feedback.to_emoji(), "🟨🟨🟩🟨⬜");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Single-game state machine
pub mod game;

// Session registry and inactivity timers
pub mod session;

// Word data
pub mod wordlists;

// Terminal output formatting
pub mod output;
