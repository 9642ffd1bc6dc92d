//! Core domain types for Wordle
//!
//! This module contains the fundamental word and feedback types. Everything here
//! is pure and independent of sessions or timers.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterFeedback};
pub use word::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word};
