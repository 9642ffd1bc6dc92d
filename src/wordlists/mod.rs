//! Word data for games
//!
//! Dictionaries supply target words with their meanings; the allowed list
//! widens the set of words accepted as guesses. Both are embedded at build time
//! and can be extended from files at startup.

mod bank;
mod dictionary;
mod embedded;
pub mod loader;

pub use bank::WordBank;
pub use dictionary::{Dictionary, DictionaryEntry};
pub use embedded::{ALLOWED, ALLOWED_COUNT, DICTIONARIES};

use crate::error::WordSourceError;

/// Where games get their targets and how guesses are judged legal
pub trait WordSource: Send + Sync {
    /// Whether `name` is a recognized dictionary
    fn has_dictionary(&self, name: &str) -> bool;

    /// Pick a random word of `length` letters from `dictionary`
    ///
    /// # Errors
    /// `UnknownDictionary` for unrecognized names, `NoWordsForLength` when the
    /// dictionary has no word of that length.
    fn pick_word(&self, dictionary: &str, length: usize)
    -> Result<DictionaryEntry, WordSourceError>;

    /// Whether `word` is accepted as a guess, in any letter case
    fn is_known_word(&self, word: &str) -> bool;
}
