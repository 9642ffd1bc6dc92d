//! The standard word source: dictionaries plus a legality set

use super::{ALLOWED, DICTIONARIES, Dictionary, DictionaryEntry, WordSource};
use crate::error::WordSourceError;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// Dictionaries keyed by name, plus every word accepted as a guess
///
/// Every dictionary word is also a legal guess.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    dictionaries: BTreeMap<String, Dictionary>,
    known: FxHashSet<String>,
}

impl WordBank {
    /// Bank with the dictionaries and allowed list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        DICTIONARIES
            .iter()
            .map(|&(name, entries)| Dictionary::new(name, entries.iter().copied()))
            .fold(Self::default(), Self::with_dictionary)
            .with_allowed(ALLOWED.iter().copied())
    }

    /// Bank with no dictionaries that accepts exactly `words` as guesses
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::default().with_allowed(words)
    }

    /// Add (or replace) a dictionary; its words become legal guesses
    #[must_use]
    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Self {
        self.known
            .extend(dictionary.entries().map(|entry| entry.word.to_lowercase()));
        self.dictionaries
            .insert(dictionary.name().to_string(), dictionary);
        self
    }

    /// Accept more words as guesses
    #[must_use]
    pub fn with_allowed<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.known.extend(
            words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty()),
        );
        self
    }

    /// Recognized dictionary names, sorted
    #[must_use]
    pub fn dictionary_names(&self) -> Vec<&str> {
        self.dictionaries.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn dictionary(&self, name: &str) -> Option<&Dictionary> {
        self.dictionaries.get(name)
    }

    /// Number of distinct legal guesses
    #[must_use]
    pub fn known_words(&self) -> usize {
        self.known.len()
    }
}

impl WordSource for WordBank {
    fn has_dictionary(&self, name: &str) -> bool {
        self.dictionaries.contains_key(name)
    }

    fn pick_word(
        &self,
        dictionary: &str,
        length: usize,
    ) -> Result<DictionaryEntry, WordSourceError> {
        let dict = self
            .dictionaries
            .get(dictionary)
            .ok_or_else(|| WordSourceError::UnknownDictionary(dictionary.to_string()))?;

        let candidates: Vec<&DictionaryEntry> = dict.words_of_length(length).collect();

        candidates
            .choose(&mut rand::rng())
            .map(|&entry| entry.clone())
            .ok_or_else(|| WordSourceError::NoWordsForLength {
                dictionary: dictionary.to_string(),
                length,
            })
    }

    fn is_known_word(&self, word: &str) -> bool {
        self.known.contains(&word.to_lowercase())
    }
}
