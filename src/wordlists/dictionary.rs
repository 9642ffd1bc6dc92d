//! Named dictionaries of candidate target words

use crate::core::Word;
use std::collections::BTreeMap;

/// A target word and its definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub word: String,
    pub meaning: String,
}

/// A named list of target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    name: String,
    entries: Vec<DictionaryEntry>,
}

impl Dictionary {
    /// Build a dictionary, dropping words that cannot be played
    #[must_use]
    pub fn new<I, W, M>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (W, M)>,
        W: Into<String>,
        M: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(word, meaning)| DictionaryEntry {
                word: word.into(),
                meaning: meaning.into(),
            })
            .filter(|entry| Word::new(entry.word.as_str()).is_ok())
            .collect();

        Self {
            name: name.into(),
            entries,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.iter()
    }

    /// Entries whose word has exactly `length` letters
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.word.len() == length)
    }

    /// Word count per length
    #[must_use]
    pub fn length_counts(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.word.len()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unplayable_words_are_dropped() {
        let dict = Dictionary::new(
            "TEST",
            [
                ("apple", "fruit"),
                ("ox", "too short"),
                ("well-being", "punctuation"),
                ("cat", "animal"),
            ],
        );
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.name(), "TEST");
    }

    #[test]
    fn filter_by_length() {
        let dict = Dictionary::new("TEST", [("apple", "a"), ("cat", "b"), ("crane", "c")]);
        let five: Vec<_> = dict.words_of_length(5).map(|e| e.word.as_str()).collect();
        assert_eq!(five, vec!["apple", "crane"]);
        assert_eq!(dict.words_of_length(7).count(), 0);
    }

    #[test]
    fn counts_per_length() {
        let dict = Dictionary::new("TEST", [("apple", "a"), ("cat", "b"), ("crane", "c")]);
        let counts = dict.length_counts();
        assert_eq!(counts.get(&3), Some(&1));
        assert_eq!(counts.get(&5), Some(&2));
    }
}
