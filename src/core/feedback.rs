//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified as:
//! - Correct (green): the letter sits at this position in the target
//! - Present (yellow): the letter occurs somewhere else in the target
//! - Absent (gray): the letter does not occur in the target
//!
//! Presence is a plain membership test. A letter repeated in the guess is
//! marked Present at every misplaced position, however many times it occurs in
//! the target.

use super::Word;
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Correct,
    Present,
    Absent,
}

impl LetterFeedback {
    /// Emoji square for this classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for one whole guess, one entry per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterFeedback>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Both words must have the same length.
    ///
    /// # Examples
    /// ```
    /// use wordle_sessions::core::{Feedback, LetterFeedback::*, Word};
    ///
    /// let guess = Word::new("paper").unwrap();
    /// let target = Word::new("apple").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.letters(), &[Present, Present, Correct, Present, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "guess and target lengths differ");

        let letters = guess
            .chars()
            .iter()
            .zip(target.chars())
            .map(|(&g, &t)| {
                if g == t {
                    LetterFeedback::Correct
                } else if target.has_letter(g) {
                    LetterFeedback::Present
                } else {
                    LetterFeedback::Absent
                }
            })
            .collect();

        Self(letters)
    }

    /// Per-position classifications
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterFeedback] {
        &self.0
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&f| f == LetterFeedback::Correct)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
