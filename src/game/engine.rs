//! Game engine: guess evaluation, hints and win/loss detection

use super::{Board, GuessOutcome, Hint, Reveal, Summary};
use crate::core::{Feedback, Word};
use crate::error::WordError;
use crate::wordlists::WordSource;
use rustc_hash::FxHashSet;

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// One round of Wordle against a hidden target
///
/// The target stays private until the game is won or lost; it only leaves
/// through [`GuessOutcome::Win`] and [`GuessOutcome::Loss`].
#[derive(Debug, Clone)]
pub struct Game {
    answer: String,
    meaning: String,
    target: Word,
    guesses: Vec<(Word, Feedback)>,
    state: GameState,
}

impl Game {
    /// Start a game against `answer`
    ///
    /// # Errors
    /// Returns `WordError` if `answer` is not a playable word.
    ///
    /// # Examples
    /// ```
    /// use wordle_sessions::game::Game;
    ///
    /// let game = Game::new("Crane", "a large wading bird").unwrap();
    /// assert_eq!(game.length(), 5);
    /// assert_eq!(game.max_attempts(), 6);
    /// ```
    pub fn new(answer: impl Into<String>, meaning: impl Into<String>) -> Result<Self, WordError> {
        let answer = answer.into();
        let target = Word::new(answer.as_str())?;

        Ok(Self {
            answer,
            meaning: meaning.into(),
            target,
            guesses: Vec::new(),
            state: GameState::InProgress,
        })
    }

    /// Letters in the target
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.target.len()
    }

    /// One more attempt than there are letters
    #[inline]
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.target.len() + 1
    }

    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts() - self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Guessed words in submission order, lowercase
    pub fn guesses(&self) -> impl Iterator<Item = &str> {
        self.guesses.iter().map(|(word, _)| word.text())
    }

    /// Evaluate a guess and advance the game
    ///
    /// Wrong-length, unknown and repeated words are rejected without using an
    /// attempt. Once the game is over the final outcome is reported again and
    /// nothing changes.
    pub fn submit_guess<S: WordSource + ?Sized>(&mut self, raw: &str, words: &S) -> GuessOutcome {
        match self.state {
            GameState::Won => return self.final_outcome(true),
            GameState::Lost => return self.final_outcome(false),
            GameState::InProgress => {}
        }

        let actual = raw.chars().count();
        if actual != self.length() {
            return GuessOutcome::WrongLength {
                expected: self.length(),
                actual,
            };
        }

        if !words.is_known_word(raw) {
            return GuessOutcome::Illegal {
                word: raw.to_string(),
            };
        }

        // A lexicon may accept shapes a playable word cannot have
        let Ok(guess) = Word::new(raw) else {
            return GuessOutcome::Illegal {
                word: raw.to_string(),
            };
        };

        if self.guesses.iter().any(|(word, _)| *word == guess) {
            return GuessOutcome::Duplicate {
                word: guess.text().to_string(),
            };
        }

        let feedback = Feedback::calculate(&guess, &self.target);
        let solved = feedback.is_perfect();
        self.guesses.push((guess, feedback.clone()));

        if solved {
            self.state = GameState::Won;
            return self.final_outcome(true);
        }

        if self.guesses.len() == self.max_attempts() {
            self.state = GameState::Lost;
            return self.final_outcome(false);
        }

        GuessOutcome::Continue {
            board: self.board(),
            feedback,
            remaining: self.remaining_attempts(),
        }
    }

    /// Reveal target letters that have shown up anywhere in any guess
    ///
    /// # Examples
    /// ```
    /// use wordle_sessions::game::Game;
    /// use wordle_sessions::wordlists::WordBank;
    ///
    /// let words = WordBank::from_words(["apple", "paper"]);
    /// let mut game = Game::new("apple", "").unwrap();
    /// assert!(game.hint().is_blank());
    ///
    /// game.submit_guess("paper", &words);
    /// assert_eq!(game.hint().to_string(), "app*e");
    /// ```
    #[must_use]
    pub fn hint(&self) -> Hint {
        let found: FxHashSet<u8> = self
            .guesses
            .iter()
            .flat_map(|(word, _)| word.chars().iter().copied())
            .filter(|&letter| self.target.has_letter(letter))
            .collect();

        Hint::new(
            self.target
                .chars()
                .iter()
                .map(|letter| found.contains(letter).then(|| char::from(*letter)))
                .collect(),
        )
    }

    /// Current board: one row per attempt, blanks for unused ones
    #[must_use]
    pub fn board(&self) -> Board {
        Board::from_guesses(self.length(), self.max_attempts(), &self.guesses)
    }

    /// Snapshot for a game ending by stop or timeout, if anything was guessed
    #[must_use]
    pub fn summary(&self) -> Option<Summary> {
        (!self.guesses.is_empty()).then(|| Summary {
            attempts_used: self.attempts_used(),
            max_attempts: self.max_attempts(),
            board: self.board(),
        })
    }

    fn final_outcome(&self, won: bool) -> GuessOutcome {
        let board = self.board();
        let reveal = Reveal {
            word: self.answer.clone(),
            meaning: self.meaning.clone(),
        };
        if won {
            GuessOutcome::Win { board, reveal }
        } else {
            GuessOutcome::Loss { board, reveal }
        }
    }
}
