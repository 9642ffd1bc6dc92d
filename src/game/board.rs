//! Structured game board handed to renderers

use crate::core::{Feedback, LetterFeedback, Word};

/// One square of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Attempt not used yet
    Blank,
    /// A guessed letter with its classification
    Letter {
        letter: char,
        feedback: LetterFeedback,
    },
}

/// `max_attempts` rows of `length` cells each
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Build a board from the guess history, padding unused attempts with blank rows
    #[must_use]
    pub fn from_guesses(width: usize, height: usize, guesses: &[(Word, Feedback)]) -> Self {
        let mut rows: Vec<Vec<Cell>> = guesses
            .iter()
            .take(height)
            .map(|(word, feedback)| {
                word.chars()
                    .iter()
                    .zip(feedback.letters())
                    .map(|(&ch, &fb)| Cell::Letter {
                        letter: char::from(ch),
                        feedback: fb,
                    })
                    .collect()
            })
            .collect();

        rows.resize(height, vec![Cell::Blank; width]);

        Self { width, rows }
    }

    /// Letters per row
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows (the attempt limit)
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Rows that hold a submitted guess
    #[must_use]
    pub fn filled_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.iter().any(|cell| *cell != Cell::Blank))
            .count()
    }
}
