//! Results handed back to the dispatcher

use super::Board;
use crate::core::Feedback;

/// The answer, revealed once a game has ended in a win or a loss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    /// Target word with its original casing
    pub word: String,
    pub meaning: String,
}

/// Result of submitting one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched the target
    Win { board: Board, reveal: Reveal },
    /// The last attempt was used without a match
    Loss { board: Board, reveal: Reveal },
    /// Already guessed in this game; no attempt consumed
    Duplicate { word: String },
    /// Not a known word; no attempt consumed
    Illegal { word: String },
    /// Length differs from the target; no attempt consumed
    WrongLength { expected: usize, actual: usize },
    /// Accepted, game goes on
    Continue {
        board: Board,
        feedback: Feedback,
        remaining: usize,
    },
}

impl GuessOutcome {
    /// Win or Loss
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Win { .. } | Self::Loss { .. })
    }

    /// Whether the guess was recorded in the game history
    #[must_use]
    pub const fn consumed_attempt(&self) -> bool {
        matches!(
            self,
            Self::Win { .. } | Self::Loss { .. } | Self::Continue { .. }
        )
    }
}

/// State of a game that ended by stop or timeout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub attempts_used: usize,
    pub max_attempts: usize,
    pub board: Board,
}
