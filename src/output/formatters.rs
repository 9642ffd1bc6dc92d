//! Formatting utilities for terminal output

use crate::game::{Board, Cell, Hint};

/// Square drawn for an unused attempt
pub const BLANK_SQUARE: char = '⬛';

/// Format one board cell as an emoji square
#[must_use]
pub const fn cell_to_emoji(cell: Cell) -> char {
    match cell {
        Cell::Blank => BLANK_SQUARE,
        Cell::Letter { feedback, .. } => feedback.emoji(),
    }
}

/// Format a board as emoji rows, one line per attempt
#[must_use]
pub fn board_to_emoji(board: &Board) -> String {
    board
        .rows()
        .iter()
        .map(|row| row.iter().copied().map(cell_to_emoji).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Hint in upper case with the placeholder for unknown letters
#[must_use]
pub fn hint_text(hint: &Hint) -> String {
    hint.to_string().to_ascii_uppercase()
}
