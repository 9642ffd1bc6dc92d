//! Cumulative letter hints

use std::fmt;

/// Shown in place of a letter that has not been revealed
pub const HINT_PLACEHOLDER: char = '*';

/// Target letters revealed so far, position by position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint(Vec<Option<char>>);

impl Hint {
    #[must_use]
    pub const fn new(letters: Vec<Option<char>>) -> Self {
        Self(letters)
    }

    #[must_use]
    pub fn letters(&self) -> &[Option<char>] {
        &self.0
    }

    /// True when no letter of the target has been found yet
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Number of positions showing a letter
    #[must_use]
    pub fn revealed(&self) -> usize {
        self.0.iter().filter(|l| l.is_some()).count()
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter.unwrap_or(HINT_PLACEHOLDER))?;
        }
        Ok(())
    }
}
