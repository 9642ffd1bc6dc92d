//! Error types
//!
//! Guess rejections (wrong length, illegal, duplicate) are not errors; they are
//! reported as [`GuessOutcome`](crate::game::GuessOutcome) variants.

use thiserror::Error;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be {min}-{max} letters, got {0}", min = crate::core::MIN_WORD_LENGTH, max = crate::core::MAX_WORD_LENGTH)]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

/// Failures of word selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordSourceError {
    #[error("unknown dictionary '{0}'")]
    UnknownDictionary(String),
    #[error("dictionary '{dictionary}' has no {length}-letter words")]
    NoWordsForLength { dictionary: String, length: usize },
}

/// Errors returned by [`SessionRegistry`](crate::session::SessionRegistry) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("a game is already running in this session")]
    AlreadyRunning,
    #[error("no game is running in this session")]
    NoSuchSession,
    #[error("word length must be between {min} and {max}, got {length}")]
    InvalidLength { length: usize, min: usize, max: usize },
    #[error("unknown dictionary '{0}'")]
    UnknownDictionary(String),
    #[error("dictionary '{dictionary}' has no {length}-letter words")]
    NoWordsForLength { dictionary: String, length: usize },
}

impl From<WordSourceError> for SessionError {
    fn from(err: WordSourceError) -> Self {
        match err {
            WordSourceError::UnknownDictionary(name) => Self::UnknownDictionary(name),
            WordSourceError::NoWordsForLength { dictionary, length } => {
                Self::NoWordsForLength { dictionary, length }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_source_errors_map_onto_session_errors() {
        let err: SessionError = WordSourceError::UnknownDictionary("NOPE".into()).into();
        assert_eq!(err, SessionError::UnknownDictionary("NOPE".into()));

        let err: SessionError = WordSourceError::NoWordsForLength {
            dictionary: "GRE".into(),
            length: 8,
        }
        .into();
        assert_eq!(
            err,
            SessionError::NoWordsForLength {
                dictionary: "GRE".into(),
                length: 8
            }
        );
    }

    #[test]
    fn messages_are_user_facing() {
        let err = SessionError::InvalidLength {
            length: 10,
            min: 3,
            max: 8,
        };
        assert_eq!(err.to_string(), "word length must be between 3 and 8, got 10");
        assert_eq!(
            WordError::InvalidLength(9).to_string(),
            "Word must be 3-8 letters, got 9"
        );
    }
}
