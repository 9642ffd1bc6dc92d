//! Registry configuration

use std::time::Duration;

/// Inactivity window before an untouched game is dropped
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Word length used when a start request names none
pub const DEFAULT_LENGTH: usize = 5;

/// Dictionary used when a start request names none
pub const DEFAULT_DICTIONARY: &str = "CET4";

/// Settings shared by every session of a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub inactivity_timeout: Duration,
    pub default_length: usize,
    pub default_dictionary: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            inactivity_timeout: DEFAULT_TIMEOUT,
            default_length: DEFAULT_LENGTH,
            default_dictionary: DEFAULT_DICTIONARY.to_string(),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_inactivity_timeout(mut self, timeout: Duration) -> Self {
        self.inactivity_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_default_length(mut self, length: usize) -> Self {
        self.default_length = length;
        self
    }

    #[must_use]
    pub fn with_default_dictionary(mut self, dictionary: impl Into<String>) -> Self {
        self.default_dictionary = dictionary.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.inactivity_timeout, Duration::from_secs(300));
        assert_eq!(config.default_length, 5);
        assert_eq!(config.default_dictionary, "CET4");
    }

    #[test]
    fn builder_overrides() {
        let config = SessionConfig::default()
            .with_inactivity_timeout(Duration::from_secs(30))
            .with_default_length(6)
            .with_default_dictionary("GRE");
        assert_eq!(config.inactivity_timeout, Duration::from_secs(30));
        assert_eq!(config.default_length, 6);
        assert_eq!(config.default_dictionary, "GRE");
    }
}
