//! Core types and errors for the wordfreq pipeline.
//!
//! This crate holds the values that cross the boundary between the pipeline
//! and its callers. Keeping them separate means:
//!
//! - **Stable output type**: [`RankedEntry`] is what every caller renders
//! - **One error taxonomy**: configuration and input errors are defined once
//! - **No pipeline dependencies**: wrappers can depend on the types alone

#![warn(missing_docs)]

use core::fmt;
use thiserror::Error;

/// A token and the number of times it occurred.
///
/// The pipeline returns these ordered by count (descending). Entries with
/// equal counts keep the order in which their tokens first appeared in the
/// filtered token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankedEntry {
    /// Lowercased token text
    pub token: String,
    /// Occurrence count (always at least 1 in pipeline output)
    pub count: usize,
}

impl RankedEntry {
    /// Creates a new entry.
    #[inline]
    pub fn new(token: impl Into<String>, count: usize) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }

    /// Returns the entry as a borrowed `(token, count)` pair.
    #[inline]
    pub fn as_pair(&self) -> (&str, usize) {
        (&self.token, self.count)
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.token, self.count)
    }
}

impl From<RankedEntry> for (String, usize) {
    #[inline]
    fn from(entry: RankedEntry) -> Self {
        (entry.token, entry.count)
    }
}

impl PartialEq<(&str, usize)> for RankedEntry {
    #[inline]
    fn eq(&self, other: &(&str, usize)) -> bool {
        self.token == other.0 && self.count == other.1
    }
}

/// Errors raised while building a pipeline configuration.
///
/// These surface from `ConfigurationBuilder::build`, never from a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A punctuation entry was not exactly one character.
    #[error("punctuation entry {value:?} must be exactly one character")]
    NotSingleCharacter {
        /// The rejected entry.
        value: String,
    },
    /// A stop word was the empty string.
    #[error("stop words must not be empty")]
    EmptyStopWord,
    /// A stop word contained whitespace and could never match a token.
    #[error("stop word {word:?} contains whitespace")]
    StopWordWhitespace {
        /// The rejected stop word.
        word: String,
    },
}

/// Errors raised when the pipeline is handed input that is not text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input bytes are not valid UTF-8.
    #[error("input is not text: invalid UTF-8 after {valid_up_to} bytes")]
    NotText {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
}

impl From<core::str::Utf8Error> for InputError {
    #[inline]
    fn from(err: core::str::Utf8Error) -> Self {
        InputError::NotText {
            valid_up_to: err.valid_up_to(),
        }
    }
}

/// Any error the word-frequency pipeline can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrequencyError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Non-textual input.
    #[error(transparent)]
    Input(#[from] InputError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_display() {
        assert_eq!(RankedEntry::new("hello", 2).to_string(), "hello: 2");
    }

    #[test]
    fn entry_compares_with_pairs() {
        let entries = vec![RankedEntry::new("hello", 2), RankedEntry::new("world", 1)];
        assert_eq!(entries, [("hello", 2), ("world", 1)]);
        assert_ne!(RankedEntry::new("hello", 2), ("hello", 3));
    }

    #[test]
    fn entry_into_tuple() {
        let pair: (String, usize) = RankedEntry::new("rust", 7).into();
        assert_eq!(pair, ("rust".to_string(), 7));
        assert_eq!(RankedEntry::new("rust", 7).as_pair(), ("rust", 7));
    }

    #[test]
    fn config_error_messages() {
        let err = ConfigError::NotSingleCharacter {
            value: "ab".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "punctuation entry \"ab\" must be exactly one character"
        );
        assert_eq!(
            ConfigError::EmptyStopWord.to_string(),
            "stop words must not be empty"
        );
    }

    #[test]
    fn utf8_error_converts_to_not_text() {
        let bytes = [b'o', b'k', 0xff, b'x'];
        let err: InputError = core::str::from_utf8(&bytes).unwrap_err().into();
        assert_eq!(err, InputError::NotText { valid_up_to: 2 });
        assert_eq!(
            err.to_string(),
            "input is not text: invalid UTF-8 after 2 bytes"
        );
    }

    #[test]
    fn umbrella_error_wraps_both() {
        let cfg: FrequencyError = ConfigError::EmptyStopWord.into();
        assert!(matches!(cfg, FrequencyError::Config(_)));

        let input: FrequencyError = InputError::NotText { valid_up_to: 0 }.into();
        assert_eq!(input.to_string(), "input is not text: invalid UTF-8 after 0 bytes");
    }
}
