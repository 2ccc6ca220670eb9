//! Pipeline configuration.
//!
//! A [`Configuration`] is built once and then only read. Pipelines borrow it,
//! so one instance can back any number of runs.

use wordfreq_types::ConfigError;

use crate::analyzer::{PunctuationSet, StopWordSet, DEFAULT_PUNCTUATION, DEFAULT_STOP_WORDS};

/// Punctuation and stop-word settings for a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    punctuation: PunctuationSet,
    stop_words: Option<StopWordSet>,
}

impl Default for Configuration {
    /// Default punctuation and the default English stop words.
    fn default() -> Self {
        Self {
            punctuation: DEFAULT_PUNCTUATION.chars().collect(),
            stop_words: Some(DEFAULT_STOP_WORDS.into_iter().collect()),
        }
    }
}

impl Configuration {
    /// Starts a builder seeded with the defaults.
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// Default punctuation with stop-word filtering disabled.
    pub fn without_stop_words() -> Self {
        Self {
            stop_words: None,
            ..Self::default()
        }
    }

    /// Characters removed before tokenizing.
    #[inline]
    pub fn punctuation(&self) -> &PunctuationSet {
        &self.punctuation
    }

    /// Words dropped after tokenizing, or `None` when filtering is off.
    #[inline]
    pub fn stop_words(&self) -> Option<&StopWordSet> {
        self.stop_words.as_ref()
    }
}

/// Builder for [`Configuration`].
///
/// Validation happens in [`build`](Self::build); setters only record input.
///
/// ```
/// use wordfreq_core::Configuration;
///
/// let config = Configuration::builder()
///     .stop_words(["is", "of"])
///     .build()
///     .unwrap();
/// assert!(config.stop_words().unwrap().contains("of"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    punctuation: Option<Vec<String>>,
    extra_punctuation: Vec<char>,
    stop_words: StopWordsSetting,
}

#[derive(Debug, Clone, Default)]
enum StopWordsSetting {
    #[default]
    Default,
    Disabled,
    Custom(Vec<String>),
}

impl ConfigurationBuilder {
    /// Replaces the punctuation set. Each entry must be exactly one character.
    pub fn punctuation<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.punctuation = Some(entries.into_iter().map(|s| s.as_ref().to_owned()).collect());
        self.extra_punctuation.clear();
        self
    }

    /// Replaces the punctuation set from characters.
    pub fn punctuation_chars<I>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.punctuation = Some(Vec::new());
        self.extra_punctuation = chars.into_iter().collect();
        self
    }

    /// Replaces the stop-word set. Words are lowercased.
    pub fn stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words =
            StopWordsSetting::Custom(words.into_iter().map(|s| s.as_ref().to_owned()).collect());
        self
    }

    /// Disables stop-word filtering.
    pub fn no_stop_words(mut self) -> Self {
        self.stop_words = StopWordsSetting::Disabled;
        self
    }

    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotSingleCharacter` for a punctuation entry that
    /// is not one character, `ConfigError::EmptyStopWord` for an empty stop
    /// word and `ConfigError::StopWordWhitespace` for one containing
    /// whitespace.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        let punctuation = match self.punctuation {
            None => DEFAULT_PUNCTUATION.chars().collect(),
            Some(entries) => {
                let mut set = PunctuationSet::empty();
                for entry in entries {
                    set.insert(single_char(&entry)?);
                }
                set.extend(self.extra_punctuation);
                set
            }
        };

        let stop_words = match self.stop_words {
            StopWordsSetting::Default => Some(DEFAULT_STOP_WORDS.into_iter().collect()),
            StopWordsSetting::Disabled => None,
            StopWordsSetting::Custom(words) => {
                let mut set = StopWordSet::empty();
                for word in &words {
                    validate_stop_word(word)?;
                    set.insert(word);
                }
                Some(set)
            }
        };

        Ok(Configuration {
            punctuation,
            stop_words,
        })
    }
}

fn single_char(entry: &str) -> Result<char, ConfigError> {
    let mut chars = entry.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::NotSingleCharacter {
            value: entry.to_owned(),
        }),
    }
}

fn validate_stop_word(word: &str) -> Result<(), ConfigError> {
    if word.is_empty() {
        return Err(ConfigError::EmptyStopWord);
    }
    if word.chars().any(char::is_whitespace) {
        return Err(ConfigError::StopWordWhitespace {
            word: word.to_owned(),
        });
    }
    Ok(())
}
