//! Stop-word filtering.

use rustc_hash::FxHashSet;

/// Stop words used by a default configuration.
pub const DEFAULT_STOP_WORDS: [&str; 7] = ["a", "an", "the", "and", "but", "if", "or"];

/// Lowercased set of words to drop from a token sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: FxHashSet<Box<str>>,
}

impl StopWordSet {
    /// Creates an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Inserts a word, lowercasing it.
    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_lowercase().into_boxed_str());
    }

    /// Checks an already-lowercased token.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates stop words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(|w| &**w)
    }
}

impl<'a> FromIterator<&'a str> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::empty();
        for word in iter {
            set.insert(word);
        }
        set
    }
}

/// Drops tokens that are stop words, keeping the rest in order.
#[derive(Debug, Clone, Copy)]
pub struct StopWordFilter<'s> {
    words: &'s StopWordSet,
}

impl<'s> StopWordFilter<'s> {
    /// Creates a filter over `words`.
    #[inline]
    pub const fn new(words: &'s StopWordSet) -> Self {
        Self { words }
    }

    /// Returns true if `token` would be dropped.
    #[inline]
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Removes stop words in place.
    pub fn filter<'t>(&self, mut tokens: Vec<&'t str>) -> Vec<&'t str> {
        tokens.retain(|token| !self.is_stop_word(token));
        tokens
    }
}
