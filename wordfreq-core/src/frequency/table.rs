//! Token counting.

use rustc_hash::FxHashMap;
use wordfreq_types::RankedEntry;

use crate::frequency::stats::FrequencyStats;

/// Occurrence counts per distinct token.
///
/// Entries are stored in first-occurrence order with a hash index beside
/// them. The order is not a ranking; it is the secondary key the selector
/// falls back on when counts tie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<RankedEntry>,
    index: FxHashMap<Box<str>, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every token in `tokens`.
    pub fn from_tokens<'t, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.record(token);
        }
        table
    }

    /// Adds one occurrence of `token`.
    pub fn record(&mut self, token: &str) {
        self.total += 1;

        if let Some(&slot) = self.index.get(token) {
            self.entries[slot].count += 1;
            return;
        }

        self.index.insert(token.into(), self.entries.len());
        self.entries.push(RankedEntry::new(token, 1));
    }

    /// Count for `token`, if it was seen.
    #[inline]
    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).map(|&slot| self.entries[slot].count)
    }

    /// Number of distinct tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no tokens were counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Iterates `(token, count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries.iter().map(RankedEntry::as_pair)
    }

    /// Summary counts.
    pub fn stats(&self) -> FrequencyStats {
        FrequencyStats {
            total_tokens: self.total,
            distinct_tokens: self.entries.len(),
        }
    }

    /// Consumes the table, yielding entries in first-occurrence order.
    pub fn into_entries(self) -> Vec<RankedEntry> {
        self.entries
    }
}

impl<'t> FromIterator<&'t str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'t str>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}
