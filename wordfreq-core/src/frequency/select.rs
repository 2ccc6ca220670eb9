//! Ranking a frequency table.

use wordfreq_types::RankedEntry;

use crate::frequency::table::FrequencyTable;

/// Sorts entries by count and truncates to a limit.
///
/// Ties are broken by first occurrence in the filtered token sequence: the
/// table yields entries in that order and the sort is stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct TopNSelector;

impl TopNSelector {
    /// Creates a selector.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Ranks `table`, keeping at most `limit` entries (`None` keeps all).
    pub fn select(&self, table: FrequencyTable, limit: Option<usize>) -> Vec<RankedEntry> {
        if limit == Some(0) {
            return Vec::new();
        }

        let mut entries = table.into_entries();
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        if let Some(n) = limit {
            entries.truncate(n);
        }
        entries
    }
}
