//! Frequency table statistics.

/// Summary of a counted token sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyStats {
    /// Tokens counted after filtering.
    pub total_tokens: usize,
    /// Distinct tokens among them.
    pub distinct_tokens: usize,
}

impl FrequencyStats {
    /// Average occurrences per distinct token, or 0.0 for an empty table.
    pub fn mean_count(&self) -> f64 {
        if self.distinct_tokens == 0 {
            return 0.0;
        }
        self.total_tokens as f64 / self.distinct_tokens as f64
    }
}

impl core::fmt::Display for FrequencyStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} tokens, {} distinct",
            self.total_tokens, self.distinct_tokens
        )?;

        if self.distinct_tokens > 0 {
            write!(f, ", {:.2} per token", self.mean_count())?;
        }

        Ok(())
    }
}
