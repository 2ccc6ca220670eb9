//! Counting and ranking.
//!
//! [`FrequencyTable`] counts tokens and remembers where each first appeared;
//! [`TopNSelector`] turns it into the ranked output.

mod select;
mod stats;
mod table;

pub use select::TopNSelector;
pub use stats::FrequencyStats;
pub use table::FrequencyTable;
