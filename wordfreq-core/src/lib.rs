//! Word-frequency statistics over raw text.
//!
//! Text is lowercased and trimmed, configured punctuation is deleted, the
//! result is split on whitespace, stop words are optionally dropped, and the
//! remaining tokens are counted and ranked by count. Equal counts keep the
//! order in which their tokens first appeared.
//!
//! ```
//! use wordfreq_core::{compute_word_frequencies, Configuration};
//!
//! let config = Configuration::builder().stop_words(["is", "of"]).build().unwrap();
//! let ranked = compute_word_frequencies("state-of-the-art design is state of art", None, &config);
//! assert_eq!(
//!     ranked,
//!     [("stateoftheart", 1), ("design", 1), ("state", 1), ("art", 1)]
//! );
//! ```
//!
//! Each stage is also usable on its own through [`analyzer`] and
//! [`frequency`].

pub mod analyzer;
pub mod config;
pub mod frequency;
pub mod pipeline;

pub use config::{Configuration, ConfigurationBuilder};
pub use frequency::{FrequencyStats, FrequencyTable, TopNSelector};
pub use pipeline::{compute_word_frequencies, compute_word_frequencies_bytes, Pipeline};
pub use wordfreq_types::{ConfigError, FrequencyError, InputError, RankedEntry};
