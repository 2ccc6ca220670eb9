//! Text analysis stages.
//!
//! - **Normalizer**: lowercases and trims raw text
//! - **Punctuation**: deletes configured punctuation characters
//! - **Tokenizer**: splits on whitespace runs
//! - **Stop words**: drops configured function words

pub mod normalizer;
pub mod punctuation;
pub mod stopwords;
pub mod tokenizer;

pub use normalizer::TextNormalizer;
pub use punctuation::{PunctuationSet, PunctuationStripper, DEFAULT_PUNCTUATION};
pub use stopwords::{StopWordFilter, StopWordSet, DEFAULT_STOP_WORDS};
pub use tokenizer::Tokenizer;
