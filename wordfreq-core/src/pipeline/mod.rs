//! Composed word-frequency pipeline.
//!
//! ```text
//! raw text ─▶ normalize ─▶ strip_punctuation ─▶ tokenize ─▶ [filter_stop_words] ─▶ count ─▶ rank
//! ```
//!
//! The stop-word stage is present only when the configuration carries stop
//! words. A [`Pipeline`] borrows its [`Configuration`] and holds no state
//! between runs, so repeated runs on the same input give the same result.

mod stage;

pub use stage::{TextStage, TokenStage};

use tracing::{debug, trace};
use wordfreq_types::{InputError, RankedEntry};

use crate::analyzer::{PunctuationStripper, StopWordFilter, TextNormalizer, Tokenizer};
use crate::config::Configuration;
use crate::frequency::{FrequencyTable, TopNSelector};

/// Stages built from one configuration.
pub struct Pipeline<'c> {
    text_stages: Vec<Box<dyn TextStage + 'c>>,
    tokenizer: Tokenizer,
    token_stages: Vec<Box<dyn TokenStage + 'c>>,
    selector: TopNSelector,
}

impl<'c> Pipeline<'c> {
    /// Composes the stages `config` asks for.
    pub fn new(config: &'c Configuration) -> Self {
        let text_stages: Vec<Box<dyn TextStage + 'c>> = vec![
            Box::new(TextNormalizer::new()),
            Box::new(PunctuationStripper::new(config.punctuation())),
        ];

        let mut token_stages: Vec<Box<dyn TokenStage + 'c>> = Vec::new();
        if let Some(words) = config.stop_words() {
            token_stages.push(Box::new(StopWordFilter::new(words)));
        }

        Self {
            text_stages,
            tokenizer: Tokenizer::new(),
            token_stages,
            selector: TopNSelector::new(),
        }
    }

    /// Stage names in execution order, counting and ranking excluded.
    pub fn stage_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.text_stages.iter().map(|s| s.name()).collect();
        names.push("tokenize");
        names.extend(self.token_stages.iter().map(|s| s.name()));
        names
    }

    /// Runs every stage up to counting.
    pub fn count(&self, text: &str) -> FrequencyTable {
        let mut current = text.to_owned();
        let mut scratch = String::with_capacity(text.len());

        for stage in &self.text_stages {
            stage.apply(&current, &mut scratch);
            core::mem::swap(&mut current, &mut scratch);
            trace!(stage = stage.name(), bytes = current.len(), "text stage done");
        }

        let mut tokens = Vec::new();
        self.tokenizer.tokenize(&current, |token, _| tokens.push(token));
        trace!(stage = "tokenize", tokens = tokens.len(), "tokenized");

        for stage in &self.token_stages {
            tokens = stage.apply(tokens);
            trace!(stage = stage.name(), tokens = tokens.len(), "token stage done");
        }

        FrequencyTable::from_tokens(tokens)
    }

    /// Ranks token frequencies in `text`, keeping at most `top_n` entries.
    ///
    /// `None` returns every distinct token. Equal counts keep first-occurrence
    /// order.
    pub fn run(&self, text: &str, top_n: Option<usize>) -> Vec<RankedEntry> {
        let table = self.count(text);
        let stats = table.stats();
        let ranked = self.selector.select(table, top_n);

        debug!(
            tokens = stats.total_tokens,
            distinct = stats.distinct_tokens,
            returned = ranked.len(),
            "computed word frequencies"
        );
        ranked
    }

    /// Like [`run`](Self::run), for input that may not be text.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NotText` if `bytes` is not valid UTF-8.
    pub fn run_bytes(
        &self,
        bytes: &[u8],
        top_n: Option<usize>,
    ) -> Result<Vec<RankedEntry>, InputError> {
        let text = core::str::from_utf8(bytes)?;
        Ok(self.run(text, top_n))
    }
}

/// Ranks the most frequent tokens of `text` under `config`.
///
/// ```
/// use wordfreq_core::{compute_word_frequencies, Configuration};
///
/// let ranked = compute_word_frequencies("hello world hello", None, &Configuration::default());
/// assert_eq!(ranked, [("hello", 2), ("world", 1)]);
/// ```
pub fn compute_word_frequencies(
    text: &str,
    top_n: Option<usize>,
    config: &Configuration,
) -> Vec<RankedEntry> {
    Pipeline::new(config).run(text, top_n)
}

/// Byte-input form of [`compute_word_frequencies`].
///
/// # Errors
///
/// Returns `InputError::NotText` if `bytes` is not valid UTF-8.
pub fn compute_word_frequencies_bytes(
    bytes: &[u8],
    top_n: Option<usize>,
    config: &Configuration,
) -> Result<Vec<RankedEntry>, InputError> {
    Pipeline::new(config).run_bytes(bytes, top_n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_composition_has_stop_word_stage() {
        let config = Configuration::default();
        assert_eq!(
            Pipeline::new(&config).stage_names(),
            ["normalize", "strip_punctuation", "tokenize", "filter_stop_words"]
        );
    }

    #[test]
    fn disabled_filter_is_omitted() {
        let config = Configuration::without_stop_words();
        assert_eq!(
            Pipeline::new(&config).stage_names(),
            ["normalize", "strip_punctuation", "tokenize"]
        );
    }

    #[test]
    fn count_applies_all_stages() {
        let config = Configuration::default();
        let table = Pipeline::new(&config).count("The cat, the HAT; a cat!");
        assert_eq!(table.get("cat"), Some(2));
        assert_eq!(table.get("hat"), Some(1));
        assert_eq!(table.get("the"), None);
        assert_eq!(table.get("a"), None);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn pipeline_is_reusable() {
        let config = Configuration::default();
        let pipeline = Pipeline::new(&config);
        let first = pipeline.run("one two two", None);
        let _ = pipeline.run("something else entirely", Some(1));
        assert_eq!(pipeline.run("one two two", None), first);
    }

    #[test]
    fn run_bytes_rejects_invalid_utf8() {
        let config = Configuration::default();
        let err = Pipeline::new(&config)
            .run_bytes(&[b'h', b'i', b' ', 0xc3, 0x28], None)
            .unwrap_err();
        assert_eq!(err, InputError::NotText { valid_up_to: 3 });
    }

    #[test]
    fn run_bytes_accepts_text() {
        let config = Configuration::default();
        let ranked = Pipeline::new(&config)
            .run_bytes("b\u{e9}b\u{e9} b\u{e9}b\u{e9}".as_bytes(), None)
            .expect("valid UTF-8");
        assert_eq!(ranked, [("b\u{e9}b\u{e9}", 2)]);
    }
}
