//! Stage traits and their analyzer implementations.
//!
//! A pipeline is two lists of stages with the tokenizer between them. Text
//! stages rewrite a buffer; token stages rewrite the token sequence. An
//! optional step is simply left out of its list.

use crate::analyzer::{PunctuationStripper, StopWordFilter, TextNormalizer};

/// A `text -> text` step.
pub trait TextStage {
    /// Short name used in logs and [`Pipeline::stage_names`](super::Pipeline::stage_names).
    fn name(&self) -> &'static str;

    /// Writes the transformed `input` into `out`, clearing it first.
    fn apply(&self, input: &str, out: &mut String);
}

/// A `tokens -> tokens` step.
///
/// Tokens are slices of the text the tokenizer ran over, so stages can only
/// drop or reorder them.
pub trait TokenStage {
    /// Short name used in logs and [`Pipeline::stage_names`](super::Pipeline::stage_names).
    fn name(&self) -> &'static str;

    /// Transforms the token sequence.
    fn apply<'t>(&self, tokens: Vec<&'t str>) -> Vec<&'t str>;
}

impl TextStage for TextNormalizer {
    fn name(&self) -> &'static str {
        "normalize"
    }

    #[inline]
    fn apply(&self, input: &str, out: &mut String) {
        self.normalize_into(input, out);
    }
}

impl TextStage for PunctuationStripper<'_> {
    fn name(&self) -> &'static str {
        "strip_punctuation"
    }

    #[inline]
    fn apply(&self, input: &str, out: &mut String) {
        self.strip_into(input, out);
    }
}

impl TokenStage for StopWordFilter<'_> {
    fn name(&self) -> &'static str {
        "filter_stop_words"
    }

    #[inline]
    fn apply<'t>(&self, tokens: Vec<&'t str>) -> Vec<&'t str> {
        self.filter(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{PunctuationSet, StopWordSet};

    struct Reverse;

    impl TokenStage for Reverse {
        fn name(&self) -> &'static str {
            "reverse"
        }

        fn apply<'t>(&self, mut tokens: Vec<&'t str>) -> Vec<&'t str> {
            tokens.reverse();
            tokens
        }
    }

    #[test]
    fn text_stages_are_object_safe() {
        let set: PunctuationSet = "!".chars().collect();
        let stages: Vec<Box<dyn TextStage + '_>> = vec![
            Box::new(TextNormalizer::new()),
            Box::new(PunctuationStripper::new(&set)),
        ];

        let mut text = String::from(" HEY! ");
        let mut buf = String::new();
        for stage in &stages {
            stage.apply(&text, &mut buf);
            std::mem::swap(&mut text, &mut buf);
        }
        assert_eq!(text, "hey");
    }

    #[test]
    fn token_stages_compose() {
        let words: StopWordSet = ["b"].into_iter().collect();
        let stages: Vec<Box<dyn TokenStage + '_>> =
            vec![Box::new(StopWordFilter::new(&words)), Box::new(Reverse)];

        let tokens = stages
            .iter()
            .fold(vec!["a", "b", "c"], |tokens, stage| stage.apply(tokens));
        assert_eq!(tokens, ["c", "a"]);
    }

    #[test]
    fn names() {
        let set = PunctuationSet::empty();
        let words = StopWordSet::empty();
        assert_eq!(TextStage::name(&TextNormalizer::new()), "normalize");
        assert_eq!(TextStage::name(&PunctuationStripper::new(&set)), "strip_punctuation");
        assert_eq!(TokenStage::name(&StopWordFilter::new(&words)), "filter_stop_words");
    }
}
