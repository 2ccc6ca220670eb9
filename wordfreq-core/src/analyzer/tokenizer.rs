//! Whitespace Tokenizer Module
//!
//! Splits punctuation-stripped text into tokens. Any run of whitespace
//! (spaces, tabs, newlines, Unicode spaces) is one delimiter; leading and
//! trailing whitespace produce nothing, so empty tokens never appear.
//!
//! ```ignore
//! "  hello \t world\n\nfoo " -> ("hello", 0) ("world", 1) ("foo", 2)
//! ```
//!
//! ## Key Features
//!
//! - **Zero Allocation**: Tokens are slices of the input, not new strings
//! - **Streaming**: Tokens go to a callback; [`Tokenizer::collect`] is there
//!   when a `Vec` is wanted
//! - **Fast Path**: ASCII text whose only whitespace is the space byte is
//!   split with `memchr`
//!
//! ## Usage
//!
//! ```rust
//! use wordfreq_core::analyzer::Tokenizer;
//!
//! let mut seen = Vec::new();
//! Tokenizer::new().tokenize("hello   world", |text, position| {
//!     seen.push((text, position));
//! });
//! assert_eq!(seen, [("hello", 0), ("world", 1)]);
//! ```

use core::str;
use memchr::{memchr2, memchr3, memchr_iter};

/// Streaming whitespace tokenizer.
///
/// Emits `(token, position)` for each token, left to right. Positions count
/// emitted tokens from zero and are what downstream stages use for
/// first-occurrence ordering.
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes `text` and emits `(token, position)`.
    ///
    /// Position is `u32`. After emitting a token at position `u32::MAX`,
    /// further emissions stop.
    #[inline]
    pub fn tokenize<'t, F>(&self, text: &'t str, mut emit: F)
    where
        F: FnMut(&'t str, u32),
    {
        if is_space_delimited_ascii(text) {
            split_on_space(text, emit);
            return;
        }

        let mut pos = 0u32;
        for token in text.split_whitespace() {
            emit(token, pos);
            if pos == u32::MAX {
                return;
            }
            pos += 1;
        }
    }

    /// Tokenizes `text` into a vector of slices.
    pub fn collect<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut out = Vec::new();
        self.tokenize(text, |token, _| out.push(token));
        out
    }
}

/// True if `text` is ASCII and contains no whitespace other than `' '`.
#[inline]
fn is_space_delimited_ascii(text: &str) -> bool {
    let bytes = text.as_bytes();
    text.is_ascii()
        && memchr3(b'\t', b'\n', b'\r', bytes).is_none()
        && memchr2(0x0b, 0x0c, bytes).is_none()
}

fn split_on_space<'t, F>(text: &'t str, mut emit: F)
where
    F: FnMut(&'t str, u32),
{
    let bytes = text.as_bytes();
    let mut start = 0usize;
    let mut pos = 0u32;

    for i in memchr_iter(b' ', bytes) {
        if start < i {
            // SAFETY: the caller checked the text is ASCII, so every byte
            // offset is a char boundary.
            let token = unsafe { str::from_utf8_unchecked(&bytes[start..i]) };
            emit(token, pos);
            if pos == u32::MAX {
                return;
            }
            pos += 1;
        }
        start = i + 1;
    }

    if start < bytes.len() {
        // SAFETY: same invariant as above.
        let token = unsafe { str::from_utf8_unchecked(&bytes[start..]) };
        emit(token, pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(&str, u32)> {
        let mut out = Vec::new();
        Tokenizer::new().tokenize(input, |text, pos| out.push((text, pos)));
        out
    }

    #[test]
    fn single_word() {
        assert_eq!(collect("hello"), [("hello", 0)]);
    }

    #[test]
    fn two_words() {
        assert_eq!(collect("hello world"), [("hello", 0), ("world", 1)]);
    }

    #[test]
    fn collapses_space_runs() {
        assert_eq!(Tokenizer::new().collect("a    b  c"), ["a", "b", "c"]);
    }

    #[test]
    fn mixed_whitespace() {
        assert_eq!(
            Tokenizer::new().collect("one\ttwo\n\nthree \r\n four"),
            ["one", "two", "three", "four"]
        );
    }

    #[test]
    fn vertical_tab_and_form_feed_split() {
        assert_eq!(Tokenizer::new().collect("a\x0bb\x0cc"), ["a", "b", "c"]);
    }

    #[test]
    fn unicode_whitespace_splits() {
        assert_eq!(
            Tokenizer::new().collect("café\u{00A0}crème\u{3000}brûlée"),
            ["café", "crème", "brûlée"]
        );
    }

    #[test]
    fn leading_and_trailing_ignored() {
        assert_eq!(Tokenizer::new().collect("   padded   "), ["padded"]);
        assert_eq!(Tokenizer::new().collect("\n\tpadded\t\n"), ["padded"]);
    }

    #[test]
    fn empty_and_blank_emit_nothing() {
        assert!(collect("").is_empty());
        assert!(collect("     ").is_empty());
        assert!(collect(" \t\n ").is_empty());
    }

    #[test]
    fn positions_are_sequential() {
        let out = collect("the  quick\tbrown fox");
        assert_eq!(out.len(), 4);
        for (i, (_, pos)) in out.iter().enumerate() {
            assert_eq!(*pos, i as u32);
        }
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello  world\tagain");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Tokenizer::new().tokenize(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn fast_path_detection() {
        assert!(is_space_delimited_ascii("plain ascii text"));
        assert!(!is_space_delimited_ascii("tab\there"));
        assert!(!is_space_delimited_ascii("naïve text"));
    }
}
