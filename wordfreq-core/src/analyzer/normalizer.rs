//! Case folding and trimming, the first pipeline stage.
//!
//! Internal whitespace is left untouched here; collapsing runs is the
//! tokenizer's job.

/// Lowercases text and removes leading/trailing whitespace.
///
/// ASCII input takes a byte-wise path. Anything else goes through
/// [`str::to_lowercase`], which handles multi-char expansions (`İ`) and the
/// Greek final sigma.
///
/// # Examples
///
/// ```
/// use wordfreq_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// assert_eq!(normalizer.normalize("  Hello   WORLD \n"), "hello   world");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a normalizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes `input` into `out`, clearing it first.
    ///
    /// Reuses the buffer's capacity when it is large enough.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }

        if trimmed.is_ascii() {
            out.reserve(trimmed.len());
            out.extend(trimmed.bytes().map(|b| b.to_ascii_lowercase() as char));
        } else {
            out.push_str(&trimmed.to_lowercase());
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}
