//! Punctuation removal.
//!
//! Characters in the configured set are deleted, not replaced by a space, so
//! `"state-of-the-art"` becomes `"stateoftheart"` and `"isn't"` becomes
//! `"isnt"`. Only exactly-configured characters are removed: an em-dash passes
//! through unless it is in the set.

use smallvec::SmallVec;

/// Punctuation removed by a default configuration.
pub const DEFAULT_PUNCTUATION: &str = ".,?!;:\"'()[]-";

/// Set of characters to strip.
///
/// ASCII members are a 128-bit mask, checked with one shift. Non-ASCII
/// members are rare and live inline in a small vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PunctuationSet {
    ascii: u128,
    other: SmallVec<[char; 4]>,
}

impl PunctuationSet {
    /// Creates an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Inserts a character. Duplicates are ignored.
    pub fn insert(&mut self, c: char) {
        if c.is_ascii() {
            self.ascii |= 1u128 << (c as u32);
        } else if !self.other.contains(&c) {
            self.other.push(c);
        }
    }

    /// Returns true if `c` is in the set.
    #[inline(always)]
    pub fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            self.ascii & (1u128 << (c as u32)) != 0
        } else {
            self.other.contains(&c)
        }
    }

    /// Returns true if `b` is an ASCII byte in the set.
    #[inline(always)]
    fn contains_ascii(&self, b: u8) -> bool {
        b < 128 && self.ascii & (1u128 << b) != 0
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.ascii.count_ones() as usize + self.other.len()
    }

    /// Returns true if nothing will be stripped.
    pub fn is_empty(&self) -> bool {
        self.ascii == 0 && self.other.is_empty()
    }

    /// Iterates members, ASCII first in code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (0u8..128)
            .filter(|&b| self.contains_ascii(b))
            .map(char::from)
            .chain(self.other.iter().copied())
    }
}

impl Extend<char> for PunctuationSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.insert(c);
        }
    }
}

impl FromIterator<char> for PunctuationSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

/// Removes every character of a [`PunctuationSet`] from text.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationStripper<'p> {
    set: &'p PunctuationSet,
}

impl<'p> PunctuationStripper<'p> {
    /// Creates a stripper over `set`.
    #[inline]
    pub const fn new(set: &'p PunctuationSet) -> Self {
        Self { set }
    }

    /// Strips punctuation from `input` into `out`, clearing it first.
    pub fn strip_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        if self.set.is_empty() {
            out.push_str(input);
            return;
        }

        if input.is_ascii() {
            out.extend(
                input
                    .bytes()
                    .filter(|&b| !self.set.contains_ascii(b))
                    .map(char::from),
            );
        } else {
            out.extend(input.chars().filter(|&c| !self.set.contains(c)));
        }
    }

    /// Strips punctuation and returns a new String.
    #[inline]
    pub fn strip(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.strip_into(input, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_set() -> PunctuationSet {
        DEFAULT_PUNCTUATION.chars().collect()
    }

    fn strip(input: &str) -> String {
        let set = default_set();
        PunctuationStripper::new(&set).strip(input)
    }

    #[test]
    fn default_set_members() {
        let set = default_set();
        assert_eq!(set.len(), 13);
        for c in DEFAULT_PUNCTUATION.chars() {
            assert!(set.contains(c), "missing {c:?}");
        }
        assert!(!set.contains('a'));
        assert!(!set.contains(' '));
        assert!(!set.contains('_'));
    }

    #[test]
    fn joins_instead_of_splitting() {
        assert_eq!(strip("state-of-the-art"), "stateoftheart");
        assert_eq!(strip("isn't"), "isnt");
    }

    #[test]
    fn sentence_punctuation_removed() {
        assert_eq!(strip("wow! this is great, isn't it?"), "wow this is great isnt it");
    }

    #[test]
    fn only_punctuation_becomes_empty() {
        assert_eq!(strip(".,?!'-"), "");
    }

    #[test]
    fn unconfigured_characters_pass_through() {
        assert_eq!(strip("a\u{2014}b"), "a\u{2014}b");
        assert_eq!(strip("snake_case & co"), "snake_case & co");
    }

    #[test]
    fn non_ascii_members_are_stripped() {
        let set: PunctuationSet = ['\u{2014}', '.', '«', '»'].into_iter().collect();
        let stripper = PunctuationStripper::new(&set);
        assert_eq!(stripper.strip("«bonjour»\u{2014}salut."), "bonjoursalut");
    }

    #[test]
    fn whitespace_is_preserved() {
        assert_eq!(strip("a ,\tb\n."), "a \tb\n");
    }

    #[test]
    fn empty_set_is_identity() {
        let set = PunctuationSet::empty();
        assert!(set.is_empty());
        assert_eq!(PunctuationStripper::new(&set).strip("a.b,c"), "a.b,c");
    }

    #[test]
    fn duplicates_ignored() {
        let set: PunctuationSet = "..,,é é".chars().collect();
        assert_eq!(set.len(), 4);
        assert_eq!(set.iter().collect::<String>(), " ,.é");
    }

    #[test]
    fn strip_into_clears_buffer() {
        let set = default_set();
        let stripper = PunctuationStripper::new(&set);
        let mut buf = String::from("leftover");
        stripper.strip_into("a.b", &mut buf);
        assert_eq!(buf, "ab");
    }
}
