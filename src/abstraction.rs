//! Comparable sequence abstraction.
//!
//! The LCS engine and the tokenizers do not know about lines or words.  They
//! operate on ordered sequences of elements that can do exactly two things:
//! check themselves for equality against another element of the same kind
//! and render themselves as literal text.  [`Line`] and [`Word`] are the two
//! concrete element types, produced by [`split_lines`] and [`split_words`].
use std::fmt;

/// A unit of comparison for the LCS engine.
///
/// Elements carry no position state.  Position is implicit in the order of
/// the sequence they came from.  Implementations must provide an equality
/// relation that is reflexive and transitive.
pub trait Comparable {
    /// Checks this element for equality against another of the same kind.
    fn matches(&self, other: &Self) -> bool;

    /// Renders the element as literal text.
    fn as_text(&self) -> &str;
}

/// A single line of a text block, without its trailing newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line<'s>(&'s str);

impl<'s> Line<'s> {
    /// Returns the line text with the lifetime of the source string.
    pub fn as_str(&self) -> &'s str {
        self.0
    }
}

impl Comparable for Line<'_> {
    fn matches(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn as_text(&self) -> &str {
        self.0
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A single word or standalone symbol character of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word<'s>(&'s str);

impl<'s> Word<'s> {
    /// Returns the word text with the lifetime of the source string.
    pub fn as_str(&self) -> &'s str {
        self.0
    }
}

impl Comparable for Word<'_> {
    fn matches(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn as_text(&self) -> &str {
        self.0
    }
}

impl fmt::Display for Word<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Splits a text block into lines.
///
/// The split is on `'\n'` and preserves source order.  A single trailing
/// newline does not produce a trailing empty line, so `"a\nb"` and
/// `"a\nb\n"` split identically.  Empty input produces an empty sequence.
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    if text.is_empty() {
        return Vec::new();
    }
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.split('\n').map(Line).collect()
}

/// Splits a line into words and standalone symbol characters.
///
/// Runs of alphanumeric characters and underscores form a single word,
/// every other non-whitespace character stands on its own and whitespace
/// only separates.  Every character of the input is either part of an
/// emitted element or consumed as a separator; callers own any spacing
/// semantics when putting words back together.
pub fn split_words(s: &str) -> Vec<Word<'_>> {
    let mut iter = s.char_indices().peekable();
    let mut rv = Vec::new();

    while let Some((idx, c)) = iter.next() {
        if c.is_whitespace() {
            continue;
        }
        let mut end = idx + c.len_utf8();
        if is_word_char(c) {
            while let Some(&(next_idx, next_char)) = iter.peek() {
                if !is_word_char(next_char) {
                    break;
                }
                iter.next();
                end = next_idx + next_char.len_utf8();
            }
        }
        rv.push(Word(&s[idx..end]));
    }

    rv
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
fn line_strs<'s>(lines: &[Line<'s>]) -> Vec<&'s str> {
    lines.iter().map(|l| l.as_str()).collect()
}

#[cfg(test)]
fn word_strs<'s>(words: &[Word<'s>]) -> Vec<&'s str> {
    words.iter().map(|w| w.as_str()).collect()
}

#[test]
fn test_split_lines() {
    assert_eq!(split_lines(""), vec![]);
    assert_eq!(line_strs(&split_lines("a\nb")), vec!["a", "b"]);
    assert_eq!(line_strs(&split_lines("a\nb\n")), vec!["a", "b"]);
    assert_eq!(line_strs(&split_lines("\n")), vec![""]);
    assert_eq!(line_strs(&split_lines("a\n\nb")), vec!["a", "", "b"]);
}

#[test]
fn test_split_words() {
    assert_eq!(word_strs(&split_words("foo bar baz")), vec!["foo", "bar", "baz"]);
    assert_eq!(word_strs(&split_words("a.b_c")), vec!["a", ".", "b_c"]);
    assert_eq!(
        word_strs(&split_words("let x = 41;")),
        vec!["let", "x", "=", "41", ";"]
    );
    assert_eq!(word_strs(&split_words("  spaced   out ")), vec!["spaced", "out"]);
    assert_eq!(word_strs(&split_words("")), Vec::<&str>::new());
}

#[test]
fn test_split_words_unicode() {
    assert_eq!(word_strs(&split_words("héllo wörld")), vec!["héllo", "wörld"]);
    assert_eq!(word_strs(&split_words("a→b")), vec!["a", "→", "b"]);
}

#[test]
fn test_comparable_capability() {
    let words = split_words("one two one");
    assert!(words[0].matches(&words[2]));
    assert!(!words[0].matches(&words[1]));
    assert_eq!(words[1].as_text(), "two");
}
