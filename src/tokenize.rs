//! Merge-walk tokenizers.
//!
//! This turns two pieces of text and their longest common subsequence into
//! an ordered stream of printable [`Token`]s.  The walk keeps three indices,
//! one into each input sequence and one into the LCS, and classifies every
//! element as deleted, added or unchanged.  Whenever both sides diverge from
//! the LCS at the same time the deletion is emitted first; that ordering is
//! part of the output contract, not an implementation accident.
use std::time::Duration;

use crate::abstraction::{split_lines, split_words, Comparable};
use crate::deadline_support::{duration_to_deadline, Instant};
use crate::lcs::lcs_deadline;
use crate::token::{Token, TokenKind};

/// A builder type config for the tokenizers.
///
/// This exists for callers that want to bound the cost of the quadratic
/// LCS computation:
///
/// ```rust
/// use std::time::Duration;
/// use difftok::TokenizeConfig;
///
/// let tokens = TokenizeConfig::new()
///     .timeout(Duration::from_secs(1))
///     .tokenize_text("a\nb", "a\nc");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TokenizeConfig {
    deadline: Option<Instant>,
}

impl TokenizeConfig {
    /// Creates a config with no deadline.
    pub fn new() -> TokenizeConfig {
        TokenizeConfig::default()
    }

    /// Sets an absolute deadline for the LCS computation.
    pub fn deadline(&mut self, deadline: Instant) -> &mut Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets a deadline relative to now.
    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.deadline = duration_to_deadline(timeout);
        self
    }

    /// Tokenizes two text blocks with this config.
    pub fn tokenize_text<'s>(&self, x: &'s str, y: &'s str) -> Vec<Token<'s>> {
        tokenize_text_deadline(x, y, self.deadline)
    }

    /// Tokenizes two single lines with this config.
    pub fn tokenize_line<'s>(&self, x: &'s str, y: &'s str) -> (Vec<Token<'s>>, Vec<Token<'s>>) {
        tokenize_line_deadline(x, y, self.deadline)
    }
}

/// Tokenizes the text blocks `x` and `y` into one diff token stream.
///
/// Every line of both inputs ends up in exactly one token group:
///
/// * deleted: `DelSymbol`, `Space`, `DelLine`, `Newline`
/// * added: `AddSymbol`, `Space`, `AddLine`, `Newline`
/// * unchanged: `SameSymbol`, `Space`, `SameLine` (newline already appended)
///
/// The symbol literals carry 1-based line numbers, zero-padded so that all
/// three marker columns stay vertically aligned regardless of which side is
/// showing a number.
pub fn tokenize_text<'s>(x: &'s str, y: &'s str) -> Vec<Token<'s>> {
    tokenize_text_deadline(x, y, None)
}

/// Tokenizes the text blocks `x` and `y` with a deadline.
///
/// See [`tokenize_text`].  An exceeded deadline never produces a malformed
/// stream; it only replaces unchanged groups with delete and add groups.
pub fn tokenize_text_deadline<'s>(
    x: &'s str,
    y: &'s str,
    deadline: Option<Instant>,
) -> Vec<Token<'s>> {
    let xls = split_lines(x);
    let yls = split_lines(y);
    let s = lcs_deadline(&xls, &yls, deadline);
    let gutter = Gutter::new(xls.len(), yls.len());

    let mut rv = Vec::new();
    let mut i = 0;
    let mut j = 0;
    let mut k = 0;

    while i < xls.len() || j < yls.len() {
        if i < xls.len() && (k == s.len() || !xls[i].matches(s[k])) {
            rv.push(Token::new(TokenKind::DelSymbol, gutter.del(i + 1)));
            rv.push(Token::new(TokenKind::Space, " "));
            rv.push(Token::new(TokenKind::DelLine, xls[i].as_str()));
            rv.push(Token::new(TokenKind::Newline, "\n"));
            i += 1;
        } else if j < yls.len() && (k == s.len() || !yls[j].matches(s[k])) {
            rv.push(Token::new(TokenKind::AddSymbol, gutter.add(j + 1)));
            rv.push(Token::new(TokenKind::Space, " "));
            rv.push(Token::new(TokenKind::AddLine, yls[j].as_str()));
            rv.push(Token::new(TokenKind::Newline, "\n"));
            j += 1;
        } else {
            rv.push(Token::new(TokenKind::SameSymbol, gutter.same(i + 1, j + 1)));
            rv.push(Token::new(TokenKind::Space, " "));
            rv.push(Token::new(TokenKind::SameLine, format!("{}\n", s[k].as_str())));
            i += 1;
            j += 1;
            k += 1;
        }
    }

    rv
}

/// Tokenizes the two differing lines `x` and `y` into one stream per side.
///
/// The x stream receives `SameWords` and `DelWords` tokens, the y stream
/// `SameWords` and `AddWords`.  `SameWords` entries correspond positionally
/// across the two streams.  No separators are inserted; the word splitting
/// already dropped the whitespace between elements.
pub fn tokenize_line<'s>(x: &'s str, y: &'s str) -> (Vec<Token<'s>>, Vec<Token<'s>>) {
    tokenize_line_deadline(x, y, None)
}

/// Tokenizes the two differing lines `x` and `y` with a deadline.
///
/// See [`tokenize_line`].
pub fn tokenize_line_deadline<'s>(
    x: &'s str,
    y: &'s str,
    deadline: Option<Instant>,
) -> (Vec<Token<'s>>, Vec<Token<'s>>) {
    let xs = split_words(x);
    let ys = split_words(y);
    let s = lcs_deadline(&xs, &ys, deadline);

    let mut x_tokens = Vec::new();
    let mut y_tokens = Vec::new();
    let mut i = 0;
    let mut j = 0;
    let mut k = 0;

    while i < xs.len() || j < ys.len() {
        if i < xs.len() && (k == s.len() || !xs[i].matches(s[k])) {
            x_tokens.push(Token::new(TokenKind::DelWords, xs[i].as_str()));
            i += 1;
        } else if j < ys.len() && (k == s.len() || !ys[j].matches(s[k])) {
            y_tokens.push(Token::new(TokenKind::AddWords, ys[j].as_str()));
            j += 1;
        } else {
            x_tokens.push(Token::new(TokenKind::SameWords, s[k].as_str()));
            y_tokens.push(Token::new(TokenKind::SameWords, s[k].as_str()));
            i += 1;
            j += 1;
            k += 1;
        }
    }

    (x_tokens, y_tokens)
}

/// Gutter widths derived from the line counts of both sides.
///
/// Every symbol literal is `xw + yw + 2` columns wide: the x number column,
/// a separator, the y number column and the marker column.  A deletion
/// blanks the y column, an addition blanks the x column, an unchanged line
/// shows both numbers.
struct Gutter {
    xw: usize,
    yw: usize,
}

impl Gutter {
    fn new(x_len: usize, y_len: usize) -> Gutter {
        Gutter {
            xw: decimal_width(x_len),
            yw: decimal_width(y_len),
        }
    }

    fn del(&self, xn: usize) -> String {
        format!("{:0xw$}{:yw$}-", xn, "", xw = self.xw, yw = self.yw + 1)
    }

    fn add(&self, yn: usize) -> String {
        format!("{:xw$}{:0yw$}+", "", yn, xw = self.xw + 1, yw = self.yw)
    }

    fn same(&self, xn: usize, yn: usize) -> String {
        format!("{:0xw$} {:0yw$} ", xn, yn, xw = self.xw, yw = self.yw)
    }
}

fn decimal_width(mut n: usize) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

#[cfg(test)]
fn pairs<'s>(tokens: &'s [Token<'s>]) -> Vec<(TokenKind, &'s str)> {
    tokens.iter().map(|t| (t.kind(), t.literal())).collect()
}

#[test]
fn test_tokenize_text_basic() {
    use crate::TokenKind::*;

    let tokens = tokenize_text("a\nb", "a\nc");
    assert_eq!(
        pairs(&tokens),
        vec![
            (SameSymbol, "1 1 "),
            (Space, " "),
            (SameLine, "a\n"),
            (DelSymbol, "2  -"),
            (Space, " "),
            (DelLine, "b"),
            (Newline, "\n"),
            (AddSymbol, "  2+"),
            (Space, " "),
            (AddLine, "c"),
            (Newline, "\n"),
        ]
    );
}

#[test]
fn test_tokenize_text_empty() {
    assert_eq!(tokenize_text("", ""), vec![]);
}

#[test]
fn test_tokenize_text_identical() {
    use crate::TokenKind::*;

    let tokens = tokenize_text("foo\nbar\nbaz", "foo\nbar\nbaz");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SameSymbol, Space, SameLine, SameSymbol, Space, SameLine, SameSymbol, Space, SameLine,
        ]
    );
    let rendered: String = tokens.iter().map(|t| t.literal()).collect();
    assert_eq!(rendered, "1 1  foo\n2 2  bar\n3 3  baz\n");
}

#[test]
fn test_tokenize_text_delete_before_add() {
    use crate::TokenKind::*;

    // no common line, so both steps are eligible at once
    let tokens = tokenize_text("b", "c");
    assert_eq!(
        pairs(&tokens),
        vec![
            (DelSymbol, "1  -"),
            (Space, " "),
            (DelLine, "b"),
            (Newline, "\n"),
            (AddSymbol, "  1+"),
            (Space, " "),
            (AddLine, "c"),
            (Newline, "\n"),
        ]
    );
}

#[test]
fn test_tokenize_text_reconstructs_both_sides() {
    let x = "the quick\nbrown\nfox jumps\nover";
    let y = "the quick\nred\nfox jumps\nover\nthe lazy dog";
    let tokens = tokenize_text(x, y);

    let mut x_lines = Vec::new();
    let mut y_lines = Vec::new();
    for token in &tokens {
        match token.kind() {
            TokenKind::DelLine => x_lines.push(token.literal().to_string()),
            TokenKind::AddLine => y_lines.push(token.literal().to_string()),
            TokenKind::SameLine => {
                let line = token.literal().strip_suffix('\n').unwrap().to_string();
                x_lines.push(line.clone());
                y_lines.push(line);
            }
            _ => {}
        }
    }

    let expect = |text: &str| -> Vec<String> {
        split_lines(text).iter().map(|l| l.as_str().to_string()).collect()
    };
    assert_eq!(x_lines, expect(x));
    assert_eq!(y_lines, expect(y));
}

#[test]
fn test_gutter_width_scales() {
    let x = (1..=150).map(|n| format!("line {}", n)).collect::<Vec<_>>().join("\n");
    let y = (1..=5).map(|n| format!("line {}", n * 31)).collect::<Vec<_>>().join("\n");
    let tokens = tokenize_text(&x, &y);

    // 3 digit x column, 1 digit y column, separator and marker
    for token in &tokens {
        match token.kind() {
            TokenKind::DelSymbol | TokenKind::AddSymbol | TokenKind::SameSymbol => {
                assert_eq!(token.literal().chars().count(), 6, "{:?}", token);
            }
            _ => {}
        }
    }
    assert_eq!(tokens[0].literal(), "001  -");
    assert!(tokens.iter().any(|t| t.literal() == "031 1 "));
}

#[test]
fn test_tokenize_text_snapshot() {
    let tokens = tokenize_text("a", "b");
    insta::assert_debug_snapshot!(tokens, @r###"
    [
        Token {
            kind: DelSymbol,
            literal: "1  -",
        },
        Token {
            kind: Space,
            literal: " ",
        },
        Token {
            kind: DelLine,
            literal: "a",
        },
        Token {
            kind: Newline,
            literal: "\n",
        },
        Token {
            kind: AddSymbol,
            literal: "  1+",
        },
        Token {
            kind: Space,
            literal: " ",
        },
        Token {
            kind: AddLine,
            literal: "b",
        },
        Token {
            kind: Newline,
            literal: "\n",
        },
    ]
    "###);
}

#[test]
fn test_tokenize_text_rendered_snapshot() {
    let tokens = tokenize_text("apple\nbanana\ncherry", "apple\ncoconut\ncherry");
    let rendered: String = tokens.iter().map(|t| t.literal()).collect();
    insta::assert_debug_snapshot!(rendered, @r###""1 1  apple\n2  - banana\n  2+ coconut\n3 3  cherry\n""###);
}

#[test]
fn test_tokenize_line_basic() {
    use crate::TokenKind::*;

    let (x_tokens, y_tokens) = tokenize_line("foo bar baz", "foo qux baz");
    assert_eq!(
        pairs(&x_tokens),
        vec![(SameWords, "foo"), (DelWords, "bar"), (SameWords, "baz")]
    );
    assert_eq!(
        pairs(&y_tokens),
        vec![(SameWords, "foo"), (AddWords, "qux"), (SameWords, "baz")]
    );
}

#[test]
fn test_tokenize_line_symbols() {
    use crate::TokenKind::*;

    let (x_tokens, y_tokens) = tokenize_line("a = 1;", "a = 2;");
    assert_eq!(
        pairs(&x_tokens),
        vec![(SameWords, "a"), (SameWords, "="), (DelWords, "1"), (SameWords, ";")]
    );
    assert_eq!(
        pairs(&y_tokens),
        vec![(SameWords, "a"), (SameWords, "="), (AddWords, "2"), (SameWords, ";")]
    );
}

#[test]
fn test_idempotent() {
    let first = tokenize_text("one\ntwo\nthree", "one\n2\nthree");
    let second = tokenize_text("one\ntwo\nthree", "one\n2\nthree");
    assert_eq!(first, second);

    let first = tokenize_line("one two three", "one 2 three");
    let second = tokenize_line("one two three", "one 2 three");
    assert_eq!(first, second);
}

#[test]
fn test_cancelled_stream_is_well_formed() {
    use crate::TokenKind::*;

    let deadline = Instant::now();
    std::thread::sleep(Duration::from_millis(5));

    // with an empty LCS everything is a deletion followed by an addition
    let tokens = tokenize_text_deadline("a\nb", "a\nc", Some(deadline));
    assert_eq!(
        pairs(&tokens),
        vec![
            (DelSymbol, "1  -"),
            (Space, " "),
            (DelLine, "a"),
            (Newline, "\n"),
            (DelSymbol, "2  -"),
            (Space, " "),
            (DelLine, "b"),
            (Newline, "\n"),
            (AddSymbol, "  1+"),
            (Space, " "),
            (AddLine, "a"),
            (Newline, "\n"),
            (AddSymbol, "  2+"),
            (Space, " "),
            (AddLine, "c"),
            (Newline, "\n"),
        ]
    );
}

#[test]
fn test_config_timeout_matches_untimed() {
    let timed = TokenizeConfig::new()
        .timeout(Duration::from_secs(60))
        .tokenize_text("a\nb", "a\nc");
    assert_eq!(timed, tokenize_text("a\nb", "a\nc"));

    let (x_tokens, y_tokens) = TokenizeConfig::new()
        .deadline(Instant::now() + Duration::from_secs(60))
        .tokenize_line("foo bar", "foo baz");
    assert_eq!((x_tokens, y_tokens), tokenize_line("foo bar", "foo baz"));
}

#[test]
fn test_decimal_width() {
    assert_eq!(decimal_width(0), 1);
    assert_eq!(decimal_width(9), 1);
    assert_eq!(decimal_width(10), 2);
    assert_eq!(decimal_width(99), 2);
    assert_eq!(decimal_width(100), 3);
}
