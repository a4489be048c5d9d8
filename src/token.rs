//! The token output contract.
use std::borrow::Cow;
use std::fmt;

/// The kind of a diff token.
///
/// [`ChunkStart`](TokenKind::ChunkStart), [`ChunkEnd`](TokenKind::ChunkEnd)
/// and [`EmptyLine`](TokenKind::EmptyLine) are reserved for renderer layers
/// that compact long runs of unchanged lines.  The tokenizers in this crate
/// never produce them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// The line break terminating a delete or add group.
    Newline,
    /// The single blank column between a symbol and its line content.
    Space,
    /// Opens a compacted chunk (reserved).
    ChunkStart,
    /// Closes a compacted chunk (reserved).
    ChunkEnd,
    /// Gutter numbers for a line present on both sides.
    SameSymbol,
    /// Content of a line present on both sides.
    SameLine,
    /// Gutter number for a line only present on the y side.
    AddSymbol,
    /// Content of a line only present on the y side.
    AddLine,
    /// Gutter number for a line only present on the x side.
    DelSymbol,
    /// Content of a line only present on the x side.
    DelLine,
    /// A word present in both lines.
    SameWords,
    /// A word only present in the y line.
    AddWords,
    /// A word only present in the x line.
    DelWords,
    /// Placeholder for an elided line (reserved).
    EmptyLine,
}

/// A single printable unit of diff output.
///
/// Tokens are plain data: a kind and the exact literal to emit.  The literal
/// is never reinterpreted; concatenating the literals of a stream in order
/// reconstructs the display text.  Literals borrow from the diffed inputs
/// where possible and are owned for formatted gutter numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token<'s> {
    kind: TokenKind,
    literal: Cow<'s, str>,
}

impl<'s> Token<'s> {
    /// Creates a token from a kind and its literal.
    ///
    /// This is public so that renderer layers sitting on top of the token
    /// stream can produce the reserved kinds themselves.
    pub fn new(kind: TokenKind, literal: impl Into<Cow<'s, str>>) -> Token<'s> {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// Returns the kind of the token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the literal text this token emits.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Consumes the token and returns the literal.
    pub fn into_literal(self) -> Cow<'s, str> {
        self.literal
    }
}

impl fmt::Display for Token<'_> {
    /// Writes the literal unchanged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

#[test]
fn test_display_is_literal() {
    let token = Token::new(TokenKind::DelLine, "banana");
    assert_eq!(token.to_string(), "banana");
    assert_eq!(token.literal(), "banana");
    assert_eq!(token.kind(), TokenKind::DelLine);
}

#[test]
fn test_into_literal() {
    let token = Token::new(TokenKind::SameSymbol, String::from("1 1 "));
    assert_eq!(token.into_literal(), "1 1 ");
}

#[test]
#[cfg(feature = "serde")]
fn test_serde_roundtrip() {
    let token = Token::new(TokenKind::AddLine, "cherry");
    let json = serde_json::to_string(&token).unwrap();
    assert_eq!(json, r#"{"kind":"AddLine","literal":"cherry"}"#);
    let back: Token<'_> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, token);
}
