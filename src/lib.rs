//! This crate implements tokenized diffing utilities.  Instead of producing
//! a patch or an edit script it renders the difference between two pieces of
//! text as an ordered stream of typed, printable tokens that a caller can
//! concatenate or style into a colored diff view.
//!
//! The crate is split into two levels:
//!
//! * [`lcs`]: the longest common subsequence engine.  It operates on ordered
//!   sequences of [`Comparable`] elements and knows nothing about text.
//! * the tokenizers: [`tokenize_text`] compares two multi-line blocks and
//!   produces one token stream with an aligned, zero-padded line number
//!   gutter; [`tokenize_line`] compares two single lines word by word and
//!   produces one stream per side for intra-line highlighting.
//!
//! # Examples
//!
//! A line level diff rendered by concatenating the token literals:
//!
//! ```rust
//! use difftok::tokenize_text;
//!
//! let tokens = tokenize_text("apple\nbanana", "apple\ncherry");
//! let rendered: String = tokens.iter().map(|t| t.literal()).collect();
//! assert_eq!(rendered, "1 1  apple\n2  - banana\n  2+ cherry\n");
//! ```
//!
//! A word level diff of two single lines:
//!
//! ```rust
//! use difftok::{tokenize_line, TokenKind};
//!
//! let (old, new) = tokenize_line("foo bar baz", "foo qux baz");
//! assert_eq!(old[1].kind(), TokenKind::DelWords);
//! assert_eq!(new[1].kind(), TokenKind::AddWords);
//! ```
//!
//! # Token streams
//!
//! A [`Token`] is plain data: a [`TokenKind`] and the exact literal to emit.
//! Literals are never reinterpreted.  Rendering (coloring, joining, chunk
//! compaction) is the caller's responsibility; the reserved kinds
//! [`TokenKind::ChunkStart`], [`TokenKind::ChunkEnd`] and
//! [`TokenKind::EmptyLine`] exist for such renderer layers and are never
//! produced here.
//!
//! # Cancellation
//!
//! Filling the LCS table is the only expensive step (`O(len(x) * len(y))`
//! time and space).  Every entry point has a `_deadline` variant taking an
//! `Option<Instant>`; when the deadline is exceeded the table fill gives up
//! and the walk falls back to an empty common subsequence.  The resulting
//! stream is still well-formed, it just classifies fewer lines or words as
//! unchanged.
pub mod lcs;

mod abstraction;
mod deadline_support;
mod token;
mod tokenize;

pub use crate::abstraction::{split_lines, split_words, Comparable, Line, Word};
pub use crate::token::{Token, TokenKind};
pub use crate::tokenize::{
    tokenize_line, tokenize_line_deadline, tokenize_text, tokenize_text_deadline, TokenizeConfig,
};
