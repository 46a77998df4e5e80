//! Token extraction.
//!
//! One function per [`TokenKind`], selected by a `match` in [`extract`].
//! Each consumes the maximal run its category allows and reports the run
//! length; the driver removes that prefix from the window. Extractors never
//! touch buffer storage.
//!
//! A run that reaches the end of the view is only complete when the stream
//! is exhausted. Otherwise the extractor answers [`Extraction::NeedMore`],
//! so a refill boundary can never split a token.

use memchr::memmem;

use crate::buffer::View;
use crate::classify::ByteClass;
use crate::token::TokenKind;
use crate::trie::Trie;

/// Outcome of [`extract`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extraction {
    /// A complete token of `len` bytes at the front of the view.
    Lexeme { kind: TokenKind, len: usize },
    /// The run reaches the end of the view and more input may follow.
    NeedMore,
    /// A `/*` comment with no closing `*/` before end of input.
    Unterminated,
}

/// Extract the token of kind `kind` at the front of `view`.
///
/// `kind` must come from [`classify`](crate::classify) on the same view.
/// `CharSequence` runs are resolved against `trie` and may come back as
/// [`TokenKind::ReservedWord`]. `EndOfStream` extracts nothing.
pub fn extract(kind: TokenKind, view: View<'_>, trie: &Trie) -> Extraction {
    match kind {
        TokenKind::Whitespace => whitespace(view),
        TokenKind::Delimiter | TokenKind::Invalid => single(kind, view),
        TokenKind::Comment => comment(view),
        TokenKind::NumberLiteral => number(view),
        TokenKind::CharSequence | TokenKind::ReservedWord => char_sequence(view, trie),
        TokenKind::Operator => operator(view),
        TokenKind::EndOfStream => Extraction::Lexeme {
            kind: TokenKind::EndOfStream,
            len: 0,
        },
    }
}

/// Length of the leading run of bytes in `class`.
#[inline]
fn run_len(bytes: &[u8], class: ByteClass) -> usize {
    bytes.iter().take_while(|&&b| ByteClass::is(b, class)).count()
}

/// Finish a maximal run: complete if something other than the run follows,
/// or if nothing ever will.
#[inline]
fn finish_run(view: View<'_>, kind: TokenKind, len: usize) -> Extraction {
    if len == view.len() && !view.is_exhausted() {
        Extraction::NeedMore
    } else {
        Extraction::Lexeme { kind, len }
    }
}

fn whitespace(view: View<'_>) -> Extraction {
    let len = run_len(view.bytes(), ByteClass::WHITESPACE);
    finish_run(view, TokenKind::Whitespace, len)
}

fn single(kind: TokenKind, view: View<'_>) -> Extraction {
    debug_assert!(!view.is_empty(), "single-byte token on empty view");
    Extraction::Lexeme { kind, len: 1 }
}

fn number(view: View<'_>) -> Extraction {
    let len = run_len(view.bytes(), ByteClass::DIGIT);
    finish_run(view, TokenKind::NumberLiteral, len)
}

fn char_sequence(view: View<'_>, trie: &Trie) -> Extraction {
    let bytes = view.bytes();
    let len = run_len(bytes, ByteClass::IDENT_CONTINUE);
    match finish_run(view, TokenKind::CharSequence, len) {
        Extraction::Lexeme { len, .. } if trie.contains(&bytes[..len]) => Extraction::Lexeme {
            kind: TokenKind::ReservedWord,
            len,
        },
        other => other,
    }
}

/// Maximal run of operator symbols. A `/` only ever starts a run, so the
/// run never swallows a comment opener and needs one byte of lookahead.
fn operator(view: View<'_>) -> Extraction {
    let bytes = view.bytes();
    debug_assert!(!bytes.is_empty(), "operator extraction on empty view");
    let len = 1 + bytes[1..]
        .iter()
        .take_while(|&&b| b != b'/' && ByteClass::is(b, ByteClass::OPERATOR))
        .count();
    finish_run(view, TokenKind::Operator, len)
}

fn comment(view: View<'_>) -> Extraction {
    let bytes = view.bytes();
    debug_assert!(bytes.len() >= 2 && bytes[0] == b'/', "not a comment opener");
    if bytes[1] == b'*' {
        block_comment(view)
    } else {
        line_comment(view)
    }
}

/// `//` through the byte before the next newline, or end of input.
fn line_comment(view: View<'_>) -> Extraction {
    let bytes = view.bytes();
    match memchr::memchr(b'\n', &bytes[2..]) {
        Some(pos) => Extraction::Lexeme {
            kind: TokenKind::Comment,
            len: 2 + pos,
        },
        None => finish_run(view, TokenKind::Comment, bytes.len()),
    }
}

/// `/*` through and including the first `*/` after the opener.
fn block_comment(view: View<'_>) -> Extraction {
    let bytes = view.bytes();
    match memmem::find(&bytes[2..], b"*/") {
        Some(pos) => Extraction::Lexeme {
            kind: TokenKind::Comment,
            len: 2 + pos + 2,
        },
        None if view.is_exhausted() => Extraction::Unterminated,
        None => Extraction::NeedMore,
    }
}

#[cfg(test)]
mod tests;
