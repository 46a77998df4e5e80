//! Token classification.
//!
//! Decides which lexical category governs the front of a [`View`], using a
//! fixed precedence order (first match wins):
//!
//! 1. empty view, stream exhausted → [`TokenKind::EndOfStream`]
//! 2. whitespace byte → [`TokenKind::Whitespace`]
//! 3. delimiter byte → [`TokenKind::Delimiter`]
//! 4. `//` or `/*` → [`TokenKind::Comment`]
//! 5. digit run not glued to an identifier byte → [`TokenKind::NumberLiteral`]
//! 6. identifier byte, or digits glued to one (`1x`) → [`TokenKind::CharSequence`]
//! 7. operator symbol → [`TokenKind::Operator`]
//! 8. anything else → [`TokenKind::Invalid`]
//!
//! Rules 4 and 5 need lookahead. When the deciding byte lies beyond the
//! end of the view and more input may still arrive, the classifier answers
//! [`Classification::NeedMore`] instead of guessing.

use bitflags::bitflags;

use crate::buffer::View;
use crate::token::TokenKind;

bitflags! {
    /// Lexical classes of a single byte.
    ///
    /// Each ASCII byte has at most one class; control bytes, DEL and
    /// non-ASCII bytes have none.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ByteClass: u8 {
        /// ` `, `\t`, `\r`, `\n`.
        const WHITESPACE = 1 << 0;
        /// `;` `,` `.` `(` `)` `{` `}` `[` `]` `<` `>` `:` `"` `'`.
        const DELIMITER = 1 << 1;
        /// `0`-`9`.
        const DIGIT = 1 << 2;
        /// `a`-`z`, `A`-`Z`, `_`.
        const IDENT = 1 << 3;
        /// `!` `@` `#` `$` `%` `^` `&` `*` `-` `+` `=` `|` `\` `/` `?` `~` `` ` ``.
        const OPERATOR = 1 << 4;

        /// Bytes that may continue an identifier run.
        const IDENT_CONTINUE = Self::IDENT.bits() | Self::DIGIT.bits();
    }
}

/// 256-entry class table; one indexed read per byte.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static CLASS_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = match i as u8 {
            b' ' | b'\t' | b'\r' | b'\n' => ByteClass::WHITESPACE.bits(),
            b';' | b',' | b'.' | b'(' | b')' | b'{' | b'}' | b'[' | b']' | b'<' | b'>'
            | b':' | b'"' | b'\'' => ByteClass::DELIMITER.bits(),
            b'0'..=b'9' => ByteClass::DIGIT.bits(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => ByteClass::IDENT.bits(),
            b'!' | b'@' | b'#' | b'$' | b'%' | b'^' | b'&' | b'*' | b'-' | b'+' | b'='
            | b'|' | b'\\' | b'/' | b'?' | b'~' | b'`' => ByteClass::OPERATOR.bits(),
            _ => 0,
        };
        i += 1;
    }
    table
};

impl ByteClass {
    /// Class of `byte`; empty for bytes that belong to no category.
    #[inline]
    pub fn of(byte: u8) -> Self {
        Self::from_bits_retain(CLASS_TABLE[byte as usize])
    }

    #[inline]
    pub fn is(byte: u8, class: Self) -> bool {
        Self::of(byte).intersects(class)
    }
}

/// Outcome of [`classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// The front of the view starts a token of this kind.
    Kind(TokenKind),
    /// Undecidable from the buffered bytes; refill and ask again.
    NeedMore,
}

/// Classify the token at the front of `view`.
pub fn classify(view: View<'_>) -> Classification {
    let bytes = view.bytes();
    let Some(&first) = bytes.first() else {
        return if view.is_exhausted() {
            Classification::Kind(TokenKind::EndOfStream)
        } else {
            Classification::NeedMore
        };
    };

    let class = ByteClass::of(first);
    if class.contains(ByteClass::WHITESPACE) {
        return Classification::Kind(TokenKind::Whitespace);
    }
    if class.contains(ByteClass::DELIMITER) {
        return Classification::Kind(TokenKind::Delimiter);
    }
    if first == b'/' {
        match bytes.get(1) {
            Some(b'/' | b'*') => return Classification::Kind(TokenKind::Comment),
            Some(_) => {}
            None if !view.is_exhausted() => return Classification::NeedMore,
            None => {}
        }
    }
    if class.contains(ByteClass::DIGIT) {
        return classify_digit_run(view);
    }
    if class.contains(ByteClass::IDENT) {
        return Classification::Kind(TokenKind::CharSequence);
    }
    if class.contains(ByteClass::OPERATOR) {
        return Classification::Kind(TokenKind::Operator);
    }
    Classification::Kind(TokenKind::Invalid)
}

/// A digit run is a number unless an identifier byte follows it directly.
fn classify_digit_run(view: View<'_>) -> Classification {
    let bytes = view.bytes();
    let run = bytes
        .iter()
        .take_while(|&&b| ByteClass::is(b, ByteClass::DIGIT))
        .count();
    match bytes.get(run) {
        Some(&next) if ByteClass::is(next, ByteClass::IDENT) => {
            Classification::Kind(TokenKind::CharSequence)
        }
        Some(_) => Classification::Kind(TokenKind::NumberLiteral),
        None if view.is_exhausted() => Classification::Kind(TokenKind::NumberLiteral),
        None => Classification::NeedMore,
    }
}

#[cfg(test)]
mod tests;
