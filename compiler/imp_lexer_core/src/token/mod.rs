//! Token model: a closed kind set plus the verbatim source bytes.

use std::fmt;

/// Lexical category of a token.
///
/// The set is closed; the driver dispatches on it with a plain `match`.
/// [`TokenKind::EndOfStream`] is produced by the classifier but never
/// yielded as a token.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier-shaped word found in the reserved-word trie.
    ReservedWord = 0,
    /// Any other identifier-shaped run (letters, digits, `_`).
    CharSequence = 1,
    /// Run of operator symbols (`==`, `+`, `->`, ...).
    Operator = 2,
    /// Run of decimal digits not glued to identifier bytes.
    NumberLiteral = 3,
    /// `// ...` line comment or `/* ... */` block comment.
    Comment = 4,
    /// Run of spaces, tabs, carriage returns and newlines.
    Whitespace = 5,
    /// Single-byte delimiter (`(`, `;`, `"`, ...).
    Delimiter = 6,
    /// Input exhausted and the window is empty.
    EndOfStream = 7,
    /// A byte that belongs to no lexical category.
    Invalid = 8,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 9] = [
        TokenKind::ReservedWord,
        TokenKind::CharSequence,
        TokenKind::Operator,
        TokenKind::NumberLiteral,
        TokenKind::Comment,
        TokenKind::Whitespace,
        TokenKind::Delimiter,
        TokenKind::EndOfStream,
        TokenKind::Invalid,
    ];

    /// Human-readable category name, used by the CLI token listing.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::ReservedWord => "reserved word",
            TokenKind::CharSequence => "char sequence",
            TokenKind::Operator => "operator",
            TokenKind::NumberLiteral => "number",
            TokenKind::Comment => "comment",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Delimiter => "delimiter",
            TokenKind::EndOfStream => "end of stream",
            TokenKind::Invalid => "invalid",
        }
    }

    /// Returns `true` for kinds that carry no meaning for a parser.
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified run of source bytes.
///
/// Immutable once produced. `text` is exactly the bytes that were consumed
/// from the source, so concatenating the text of every token reproduces
/// the input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: Box<[u8]>,
    offset: u64,
}

impl Token {
    /// Create a token from its kind, source bytes, and absolute byte offset.
    pub fn new(kind: TokenKind, text: impl Into<Box<[u8]>>, offset: u64) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Source bytes of the token, verbatim.
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Source text as `&str`, or `None` if the bytes are not valid UTF-8
    /// (possible only for [`TokenKind::Invalid`] tokens and comments).
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.text).ok()
    }

    /// Absolute byte offset of the first byte of the token in the source.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Length of the token in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false` for tokens produced by the scanner.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset one past the last byte of the token.
    pub fn end(&self) -> u64 {
        self.offset + self.text.len() as u64
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?})",
            self.kind,
            String::from_utf8_lossy(&self.text)
        )
    }
}
