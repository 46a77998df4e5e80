//! Reserved-word prefix tree.
//!
//! The trie is a flat arena of nodes. Each node holds one child index per
//! ASCII byte (`0` means "no child", which is unambiguous because the root
//! at index 0 is never anyone's child) and a terminal flag.
//!
//! [`Trie::build`] is a `const fn`, so the standard vocabulary is turned
//! into a trie during compilation: if [`RESERVED_WORDS`] ever outgrows
//! [`MAX_NODES`], the crate fails to build instead of failing a scan.
//! Callers with their own vocabulary build a trie at runtime and get the
//! same check back as a [`TrieError`].
//!
//! A `Trie` is immutable after construction and holds no interior
//! mutability, so one value can be shared by reference across any number
//! of concurrent scans.

use thiserror::Error;

/// Number of child slots per node (7-bit ASCII).
const ALPHABET: usize = 128;

/// Node budget of a trie, root included.
///
/// Child indices are stored as `u8`, so the budget cannot exceed 256.
pub const MAX_NODES: usize = 256;

const _: () = assert!(MAX_NODES <= u8::MAX as usize + 1);

/// The standard Imperium vocabulary.
pub const RESERVED_WORDS: &[&str] = &[
    // Control flow
    "if", "else", "while", "for", "return", "do",
    // ADTs
    "class", "function", "enum", "signal", "regex_t",
    // Access modifiers
    "public", "private", "protected",
    // Primitive types
    "int", "string", "bool", "char", "float", "array", "bits",
    // Type modifiers
    "const", "static", "ptr", "ref", "final",
    // Compilation unit control
    "import", "export", "library", "module",
    // Semantic keywords
    "callback_t", "continuation_t", "template",
];

/// Standard trie, computed at compile time.
const STANDARD: Trie = match Trie::build(RESERVED_WORDS) {
    Ok(trie) => trie,
    Err(_) => panic!("RESERVED_WORDS does not fit in MAX_NODES trie nodes"),
};

/// Error building a [`Trie`] from a vocabulary.
///
/// Both variants describe a defect in the vocabulary itself, not in any
/// scanned input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TrieError {
    #[error("reserved-word trie needs more than {limit} nodes")]
    CapacityExceeded { limit: usize },
    #[error("reserved word contains non-ASCII byte 0x{byte:02X}")]
    NonAsciiByte { byte: u8 },
}

/// Exact-match reserved-word lookup.
#[derive(Clone, Debug)]
pub struct Trie {
    children: [[u8; ALPHABET]; MAX_NODES],
    terminal: [bool; MAX_NODES],
    node_count: usize,
    word_count: usize,
}

impl Trie {
    /// Build a trie containing every word of `words`.
    ///
    /// Insertion is deterministic and idempotent: duplicates and insertion
    /// order have no effect on membership. An empty word marks the root
    /// terminal, which only matters for `contains(b"")`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "node_count < MAX_NODES <= 256 is checked before the cast"
    )]
    pub const fn build(words: &[&str]) -> Result<Self, TrieError> {
        let mut trie = Trie {
            children: [[0; ALPHABET]; MAX_NODES],
            terminal: [false; MAX_NODES],
            node_count: 1,
            word_count: 0,
        };

        let mut w = 0;
        while w < words.len() {
            let word = words[w].as_bytes();
            let mut current = 0;
            let mut i = 0;
            while i < word.len() {
                let byte = word[i];
                if byte as usize >= ALPHABET {
                    return Err(TrieError::NonAsciiByte { byte });
                }
                let next = trie.children[current][byte as usize];
                if next == 0 {
                    if trie.node_count == MAX_NODES {
                        return Err(TrieError::CapacityExceeded { limit: MAX_NODES });
                    }
                    trie.children[current][byte as usize] = trie.node_count as u8;
                    current = trie.node_count;
                    trie.node_count += 1;
                } else {
                    current = next as usize;
                }
                i += 1;
            }
            if !trie.terminal[current] {
                trie.terminal[current] = true;
                trie.word_count += 1;
            }
            w += 1;
        }

        Ok(trie)
    }

    /// Trie for [`RESERVED_WORDS`].
    pub fn standard() -> Self {
        STANDARD
    }

    /// Returns `true` if `text` is exactly one of the vocabulary words.
    ///
    /// Proper prefixes of words are rejected unless they are words
    /// themselves. Bytes outside ASCII never match.
    pub fn contains(&self, text: &[u8]) -> bool {
        let mut current = 0;
        for &byte in text {
            let Some(&next) = self.children[current].get(byte as usize) else {
                return false;
            };
            if next == 0 {
                return false;
            }
            current = next as usize;
        }
        self.terminal[current]
    }

    /// Number of nodes in use, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
