//! Streaming tokenizer for Imperium source files.
//!
//! The scanner never holds more than one fixed-capacity buffer of source in
//! memory. Bytes are pulled from any [`std::io::Read`] through a
//! [`ScanBuffer`], classified by a fixed precedence order, extracted as
//! maximal runs, and yielded as [`Token`] values.
//!
//! # Layers
//!
//! - [`Trie`]: reserved-word lookup, built by a `const fn` so the standard
//!   vocabulary is checked at compile time.
//! - [`ScanBuffer`]: owned storage plus an unconsumed [`Window`].
//! - [`classify`] and [`extract`]: pure functions over a [`View`].
//! - [`Scanner`]: the driver state machine, an [`Iterator`] of tokens.
//!
//! # Example
//!
//! ```
//! use imp_lexer_core::{tokenize_bytes, ScanConfig, TokenKind, Trie};
//!
//! let trie = Trie::standard();
//! let tokens = tokenize_bytes(b"if x", &trie, &ScanConfig::default()).unwrap();
//! assert_eq!(tokens[0].kind(), TokenKind::ReservedWord);
//! assert_eq!(tokens[2].text(), b"x");
//! ```

mod buffer;
mod classify;
mod config;
mod error;
mod extract;
mod scanner;
mod token;
mod trie;

pub use buffer::{RefillError, RefillOutcome, ScanBuffer, View, Window};
pub use classify::{classify, ByteClass, Classification};
pub use config::{
    ConfigError, InvalidTokenPolicy, ScanConfig, DEFAULT_BLOCK_MULTIPLIER, DEFAULT_BLOCK_SIZE,
};
pub use error::{ScanError, ScanErrorKind};
pub use extract::{extract, Extraction};
pub use scanner::{tokenize_bytes, tokenize_path, tokenize_reader, Scanner};
pub use token::{Token, TokenKind};
pub use trie::{Trie, TrieError, MAX_NODES, RESERVED_WORDS};
