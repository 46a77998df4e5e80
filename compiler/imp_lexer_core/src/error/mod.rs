//! Scan errors.
//!
//! Every failure is terminal for the scan that produced it. Each variant
//! carries enough context (byte offset, offending byte, path) for a caller
//! to render a message; presentation is left to the caller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::trie::TrieError;

/// Terminal failure of a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The source could not be opened.
    #[error("cannot open '{}'", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Reading the source failed mid-scan.
    #[error("failed to read source at byte {offset}")]
    ReadFailure {
        offset: u64,
        #[source]
        source: io::Error,
    },
    /// A `/*` comment opened at `offset` is never closed.
    #[error("unterminated block comment starting at byte {offset}")]
    UnterminatedComment { offset: u64 },
    /// The token starting at `offset` does not fit in the buffer.
    #[error("token at byte {offset} does not fit in a {capacity}-byte buffer")]
    TokenOverflow { offset: u64, capacity: usize },
    /// The reserved-word vocabulary does not fit the trie.
    #[error(transparent)]
    CapacityExceeded(#[from] TrieError),
    /// A byte at `offset` matches no lexical category.
    #[error("invalid character 0x{byte:02X} at byte {offset}")]
    InvalidCharacter { offset: u64, byte: u8 },
    /// The scan configuration is inconsistent.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Field-less discriminant of [`ScanError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanErrorKind {
    SourceUnavailable,
    ReadFailure,
    UnterminatedComment,
    TokenOverflow,
    CapacityExceeded,
    InvalidCharacter,
    Config,
}

impl ScanErrorKind {
    /// Stable short name, suitable for `error[<name>]` prefixes.
    pub const fn name(self) -> &'static str {
        match self {
            ScanErrorKind::SourceUnavailable => "source-unavailable",
            ScanErrorKind::ReadFailure => "read-failure",
            ScanErrorKind::UnterminatedComment => "unterminated-comment",
            ScanErrorKind::TokenOverflow => "token-overflow",
            ScanErrorKind::CapacityExceeded => "capacity-exceeded",
            ScanErrorKind::InvalidCharacter => "invalid-character",
            ScanErrorKind::Config => "config",
        }
    }
}

impl std::fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl ScanError {
    pub fn kind(&self) -> ScanErrorKind {
        match self {
            ScanError::SourceUnavailable { .. } => ScanErrorKind::SourceUnavailable,
            ScanError::ReadFailure { .. } => ScanErrorKind::ReadFailure,
            ScanError::UnterminatedComment { .. } => ScanErrorKind::UnterminatedComment,
            ScanError::TokenOverflow { .. } => ScanErrorKind::TokenOverflow,
            ScanError::CapacityExceeded(_) => ScanErrorKind::CapacityExceeded,
            ScanError::InvalidCharacter { .. } => ScanErrorKind::InvalidCharacter,
            ScanError::Config(_) => ScanErrorKind::Config,
        }
    }

    /// Byte offset in the source the error points at, when there is one.
    pub fn offset(&self) -> Option<u64> {
        match self {
            ScanError::ReadFailure { offset, .. }
            | ScanError::UnterminatedComment { offset }
            | ScanError::TokenOverflow { offset, .. }
            | ScanError::InvalidCharacter { offset, .. } => Some(*offset),
            ScanError::SourceUnavailable { .. }
            | ScanError::CapacityExceeded(_)
            | ScanError::Config(_) => None,
        }
    }
}
