//! Tokenizer driver.
//!
//! [`Scanner`] owns one [`ScanBuffer`] and walks it with a small state
//! machine:
//!
//! ```text
//! Start ──▶ Reading ◀──▶ Refilling ──▶ Draining ──▶ Done
//!   │          │             │             │
//!   └──────────┴─────────────┴─────────────┴──▶ Failed
//! ```
//!
//! `Reading` and `Draining` both classify and extract one token per step;
//! they differ only in whether the reader may still deliver bytes. A
//! `NeedMore` answer from the classifier or an extractor sends the scanner
//! to `Refilling`. If the window already fills the whole buffer, the refill
//! fails and the scan ends with [`ScanError::TokenOverflow`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::buffer::{RefillError, RefillOutcome, ScanBuffer};
use crate::classify::{classify, Classification};
use crate::config::{InvalidTokenPolicy, ScanConfig};
use crate::error::ScanError;
use crate::extract::{extract, Extraction};
use crate::token::{Token, TokenKind};
use crate::trie::Trie;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    /// Nothing read yet.
    Start,
    /// Scanning; the reader may still deliver bytes.
    Reading,
    /// The buffered bytes cannot decide the next token.
    Refilling,
    /// Scanning the final buffered bytes; the reader is exhausted.
    Draining,
    Done,
    /// An error was yielded; the scanner is fused.
    Failed,
}

/// Result of one classify/extract step.
enum Step {
    Token(Token),
    Refill,
    End,
}

/// Streaming scanner over a reader.
///
/// Yields `Ok(token)` for each token in source order. The first error is
/// yielded once, after which the iterator is exhausted. `EndOfStream` is
/// never yielded; the iterator simply ends.
pub struct Scanner<'t, R> {
    buffer: ScanBuffer<R>,
    trie: &'t Trie,
    block_size: usize,
    on_invalid: InvalidTokenPolicy,
    state: ScanState,
}

impl<'t, R: Read> Scanner<'t, R> {
    /// Create a scanner over `reader`, resolving reserved words with `trie`.
    ///
    /// Fails if `config` does not validate. Nothing is read until the first
    /// call to [`next`](Iterator::next).
    pub fn new(reader: R, trie: &'t Trie, config: &ScanConfig) -> Result<Self, ScanError> {
        config.validate()?;
        Ok(Scanner {
            buffer: ScanBuffer::new(reader, config.buffer_capacity),
            trie,
            block_size: config.block_size,
            on_invalid: config.on_invalid,
            state: ScanState::Start,
        })
    }

    /// Scan to the end and collect every token.
    ///
    /// Any failure discards the tokens scanned so far.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn tokenize(self) -> Result<Vec<Token>, ScanError> {
        let tokens = self.collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = tokens.len(), "scan complete");
        Ok(tokens)
    }

    /// Absolute offset of the next unscanned byte.
    pub fn offset(&self) -> u64 {
        self.buffer.offset()
    }

    fn refill(&mut self) -> Result<(), ScanError> {
        let offset = self.buffer.offset();
        match self.buffer.refill() {
            Ok(RefillOutcome::Refilled { .. }) => {
                self.state = ScanState::Reading;
                Ok(())
            }
            Ok(RefillOutcome::Exhausted { .. }) => {
                self.state = ScanState::Draining;
                Ok(())
            }
            Err(RefillError::Overflow { capacity }) => {
                Err(ScanError::TokenOverflow { offset, capacity })
            }
            Err(RefillError::Read(source)) => Err(ScanError::ReadFailure { offset, source }),
        }
    }

    fn step(&mut self) -> Result<Step, ScanError> {
        let view = self.buffer.view();
        let offset = self.buffer.offset();

        let kind = match classify(view) {
            Classification::Kind(TokenKind::EndOfStream) => return Ok(Step::End),
            Classification::Kind(kind) => kind,
            Classification::NeedMore => return Ok(Step::Refill),
        };

        let (kind, len) = match extract(kind, view, self.trie) {
            Extraction::Lexeme { kind, len } => (kind, len),
            Extraction::NeedMore => return Ok(Step::Refill),
            Extraction::Unterminated => return Err(ScanError::UnterminatedComment { offset }),
        };

        let bytes = &view.bytes()[..len];
        if kind == TokenKind::Invalid && self.on_invalid == InvalidTokenPolicy::Abort {
            return Err(ScanError::InvalidCharacter {
                offset,
                byte: bytes[0],
            });
        }

        let token = Token::new(kind, bytes, offset);
        self.buffer.consume(len);
        Ok(Step::Token(token))
    }

    fn fail(&mut self, err: ScanError) -> Option<Result<Token, ScanError>> {
        tracing::debug!(error = %err, kind = %err.kind(), "scan failed");
        self.state = ScanState::Failed;
        Some(Err(err))
    }
}

impl<R: Read> Iterator for Scanner<'_, R> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                ScanState::Start | ScanState::Refilling => {
                    if let Err(err) = self.refill() {
                        return self.fail(err);
                    }
                }
                ScanState::Reading | ScanState::Draining => match self.step() {
                    Ok(Step::Token(token)) => {
                        tracing::trace!(
                            kind = %token.kind(),
                            offset = token.offset(),
                            len = token.len(),
                            "token"
                        );
                        if !self.buffer.is_exhausted()
                            && self.buffer.window().len() < self.block_size
                        {
                            self.state = ScanState::Refilling;
                        }
                        return Some(Ok(token));
                    }
                    Ok(Step::Refill) => {
                        debug_assert!(
                            !self.buffer.is_exhausted(),
                            "exhausted input must always decide a token"
                        );
                        self.state = ScanState::Refilling;
                    }
                    Ok(Step::End) => {
                        self.state = ScanState::Done;
                        return None;
                    }
                    Err(err) => return self.fail(err),
                },
                ScanState::Done | ScanState::Failed => return None,
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for Scanner<'_, R> {}

/// Scan everything `reader` delivers.
pub fn tokenize_reader<R: Read>(
    reader: R,
    trie: &Trie,
    config: &ScanConfig,
) -> Result<Vec<Token>, ScanError> {
    Scanner::new(reader, trie, config)?.tokenize()
}

/// Scan an in-memory source.
pub fn tokenize_bytes(
    source: &[u8],
    trie: &Trie,
    config: &ScanConfig,
) -> Result<Vec<Token>, ScanError> {
    tokenize_reader(source, trie, config)
}

/// Open and scan the file at `path`.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn tokenize_path(
    path: impl AsRef<Path>,
    trie: &Trie,
    config: &ScanConfig,
) -> Result<Vec<Token>, ScanError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ScanError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    tokenize_reader(file, trie, config)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
