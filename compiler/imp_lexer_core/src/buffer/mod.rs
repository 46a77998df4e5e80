//! Fixed-capacity sliding buffer over a byte stream.
//!
//! # Layout
//!
//! ```text
//! storage: [consumed..., unconsumed window..., free...]
//!           ^            ^                     ^
//!           0            window.offset         window.end()
//! ```
//!
//! Tokens are carved off the front of the window. A refill moves the window
//! back to offset 0 (a byte-for-byte `copy_within`) and fills the freed tail
//! from the reader. Storage is allocated once and never grows, so the
//! longest token a scan can hold is `capacity - 1` bytes: a window that
//! already spans the whole storage cannot be refilled.

use std::io::{self, Read};

use thiserror::Error;

/// Unconsumed range of the buffer storage.
///
/// Window operations are pure: they return a new window and never touch
/// the storage. Invariant: `offset + len <= capacity` of the storage the
/// window describes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Window {
    offset: usize,
    len: usize,
}

impl Window {
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    #[inline]
    pub const fn offset(self) -> usize {
        self.offset
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// One past the last byte of the window.
    #[inline]
    pub const fn end(self) -> usize {
        self.offset + self.len
    }

    /// Drop the first `n` bytes.
    ///
    /// `n` is clamped to the window length; a window never grows.
    #[inline]
    pub const fn remove_prefix(self, n: usize) -> Self {
        let n = if n > self.len { self.len } else { n };
        Self {
            offset: self.offset + n,
            len: self.len - n,
        }
    }

    /// The same bytes, moved to the start of storage.
    #[inline]
    pub const fn rebased(self) -> Self {
        Self {
            offset: 0,
            len: self.len,
        }
    }

    /// Grow the end of the window by `n` freshly read bytes.
    #[inline]
    const fn extended(self, n: usize) -> Self {
        Self {
            offset: self.offset,
            len: self.len + n,
        }
    }

    /// Borrow the bytes of this window from `storage`.
    #[inline]
    pub fn slice(self, storage: &[u8]) -> &[u8] {
        &storage[self.offset..self.end()]
    }
}

/// Read-only view handed to the classifier and extractors.
///
/// `exhausted` tells them whether the end of `bytes` is the end of the
/// input or merely the end of what is buffered.
#[derive(Clone, Copy, Debug)]
pub struct View<'a> {
    bytes: &'a [u8],
    exhausted: bool,
}

impl<'a> View<'a> {
    pub const fn new(bytes: &'a [u8], exhausted: bool) -> Self {
        Self { bytes, exhausted }
    }

    /// A view over a complete, in-memory input.
    pub const fn complete(bytes: &'a [u8]) -> Self {
        Self::new(bytes, true)
    }

    #[inline]
    pub const fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `true` when no byte beyond this view will ever arrive.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Successful refill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefillOutcome {
    /// Storage is full again; the reader has not reported end-of-stream.
    Refilled { read: usize },
    /// The reader reported end-of-stream during this refill. No later refill
    /// will add bytes.
    Exhausted { read: usize },
}

impl RefillOutcome {
    /// Bytes appended by this refill.
    pub fn read(self) -> usize {
        match self {
            RefillOutcome::Refilled { read } | RefillOutcome::Exhausted { read } => read,
        }
    }
}

/// Failed refill.
#[derive(Debug, Error)]
pub enum RefillError {
    /// The window already spans the whole storage; nothing can be appended.
    #[error("window already spans the full buffer capacity of {capacity} bytes")]
    Overflow { capacity: usize },
    /// The underlying reader failed.
    #[error("failed to read source")]
    Read(#[source] io::Error),
}

/// Owned storage plus the unconsumed window over it.
///
/// Exclusively owned by one scan; nothing else aliases the storage.
pub struct ScanBuffer<R> {
    storage: Box<[u8]>,
    window: Window,
    /// Absolute source offset of the first byte of `window`.
    offset: u64,
    reader: R,
    exhausted: bool,
}

impl<R: Read> ScanBuffer<R> {
    /// Allocate `capacity` bytes of storage over `reader`.
    ///
    /// Nothing is read until the first [`refill`](Self::refill).
    pub fn new(reader: R, capacity: usize) -> Self {
        Self {
            storage: vec![0u8; capacity].into_boxed_slice(),
            window: Window::default(),
            offset: 0,
            reader,
            exhausted: false,
        }
    }

    /// Shift the window to the start of storage and read until the storage
    /// is full or the reader reports end-of-stream.
    ///
    /// Bytes read before a read error stay in the window, but the error is
    /// fatal for the scan. Once exhausted, refills are no-ops.
    pub fn refill(&mut self) -> Result<RefillOutcome, RefillError> {
        if self.exhausted {
            return Ok(RefillOutcome::Exhausted { read: 0 });
        }
        if self.is_full() {
            return Err(RefillError::Overflow {
                capacity: self.capacity(),
            });
        }

        if self.window.offset() != 0 {
            self.storage
                .copy_within(self.window.offset()..self.window.end(), 0);
        }
        self.window = self.window.rebased();

        let mut read = 0;
        while self.window.end() < self.storage.len() {
            let free = &mut self.storage[self.window.end()..];
            match self.reader.read(free) {
                Ok(0) => {
                    self.exhausted = true;
                    break;
                }
                Ok(n) => {
                    self.window = self.window.extended(n);
                    read += n;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(RefillError::Read(e)),
            }
        }

        tracing::debug!(
            read,
            buffered = self.window.len(),
            exhausted = self.exhausted,
            "refilled scan buffer"
        );

        Ok(if self.exhausted {
            RefillOutcome::Exhausted { read }
        } else {
            RefillOutcome::Refilled { read }
        })
    }

    /// Drop the first `n` bytes of the window.
    pub fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.window.len(), "consumed past end of window");
        let next = self.window.remove_prefix(n);
        self.offset += (next.offset() - self.window.offset()) as u64;
        self.window = next;
    }

    /// Current unconsumed bytes, with the exhaustion flag.
    #[inline]
    pub fn view(&self) -> View<'_> {
        View::new(self.window.slice(&self.storage), self.exhausted)
    }

    #[inline]
    pub fn window(&self) -> Window {
        self.window
    }

    /// Absolute source offset of the first unconsumed byte.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// `true` once the reader has reported end-of-stream.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// `true` when the window spans the whole storage.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.window.len() == self.storage.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
