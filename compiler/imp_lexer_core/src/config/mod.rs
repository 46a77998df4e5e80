//! Scanner configuration.

use thiserror::Error;

/// Default refill block size in bytes.
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// Default buffer size as a multiple of the block size (1 MiB total).
pub const DEFAULT_BLOCK_MULTIPLIER: usize = 16 * 16;

/// What the scanner does with a byte that matches no lexical category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InvalidTokenPolicy {
    /// Fail the scan with [`ScanError::InvalidCharacter`](crate::ScanError::InvalidCharacter).
    #[default]
    Abort,
    /// Yield a one-byte [`TokenKind::Invalid`](crate::TokenKind::Invalid) token and continue.
    Emit,
}

impl InvalidTokenPolicy {
    /// Parse the CLI spelling (`abort` or `emit`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "abort" => Some(Self::Abort),
            "emit" => Some(Self::Emit),
            _ => None,
        }
    }
}

/// Buffer sizing and error policy for one scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    /// Bytes requested per refill. The scanner refills as soon as fewer
    /// than this many unconsumed bytes remain.
    pub block_size: usize,
    /// Total buffer storage. A single token must be shorter than this.
    pub buffer_capacity: usize,
    /// Handling of bytes that match no lexical category.
    pub on_invalid: InvalidTokenPolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig::with_multiplier(DEFAULT_BLOCK_SIZE, DEFAULT_BLOCK_MULTIPLIER)
    }
}

impl ScanConfig {
    /// Configuration with `buffer_capacity = block_size * multiplier`.
    ///
    /// The product saturates at `usize::MAX`; [`validate`](Self::validate)
    /// still applies.
    pub fn with_multiplier(block_size: usize, multiplier: usize) -> Self {
        ScanConfig {
            block_size,
            buffer_capacity: block_size.saturating_mul(multiplier),
            on_invalid: InvalidTokenPolicy::default(),
        }
    }

    #[must_use]
    pub fn on_invalid(mut self, policy: InvalidTokenPolicy) -> Self {
        self.on_invalid = policy;
        self
    }

    /// Check the sizing invariants.
    ///
    /// The capacity must hold at least two bytes, since a comment opener is
    /// only recognizable with two bytes of lookahead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        if self.buffer_capacity < self.block_size {
            return Err(ConfigError::CapacityBelowBlockSize {
                capacity: self.buffer_capacity,
                block_size: self.block_size,
            });
        }
        if self.buffer_capacity < 2 {
            return Err(ConfigError::CapacityTooSmall {
                capacity: self.buffer_capacity,
            });
        }
        Ok(())
    }

    /// Longest token this configuration can scan, in bytes.
    pub fn max_token_len(&self) -> usize {
        self.buffer_capacity.saturating_sub(1)
    }
}

/// Invalid [`ScanConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("block size must be greater than zero")]
    ZeroBlockSize,
    #[error("buffer capacity {capacity} is smaller than block size {block_size}")]
    CapacityBelowBlockSize { capacity: usize, block_size: usize },
    #[error("buffer capacity {capacity} is too small; at least 2 bytes are required")]
    CapacityTooSmall { capacity: usize },
}
