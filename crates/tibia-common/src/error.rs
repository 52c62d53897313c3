//! Error types for tibia-common.

use thiserror::Error;

/// Common error type for binary reading.
#[derive(Debug, Error)]
pub enum Error {
    /// A read ran past the end of the available bytes.
    #[error("truncated input at offset {position}: needed {needed} bytes but only {available} available")]
    TruncatedInput {
        position: usize,
        needed: usize,
        available: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
