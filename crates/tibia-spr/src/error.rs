//! Error types for `.spr` reading.

use thiserror::Error;

/// Errors that can occur when reading sprites.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] tibia_common::Error),

    /// The address table holds no sprite for this ID.
    #[error("no sprite stored for ID {id}")]
    NotFound { id: u32 },

    /// The run stream did not cover the sprite canvas exactly.
    #[error("sprite pixel count mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A sprite failed to decode.
    #[error("failed to decode sprite {id}: {source}")]
    Sprite {
        id: u32,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Get the innermost error, skipping sprite context.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Sprite { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Check if this error only means the ID is empty.
    pub fn is_not_found(&self) -> bool {
        matches!(self.root_cause(), Error::NotFound { .. })
    }

    pub(crate) fn in_sprite(self, id: u32) -> Self {
        match self {
            Error::NotFound { .. } | Error::Sprite { .. } => self,
            other => Error::Sprite {
                id,
                source: Box::new(other),
            },
        }
    }
}

/// Result type for `.spr` operations.
pub type Result<T> = std::result::Result<T, Error>;
