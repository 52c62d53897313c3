//! Error types for `.dat` parsing.

use thiserror::Error;

use crate::{AttributeTag, ThingCategory};

/// Errors that can occur when reading a `.dat` file.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] tibia_common::Error),

    /// Tag byte not present in the attribute table.
    #[error("unknown attribute tag {tag:#04x} at offset {position}")]
    UnknownTag { tag: u8, position: usize },

    /// The trailing fields of a known tag ran past the end of the data.
    #[error("truncated {tag} attribute (tag at offset {position}): {source}")]
    TruncatedAttribute {
        tag: AttributeTag,
        position: usize,
        #[source]
        source: tibia_common::Error,
    },

    /// A thing record failed to decode.
    #[error("failed to decode {category} {id}: {source}")]
    Thing {
        category: ThingCategory,
        id: u32,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Get the innermost error, skipping record context.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Thing { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type for `.dat` operations.
pub type Result<T> = std::result::Result<T, Error>;
