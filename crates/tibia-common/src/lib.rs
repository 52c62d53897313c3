//! Common utilities for the Tibia asset readers.
//!
//! This crate provides the low-level pieces shared by the `.dat` and `.spr` readers:
//!
//! - [`BinaryReader`] - Little-endian cursor over a byte slice
//! - [`ByteSource`] - Memory-mapped or owned file bytes
//! - [`FxHashMap`] - Fast ID-keyed map used for decoded records

mod error;
mod reader;
mod source;

pub use error::{Error, Result};
pub use reader::BinaryReader;
pub use source::ByteSource;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Hash map keyed by numeric IDs, using the Fx hasher.
pub type FxHashMap<K, V> =
    hashbrown::HashMap<K, V, std::hash::BuildHasherDefault<rustc_hash::FxHasher>>;
