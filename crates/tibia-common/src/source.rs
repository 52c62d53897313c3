//! Random-access byte sources.

use std::fs::File;
use std::ops::Deref;
use std::path::Path;

use memmap2::Mmap;

use crate::Result;

/// The full contents of an asset file, either memory-mapped or owned.
///
/// A `ByteSource` is immutable and `Sync`, so several readers (or worker
/// threads) can decode from it at once.
pub enum ByteSource {
    /// Memory-mapped file.
    Mapped(Mmap),
    /// Owned bytes, e.g. built in memory or read from a stream.
    Owned(Vec<u8>),
}

impl ByteSource {
    /// Memory-map a file read-only.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        // The mapping is read-only and asset files are not modified while open.
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Self::Mapped(mmap))
    }

    /// Wrap owned bytes.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self::Owned(data)
    }

    /// Get the bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Mapped(mmap) => mmap,
            Self::Owned(data) => data,
        }
    }
}

impl Deref for ByteSource {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Vec<u8>> for ByteSource {
    fn from(data: Vec<u8>) -> Self {
        Self::Owned(data)
    }
}

impl std::fmt::Debug for ByteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Mapped(_) => "Mapped",
            Self::Owned(_) => "Owned",
        };
        f.debug_struct("ByteSource")
            .field("kind", &kind)
            .field("len", &self.len())
            .finish()
    }
}
