//! `.spr` file handling.

use std::path::Path;

use tibia_common::ByteSource;
use tracing::debug;

use crate::{Result, SprHeader, Sprite, SpriteAddressTable, SpriteLayout, SpritePixelDecoder};

/// An open sprite file.
///
/// The file bytes are memory-mapped (or owned) and never mutated, so a
/// `SpriteFile` can be shared between threads; every lookup uses its own reader.
#[derive(Debug)]
pub struct SpriteFile {
    source: ByteSource,
    header: SprHeader,
    decoder: SpritePixelDecoder,
}

impl SpriteFile {
    /// Open a sprite file with the given header layout.
    pub fn open<P: AsRef<Path>>(path: P, layout: SpriteLayout) -> Result<Self> {
        let path = path.as_ref();
        let source = ByteSource::open(path)?;
        let file = Self::from_source(source, layout)?;

        debug!(
            path = %path.display(),
            signature = file.header.signature,
            count = file.header.count,
            ?layout,
            "opened sprite file"
        );

        Ok(file)
    }

    /// Create a sprite file from in-memory bytes.
    pub fn from_bytes(data: Vec<u8>, layout: SpriteLayout) -> Result<Self> {
        Self::from_source(ByteSource::from_vec(data), layout)
    }

    fn from_source(source: ByteSource, layout: SpriteLayout) -> Result<Self> {
        let header = SprHeader::read(&source, layout)?;

        Ok(Self {
            source,
            header,
            decoder: SpritePixelDecoder::default(),
        })
    }

    /// Get the header.
    pub fn header(&self) -> &SprHeader {
        &self.header
    }

    pub fn signature(&self) -> u32 {
        self.header.signature
    }

    /// Number of sprites declared in the header.
    pub fn count(&self) -> u32 {
        self.header.count
    }

    pub fn layout(&self) -> SpriteLayout {
        self.header.layout
    }

    /// Get the address table.
    pub fn address_table(&self) -> SpriteAddressTable<'_> {
        SpriteAddressTable::new(&self.source, self.header.layout)
    }

    /// Resolve a sprite ID to the offset of its pixel stream.
    pub fn resolve(&self, id: u32) -> Result<u32> {
        self.address_table().resolve(id)
    }

    /// Load and decode a single sprite.
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) for empty IDs.
    pub fn load_sprite(&self, id: u32) -> Result<Sprite> {
        let offset = self.resolve(id)?;
        self.decoder
            .decode(&self.source, offset)
            .map_err(|e| e.in_sprite(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{build_file, marked_sprite};
    use crate::{Error, Rgba};

    #[test]
    fn test_load_sprite() {
        let data = build_file(SpriteLayout::Extended, &[None, Some(marked_sprite(5))]);
        let file = SpriteFile::from_bytes(data, SpriteLayout::Extended).unwrap();

        assert_eq!(file.count(), 1);
        assert_eq!(file.signature(), 0x1234);

        let sprite = file.load_sprite(1).unwrap();
        assert_eq!(sprite.pixel(5, 0), Some(Rgba::opaque(0xFF, 0, 0)));
        assert_eq!(sprite.pixels().iter().filter(|p| !p.is_transparent()).count(), 1);
    }

    #[test]
    fn test_empty_slot_is_not_found() {
        let data = build_file(SpriteLayout::Extended, &[None, Some(marked_sprite(5))]);
        let file = SpriteFile::from_bytes(data, SpriteLayout::Extended).unwrap();

        let err = file.load_sprite(0).unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, Error::NotFound { id: 0 }));
    }

    #[test]
    fn test_layouts_resolve_same_logical_sprite() {
        let slots = [None, Some(marked_sprite(7)), Some(marked_sprite(9))];
        let legacy = SpriteFile::from_bytes(build_file(SpriteLayout::Legacy, &slots), SpriteLayout::Legacy).unwrap();
        let extended =
            SpriteFile::from_bytes(build_file(SpriteLayout::Extended, &slots), SpriteLayout::Extended).unwrap();

        assert_eq!(legacy.address_table().entry_position(2), 6 + 4 * 3);
        assert_eq!(extended.address_table().entry_position(2), 8 + 4 * 3);
        assert_ne!(legacy.resolve(2).unwrap(), extended.resolve(2).unwrap());

        for id in 1..=2 {
            assert_eq!(legacy.load_sprite(id).unwrap(), extended.load_sprite(id).unwrap());
        }
    }

    #[test]
    fn test_decode_starts_three_bytes_after_address() {
        let mut data = build_file(SpriteLayout::Extended, &[Some(marked_sprite(0))]);
        let file = SpriteFile::from_bytes(data.clone(), SpriteLayout::Extended).unwrap();
        let address = file.resolve(0).unwrap() as usize;

        // Padding bytes are never interpreted.
        data[address..address + 3].copy_from_slice(&[0, 0, 0]);
        let patched = SpriteFile::from_bytes(data.clone(), SpriteLayout::Extended).unwrap();
        assert_eq!(patched.load_sprite(0).unwrap(), file.load_sprite(0).unwrap());

        // Corrupting the size field right after the padding does change the result.
        data[address + 3] = 0;
        data[address + 4] = 0;
        let broken = SpriteFile::from_bytes(data, SpriteLayout::Extended).unwrap();
        let err = broken.load_sprite(0).unwrap_err();
        assert!(matches!(err.root_cause(), Error::SizeMismatch { actual: 0, .. }));
        assert!(matches!(err, Error::Sprite { id: 0, .. }));
    }

    #[test]
    fn test_truncated_header() {
        let result = SpriteFile::from_bytes(vec![0x01, 0x02, 0x03], SpriteLayout::Legacy);
        assert!(matches!(result, Err(Error::Common(_))));
    }
}
