//! Sprite address table lookup.

use tibia_common::BinaryReader;

use crate::{Error, Result, SpriteLayout};

/// Size of one address table entry in bytes.
const ENTRY_SIZE: usize = 4;

/// View over the address table of a sprite file.
///
/// Entry `id + 1` (counting from the start of the table) holds the absolute
/// offset of sprite `id`; the first entry is reserved. An offset of `0`
/// means the ID is empty.
#[derive(Debug, Clone, Copy)]
pub struct SpriteAddressTable<'a> {
    data: &'a [u8],
    layout: SpriteLayout,
}

impl<'a> SpriteAddressTable<'a> {
    /// Create a table view over a whole sprite file.
    pub const fn new(data: &'a [u8], layout: SpriteLayout) -> Self {
        Self { data, layout }
    }

    /// Absolute file offset of the entry for `id`.
    pub const fn entry_position(&self, id: u32) -> usize {
        self.layout.header_size() + (id as usize + 1) * ENTRY_SIZE
    }

    /// Resolve a sprite ID to the offset of its pixel stream.
    pub fn resolve(&self, id: u32) -> Result<u32> {
        let mut reader = BinaryReader::new_at(self.data, self.entry_position(id));
        let address = reader.read_u32().map_err(|e| Error::from(e).in_sprite(id))?;

        if address == 0 {
            return Err(Error::NotFound { id });
        }

        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{LittleEndian, WriteBytesExt};

    fn file_with_table(layout: SpriteLayout, entries: &[u32]) -> Vec<u8> {
        let mut data = Vec::new();
        data.write_u32::<LittleEndian>(0x5A5A_5A5A).unwrap();
        match layout {
            SpriteLayout::Legacy => data.write_u16::<LittleEndian>(entries.len() as u16 - 1).unwrap(),
            SpriteLayout::Extended => data.write_u32::<LittleEndian>(entries.len() as u32 - 1).unwrap(),
        }
        // reserved entry
        data.write_u32::<LittleEndian>(0xFFFF_FFFF).unwrap();
        for entry in entries {
            data.write_u32::<LittleEndian>(*entry).unwrap();
        }
        data
    }

    #[test]
    fn test_entry_positions() {
        let legacy = SpriteAddressTable::new(&[], SpriteLayout::Legacy);
        let extended = SpriteAddressTable::new(&[], SpriteLayout::Extended);

        assert_eq!(legacy.entry_position(0), 10);
        assert_eq!(legacy.entry_position(2), 6 + 4 * 3);
        assert_eq!(extended.entry_position(0), 12);
        assert_eq!(extended.entry_position(2), 8 + 4 * 3);
    }

    #[test]
    fn test_resolve_both_layouts() {
        let entries = [0, 100, 0, 200];

        for layout in [SpriteLayout::Legacy, SpriteLayout::Extended] {
            let data = file_with_table(layout, &entries);
            let table = SpriteAddressTable::new(&data, layout);

            assert!(matches!(table.resolve(0), Err(Error::NotFound { id: 0 })));
            assert_eq!(table.resolve(1).unwrap(), 100);
            assert!(matches!(table.resolve(2), Err(Error::NotFound { id: 2 })));
            assert_eq!(table.resolve(3).unwrap(), 200);
        }
    }

    #[test]
    fn test_wrong_layout_reads_other_bytes() {
        let data = file_with_table(SpriteLayout::Extended, &[0x11, 0x22]);
        let legacy = SpriteAddressTable::new(&data, SpriteLayout::Legacy);

        // Reads two bytes early, straddling the reserved entry and entry 0.
        assert_ne!(legacy.resolve(0).ok(), Some(0x11));
    }

    #[test]
    fn test_resolve_past_end_is_truncated() {
        let data = file_with_table(SpriteLayout::Extended, &[100]);
        let table = SpriteAddressTable::new(&data, SpriteLayout::Extended);

        let err = table.resolve(5).unwrap_err();
        assert!(!err.is_not_found());
        assert!(matches!(
            err.root_cause(),
            Error::Common(tibia_common::Error::TruncatedInput { .. })
        ));
    }
}
