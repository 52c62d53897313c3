//! `.spr` header structures.

use tibia_common::BinaryReader;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::Result;

/// Width of the sprite count field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SpriteLayout {
    /// 16-bit sprite count, address table at byte 6.
    Legacy,
    /// 32-bit sprite count, address table at byte 8.
    #[default]
    Extended,
}

impl SpriteLayout {
    /// Size of the signature field in bytes.
    pub const SIGNATURE_SIZE: usize = 4;

    /// Size of the count field in bytes.
    pub const fn count_size(&self) -> usize {
        match self {
            SpriteLayout::Legacy => 2,
            SpriteLayout::Extended => 4,
        }
    }

    /// Size of the header, which is where the address table starts.
    pub const fn header_size(&self) -> usize {
        Self::SIGNATURE_SIZE + self.count_size()
    }
}

#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
struct LegacyHeader {
    signature: u32,
    count: u16,
}

#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
struct ExtendedHeader {
    signature: u32,
    count: u32,
}

/// Parsed `.spr` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SprHeader {
    /// Client version signature.
    pub signature: u32,
    /// Number of sprites.
    pub count: u32,
    /// Layout the header was read with.
    pub layout: SpriteLayout,
}

impl SprHeader {
    /// Read the header from the start of the file.
    pub fn read(data: &[u8], layout: SpriteLayout) -> Result<Self> {
        let mut reader = BinaryReader::new(data);

        let (signature, count) = match layout {
            SpriteLayout::Legacy => {
                let header: LegacyHeader = reader.read_struct()?;
                (header.signature, header.count as u32)
            }
            SpriteLayout::Extended => {
                let header: ExtendedHeader = reader.read_struct()?;
                (header.signature, header.count)
            }
        };

        Ok(Self {
            signature,
            count,
            layout,
        })
    }

    /// Size of the header in bytes.
    pub const fn size(&self) -> usize {
        self.layout.header_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_sizes() {
        assert_eq!(std::mem::size_of::<LegacyHeader>(), SpriteLayout::Legacy.header_size());
        assert_eq!(std::mem::size_of::<ExtendedHeader>(), SpriteLayout::Extended.header_size());
        assert_eq!(SpriteLayout::Legacy.header_size(), 6);
        assert_eq!(SpriteLayout::Extended.header_size(), 8);
    }

    #[test]
    fn test_read_both_layouts() {
        let data = [0x78, 0x56, 0x34, 0x12, 0x03, 0x00, 0x01, 0x00];

        let legacy = SprHeader::read(&data, SpriteLayout::Legacy).unwrap();
        assert_eq!(legacy.signature, 0x12345678);
        assert_eq!(legacy.count, 3);
        assert_eq!(legacy.size(), 6);

        let extended = SprHeader::read(&data, SpriteLayout::Extended).unwrap();
        assert_eq!(extended.signature, 0x12345678);
        assert_eq!(extended.count, 0x0001_0003);
        assert_eq!(extended.size(), 8);
    }

    #[test]
    fn test_truncated_header() {
        assert!(SprHeader::read(&[0x01, 0x02, 0x03, 0x04, 0x05], SpriteLayout::Legacy).is_err());
        assert!(SprHeader::read(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06], SpriteLayout::Extended).is_err());
    }
}
