//! Run-length pixel stream decoding.

use tibia_common::BinaryReader;

use crate::{Error, Result, Rgba, Sprite, SPRITE_SIZE};

/// Decodes a sprite's run stream into a dense pixel grid.
///
/// The stream alternates a transparent run and a colored run. Transparent
/// pixels carry no payload; colored pixels carry three bytes (R, G, B) and
/// are always opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpritePixelDecoder {
    width: u32,
    height: u32,
}

impl SpritePixelDecoder {
    /// Bytes of opaque padding before the size field.
    pub const PADDING: usize = 3;

    /// Create a decoder for a canvas of the given size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels every decoded sprite must cover.
    pub const fn pixel_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Decode the sprite whose pixel stream starts at `offset` in `data`.
    pub fn decode(&self, data: &[u8], offset: u32) -> Result<Sprite> {
        let mut reader = BinaryReader::new_at(data, offset as usize + Self::PADDING);
        self.read(&mut reader)
    }

    /// Decode from the reader's position, which must be at the size field.
    pub fn read(&self, reader: &mut BinaryReader<'_>) -> Result<Sprite> {
        let size = reader.read_u16()? as usize;
        let expected = self.pixel_count();

        let mut pixels = vec![Rgba::TRANSPARENT; expected];
        let mut cursor = 0usize;
        let mut consumed = 0usize;

        while consumed < size {
            let transparent = reader.read_u16()? as usize;
            let colored = reader.read_u16()? as usize;

            let end = cursor + transparent + colored;
            if end > expected {
                return Err(Error::SizeMismatch {
                    expected,
                    actual: end,
                });
            }

            // The buffer starts transparent.
            cursor += transparent;

            let payload = reader.read_bytes(colored * 3)?;
            for rgb in payload.chunks_exact(3) {
                pixels[cursor] = Rgba::opaque(rgb[0], rgb[1], rgb[2]);
                cursor += 1;
            }

            consumed += 4 + 3 * colored;
        }

        if cursor != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: cursor,
            });
        }

        Ok(Sprite::new(size as u16, self.width, self.height, pixels))
    }
}

impl Default for SpritePixelDecoder {
    fn default() -> Self {
        Self::new(SPRITE_SIZE, SPRITE_SIZE)
    }
}
