//! Decoded sprite images.

/// Width and height of every sprite, in pixels.
pub const SPRITE_SIZE: u32 = 32;

/// An 8-bit RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Opaque color. Colored runs never store alpha.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

/// A decoded sprite.
///
/// The pixel buffer always holds exactly `width * height` pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sprite {
    /// Encoded byte size of the run stream.
    size: u16,
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Sprite {
    pub(crate) fn new(size: u16, width: u32, height: u32, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            size,
            width,
            height,
            pixels,
        }
    }

    /// Encoded byte size of the run stream, as stored in the file.
    pub fn encoded_size(&self) -> u16 {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get all pixels in row-major order.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Get the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Check if every pixel is transparent.
    pub fn is_fully_transparent(&self) -> bool {
        self.pixels.iter().all(Rgba::is_transparent)
    }

    /// Flatten into row-major RGBA8 bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard() -> Sprite {
        let pixels = (0..SPRITE_SIZE * SPRITE_SIZE)
            .map(|i| {
                let (x, y) = (i % SPRITE_SIZE, i / SPRITE_SIZE);
                if (x + y) % 2 == 0 {
                    Rgba::TRANSPARENT
                } else {
                    Rgba::opaque(10, 20, 30)
                }
            })
            .collect();
        Sprite::new(0, SPRITE_SIZE, SPRITE_SIZE, pixels)
    }

    #[test]
    fn test_pixel_lookup_is_row_major() {
        let sprite = checkerboard();

        assert_eq!(sprite.pixel(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(sprite.pixel(1, 0), Some(Rgba::opaque(10, 20, 30)));
        assert_eq!(sprite.pixel(0, 1), Some(Rgba::opaque(10, 20, 30)));
        assert_eq!(sprite.pixel(1, 1), Some(Rgba::TRANSPARENT));
        // Rows are 32 wide, so index 33 is (1, 1).
        assert_eq!(sprite.pixel(1, 1), Some(sprite.pixels()[33]));
        assert_eq!(sprite.pixel(32, 0), None);
        assert_eq!(sprite.pixel(0, 32), None);
    }

    #[test]
    fn test_rgba_bytes() {
        let sprite = checkerboard();
        let bytes = sprite.to_rgba_bytes();

        assert_eq!(bytes.len(), 32 * 32 * 4);
        assert_eq!(&bytes[0..8], &[0, 0, 0, 0, 10, 20, 30, 255]);
        assert!(!sprite.is_fully_transparent());
    }
}
