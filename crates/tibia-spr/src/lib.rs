//! Tibia `.spr` sprite file reader.
//!
//! The sprite file stores every 32x32 sprite of the client as a run-length
//! encoded pixel stream, indexed by an address table at the start of the file.
//!
//! # File Format
//!
//! - 4 bytes: Signature
//! - 2 or 4 bytes: Sprite count (see [`SpriteLayout`])
//! - 4 bytes per entry: Absolute offset of a sprite, `0` when the ID is empty
//!
//! Each sprite offset points at:
//!
//! - 3 bytes: Opaque padding, skipped
//! - 2 bytes: Encoded size of the run stream
//! - Runs of `[transparent: u16][colored: u16][R, G, B] x colored`
//!
//! The layout is not recorded in the file and must be supplied by the caller.
//!
//! # Example
//!
//! ```no_run
//! use tibia_spr::{SpriteFile, SpriteLayout};
//!
//! let file = SpriteFile::open("Tibia.spr", SpriteLayout::Extended)?;
//! println!("{} sprites", file.count());
//!
//! match file.load_sprite(2) {
//!     Ok(sprite) => println!("{} encoded bytes", sprite.encoded_size()),
//!     Err(e) if e.is_not_found() => println!("sprite 2 is empty"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod address;
mod error;
mod file;
#[cfg(test)]
mod fixtures;
mod header;
mod manager;
mod pixel;
mod sprite;

pub use address::SpriteAddressTable;
pub use error::{Error, Result};
pub use file::SpriteFile;
pub use header::{SprHeader, SpriteLayout};
pub use manager::{LoadPolicy, LoadReport, SpriteManager, SpriteSet};
pub use pixel::SpritePixelDecoder;
pub use sprite::{Rgba, Sprite, SPRITE_SIZE};
