//! Tibia client asset reading library.
//!
//! This crate provides a unified interface to the readers for the two
//! binary asset files shipped with the Tibia client.
//!
//! # Crates
//!
//! - [`tibia_common`] - Common utilities (binary reading, byte sources)
//! - [`tibia_dat`] - Object type (`.dat`) attribute decoding
//! - [`tibia_spr`] - Sprite (`.spr`) address table and pixel decoding
//!
//! # Example
//!
//! ```no_run
//! use tibia_assets::prelude::*;
//!
//! let dat = DatFile::open("Tibia.dat")?;
//! if let Some(item) = dat.item(100) {
//!     println!("item 100 has {} attributes", item.len());
//! }
//!
//! let sprites = SpriteManager::new("Tibia.spr", SpriteLayout::Extended).load_all()?;
//! println!("{} sprites", sprites.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use tibia_common as common;
pub use tibia_dat as dat;
pub use tibia_spr as spr;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tibia_common::{BinaryReader, ByteSource};
    pub use tibia_dat::{
        Attribute, AttributeTag, DatFile, DatOptions, ThingCategory, ThingObserver, ThingType,
        TracingObserver,
    };
    pub use tibia_spr::{
        LoadPolicy, Rgba, Sprite, SpriteFile, SpriteLayout, SpriteManager, SpriteSet,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
