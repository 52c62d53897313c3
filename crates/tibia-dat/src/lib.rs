//! Tibia `.dat` object type parser.
//!
//! The `.dat` file describes the static properties of every object type
//! ("thing") the client knows about: items, outfits, effects and distance
//! (missile) effects. Each thing is stored as a stream of tagged attributes.
//!
//! # File Format
//!
//! - 4 bytes: Signature
//! - 2 bytes: Item count (highest item ID)
//! - 2 bytes: Outfit count
//! - 2 bytes: Effect count
//! - 2 bytes: Distance effect count
//! - For each thing, in category order: attribute tags terminated by `0xFF`
//!
//! The format has no length prefixes. The only way to know how many bytes a
//! tag consumes is the fixed tag table in [`AttributeTag`], so a single
//! unknown tag makes the rest of the file unreadable.
//!
//! # Example
//!
//! ```no_run
//! use tibia_dat::{AttributeTag, DatFile};
//!
//! let dat = DatFile::open("Tibia.dat")?;
//! println!("Signature: {:#010x}", dat.signature());
//!
//! if let Some(item) = dat.item(100) {
//!     if item.has(AttributeTag::Ground) {
//!         println!("Ground speed: {:?}", item.ground_speed());
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod attribute;
mod decoder;
mod error;
mod file;
mod header;
mod thing;

pub use attribute::{Attribute, AttributeTag, Light, MarketInfo, END_TAG};
pub use decoder::{decode_thing, NoopObserver, ThingAttributeDecoder, ThingObserver, TracingObserver};
pub use error::{Error, Result};
pub use file::{DatFile, DatOptions, ThingCategory};
pub use header::DatHeader;
pub use thing::ThingType;
