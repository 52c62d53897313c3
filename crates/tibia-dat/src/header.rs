//! `.dat` header structure.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// `.dat` file header.
///
/// Each count is the highest ID used in its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct DatHeader {
    /// Client version signature.
    pub signature: u32,
    /// Item count.
    pub item_count: u16,
    /// Outfit count.
    pub outfit_count: u16,
    /// Effect count.
    pub effect_count: u16,
    /// Distance effect count.
    pub distance_count: u16,
}

impl DatHeader {
    /// Size of the header in bytes.
    pub const SIZE: usize = 12;
}
