//! Thing attribute tags and their decoded values.
//!
//! Every attribute starts with a one-byte tag. Some tags are followed by a
//! fixed number of little-endian `u16` fields; the [`AttributeTag`] table below
//! is the only description of how many.

use tibia_common::BinaryReader;

/// Tag byte that terminates a thing's attribute stream.
pub const END_TAG: u8 = 0xFF;

macro_rules! attribute_tags {
    ($($(#[$doc:meta])* $variant:ident = $value:literal, $name:literal, $fields:literal;)*) => {
        /// Wire tag of a thing attribute.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        #[repr(u8)]
        pub enum AttributeTag {
            $($(#[$doc])* $variant = $value,)*
        }

        impl AttributeTag {
            /// Every known attribute tag, in wire order.
            pub const ALL: &'static [AttributeTag] = &[$(AttributeTag::$variant,)*];

            /// Get the name of this tag.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(AttributeTag::$variant => $name,)*
                }
            }

            /// Number of `u16` fields that follow this tag on the wire.
            pub const fn field_count(&self) -> usize {
                match self {
                    $(AttributeTag::$variant => $fields,)*
                }
            }
        }

        impl TryFrom<u8> for AttributeTag {
            type Error = u8;

            fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
                match value {
                    $($value => Ok(AttributeTag::$variant),)*
                    other => Err(other),
                }
            }
        }
    };
}

attribute_tags! {
    /// Walkable ground tile, followed by its speed.
    Ground = 0x00, "ground", 1;
    GroundBorder = 0x01, "groundBorder", 0;
    OnBottom = 0x02, "onBottom", 0;
    OnTop = 0x03, "onTop", 0;
    Container = 0x04, "container", 0;
    Stackable = 0x05, "stackable", 0;
    ForceUse = 0x06, "forceUse", 0;
    MultiUse = 0x07, "multiUse", 0;
    /// Followed by the maximum text length.
    Writable = 0x08, "writable", 1;
    /// Followed by the maximum text length.
    WritableOnce = 0x09, "writableOnce", 1;
    FluidContainer = 0x0A, "fluidContainer", 0;
    Fluid = 0x0B, "fluid", 0;
    Unpassable = 0x0C, "unpassable", 0;
    Unmoveable = 0x0D, "unmoveable", 0;
    BlockMissile = 0x0E, "blockMissile", 0;
    BlockPathfinding = 0x0F, "blockPathfinding", 0;
    NoMoveAnimation = 0x10, "noMoveAnimation", 0;
    Pickupable = 0x11, "pickupable", 0;
    Hangable = 0x12, "hangable", 0;
    HookSouth = 0x13, "hookSouth", 0;
    HookEast = 0x14, "hookEast", 0;
    Rotatable = 0x15, "rotatable", 0;
    /// Followed by light level and color.
    HasLight = 0x16, "hasLight", 2;
    DontHide = 0x17, "dontHide", 0;
    Translucent = 0x18, "translucent", 0;
    /// Followed by the X and Y draw offset.
    HasOffset = 0x19, "hasOffset", 2;
    HasElevation = 0x1A, "hasElevation", 0;
    LyingObject = 0x1B, "lyingObject", 0;
    AnimateAlways = 0x1C, "animateAlways", 0;
    /// Followed by the minimap color.
    MiniMap = 0x1D, "miniMap", 1;
    /// Followed by the lens help value.
    LensHelp = 0x1E, "lensHelp", 1;
    FullGround = 0x1F, "fullGround", 0;
    IgnoreLook = 0x20, "ignoreLook", 0;
    /// Followed by the equipment slot.
    Cloth = 0x21, "cloth", 1;
    /// Followed by seven market fields.
    MarketItem = 0x22, "marketItem", 7;
    /// Followed by the default action.
    DefaultAction = 0x23, "defaultAction", 1;
    Wrappable = 0x24, "wrappable", 0;
    Unwrappable = 0x25, "unwrappable", 0;
    TopEffect = 0x26, "topEffect", 0;
    HasCharges = 0xFC, "hasCharges", 0;
    FloorChange = 0xFD, "floorChange", 0;
    Usable = 0xFE, "usable", 0;
}

impl std::fmt::Display for AttributeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Light emitted by a thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Light {
    pub level: u16,
    pub color: u16,
}

/// Market metadata of an item.
///
/// `name` is stored as a single `u16` on the wire and kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarketInfo {
    pub category: u16,
    pub trade_as: u16,
    pub show_as: u16,
    pub name_length: u16,
    pub name: u16,
    pub restrict_profession: u16,
    pub restrict_level: u16,
}

/// A decoded thing attribute.
///
/// Variants carry exactly the fields their tag reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Attribute {
    Ground { speed: u16 },
    GroundBorder,
    OnBottom,
    OnTop,
    Container,
    Stackable,
    ForceUse,
    MultiUse,
    Writable { max_text_len: u16 },
    WritableOnce { max_text_len: u16 },
    FluidContainer,
    Fluid,
    Unpassable,
    Unmoveable,
    BlockMissile,
    BlockPathfinding,
    NoMoveAnimation,
    Pickupable,
    Hangable,
    HookSouth,
    HookEast,
    Rotatable,
    Light(Light),
    DontHide,
    Translucent,
    Offset { x: u16, y: u16 },
    Elevation,
    LyingObject,
    AnimateAlways,
    MiniMap { color: u16 },
    LensHelp { value: u16 },
    FullGround,
    IgnoreLook,
    Cloth { slot: u16 },
    Market(MarketInfo),
    DefaultAction { action: u16 },
    Wrappable,
    Unwrappable,
    TopEffect,
    HasCharges,
    FloorChange,
    Usable,
}

impl Attribute {
    /// Read the trailing fields of `tag` and build the attribute.
    ///
    /// The tag byte itself must already have been consumed.
    pub fn read(tag: AttributeTag, reader: &mut BinaryReader<'_>) -> tibia_common::Result<Self> {
        use AttributeTag as T;

        Ok(match tag {
            T::Ground => Attribute::Ground {
                speed: reader.read_u16()?,
            },
            T::GroundBorder => Attribute::GroundBorder,
            T::OnBottom => Attribute::OnBottom,
            T::OnTop => Attribute::OnTop,
            T::Container => Attribute::Container,
            T::Stackable => Attribute::Stackable,
            T::ForceUse => Attribute::ForceUse,
            T::MultiUse => Attribute::MultiUse,
            T::Writable => Attribute::Writable {
                max_text_len: reader.read_u16()?,
            },
            T::WritableOnce => Attribute::WritableOnce {
                max_text_len: reader.read_u16()?,
            },
            T::FluidContainer => Attribute::FluidContainer,
            T::Fluid => Attribute::Fluid,
            T::Unpassable => Attribute::Unpassable,
            T::Unmoveable => Attribute::Unmoveable,
            T::BlockMissile => Attribute::BlockMissile,
            T::BlockPathfinding => Attribute::BlockPathfinding,
            T::NoMoveAnimation => Attribute::NoMoveAnimation,
            T::Pickupable => Attribute::Pickupable,
            T::Hangable => Attribute::Hangable,
            T::HookSouth => Attribute::HookSouth,
            T::HookEast => Attribute::HookEast,
            T::Rotatable => Attribute::Rotatable,
            T::HasLight => Attribute::Light(Light {
                level: reader.read_u16()?,
                color: reader.read_u16()?,
            }),
            T::DontHide => Attribute::DontHide,
            T::Translucent => Attribute::Translucent,
            T::HasOffset => Attribute::Offset {
                x: reader.read_u16()?,
                y: reader.read_u16()?,
            },
            T::HasElevation => Attribute::Elevation,
            T::LyingObject => Attribute::LyingObject,
            T::AnimateAlways => Attribute::AnimateAlways,
            T::MiniMap => Attribute::MiniMap {
                color: reader.read_u16()?,
            },
            T::LensHelp => Attribute::LensHelp {
                value: reader.read_u16()?,
            },
            T::FullGround => Attribute::FullGround,
            T::IgnoreLook => Attribute::IgnoreLook,
            T::Cloth => Attribute::Cloth {
                slot: reader.read_u16()?,
            },
            T::MarketItem => Attribute::Market(MarketInfo {
                category: reader.read_u16()?,
                trade_as: reader.read_u16()?,
                show_as: reader.read_u16()?,
                name_length: reader.read_u16()?,
                name: reader.read_u16()?,
                restrict_profession: reader.read_u16()?,
                restrict_level: reader.read_u16()?,
            }),
            T::DefaultAction => Attribute::DefaultAction {
                action: reader.read_u16()?,
            },
            T::Wrappable => Attribute::Wrappable,
            T::Unwrappable => Attribute::Unwrappable,
            T::TopEffect => Attribute::TopEffect,
            T::HasCharges => Attribute::HasCharges,
            T::FloorChange => Attribute::FloorChange,
            T::Usable => Attribute::Usable,
        })
    }

    /// Get the wire tag this attribute was decoded from.
    pub const fn tag(&self) -> AttributeTag {
        use AttributeTag as T;

        match self {
            Attribute::Ground { .. } => T::Ground,
            Attribute::GroundBorder => T::GroundBorder,
            Attribute::OnBottom => T::OnBottom,
            Attribute::OnTop => T::OnTop,
            Attribute::Container => T::Container,
            Attribute::Stackable => T::Stackable,
            Attribute::ForceUse => T::ForceUse,
            Attribute::MultiUse => T::MultiUse,
            Attribute::Writable { .. } => T::Writable,
            Attribute::WritableOnce { .. } => T::WritableOnce,
            Attribute::FluidContainer => T::FluidContainer,
            Attribute::Fluid => T::Fluid,
            Attribute::Unpassable => T::Unpassable,
            Attribute::Unmoveable => T::Unmoveable,
            Attribute::BlockMissile => T::BlockMissile,
            Attribute::BlockPathfinding => T::BlockPathfinding,
            Attribute::NoMoveAnimation => T::NoMoveAnimation,
            Attribute::Pickupable => T::Pickupable,
            Attribute::Hangable => T::Hangable,
            Attribute::HookSouth => T::HookSouth,
            Attribute::HookEast => T::HookEast,
            Attribute::Rotatable => T::Rotatable,
            Attribute::Light(_) => T::HasLight,
            Attribute::DontHide => T::DontHide,
            Attribute::Translucent => T::Translucent,
            Attribute::Offset { .. } => T::HasOffset,
            Attribute::Elevation => T::HasElevation,
            Attribute::LyingObject => T::LyingObject,
            Attribute::AnimateAlways => T::AnimateAlways,
            Attribute::MiniMap { .. } => T::MiniMap,
            Attribute::LensHelp { .. } => T::LensHelp,
            Attribute::FullGround => T::FullGround,
            Attribute::IgnoreLook => T::IgnoreLook,
            Attribute::Cloth { .. } => T::Cloth,
            Attribute::Market(_) => T::MarketItem,
            Attribute::DefaultAction { .. } => T::DefaultAction,
            Attribute::Wrappable => T::Wrappable,
            Attribute::Unwrappable => T::Unwrappable,
            Attribute::TopEffect => T::TopEffect,
            Attribute::HasCharges => T::HasCharges,
            Attribute::FloorChange => T::FloorChange,
            Attribute::Usable => T::Usable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_table_wire_values() {
        let expected: &[(u8, &str)] = &[
            (0x00, "ground"),
            (0x01, "groundBorder"),
            (0x02, "onBottom"),
            (0x03, "onTop"),
            (0x04, "container"),
            (0x05, "stackable"),
            (0x06, "forceUse"),
            (0x07, "multiUse"),
            (0x08, "writable"),
            (0x09, "writableOnce"),
            (0x0A, "fluidContainer"),
            (0x0B, "fluid"),
            (0x0C, "unpassable"),
            (0x0D, "unmoveable"),
            (0x0E, "blockMissile"),
            (0x0F, "blockPathfinding"),
            (0x10, "noMoveAnimation"),
            (0x11, "pickupable"),
            (0x12, "hangable"),
            (0x13, "hookSouth"),
            (0x14, "hookEast"),
            (0x15, "rotatable"),
            (0x16, "hasLight"),
            (0x17, "dontHide"),
            (0x18, "translucent"),
            (0x19, "hasOffset"),
            (0x1A, "hasElevation"),
            (0x1B, "lyingObject"),
            (0x1C, "animateAlways"),
            (0x1D, "miniMap"),
            (0x1E, "lensHelp"),
            (0x1F, "fullGround"),
            (0x20, "ignoreLook"),
            (0x21, "cloth"),
            (0x22, "marketItem"),
            (0x23, "defaultAction"),
            (0x24, "wrappable"),
            (0x25, "unwrappable"),
            (0x26, "topEffect"),
            (0xFC, "hasCharges"),
            (0xFD, "floorChange"),
            (0xFE, "usable"),
        ];

        assert_eq!(AttributeTag::ALL.len(), expected.len());
        for (tag, &(value, name)) in AttributeTag::ALL.iter().zip(expected) {
            assert_eq!(*tag as u8, value);
            assert_eq!(tag.name(), name);
            assert_eq!(AttributeTag::try_from(value), Ok(*tag));
        }
    }

    #[test]
    fn test_field_counts() {
        for tag in AttributeTag::ALL {
            let expected = match tag {
                AttributeTag::MarketItem => 7,
                AttributeTag::HasLight | AttributeTag::HasOffset => 2,
                AttributeTag::Ground
                | AttributeTag::Writable
                | AttributeTag::WritableOnce
                | AttributeTag::MiniMap
                | AttributeTag::LensHelp
                | AttributeTag::Cloth
                | AttributeTag::DefaultAction => 1,
                _ => 0,
            };
            assert_eq!(tag.field_count(), expected, "field count of {}", tag);
        }
    }

    #[test]
    fn test_unassigned_bytes_are_rejected() {
        assert_eq!(AttributeTag::try_from(0x27), Err(0x27));
        assert_eq!(AttributeTag::try_from(0x50), Err(0x50));
        assert_eq!(AttributeTag::try_from(0xFB), Err(0xFB));
        assert_eq!(AttributeTag::try_from(END_TAG), Err(END_TAG));
    }

    #[test]
    fn test_read_consumes_field_count() {
        let data = [0xAAu8; 14];
        for tag in AttributeTag::ALL {
            let mut reader = BinaryReader::new(&data);
            let attribute = Attribute::read(*tag, &mut reader).unwrap();

            assert_eq!(attribute.tag(), *tag);
            assert_eq!(reader.position(), tag.field_count() * 2, "bytes read by {}", tag);
        }
    }

    #[test]
    fn test_read_market_item_field_order() {
        let data = [1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 0, 7, 0];
        let mut reader = BinaryReader::new(&data);

        let attribute = Attribute::read(AttributeTag::MarketItem, &mut reader).unwrap();
        assert_eq!(
            attribute,
            Attribute::Market(MarketInfo {
                category: 1,
                trade_as: 2,
                show_as: 3,
                name_length: 4,
                name: 5,
                restrict_profession: 6,
                restrict_level: 7,
            })
        );
    }
}
