//! Decoded object type records.

use std::collections::BTreeMap;

use crate::{Attribute, AttributeTag, Light, MarketInfo};

/// The static properties of one object type.
///
/// A thing holds at most one [`Attribute`] per [`AttributeTag`]. A tag that
/// appears twice in a record overwrites the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ThingType {
    attributes: BTreeMap<AttributeTag, Attribute>,
}

impl ThingType {
    /// Create a thing with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, returning the value it replaced.
    pub fn insert(&mut self, attribute: Attribute) -> Option<Attribute> {
        self.attributes.insert(attribute.tag(), attribute)
    }

    /// Check whether a tag is set.
    pub fn has(&self, tag: AttributeTag) -> bool {
        self.attributes.contains_key(&tag)
    }

    /// Get the attribute stored for a tag.
    pub fn get(&self, tag: AttributeTag) -> Option<&Attribute> {
        self.attributes.get(&tag)
    }

    /// Iterate over the attributes in tag order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    /// Iterate over the set tags in tag order.
    pub fn tags(&self) -> impl Iterator<Item = AttributeTag> + '_ {
        self.attributes.keys().copied()
    }

    /// Number of attributes set.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check if no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn ground_speed(&self) -> Option<u16> {
        match self.get(AttributeTag::Ground)? {
            Attribute::Ground { speed } => Some(*speed),
            _ => None,
        }
    }

    /// Maximum text length of a writable thing.
    ///
    /// `Writable` takes precedence over `WritableOnce` when both are set.
    pub fn max_text_len(&self) -> Option<u16> {
        self.attributes.values().find_map(|a| match a {
            Attribute::Writable { max_text_len } | Attribute::WritableOnce { max_text_len } => {
                Some(*max_text_len)
            }
            _ => None,
        })
    }

    pub fn light(&self) -> Option<Light> {
        match self.get(AttributeTag::HasLight)? {
            Attribute::Light(light) => Some(*light),
            _ => None,
        }
    }

    /// Draw offset as `(x, y)`.
    pub fn offset(&self) -> Option<(u16, u16)> {
        match self.get(AttributeTag::HasOffset)? {
            Attribute::Offset { x, y } => Some((*x, *y)),
            _ => None,
        }
    }

    pub fn minimap_color(&self) -> Option<u16> {
        match self.get(AttributeTag::MiniMap)? {
            Attribute::MiniMap { color } => Some(*color),
            _ => None,
        }
    }

    pub fn lens_help(&self) -> Option<u16> {
        match self.get(AttributeTag::LensHelp)? {
            Attribute::LensHelp { value } => Some(*value),
            _ => None,
        }
    }

    pub fn cloth_slot(&self) -> Option<u16> {
        match self.get(AttributeTag::Cloth)? {
            Attribute::Cloth { slot } => Some(*slot),
            _ => None,
        }
    }

    pub fn market(&self) -> Option<&MarketInfo> {
        match self.get(AttributeTag::MarketItem)? {
            Attribute::Market(info) => Some(info),
            _ => None,
        }
    }

    pub fn default_action(&self) -> Option<u16> {
        match self.get(AttributeTag::DefaultAction)? {
            Attribute::DefaultAction { action } => Some(*action),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_same_tag() {
        let mut thing = ThingType::new();
        assert!(thing.insert(Attribute::Ground { speed: 100 }).is_none());

        let previous = thing.insert(Attribute::Ground { speed: 150 });
        assert_eq!(previous, Some(Attribute::Ground { speed: 100 }));
        assert_eq!(thing.len(), 1);
        assert_eq!(thing.ground_speed(), Some(150));
    }

    #[test]
    fn test_typed_accessors() {
        let mut thing = ThingType::new();
        thing.insert(Attribute::Light(Light { level: 7, color: 215 }));
        thing.insert(Attribute::Offset { x: 8, y: 8 });
        thing.insert(Attribute::Pickupable);

        assert_eq!(thing.light(), Some(Light { level: 7, color: 215 }));
        assert_eq!(thing.offset(), Some((8, 8)));
        assert!(thing.has(AttributeTag::Pickupable));
        assert_eq!(thing.ground_speed(), None);
        assert_eq!(thing.market(), None);
        assert_eq!(
            thing.tags().collect::<Vec<_>>(),
            vec![AttributeTag::Pickupable, AttributeTag::HasLight, AttributeTag::HasOffset]
        );
    }

    #[test]
    fn test_writable_text_length() {
        let mut thing = ThingType::new();
        thing.insert(Attribute::WritableOnce { max_text_len: 512 });
        assert_eq!(thing.max_text_len(), Some(512));

        thing.insert(Attribute::Writable { max_text_len: 1024 });
        assert_eq!(thing.max_text_len(), Some(1024));
    }
}
