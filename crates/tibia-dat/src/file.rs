//! `.dat` file handling.

use std::path::Path;

use tibia_common::{BinaryReader, ByteSource, FxHashMap};
use tracing::debug;

use crate::decoder::{NoopObserver, ThingAttributeDecoder, ThingObserver};
use crate::{DatHeader, Error, Result, ThingType};

/// Category of object types, in the order they are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum ThingCategory {
    /// Items (including ground tiles).
    Item = 0,
    /// Creature outfits.
    Outfit = 1,
    /// Magic effects.
    Effect = 2,
    /// Distance (missile) effects.
    Distance = 3,
}

impl ThingCategory {
    /// Get all categories in file order.
    pub const fn all() -> [ThingCategory; 4] {
        [
            ThingCategory::Item,
            ThingCategory::Outfit,
            ThingCategory::Effect,
            ThingCategory::Distance,
        ]
    }

    /// Get the name of this category.
    pub const fn name(&self) -> &'static str {
        match self {
            ThingCategory::Item => "item",
            ThingCategory::Outfit => "outfit",
            ThingCategory::Effect => "effect",
            ThingCategory::Distance => "distance",
        }
    }

    /// Highest ID declared for this category in the header.
    pub fn last_id(&self, header: &DatHeader) -> u32 {
        let count = match self {
            ThingCategory::Item => header.item_count,
            ThingCategory::Outfit => header.outfit_count,
            ThingCategory::Effect => header.effect_count,
            ThingCategory::Distance => header.distance_count,
        };
        count as u32
    }
}

impl std::fmt::Display for ThingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Options controlling which records of a `.dat` file are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatOptions {
    /// ID of the first item. Outfits, effects and distance effects start at 1.
    pub first_item_id: u32,
    /// Last category to decode. Later categories are left unread.
    pub through: ThingCategory,
}

impl DatOptions {
    /// Default ID of the first item record.
    pub const FIRST_ITEM_ID: u32 = 100;

    /// Decode only the item range.
    pub fn items_only() -> Self {
        Self {
            through: ThingCategory::Item,
            ..Self::default()
        }
    }

    /// First ID of a category.
    pub fn first_id(&self, category: ThingCategory) -> u32 {
        match category {
            ThingCategory::Item => self.first_item_id,
            _ => 1,
        }
    }
}

impl Default for DatOptions {
    fn default() -> Self {
        Self {
            first_item_id: Self::FIRST_ITEM_ID,
            through: ThingCategory::Distance,
        }
    }
}

/// A parsed `.dat` file.
///
/// Things are keyed by ID within their category. Any decode failure aborts
/// the whole load because the format cannot be resynchronized.
#[derive(Debug, Clone)]
pub struct DatFile {
    header: DatHeader,
    things: [FxHashMap<u32, ThingType>; 4],
}

impl DatFile {
    /// Read and decode every category of a `.dat` file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening dat file");

        let source = ByteSource::open(path)?;
        Self::parse(&source)
    }

    /// Decode every category from bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::parse_with(data, &DatOptions::default(), &mut NoopObserver)
    }

    /// Decode from bytes with explicit options, reporting to `observer`.
    pub fn parse_with(
        data: &[u8],
        options: &DatOptions,
        observer: &mut dyn ThingObserver,
    ) -> Result<Self> {
        let mut reader = BinaryReader::new(data);
        let header: DatHeader = reader.read_struct()?;
        observer.on_header(&header);

        let mut things: [FxHashMap<u32, ThingType>; 4] = Default::default();

        for category in ThingCategory::all() {
            if category > options.through {
                break;
            }

            let first = options.first_id(category);
            let last = category.last_id(&header);
            let map = &mut things[category as usize];
            map.reserve((last + 1).saturating_sub(first) as usize);

            for id in first..=last {
                observer.on_record_start(category, id, reader.position());

                let thing = ThingAttributeDecoder::new(&mut *observer)
                    .decode(&mut reader)
                    .map_err(|source| Error::Thing {
                        category,
                        id,
                        source: Box::new(source),
                    })?;

                observer.on_record_end(category, id, &thing);
                map.insert(id, thing);
            }
        }

        debug!(
            items = things[0].len(),
            outfits = things[1].len(),
            effects = things[2].len(),
            distance = things[3].len(),
            "decoded dat file"
        );

        Ok(Self { header, things })
    }

    /// Get the header.
    pub fn header(&self) -> &DatHeader {
        &self.header
    }

    /// Get the signature.
    pub fn signature(&self) -> u32 {
        self.header.signature
    }

    /// Get all decoded things of a category.
    pub fn things(&self, category: ThingCategory) -> &FxHashMap<u32, ThingType> {
        &self.things[category as usize]
    }

    /// Get a thing by category and ID.
    pub fn get(&self, category: ThingCategory, id: u32) -> Option<&ThingType> {
        self.things[category as usize].get(&id)
    }

    /// Get an item by ID.
    pub fn item(&self, id: u32) -> Option<&ThingType> {
        self.get(ThingCategory::Item, id)
    }

    /// Total number of decoded things across all categories.
    pub fn len(&self) -> usize {
        self.things.iter().map(|m| m.len()).sum()
    }

    /// Check if no things were decoded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
