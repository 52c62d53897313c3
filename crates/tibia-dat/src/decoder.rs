//! Attribute stream decoding.
//!
//! A thing is a sequence of `[tag][fields...]` entries ended by [`END_TAG`].
//! Decoding is strictly positional: an unknown tag is an error because its
//! field width cannot be known.

use tibia_common::BinaryReader;
use tracing::{debug, trace};

use crate::{Attribute, AttributeTag, DatHeader, Error, Result, ThingCategory, ThingType, END_TAG};

/// Receives progress events while a `.dat` file is decoded.
///
/// All methods default to doing nothing. Observers never influence decoding.
pub trait ThingObserver {
    /// The header has been read.
    fn on_header(&mut self, _header: &DatHeader) {}

    /// A thing record is about to be decoded at `position`.
    fn on_record_start(&mut self, _category: ThingCategory, _id: u32, _position: usize) {}

    /// An attribute tag was read at `position`.
    fn on_tag(&mut self, _tag: AttributeTag, _position: usize) {}

    /// A thing record has been decoded.
    fn on_record_end(&mut self, _category: ThingCategory, _id: u32, _thing: &ThingType) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ThingObserver for NoopObserver {}

/// Observer that forwards events to `tracing`.
///
/// Header events are logged at `debug`, per-record and per-tag events at `trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ThingObserver for TracingObserver {
    fn on_header(&mut self, header: &DatHeader) {
        debug!(
            signature = { header.signature },
            items = { header.item_count },
            outfits = { header.outfit_count },
            effects = { header.effect_count },
            distance = { header.distance_count },
            "read dat header"
        );
    }

    fn on_record_start(&mut self, category: ThingCategory, id: u32, position: usize) {
        trace!(%category, id, position, "decoding thing");
    }

    fn on_tag(&mut self, tag: AttributeTag, position: usize) {
        trace!(%tag, position, "reading attribute");
    }

    fn on_record_end(&mut self, category: ThingCategory, id: u32, thing: &ThingType) {
        trace!(%category, id, attributes = thing.len(), "decoded thing");
    }
}

/// Decodes one thing's attribute stream into a [`ThingType`].
pub struct ThingAttributeDecoder<'o, O: ThingObserver + ?Sized> {
    observer: &'o mut O,
}

impl<'o, O: ThingObserver + ?Sized> ThingAttributeDecoder<'o, O> {
    /// Create a decoder reporting to `observer`.
    pub fn new(observer: &'o mut O) -> Self {
        Self { observer }
    }

    /// Decode attributes from the reader's position up to and including the end tag.
    ///
    /// On success the reader is positioned just past the end tag.
    pub fn decode(&mut self, reader: &mut BinaryReader<'_>) -> Result<ThingType> {
        let mut thing = ThingType::new();

        loop {
            let position = reader.position();
            let byte = reader.read_u8()?;

            if byte == END_TAG {
                return Ok(thing);
            }

            let tag = AttributeTag::try_from(byte)
                .map_err(|tag| Error::UnknownTag { tag, position })?;
            self.observer.on_tag(tag, position);

            let attribute = Attribute::read(tag, reader).map_err(|source| {
                Error::TruncatedAttribute {
                    tag,
                    position,
                    source,
                }
            })?;
            thing.insert(attribute);
        }
    }
}

/// Decode a single thing without an observer.
pub fn decode_thing(reader: &mut BinaryReader<'_>) -> Result<ThingType> {
    ThingAttributeDecoder::new(&mut NoopObserver).decode(reader)
}
