//! Synthetic sprite files for tests.

use byteorder::{LittleEndian, WriteBytesExt};

use crate::SpriteLayout;

/// A sprite that is transparent except for one red pixel at index `marker`.
pub fn marked_sprite(marker: u16) -> Vec<u8> {
    let mut data = vec![0xAB, 0xCD, 0xEF];
    data.write_u16::<LittleEndian>(4 + 3 + 4).unwrap();
    data.write_u16::<LittleEndian>(marker).unwrap();
    data.write_u16::<LittleEndian>(1).unwrap();
    data.extend_from_slice(&[0xFF, 0x00, 0x00]);
    data.write_u16::<LittleEndian>(1024 - marker - 1).unwrap();
    data.write_u16::<LittleEndian>(0).unwrap();
    data
}

/// A sprite whose runs stop short of the canvas.
pub fn short_sprite() -> Vec<u8> {
    let mut data = vec![0x00; 3];
    data.write_u16::<LittleEndian>(4).unwrap();
    data.write_u16::<LittleEndian>(1000).unwrap();
    data.write_u16::<LittleEndian>(0).unwrap();
    data
}

/// Build a sprite file with one table entry per slot, IDs `0..slots.len()`.
///
/// The header count is the highest ID. `None` leaves the entry at `0`.
pub fn build_file(layout: SpriteLayout, slots: &[Option<Vec<u8>>]) -> Vec<u8> {
    let header_size = layout.header_size();
    let table_size = (slots.len() + 1) * 4;
    let count = slots.len().saturating_sub(1);

    let mut data = Vec::new();
    data.write_u32::<LittleEndian>(0x0000_1234).unwrap();
    match layout {
        SpriteLayout::Legacy => data.write_u16::<LittleEndian>(count as u16).unwrap(),
        SpriteLayout::Extended => data.write_u32::<LittleEndian>(count as u32).unwrap(),
    }

    let mut bodies = Vec::new();
    let mut addresses = Vec::new();
    for slot in slots {
        match slot {
            Some(body) => {
                addresses.push((header_size + table_size + bodies.len()) as u32);
                bodies.extend_from_slice(body);
            }
            None => addresses.push(0),
        }
    }

    // reserved entry
    data.write_u32::<LittleEndian>(0).unwrap();
    for address in addresses {
        data.write_u32::<LittleEndian>(address).unwrap();
    }
    data.extend_from_slice(&bodies);
    data
}
