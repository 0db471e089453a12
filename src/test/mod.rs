mod bits;
mod codec;
mod merge;
mod schematic_file;

use crate::{create, Block};

/// Every block with a vanilla id, in every state its data value can hold.
pub(crate) fn all_legal_blocks() -> impl Iterator<Item = Block> {
    (0..=255u16).flat_map(|id| (0..=15u8).filter_map(move |data| create(id, data).ok()))
}
