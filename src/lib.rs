//! For decoding the blocks of Minecraft's legacy (pre 1.13) format, where a
//! block is a numeric id plus a 4 bit data value.
//!
//! [`create`] turns an id and data value into a typed [`Block`], whose
//! setters keep the data value consistent and whose `turn` rotates the block
//! a quarter around the vertical axis. [`Schematic`] reads MCEdit
//! `.schematic` files and decodes them into a grid of blocks.
//!
//! ```
//! use fastschem::{create, Block, Direction};
//!
//! let mut block = create(53, 0).unwrap(); // oak stairs facing east
//! block.turn(true);
//!
//! match &block {
//!     Block::Stair(stair) => assert_eq!(Direction::South, stair.direction()),
//!     _ => unreachable!(),
//! }
//! assert_eq!(2, block.data());
//! ```

mod block;
mod blocks;
mod direction;
mod error;
mod names;
mod registry;
mod schematic;
mod tile_entity;

#[cfg(feature = "render")]
mod palette;
#[cfg(feature = "render")]
mod render;

pub use block::*;
pub use blocks::*;
pub use direction::*;
pub use error::*;
pub use names::{block_id, block_name};
pub use registry::*;
pub use schematic::*;
pub use tile_entity::*;

#[cfg(feature = "render")]
pub use palette::*;
#[cfg(feature = "render")]
pub use render::*;

#[cfg(test)]
mod test;
