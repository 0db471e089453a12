//! The per-category codecs. Each category stores its block id and raw data
//! value; getters read their own bit field and setters clear and rewrite only
//! the bits they own.

use std::fmt::Display;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{kind_for, BlockKind, Error, Result};

mod building;
mod containers;
mod doors;
mod facing;
mod mechanisms;
mod plants;
mod rails;
mod redstone;
mod signs;
mod simple;

pub use building::*;
pub use containers::*;
pub use doors::*;
pub use mechanisms::*;
pub use plants::*;
pub use rails::*;
pub use redstone::*;
pub use signs::*;
pub use simple::*;

pub(crate) use facing::*;

/// Fail with `DataOutOfRange` unless `id` belongs to `kind` and `legal`
/// holds.
pub(crate) fn check(kind: BlockKind, id: u16, data: u8, legal: bool) -> Result<()> {
    if legal && kind_for(id) == kind {
        Ok(())
    } else {
        Err(Error::out_of_range(id, data))
    }
}

/// Validate a numeric field against its inclusive maximum.
pub(crate) fn check_field(field: &'static str, value: u8, max: u8) -> Result<u8> {
    if value <= max {
        Ok(value)
    } else {
        Err(Error::field(field, value))
    }
}

/// Wood types, shared by the many blocks that come in per-tree variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum TreeType {
    Oak = 0,
    Spruce = 1,
    Birch = 2,
    Jungle = 3,
    Acacia = 4,
    DarkOak = 5,
}

impl TreeType {
    pub const ALL: [TreeType; 6] = [
        TreeType::Oak,
        TreeType::Spruce,
        TreeType::Birch,
        TreeType::Jungle,
        TreeType::Acacia,
        TreeType::DarkOak,
    ];
}

impl Display for TreeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TreeType::Oak => "oak",
            TreeType::Spruce => "spruce",
            TreeType::Birch => "birch",
            TreeType::Jungle => "jungle",
            TreeType::Acacia => "acacia",
            TreeType::DarkOak => "dark_oak",
        })
    }
}

/// The sixteen dye colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum DyeColour {
    White = 0,
    Orange = 1,
    Magenta = 2,
    LightBlue = 3,
    Yellow = 4,
    Lime = 5,
    Pink = 6,
    Gray = 7,
    Silver = 8,
    Cyan = 9,
    Purple = 10,
    Blue = 11,
    Brown = 12,
    Green = 13,
    Red = 14,
    Black = 15,
}

impl DyeColour {
    /// Every four bit value is a colour.
    pub(crate) fn from_nibble(v: u8) -> DyeColour {
        DyeColour::try_from(v & 0xF).unwrap_or(DyeColour::White)
    }
}

impl Display for DyeColour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(crate::names::colour_name(*self as u8))
    }
}
