//! Contains the Error and Result type used throughout the codec.
use std::fmt::Display;

use crate::{BlockKind, Direction};

/// Various errors that can occur while decoding or mutating blocks.
#[derive(Debug)]
pub enum Error {
    /// The data value has no meaning for this block id.
    DataOutOfRange { id: u16, data: u8 },
    /// A setter was given a value outside of the field's domain.
    InvalidFieldValue { field: &'static str, value: i64 },
    /// The block's geometry cannot represent this direction.
    UnsupportedDirection { kind: BlockKind, direction: Direction },
    /// A container payload had more items than the block has slots.
    TooManyItems {
        kind: BlockKind,
        slots: usize,
        given: usize,
    },
    /// A fixed length payload, such as sign text, had the wrong length.
    WrongSlotCount {
        kind: BlockKind,
        expected: usize,
        given: usize,
    },
    /// The payload does not belong to this kind of block.
    TileEntityMismatch { kind: BlockKind },
    InvalidSchematic(String),
    Nbt(fastnbt::error::Error),
    IO(std::io::Error),
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn out_of_range(id: u16, data: u8) -> Error {
        Error::DataOutOfRange { id, data }
    }

    pub(crate) fn field(field: &'static str, value: impl Into<i64>) -> Error {
        Error::InvalidFieldValue {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn direction(kind: BlockKind, direction: Direction) -> Error {
        Error::UnsupportedDirection { kind, direction }
    }

    /// Whether the error comes from malformed input data, rather than from a
    /// caller asking for something impossible. Recoverable errors should be
    /// handled per block, eg by substituting air.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::DataOutOfRange { .. }
            | Error::TooManyItems { .. }
            | Error::WrongSlotCount { .. }
            | Error::TileEntityMismatch { .. } => true,
            Error::InvalidFieldValue { .. } | Error::UnsupportedDirection { .. } => false,
            Error::InvalidSchematic(_) | Error::Nbt(_) | Error::IO(_) => false,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IO(err)
    }
}

impl From<fastnbt::error::Error> for Error {
    fn from(err: fastnbt::error::Error) -> Error {
        Error::Nbt(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DataOutOfRange { id, data } => {
                write!(f, "data value {} out of range for block id {}", data, id)
            }
            Error::InvalidFieldValue { field, value } => {
                write!(f, "invalid value {} for field {}", value, field)
            }
            Error::UnsupportedDirection { kind, direction } => {
                write!(f, "{:?} cannot face {}", kind, direction)
            }
            Error::TooManyItems { kind, slots, given } => write!(
                f,
                "{:?} has {} slots but {} items were given",
                kind, slots, given
            ),
            Error::WrongSlotCount {
                kind,
                expected,
                given,
            } => write!(f, "{:?} expects {} entries, got {}", kind, expected, given),
            Error::TileEntityMismatch { kind } => {
                write!(f, "tile entity does not fit block kind {:?}", kind)
            }
            Error::InvalidSchematic(msg) => write!(f, "invalid schematic: {}", msg),
            Error::Nbt(e) => write!(f, "nbt error: {}", e),
            Error::IO(e) => write!(f, "io error: {:?}", e),
        }
    }
}

impl std::error::Error for Error {}
