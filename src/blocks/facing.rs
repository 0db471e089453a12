//! Direction layouts shared by several categories. A layout maps the value of
//! a bit field to a direction and back; quarter turns go through
//! `Direction::rotate_quarter` and are mapped back through the same layout, so
//! the rotated bits are always what encoding the rotated direction gives.

use std::ops::Range;

use bit_field::BitField;

use crate::Direction::{
    self, Down, East, North, NorthEast, NorthWest, South, SouthEast, SouthWest, Up, West,
};
use crate::{BlockKind, Error, Result};

pub(crate) struct Layout(&'static [(u8, Direction)]);

/// Pistons, dispensers, droppers, hoppers, command blocks, end rods,
/// observers and shulker boxes.
pub(crate) const SIX: Layout = Layout(&[
    (0, Down),
    (1, Up),
    (2, North),
    (3, South),
    (4, West),
    (5, East),
]);

/// Wall mounted blocks and chest-like blocks.
pub(crate) const WALL: Layout = Layout(&[(2, North), (3, South), (4, West), (5, East)]);

/// Beds, fence gates, end portal frames, pumpkins, tripwire hooks, anvils,
/// glazed terracotta.
pub(crate) const SWNE: Layout = Layout(&[(0, South), (1, West), (2, North), (3, East)]);

/// Repeaters, comparators and cocoa pods.
pub(crate) const NESW: Layout = Layout(&[(0, North), (1, East), (2, South), (3, West)]);

/// Stairs.
pub(crate) const EWSN: Layout = Layout(&[(0, East), (1, West), (2, South), (3, North)]);

/// Trapdoors, by the wall they hinge on.
pub(crate) const NSWE: Layout = Layout(&[(0, North), (1, South), (2, West), (3, East)]);

/// Door hinges and rail corners.
pub(crate) const CORNERS: Layout = Layout(&[
    (0, NorthWest),
    (1, NorthEast),
    (2, SouthEast),
    (3, SouthWest),
]);

/// Ascending rails, by the direction they rise towards.
pub(crate) const RAIL_SLOPE: Layout = Layout(&[(2, East), (3, West), (4, North), (5, South)]);

/// Torches, which can stand on the floor but not hang from the ceiling.
pub(crate) const TORCH: Layout = Layout(&[(1, East), (2, West), (3, South), (4, North), (5, Up)]);

/// Buttons.
pub(crate) const BUTTON: Layout = Layout(&[
    (0, Down),
    (1, East),
    (2, West),
    (3, South),
    (4, North),
    (5, Up),
]);

impl Layout {
    pub(crate) fn direction(&self, value: u8) -> Option<Direction> {
        self.0.iter().find(|(v, _)| *v == value).map(|(_, d)| *d)
    }

    pub(crate) fn value(&self, direction: Direction) -> Option<u8> {
        self.0
            .iter()
            .find(|(_, d)| *d == direction)
            .map(|(v, _)| *v)
    }

    pub(crate) fn contains(&self, value: u8) -> bool {
        self.direction(value).is_some()
    }

    /// Read the direction stored in `bits` of `data`.
    pub(crate) fn read(&self, data: u8, bits: Range<usize>) -> Direction {
        // Data is validated on decode, so the lookup cannot miss.
        self.direction(data.get_bits(bits)).unwrap_or(Direction::None)
    }

    /// Store `direction` in `bits` of `data`, returning false if this layout
    /// cannot represent it.
    pub(crate) fn write(&self, data: &mut u8, bits: Range<usize>, direction: Direction) -> bool {
        match self.value(direction) {
            Some(v) => {
                data.set_bits(bits, v);
                true
            }
            None => false,
        }
    }

    /// Like `write`, failing with `UnsupportedDirection` for `kind`.
    pub(crate) fn set(
        &self,
        kind: BlockKind,
        data: &mut u8,
        bits: Range<usize>,
        direction: Direction,
    ) -> Result<()> {
        if self.write(data, bits, direction) {
            Ok(())
        } else {
            Err(Error::direction(kind, direction))
        }
    }

    /// Turn the direction in `bits` by a quarter. Directions without a quarter
    /// turn, up and down, are left alone.
    pub(crate) fn turn(&self, data: &mut u8, bits: Range<usize>, clockwise: bool) {
        let turned = self
            .read(*data, bits.clone())
            .rotate_quarter(clockwise);

        if let Some(turned) = turned {
            self.write(data, bits, turned);
        }
    }
}

/// 16 point rose as stored by signs, banners and skulls: 0 is south and the
/// value increases clockwise.
pub(crate) fn rose_direction(value: u8) -> Direction {
    Direction::from_rose(value.wrapping_add(8) % 16)
}

pub(crate) fn rose_value(direction: Direction) -> Option<u8> {
    direction.rose_index().map(|i| (i + 8) % 16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_are_bijective() {
        let all = [
            &SIX,
            &WALL,
            &SWNE,
            &NESW,
            &EWSN,
            &NSWE,
            &CORNERS,
            &RAIL_SLOPE,
            &TORCH,
            &BUTTON,
        ];
        for layout in all {
            for (v, d) in layout.0 {
                assert_eq!(Some(*d), layout.direction(*v));
                assert_eq!(Some(*v), layout.value(*d));
            }
        }
    }

    #[test]
    fn turn_keeps_other_bits() {
        let mut data = 0b1010; // bit 3 set, facing value 2 (north)
        SIX.turn(&mut data, 0..3, true);
        assert_eq!(0b1101, data); // east is 5
    }

    #[test]
    fn turn_leaves_vertical_alone() {
        let mut data = 1;
        SIX.turn(&mut data, 0..3, true);
        assert_eq!(1, data);
    }

    #[test]
    fn rose_mapping() {
        assert_eq!(South, rose_direction(0));
        assert_eq!(West, rose_direction(4));
        assert_eq!(North, rose_direction(8));
        assert_eq!(East, rose_direction(12));
        for v in 0..16 {
            assert_eq!(Some(v), rose_value(rose_direction(v)));
        }
    }
}
