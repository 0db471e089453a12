use std::fmt::Display;

use bit_field::BitField;

use super::{check, CORNERS, RAIL_SLOPE};
use crate::{Axis, BlockKind, Codec, Description, Direction, Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RailShape {
    Flat,
    Ascending,
    Corner,
}

/// Shape and direction of a rail shape value.
///
/// Flat rails are axis valued and report north for north-south, west for
/// east-west.
fn shape_of(value: u8) -> (RailShape, Direction) {
    match value {
        0 => (RailShape::Flat, Direction::North),
        1 => (RailShape::Flat, Direction::West),
        2..=5 => (RailShape::Ascending, RAIL_SLOPE.read(value, 0..4)),
        _ => (
            RailShape::Corner,
            CORNERS.direction(value.wrapping_sub(6)).unwrap_or(Direction::None),
        ),
    }
}

fn shape_value(shape: RailShape, direction: Direction) -> Option<u8> {
    match shape {
        RailShape::Flat => match Axis::of(direction) {
            Some(Axis::Z) => Some(0),
            Some(Axis::X) => Some(1),
            _ => None,
        },
        RailShape::Ascending => RAIL_SLOPE.value(direction),
        RailShape::Corner => CORNERS.value(direction).map(|v| v + 6),
    }
}

fn turn_shape(value: u8, clockwise: bool) -> u8 {
    let (shape, direction) = shape_of(value);
    direction
        .rotate_quarter(clockwise)
        .and_then(|d| shape_value(shape, d))
        .unwrap_or(value)
}

struct ShapeName(RailShape, Direction);

impl Display for ShapeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            RailShape::Flat if self.1 == Direction::North => f.write_str("north_south"),
            RailShape::Flat => f.write_str("east_west"),
            RailShape::Ascending => write!(f, "ascending_{}", self.1),
            RailShape::Corner => write!(f, "{}", self.1),
        }
    }
}

/// Plain rails, the only ones that can curve.
///
/// 0-1 are flat (north-south, east-west), 2-5 ascend towards E, W, N, S and
/// 6-9 are corners NW, NE, SE, SW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rail {
    id: u16,
    data: u8,
}

impl Rail {
    pub fn shape(&self) -> RailShape {
        shape_of(self.data).0
    }

    pub fn direction(&self) -> Direction {
        shape_of(self.data).1
    }

    pub fn set_shape(&mut self, shape: RailShape, direction: Direction) -> Result<()> {
        match shape_value(shape, direction) {
            Some(v) => {
                self.data = v;
                Ok(())
            }
            None => Err(Error::direction(Self::KIND, direction)),
        }
    }
}

impl Codec for Rail {
    const KIND: BlockKind = BlockKind::Rail;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 9)?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn turn(&mut self, clockwise: bool) {
        self.data = turn_shape(self.data, clockwise);
    }

    fn describe(&self) -> Description {
        let (shape, direction) = shape_of(self.data);
        Description::of(self.id).with("shape", ShapeName(shape, direction))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoweredRailKind {
    Powered,
    Detector,
    Activator,
}

impl PoweredRailKind {
    pub fn id(self) -> u16 {
        match self {
            PoweredRailKind::Powered => 27,
            PoweredRailKind::Detector => 28,
            PoweredRailKind::Activator => 157,
        }
    }

    pub fn from_id(id: u16) -> Option<PoweredRailKind> {
        match id {
            27 => Some(PoweredRailKind::Powered),
            28 => Some(PoweredRailKind::Detector),
            157 => Some(PoweredRailKind::Activator),
            _ => None,
        }
    }
}

/// Powered, detector and activator rails: straight shapes only in bits 0-2,
/// bit 3 set while powered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoweredRail {
    id: u16,
    data: u8,
}

impl PoweredRail {
    pub fn rail_kind(&self) -> PoweredRailKind {
        PoweredRailKind::from_id(self.id).unwrap_or(PoweredRailKind::Powered)
    }

    pub fn set_rail_kind(&mut self, kind: PoweredRailKind) {
        self.id = kind.id();
    }

    pub fn shape(&self) -> RailShape {
        shape_of(self.data.get_bits(0..3)).0
    }

    pub fn direction(&self) -> Direction {
        shape_of(self.data.get_bits(0..3)).1
    }

    /// Corners are rejected, these rails cannot curve.
    pub fn set_shape(&mut self, shape: RailShape, direction: Direction) -> Result<()> {
        match shape_value(shape, direction) {
            Some(v) if shape != RailShape::Corner => {
                self.data.set_bits(0..3, v);
                Ok(())
            }
            _ => Err(Error::direction(Self::KIND, direction)),
        }
    }

    pub fn is_powered(&self) -> bool {
        self.data.get_bit(3)
    }

    pub fn set_powered(&mut self, powered: bool) {
        self.data.set_bit(3, powered);
    }
}

impl Codec for PoweredRail {
    const KIND: BlockKind = BlockKind::PoweredRail;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 15 && data.get_bits(0..3) <= 5)?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn turn(&mut self, clockwise: bool) {
        let turned = turn_shape(self.data.get_bits(0..3), clockwise);
        self.data.set_bits(0..3, turned);
    }

    fn describe(&self) -> Description {
        let (shape, direction) = shape_of(self.data.get_bits(0..3));
        Description::of(self.id)
            .with("shape", ShapeName(shape, direction))
            .with("powered", self.is_powered())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_turns_clockwise() {
        let mut rail = Rail::decode(66, 7).unwrap();
        assert_eq!(RailShape::Corner, rail.shape());
        assert_eq!(Direction::NorthEast, rail.direction());

        rail.turn(true);
        assert_eq!(Direction::SouthEast, rail.direction());
        assert_eq!(8, rail.encode());
    }

    #[test]
    fn ascending_cycle() {
        // N -> E -> S -> W
        let mut rail = Rail::decode(66, 4).unwrap();
        let mut seen = vec![];
        for _ in 0..4 {
            rail.turn(true);
            seen.push(rail.encode());
        }
        assert_eq!(vec![2, 5, 3, 4], seen);
    }

    #[test]
    fn flat_rails_swap_axis() {
        let mut rail = Rail::decode(66, 0).unwrap();
        rail.turn(true);
        assert_eq!(1, rail.encode());
        rail.turn(true);
        assert_eq!(0, rail.encode());
    }

    #[test]
    fn rail_rejects_ten() {
        assert!(matches!(
            Rail::decode(66, 10),
            Err(Error::DataOutOfRange { id: 66, data: 10 })
        ));
    }

    #[test]
    fn set_shape_checks_direction() {
        let mut rail = Rail::decode(66, 0).unwrap();
        rail.set_shape(RailShape::Flat, Direction::East).unwrap();
        assert_eq!(1, rail.encode());
        rail.set_shape(RailShape::Corner, Direction::SouthWest).unwrap();
        assert_eq!(9, rail.encode());
        assert!(rail.set_shape(RailShape::Corner, Direction::South).is_err());
        assert_eq!(9, rail.encode());
    }

    #[test]
    fn powered_rail_keeps_power_when_turned() {
        let mut rail = PoweredRail::decode(27, 0b1010).unwrap();
        assert!(rail.is_powered());
        assert_eq!(Direction::East, rail.direction());
        rail.turn(true);
        assert_eq!(0b1101, rail.encode());
        assert!(rail
            .set_shape(RailShape::Corner, Direction::NorthEast)
            .is_err());
        assert!(PoweredRail::decode(157, 6).is_err());
    }

    #[test]
    fn powered_rail_retag() {
        let mut rail = PoweredRail::decode(28, 0b1001).unwrap();
        rail.set_rail_kind(PoweredRailKind::Activator);
        assert_eq!((157, 0b1001), (rail.id(), rail.encode()));
    }
}
