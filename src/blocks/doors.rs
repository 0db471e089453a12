use bit_field::BitField;

use super::{check, TreeType, CORNERS, NSWE, SWNE};
use crate::{BlockKind, Codec, Description, Direction, Result};

/// Beds. Bits 0-1 give the direction, bit 2 is set while occupied and bit 3
/// marks the head end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bed {
    id: u16,
    data: u8,
}

impl Bed {
    pub fn direction(&self) -> Direction {
        SWNE.read(self.data, 0..2)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        SWNE.set(Self::KIND, &mut self.data, 0..2, direction)
    }

    pub fn is_occupied(&self) -> bool {
        self.data.get_bit(2)
    }

    pub fn set_occupied(&mut self, occupied: bool) {
        self.data.set_bit(2, occupied);
    }

    pub fn is_head(&self) -> bool {
        self.data.get_bit(3)
    }

    pub fn set_head(&mut self, head: bool) {
        self.data.set_bit(3, head);
    }
}

impl Codec for Bed {
    const KIND: BlockKind = BlockKind::Bed;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 15)?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn turn(&mut self, clockwise: bool) {
        SWNE.turn(&mut self.data, 0..2, clockwise);
    }

    fn describe(&self) -> Description {
        let part = if self.is_head() { "head" } else { "foot" };
        Description::of(self.id)
            .with("facing", self.direction())
            .with("part", part)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorMaterial {
    Wood,
    Iron,
    Spruce,
    Birch,
    Jungle,
    Acacia,
    DarkOak,
}

impl DoorMaterial {
    pub fn id(self) -> u16 {
        match self {
            DoorMaterial::Wood => 64,
            DoorMaterial::Iron => 71,
            DoorMaterial::Spruce => 193,
            DoorMaterial::Birch => 194,
            DoorMaterial::Jungle => 195,
            DoorMaterial::Acacia => 196,
            DoorMaterial::DarkOak => 197,
        }
    }

    pub fn from_id(id: u16) -> Option<DoorMaterial> {
        Some(match id {
            64 => DoorMaterial::Wood,
            71 => DoorMaterial::Iron,
            193 => DoorMaterial::Spruce,
            194 => DoorMaterial::Birch,
            195 => DoorMaterial::Jungle,
            196 => DoorMaterial::Acacia,
            197 => DoorMaterial::DarkOak,
            _ => return None,
        })
    }
}

/// Doors.
///
/// Bit 3 is set for the upper half, bit 2 while open, and bits 0-1 give the
/// corner of the block the hinge sits in: NW, NE, SE, SW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Door {
    id: u16,
    data: u8,
}

impl Door {
    pub fn material(&self) -> DoorMaterial {
        DoorMaterial::from_id(self.id).unwrap_or(DoorMaterial::Wood)
    }

    pub fn set_material(&mut self, material: DoorMaterial) {
        self.id = material.id();
    }

    pub fn is_bottom_half(&self) -> bool {
        !self.data.get_bit(3)
    }

    pub fn set_bottom_half(&mut self, bottom: bool) {
        self.data.set_bit(3, !bottom);
    }

    pub fn is_open(&self) -> bool {
        self.data.get_bit(2)
    }

    pub fn set_open(&mut self, open: bool) {
        self.data.set_bit(2, open);
    }

    pub fn hinge(&self) -> Direction {
        CORNERS.read(self.data, 0..2)
    }

    pub fn set_hinge(&mut self, corner: Direction) -> Result<()> {
        CORNERS.set(Self::KIND, &mut self.data, 0..2, corner)
    }
}

impl Codec for Door {
    const KIND: BlockKind = BlockKind::Door;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 15)?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn turn(&mut self, clockwise: bool) {
        CORNERS.turn(&mut self.data, 0..2, clockwise);
    }

    fn describe(&self) -> Description {
        let half = if self.is_bottom_half() { "lower" } else { "upper" };
        Description::of(self.id)
            .with("half", half)
            .with("open", self.is_open())
            .with("hinge", self.hinge())
    }
}

/// Trapdoors. Bits 0-1 give the wall they hinge on (N, S, W, E), bit 2 is
/// set while open and bit 3 for trapdoors in the top half of the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Trapdoor {
    id: u16,
    data: u8,
}

impl Trapdoor {
    pub fn is_iron(&self) -> bool {
        self.id == 167
    }

    pub fn set_iron(&mut self, iron: bool) {
        self.id = if iron { 167 } else { 96 };
    }

    pub fn direction(&self) -> Direction {
        NSWE.read(self.data, 0..2)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        NSWE.set(Self::KIND, &mut self.data, 0..2, direction)
    }

    pub fn is_open(&self) -> bool {
        self.data.get_bit(2)
    }

    pub fn set_open(&mut self, open: bool) {
        self.data.set_bit(2, open);
    }

    pub fn is_top(&self) -> bool {
        self.data.get_bit(3)
    }

    pub fn set_top(&mut self, top: bool) {
        self.data.set_bit(3, top);
    }
}

impl Codec for Trapdoor {
    const KIND: BlockKind = BlockKind::Trapdoor;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 15)?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn turn(&mut self, clockwise: bool) {
        NSWE.turn(&mut self.data, 0..2, clockwise);
    }

    fn describe(&self) -> Description {
        let half = if self.is_top() { "top" } else { "bottom" };
        Description::of(self.id)
            .with("facing", self.direction())
            .with("open", self.is_open())
            .with("half", half)
    }
}

/// Fence gates of every wood type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FenceGate {
    id: u16,
    data: u8,
}

impl FenceGate {
    fn gate_id(tree: TreeType) -> u16 {
        match tree {
            TreeType::Oak => 107,
            TreeType::Spruce => 183,
            TreeType::Birch => 184,
            TreeType::Jungle => 185,
            TreeType::DarkOak => 186,
            TreeType::Acacia => 187,
        }
    }

    pub fn tree(&self) -> TreeType {
        TreeType::ALL
            .into_iter()
            .find(|t| Self::gate_id(*t) == self.id)
            .unwrap_or(TreeType::Oak)
    }

    pub fn set_tree(&mut self, tree: TreeType) {
        self.id = Self::gate_id(tree);
    }

    pub fn direction(&self) -> Direction {
        SWNE.read(self.data, 0..2)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        SWNE.set(Self::KIND, &mut self.data, 0..2, direction)
    }

    pub fn is_open(&self) -> bool {
        self.data.get_bit(2)
    }

    pub fn set_open(&mut self, open: bool) {
        self.data.set_bit(2, open);
    }
}

impl Codec for FenceGate {
    const KIND: BlockKind = BlockKind::FenceGate;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 7)?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn turn(&mut self, clockwise: bool) {
        SWNE.turn(&mut self.data, 0..2, clockwise);
    }

    fn describe(&self) -> Description {
        Description::of(self.id)
            .with("facing", self.direction())
            .with("open", self.is_open())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn default_wooden_door() {
        let door = Door::decode(64, 0).unwrap();
        assert_eq!(DoorMaterial::Wood, door.material());
        assert!(door.is_bottom_half());
        assert!(!door.is_open());
        assert_eq!(Direction::NorthWest, door.hinge());
        assert_eq!(0, door.encode());
    }

    #[test]
    fn door_fields_are_isolated() {
        let mut door = Door::decode(71, 0b1110).unwrap();
        door.set_open(false);
        assert_eq!(0b1010, door.encode());
        door.set_hinge(Direction::SouthWest).unwrap();
        assert_eq!(0b1011, door.encode());
        assert!(matches!(
            door.set_hinge(Direction::North),
            Err(Error::UnsupportedDirection { .. })
        ));
        assert_eq!(0b1011, door.encode());
    }

    #[test]
    fn door_hinge_turns() {
        let mut door = Door::decode(193, 0b0100).unwrap();
        door.turn(true);
        assert_eq!(Direction::NorthEast, door.hinge());
        assert_eq!(0b0101, door.encode());
        door.turn(false);
        door.turn(false);
        assert_eq!(Direction::SouthWest, door.hinge());
    }

    #[test]
    fn trapdoor_turns() {
        let mut trapdoor = Trapdoor::decode(96, 0b1100).unwrap();
        assert_eq!(Direction::North, trapdoor.direction());
        trapdoor.turn(true);
        assert_eq!(Direction::East, trapdoor.direction());
        assert_eq!(0b1111, trapdoor.encode());
    }

    #[test]
    fn fence_gate_trees() {
        let mut gate = FenceGate::decode(186, 5).unwrap();
        assert_eq!(TreeType::DarkOak, gate.tree());
        gate.set_tree(TreeType::Acacia);
        assert_eq!((187, 5), (gate.id(), gate.encode()));
        assert!(FenceGate::decode(107, 8).is_err());
    }

    #[test]
    fn bed_head() {
        let bed = Bed::decode(26, 0b1010).unwrap();
        assert!(bed.is_head());
        assert!(!bed.is_occupied());
        assert_eq!(Direction::North, bed.direction());
    }
}
