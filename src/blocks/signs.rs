//! Signs, banners and mob heads: the blocks that can face any of the 16
//! rose directions.

use std::fmt::Display;

use bit_field::BitField;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use super::{check, check_field, rose_direction, rose_value, WALL};
use crate::{BlockKind, Codec, Description, Direction, Error, Result};

fn turn_rose(data: &mut u8, clockwise: bool) {
    let turned = rose_direction(*data)
        .rotate_quarter(clockwise)
        .and_then(rose_value);
    if let Some(v) = turned {
        *data = v;
    }
}

/// Pad sign text to four lines.
fn four_lines(kind: BlockKind, lines: Vec<String>) -> Result<[String; 4]> {
    if lines.len() > 4 {
        return Err(Error::WrongSlotCount {
            kind,
            expected: 4,
            given: lines.len(),
        });
    }

    let mut text: [String; 4] = Default::default();
    for (slot, line) in text.iter_mut().zip(lines) {
        *slot = line;
    }
    Ok(text)
}

/// Signs on a post. The data value is the rose direction, 0 facing south.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StandingSign {
    id: u16,
    data: u8,
    lines: [String; 4],
}

impl StandingSign {
    pub fn direction(&self) -> Direction {
        rose_direction(self.data)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        self.data = rose_value(direction)
            .ok_or_else(|| Error::direction(Self::KIND, direction))?;
        Ok(())
    }

    pub fn lines(&self) -> &[String; 4] {
        &self.lines
    }

    pub fn set_lines(&mut self, lines: Vec<String>) -> Result<()> {
        self.lines = four_lines(Self::KIND, lines)?;
        Ok(())
    }
}

impl Codec for StandingSign {
    const KIND: BlockKind = BlockKind::StandingSign;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 15)?;
        Ok(Self {
            id,
            data,
            lines: Default::default(),
        })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn turn(&mut self, clockwise: bool) {
        turn_rose(&mut self.data, clockwise);
    }

    fn describe(&self) -> Description {
        Description::of(self.id).with("rotation", self.direction())
    }
}

/// Signs attached to the side of a block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WallSign {
    id: u16,
    data: u8,
    lines: [String; 4],
}

impl WallSign {
    pub fn direction(&self) -> Direction {
        WALL.read(self.data, 0..3)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        WALL.set(Self::KIND, &mut self.data, 0..3, direction)
    }

    pub fn lines(&self) -> &[String; 4] {
        &self.lines
    }

    pub fn set_lines(&mut self, lines: Vec<String>) -> Result<()> {
        self.lines = four_lines(Self::KIND, lines)?;
        Ok(())
    }
}

impl Codec for WallSign {
    const KIND: BlockKind = BlockKind::WallSign;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, WALL.contains(data))?;
        Ok(Self {
            id,
            data,
            lines: Default::default(),
        })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn turn(&mut self, clockwise: bool) {
        WALL.turn(&mut self.data, 0..3, clockwise);
    }

    fn describe(&self) -> Description {
        Description::of(self.id).with("facing", self.direction())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StandingBanner {
    id: u16,
    data: u8,
}

impl StandingBanner {
    pub fn direction(&self) -> Direction {
        rose_direction(self.data)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        self.data = rose_value(direction)
            .ok_or_else(|| Error::direction(Self::KIND, direction))?;
        Ok(())
    }
}

impl Codec for StandingBanner {
    const KIND: BlockKind = BlockKind::StandingBanner;

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
        turn_rose(&mut self.data, clockwise);
    }

    fn describe(&self) -> Description {
        Description::of(self.id).with("rotation", self.direction())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallBanner {
    id: u16,
    data: u8,
}

impl WallBanner {
    pub fn direction(&self) -> Direction {
        WALL.read(self.data, 0..3)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        WALL.set(Self::KIND, &mut self.data, 0..3, direction)
    }
}

impl Codec for WallBanner {
    const KIND: BlockKind = BlockKind::WallBanner;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, WALL.contains(data))?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn turn(&mut self, clockwise: bool) {
        WALL.turn(&mut self.data, 0..3, clockwise);
    }

    fn describe(&self) -> Description {
        Description::of(self.id).with("facing", self.direction())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum SkullType {
    Skeleton = 0,
    Wither = 1,
    Zombie = 2,
    Player = 3,
    Creeper = 4,
    Dragon = 5,
}

impl Display for SkullType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SkullType::Skeleton => "skeleton",
            SkullType::Wither => "wither_skeleton",
            SkullType::Zombie => "zombie",
            SkullType::Player => "player",
            SkullType::Creeper => "creeper",
            SkullType::Dragon => "dragon",
        })
    }
}

/// Mob heads.
///
/// Bits 0-2 are 1 for a head on the floor or 2-5 for one on a wall, facing
/// N, S, W, E. Bit 3 stops the head from dropping. A head on the floor takes
/// its direction from the 16 point rotation of its tile entity; a head on a
/// wall only ever uses the data value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MobHead {
    id: u16,
    data: u8,
    skull_type: SkullType,
    rotation: u8,
    owner: Option<String>,
}

impl MobHead {
    pub fn is_on_floor(&self) -> bool {
        self.data.get_bits(0..3) == 1
    }

    pub fn direction(&self) -> Direction {
        if self.is_on_floor() {
            rose_direction(self.rotation)
        } else {
            WALL.read(self.data, 0..3)
        }
    }

    /// Put the head on the floor, facing any rose direction.
    pub fn set_on_floor(&mut self, direction: Direction) -> Result<()> {
        let rotation = rose_value(direction)
            .ok_or_else(|| Error::direction(Self::KIND, direction))?;
        self.data.set_bits(0..3, 1);
        self.rotation = rotation;
        Ok(())
    }

    /// Hang the head on a wall, facing a cardinal direction.
    pub fn set_on_wall(&mut self, direction: Direction) -> Result<()> {
        WALL.set(Self::KIND, &mut self.data, 0..3, direction)
    }

    pub fn is_no_drop(&self) -> bool {
        self.data.get_bit(3)
    }

    pub fn set_no_drop(&mut self, no_drop: bool) {
        self.data.set_bit(3, no_drop);
    }

    pub fn skull_type(&self) -> SkullType {
        self.skull_type
    }

    /// The raw 16 point rotation from the tile entity.
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn set_head(
        &mut self,
        skull_type: SkullType,
        rotation: u8,
        owner: Option<String>,
    ) -> Result<()> {
        self.rotation = check_field("rotation", rotation, 15)?;
        self.skull_type = skull_type;
        self.owner = owner.filter(|o| !o.is_empty());
        Ok(())
    }
}

impl Codec for MobHead {
    const KIND: BlockKind = BlockKind::MobHead;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 15 && matches!(data.get_bits(0..3), 1..=5))?;
        Ok(Self {
            id,
            data,
            skull_type: SkullType::Skeleton,
            rotation: 0,
            owner: None,
        })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn turn(&mut self, clockwise: bool) {
        if self.is_on_floor() {
            turn_rose(&mut self.rotation, clockwise);
        } else {
            WALL.turn(&mut self.data, 0..3, clockwise);
        }
    }

    fn describe(&self) -> Description {
        Description::of(self.id)
            .with("type", self.skull_type)
            .with("facing", self.direction())
            .with("floor", self.is_on_floor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_rose() {
        let mut sign = StandingSign::decode(63, 0).unwrap();
        assert_eq!(Direction::South, sign.direction());
        sign.turn(true);
        assert_eq!(Direction::West, sign.direction());
        assert_eq!(4, sign.encode());

        let mut sign = StandingSign::decode(63, 3).unwrap();
        assert_eq!(Direction::WestSouthWest, sign.direction());
        sign.turn(false);
        assert_eq!(Direction::SouthSouthEast, sign.direction());
    }

    #[test]
    fn sign_lines_pad() {
        let mut sign = WallSign::decode(68, 2).unwrap();
        sign.set_lines(vec!["hello".to_string()]).unwrap();
        assert_eq!("hello", sign.lines()[0]);
        assert_eq!("", sign.lines()[3]);

        let five = vec![String::new(); 5];
        assert!(matches!(
            sign.set_lines(five),
            Err(Error::WrongSlotCount {
                expected: 4,
                given: 5,
                ..
            })
        ));
        assert_eq!("hello", sign.lines()[0]);
    }

    #[test]
    fn head_direction_sources() {
        let mut floor = MobHead::decode(144, 1).unwrap();
        floor.set_head(SkullType::Player, 6, Some("Notch".to_string())).unwrap();
        assert_eq!(Direction::NorthWest, floor.direction());
        assert_eq!(1, floor.encode());

        floor.turn(true);
        assert_eq!(Direction::NorthEast, floor.direction());
        assert_eq!(1, floor.encode());

        let mut wall = MobHead::decode(144, 0b1011).unwrap();
        wall.set_head(SkullType::Creeper, 6, None).unwrap();
        assert_eq!(Direction::South, wall.direction());
        wall.turn(true);
        assert_eq!(Direction::West, wall.direction());
        assert_eq!(0b1100, wall.encode());
        assert_eq!(6, wall.rotation());
    }

    #[test]
    fn head_domain() {
        assert!(MobHead::decode(144, 0).is_err());
        assert!(MobHead::decode(144, 6).is_err());
        assert!(MobHead::decode(144, 8).is_err());
        assert!(MobHead::decode(144, 13).is_ok());
    }

    #[test]
    fn head_wall_rejects_diagonal() {
        let mut head = MobHead::decode(144, 2).unwrap();
        assert!(head.set_on_wall(Direction::NorthEast).is_err());
        head.set_on_floor(Direction::NorthEast).unwrap();
        assert!(head.is_on_floor());
        assert_eq!(10, head.rotation());
    }
}
