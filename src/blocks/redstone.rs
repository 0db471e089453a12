//! Redstone components.

use std::fmt::Display;

use bit_field::BitField;

use super::{check, check_field, BUTTON, NESW, SIX, SWNE, TORCH};
use crate::{Axis, BlockKind, Codec, Description, Direction, Error, Result};

/// Redstone dust. The data value is the signal strength, the shape of the
/// wire depends on its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RedstoneWire {
    id: u16,
    data: u8,
}

impl RedstoneWire {
    pub fn strength(&self) -> u8 {
        self.data
    }

    pub fn set_strength(&mut self, strength: u8) -> Result<()> {
        self.data = check_field("strength", strength, 15)?;
        Ok(())
    }
}

impl Codec for RedstoneWire {
    const KIND: BlockKind = BlockKind::RedstoneWire;

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

    fn describe(&self) -> Description {
        Description::of(self.id).with("power", self.strength())
    }
}

/// Torches. Values 1-4 are attached to a wall and point E, W, S, N, value 5
/// stands on the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Torch {
    id: u16,
    data: u8,
}

impl Torch {
    pub fn direction(&self) -> Direction {
        TORCH.read(self.data, 0..3)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        TORCH.set(Self::KIND, &mut self.data, 0..3, direction)
    }
}

impl Codec for Torch {
    const KIND: BlockKind = BlockKind::Torch;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, TORCH.contains(data))?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn turn(&mut self, clockwise: bool) {
        TORCH.turn(&mut self.data, 0..3, clockwise);
    }

    fn describe(&self) -> Description {
        Description::of(self.id).with("facing", self.direction())
    }
}

/// Redstone torches, laid out like torches. Lit and unlit torches have
/// different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RedstoneTorch {
    id: u16,
    data: u8,
}

impl RedstoneTorch {
    pub fn is_lit(&self) -> bool {
        self.id == 76
    }

    pub fn set_lit(&mut self, lit: bool) {
        self.id = if lit { 76 } else { 75 };
    }

    pub fn direction(&self) -> Direction {
        TORCH.read(self.data, 0..3)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        TORCH.set(Self::KIND, &mut self.data, 0..3, direction)
    }
}

impl Codec for RedstoneTorch {
    const KIND: BlockKind = BlockKind::RedstoneTorch;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, TORCH.contains(data))?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn turn(&mut self, clockwise: bool) {
        TORCH.turn(&mut self.data, 0..3, clockwise);
    }

    fn describe(&self) -> Description {
        Description::of(self.id).with("facing", self.direction())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeverMount {
    Ceiling,
    Wall,
    Ground,
}

impl Display for LeverMount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LeverMount::Ceiling => "ceiling",
            LeverMount::Wall => "wall",
            LeverMount::Ground => "floor",
        })
    }
}

/// Levers.
///
/// Bit 3 is set while thrown. Bits 0-2: 0 ceiling pointing east, 1-4 on a
/// wall facing E, W, S, N, 5 ground pointing south, 6 ground pointing east,
/// 7 ceiling pointing south. Ground and ceiling levers only have an axis, so
/// their direction is reported as south or east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lever {
    id: u16,
    data: u8,
}

impl Lever {
    pub fn mount(&self) -> LeverMount {
        match self.data.get_bits(0..3) {
            0 | 7 => LeverMount::Ceiling,
            5 | 6 => LeverMount::Ground,
            _ => LeverMount::Wall,
        }
    }

    pub fn is_on_ground(&self) -> bool {
        self.mount() == LeverMount::Ground
    }

    pub fn is_on_ceiling(&self) -> bool {
        self.mount() == LeverMount::Ceiling
    }

    pub fn direction(&self) -> Direction {
        match self.data.get_bits(0..3) {
            0 | 6 => Direction::East,
            5 | 7 => Direction::South,
            _ => TORCH.read(self.data, 0..3),
        }
    }

    pub fn set_direction(&mut self, mount: LeverMount, direction: Direction) -> Result<()> {
        let value = match mount {
            LeverMount::Wall if direction.is_cardinal() => TORCH.value(direction),
            LeverMount::Wall => None,
            LeverMount::Ground => match Axis::of(direction) {
                Some(Axis::Z) => Some(5),
                Some(Axis::X) => Some(6),
                _ => None,
            },
            LeverMount::Ceiling => match Axis::of(direction) {
                Some(Axis::X) => Some(0),
                Some(Axis::Z) => Some(7),
                _ => None,
            },
        };

        match value {
            Some(v) => {
                self.data.set_bits(0..3, v);
                Ok(())
            }
            None => Err(Error::direction(Self::KIND, direction)),
        }
    }

    pub fn is_thrown(&self) -> bool {
        self.data.get_bit(3)
    }

    pub fn set_thrown(&mut self, thrown: bool) {
        self.data.set_bit(3, thrown);
    }
}

impl Codec for Lever {
    const KIND: BlockKind = BlockKind::Lever;

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
        let turned = match self.data.get_bits(0..3) {
            0 => 7,
            7 => 0,
            5 => 6,
            6 => 5,
            _ => {
                TORCH.turn(&mut self.data, 0..3, clockwise);
                return;
            }
        };
        self.data.set_bits(0..3, turned);
    }

    fn describe(&self) -> Description {
        Description::of(self.id)
            .with("face", self.mount())
            .with("facing", self.direction())
            .with("powered", self.is_thrown())
    }
}

/// Stone and wooden buttons. Bits 0-2 give the direction (down, E, W, S, N,
/// up), bit 3 is set while pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Button {
    id: u16,
    data: u8,
}

impl Button {
    pub fn is_wooden(&self) -> bool {
        self.id == 143
    }

    pub fn set_wooden(&mut self, wooden: bool) {
        self.id = if wooden { 143 } else { 77 };
    }

    pub fn direction(&self) -> Direction {
        BUTTON.read(self.data, 0..3)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        BUTTON.set(Self::KIND, &mut self.data, 0..3, direction)
    }

    pub fn is_pressed(&self) -> bool {
        self.data.get_bit(3)
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.data.set_bit(3, pressed);
    }
}

impl Codec for Button {
    const KIND: BlockKind = BlockKind::Button;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 15 && BUTTON.contains(data.get_bits(0..3)))?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn turn(&mut self, clockwise: bool) {
        BUTTON.turn(&mut self.data, 0..3, clockwise);
    }

    fn describe(&self) -> Description {
        Description::of(self.id)
            .with("facing", self.direction())
            .with("powered", self.is_pressed())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlateMaterial {
    Stone,
    Wood,
}

impl PlateMaterial {
    pub fn id(self) -> u16 {
        match self {
            PlateMaterial::Stone => 70,
            PlateMaterial::Wood => 72,
        }
    }

    pub fn from_id(id: u16) -> Option<PlateMaterial> {
        match id {
            70 => Some(PlateMaterial::Stone),
            72 => Some(PlateMaterial::Wood),
            _ => None,
        }
    }
}

/// Stone and wooden pressure plates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PressurePlate {
    id: u16,
    data: u8,
}

impl PressurePlate {
    pub fn material(&self) -> PlateMaterial {
        PlateMaterial::from_id(self.id).unwrap_or(PlateMaterial::Stone)
    }

    pub fn set_material(&mut self, material: PlateMaterial) {
        self.id = material.id();
    }

    pub fn is_powered(&self) -> bool {
        self.data.get_bit(0)
    }

    pub fn set_powered(&mut self, powered: bool) {
        self.data.set_bit(0, powered);
    }
}

impl Codec for PressurePlate {
    const KIND: BlockKind = BlockKind::PressurePlate;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 1)?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn describe(&self) -> Description {
        Description::of(self.id).with("powered", self.is_powered())
    }
}

/// Light (gold) and heavy (iron) weighted pressure plates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightedPressurePlate {
    id: u16,
    data: u8,
}

impl WeightedPressurePlate {
    pub fn is_heavy(&self) -> bool {
        self.id == 148
    }

    pub fn set_heavy(&mut self, heavy: bool) {
        self.id = if heavy { 148 } else { 147 };
    }

    pub fn power(&self) -> u8 {
        self.data
    }

    pub fn set_power(&mut self, power: u8) -> Result<()> {
        self.data = check_field("power", power, 15)?;
        Ok(())
    }
}

impl Codec for WeightedPressurePlate {
    const KIND: BlockKind = BlockKind::WeightedPressurePlate;

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

    fn describe(&self) -> Description {
        Description::of(self.id).with("powered", self.power() > 0)
    }
}

/// Repeaters. Bits 0-1 give the direction (N, E, S, W), bits 2-3 the delay
/// minus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Repeater {
    id: u16,
    data: u8,
}

impl Repeater {
    pub fn is_powered(&self) -> bool {
        self.id == 94
    }

    pub fn set_powered(&mut self, powered: bool) {
        self.id = if powered { 94 } else { 93 };
    }

    pub fn direction(&self) -> Direction {
        NESW.read(self.data, 0..2)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        NESW.set(Self::KIND, &mut self.data, 0..2, direction)
    }

    /// Delay in redstone ticks, 1 to 4.
    pub fn delay(&self) -> u8 {
        self.data.get_bits(2..4) + 1
    }

    pub fn set_delay(&mut self, delay: u8) -> Result<()> {
        if !(1..=4).contains(&delay) {
            return Err(Error::field("delay", delay));
        }
        self.data.set_bits(2..4, delay - 1);
        Ok(())
    }
}

impl Codec for Repeater {
    const KIND: BlockKind = BlockKind::Repeater;

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
        NESW.turn(&mut self.data, 0..2, clockwise);
    }

    fn describe(&self) -> Description {
        Description::of(self.id)
            .with("facing", self.direction())
            .with("delay", self.delay())
    }
}

/// Comparators. Bits 0-1 give the direction, bit 2 selects subtract mode and
/// bit 3 is set while powered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Comparator {
    id: u16,
    data: u8,
}

impl Comparator {
    pub fn is_lit(&self) -> bool {
        self.id == 150
    }

    pub fn set_lit(&mut self, lit: bool) {
        self.id = if lit { 150 } else { 149 };
    }

    pub fn direction(&self) -> Direction {
        NESW.read(self.data, 0..2)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        NESW.set(Self::KIND, &mut self.data, 0..2, direction)
    }

    pub fn is_subtracting(&self) -> bool {
        self.data.get_bit(2)
    }

    pub fn set_subtracting(&mut self, subtract: bool) {
        self.data.set_bit(2, subtract);
    }

    pub fn is_powered(&self) -> bool {
        self.data.get_bit(3)
    }

    pub fn set_powered(&mut self, powered: bool) {
        self.data.set_bit(3, powered);
    }
}

impl Codec for Comparator {
    const KIND: BlockKind = BlockKind::Comparator;

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
        NESW.turn(&mut self.data, 0..2, clockwise);
    }

    fn describe(&self) -> Description {
        let mode = if self.is_subtracting() {
            "subtract"
        } else {
            "compare"
        };
        Description::of(self.id)
            .with("facing", self.direction())
            .with("mode", mode)
            .with("powered", self.is_powered())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DaylightSensor {
    id: u16,
    data: u8,
}

impl DaylightSensor {
    pub fn is_inverted(&self) -> bool {
        self.id == 178
    }

    pub fn set_inverted(&mut self, inverted: bool) {
        self.id = if inverted { 178 } else { 151 };
    }

    pub fn power(&self) -> u8 {
        self.data
    }

    pub fn set_power(&mut self, power: u8) -> Result<()> {
        self.data = check_field("power", power, 15)?;
        Ok(())
    }
}

impl Codec for DaylightSensor {
    const KIND: BlockKind = BlockKind::DaylightSensor;

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

    fn describe(&self) -> Description {
        Description::of(self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RedstoneLamp {
    id: u16,
    data: u8,
}

impl RedstoneLamp {
    pub fn is_lit(&self) -> bool {
        self.id == 124
    }

    pub fn set_lit(&mut self, lit: bool) {
        self.id = if lit { 124 } else { 123 };
    }
}

impl Codec for RedstoneLamp {
    const KIND: BlockKind = BlockKind::RedstoneLamp;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data == 0)?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn describe(&self) -> Description {
        Description::of(self.id)
    }
}

/// Tripwire hooks. Bits 0-1 give the direction, bit 2 is set when a wire
/// is connected and bit 3 while the wire is tripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TripwireHook {
    id: u16,
    data: u8,
}

impl TripwireHook {
    pub fn direction(&self) -> Direction {
        SWNE.read(self.data, 0..2)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        SWNE.set(Self::KIND, &mut self.data, 0..2, direction)
    }

    pub fn is_connected(&self) -> bool {
        self.data.get_bit(2)
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.data.set_bit(2, connected);
    }

    /// Reads bit 3 only. A hook that is merely connected (bit 2) is not
    /// activated.
    pub fn is_activated(&self) -> bool {
        self.data.get_bit(3)
    }

    pub fn set_activated(&mut self, activated: bool) {
        self.data.set_bit(3, activated);
    }
}

impl Codec for TripwireHook {
    const KIND: BlockKind = BlockKind::TripwireHook;

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
        Description::of(self.id)
            .with("facing", self.direction())
            .with("attached", self.is_connected())
            .with("powered", self.is_activated())
    }
}

/// Tripwire string. Its shape comes from neighbouring wire and hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tripwire {
    id: u16,
    data: u8,
}

impl Tripwire {
    pub fn is_powered(&self) -> bool {
        self.data.get_bit(0)
    }

    pub fn set_powered(&mut self, powered: bool) {
        self.data.set_bit(0, powered);
    }

    pub fn is_suspended(&self) -> bool {
        self.data.get_bit(1)
    }

    pub fn set_suspended(&mut self, suspended: bool) {
        self.data.set_bit(1, suspended);
    }

    pub fn is_attached(&self) -> bool {
        self.data.get_bit(2)
    }

    pub fn set_attached(&mut self, attached: bool) {
        self.data.set_bit(2, attached);
    }

    pub fn is_disarmed(&self) -> bool {
        self.data.get_bit(3)
    }

    pub fn set_disarmed(&mut self, disarmed: bool) {
        self.data.set_bit(3, disarmed);
    }
}

impl Codec for Tripwire {
    const KIND: BlockKind = BlockKind::Tripwire;

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

    fn describe(&self) -> Description {
        Description::of(self.id)
            .with("attached", self.is_attached())
            .with("powered", self.is_powered())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Observer {
    id: u16,
    data: u8,
}

impl Observer {
    pub fn direction(&self) -> Direction {
        SIX.read(self.data, 0..3)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        SIX.set(Self::KIND, &mut self.data, 0..3, direction)
    }

    pub fn is_powered(&self) -> bool {
        self.data.get_bit(3)
    }

    pub fn set_powered(&mut self, powered: bool) {
        self.data.set_bit(3, powered);
    }
}

impl Codec for Observer {
    const KIND: BlockKind = BlockKind::Observer;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 15 && SIX.contains(data.get_bits(0..3)))?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn turn(&mut self, clockwise: bool) {
        SIX.turn(&mut self.data, 0..3, clockwise);
    }

    fn describe(&self) -> Description {
        Description::of(self.id)
            .with("facing", self.direction())
            .with("powered", self.is_powered())
    }
}
