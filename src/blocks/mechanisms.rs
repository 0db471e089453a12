use bit_field::BitField;

use super::{check, SIX};
use crate::{BlockKind, Codec, Description, Direction, Result};

/// Pistons. Bits 0-2 face one of six directions, bit 3 is set while
/// extended. Sticky pistons have their own id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piston {
    id: u16,
    data: u8,
}

impl Piston {
    pub fn is_sticky(&self) -> bool {
        self.id == 29
    }

    pub fn set_sticky(&mut self, sticky: bool) {
        self.id = if sticky { 29 } else { 33 };
    }

    pub fn direction(&self) -> Direction {
        SIX.read(self.data, 0..3)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        SIX.set(Self::KIND, &mut self.data, 0..3, direction)
    }

    pub fn is_extended(&self) -> bool {
        self.data.get_bit(3)
    }

    pub fn set_extended(&mut self, extended: bool) {
        self.data.set_bit(3, extended);
    }
}

impl Codec for Piston {
    const KIND: BlockKind = BlockKind::Piston;

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
            .with("extended", self.is_extended())
    }
}

/// The arm of an extended piston. Unlike the piston itself, stickiness is
/// kept in bit 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PistonHead {
    id: u16,
    data: u8,
}

impl PistonHead {
    pub fn direction(&self) -> Direction {
        SIX.read(self.data, 0..3)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        SIX.set(Self::KIND, &mut self.data, 0..3, direction)
    }

    pub fn is_sticky(&self) -> bool {
        self.data.get_bit(3)
    }

    pub fn set_sticky(&mut self, sticky: bool) {
        self.data.set_bit(3, sticky);
    }
}

impl Codec for PistonHead {
    const KIND: BlockKind = BlockKind::PistonHead;

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
        let kind = if self.is_sticky() { "sticky" } else { "normal" };
        Description::of(self.id)
            .with("facing", self.direction())
            .with("type", kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandMode {
    Impulse,
    Repeating,
    Chain,
}

impl CommandMode {
    pub fn id(self) -> u16 {
        match self {
            CommandMode::Impulse => 137,
            CommandMode::Repeating => 210,
            CommandMode::Chain => 211,
        }
    }

    pub fn from_id(id: u16) -> Option<CommandMode> {
        match id {
            137 => Some(CommandMode::Impulse),
            210 => Some(CommandMode::Repeating),
            211 => Some(CommandMode::Chain),
            _ => None,
        }
    }
}

/// Command blocks. Bits 0-2 face one of six directions, bit 3 makes them
/// conditional. The command itself comes from the tile entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandBlock {
    id: u16,
    data: u8,
    command: String,
    name: Option<String>,
}

impl CommandBlock {
    pub fn mode(&self) -> CommandMode {
        CommandMode::from_id(self.id).unwrap_or(CommandMode::Impulse)
    }

    pub fn set_mode(&mut self, mode: CommandMode) {
        self.id = mode.id();
    }

    pub fn direction(&self) -> Direction {
        SIX.read(self.data, 0..3)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        SIX.set(Self::KIND, &mut self.data, 0..3, direction)
    }

    pub fn is_conditional(&self) -> bool {
        self.data.get_bit(3)
    }

    pub fn set_conditional(&mut self, conditional: bool) {
        self.data.set_bit(3, conditional);
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn custom_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_command(&mut self, command: String, name: Option<String>) {
        self.command = command;
        self.name = name.filter(|n| !n.is_empty());
    }
}

impl Codec for CommandBlock {
    const KIND: BlockKind = BlockKind::CommandBlock;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 15 && SIX.contains(data.get_bits(0..3)))?;
        Ok(Self {
            id,
            data,
            command: String::new(),
            name: None,
        })
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
            .with("conditional", self.is_conditional())
    }
}
