//! Blocks with an inventory, plus the chest-like blocks without one.

use bit_field::BitField;

use super::{check, DyeColour, SIX, WALL};
use crate::{
    BlockKind, Codec, Description, Direction, DirectionSet, Error, Inventory, ItemStack, Result,
};

/// Dispensers, droppers and hoppers share one layout: a facing in bits 0-2
/// and a flag in bit 3.
macro_rules! dispenser_like {
    ($name:ident, $slots:expr, $flag:ident, $set_flag:ident, $legal:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            id: u16,
            data: u8,
            items: Inventory<$slots>,
        }

        impl $name {
            pub fn direction(&self) -> Direction {
                SIX.read(self.data, 0..3)
            }

            pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
                let mut data = self.data;
                SIX.set(Self::KIND, &mut data, 0..3, direction)?;
                if !$legal(data.get_bits(0..3)) {
                    return Err(Error::direction(Self::KIND, direction));
                }
                self.data = data;
                Ok(())
            }

            pub fn $flag(&self) -> bool {
                self.data.get_bit(3)
            }

            pub fn $set_flag(&mut self, value: bool) {
                self.data.set_bit(3, value);
            }

            pub fn items(&self) -> &Inventory<$slots> {
                &self.items
            }

            pub fn items_mut(&mut self) -> &mut Inventory<$slots> {
                &mut self.items
            }

            pub fn set_items(&mut self, items: Vec<ItemStack>) -> Result<()> {
                self.items = Inventory::from_items(Self::KIND, items)?;
                Ok(())
            }
        }

        impl Codec for $name {
            const KIND: BlockKind = BlockKind::$name;

            fn decode(id: u16, data: u8) -> Result<Self> {
                check(Self::KIND, id, data, data <= 15 && $legal(data.get_bits(0..3)))?;
                Ok(Self {
                    id,
                    data,
                    items: Inventory::new(),
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
                Description::of(self.id).with("facing", self.direction())
            }
        }
    };
}

fn six_way(v: u8) -> bool {
    SIX.contains(v)
}

/// Hoppers cannot point up.
fn hopper_way(v: u8) -> bool {
    SIX.contains(v) && v != 1
}

dispenser_like!(Dispenser, 9, is_triggered, set_triggered, six_way);
dispenser_like!(Dropper, 9, is_triggered, set_triggered, six_way);
dispenser_like!(Hopper, 5, is_disabled, set_disabled, hopper_way);

/// Chests and trapped chests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chest {
    id: u16,
    data: u8,
    items: Inventory<27>,
}

impl Chest {
    pub fn is_trapped(&self) -> bool {
        self.id == 146
    }

    pub fn set_trapped(&mut self, trapped: bool) {
        self.id = if trapped { 146 } else { 54 };
    }

    pub fn direction(&self) -> Direction {
        WALL.read(self.data, 0..3)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        WALL.set(Self::KIND, &mut self.data, 0..3, direction)
    }

    pub fn items(&self) -> &Inventory<27> {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Inventory<27> {
        &mut self.items
    }

    pub fn set_items(&mut self, items: Vec<ItemStack>) -> Result<()> {
        self.items = Inventory::from_items(Self::KIND, items)?;
        Ok(())
    }
}

impl Codec for Chest {
    const KIND: BlockKind = BlockKind::Chest;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, WALL.contains(data))?;
        Ok(Self {
            id,
            data,
            items: Inventory::new(),
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
pub struct EnderChest {
    id: u16,
    data: u8,
}

impl EnderChest {
    pub fn direction(&self) -> Direction {
        WALL.read(self.data, 0..3)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        WALL.set(Self::KIND, &mut self.data, 0..3, direction)
    }
}

impl Codec for EnderChest {
    const KIND: BlockKind = BlockKind::EnderChest;

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

/// Furnaces. A burning furnace has its own id. The three slots are the
/// input, the fuel and the result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Furnace {
    id: u16,
    data: u8,
    items: Inventory<3>,
}

impl Furnace {
    pub fn is_burning(&self) -> bool {
        self.id == 62
    }

    pub fn set_burning(&mut self, burning: bool) {
        self.id = if burning { 62 } else { 61 };
    }

    pub fn direction(&self) -> Direction {
        WALL.read(self.data, 0..3)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        WALL.set(Self::KIND, &mut self.data, 0..3, direction)
    }

    pub fn items(&self) -> &Inventory<3> {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<ItemStack>) -> Result<()> {
        self.items = Inventory::from_items(Self::KIND, items)?;
        Ok(())
    }
}

impl Codec for Furnace {
    const KIND: BlockKind = BlockKind::Furnace;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, WALL.contains(data))?;
        Ok(Self {
            id,
            data,
            items: Inventory::new(),
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

const BOTTLE_ARMS: [(usize, Direction); 3] = [
    (0, Direction::East),
    (1, Direction::SouthWest),
    (2, Direction::NorthWest),
];

/// Brewing stands. Bits 0-2 are set for each arm holding a bottle.
///
/// The arms point east, south-west and north-west. A quarter turn would move
/// them to directions no bit stands for, so turning leaves the stand as it
/// is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BrewingStand {
    id: u16,
    data: u8,
    items: Inventory<4>,
}

impl BrewingStand {
    /// The arms holding a bottle, `{None}` when empty.
    pub fn bottles(&self) -> DirectionSet {
        BOTTLE_ARMS
            .iter()
            .filter(|(bit, _)| self.data.get_bit(*bit))
            .map(|(_, d)| *d)
            .collect()
    }

    pub fn set_bottles(&mut self, bottles: &DirectionSet) -> Result<()> {
        let mut data = 0u8;
        for d in bottles.iter().filter(|d| *d != Direction::None) {
            match BOTTLE_ARMS.iter().find(|(_, arm)| *arm == d) {
                Some((bit, _)) => {
                    data.set_bit(*bit, true);
                }
                None => return Err(Error::direction(Self::KIND, d)),
            }
        }
        self.data = data;
        Ok(())
    }

    pub fn items(&self) -> &Inventory<4> {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<ItemStack>) -> Result<()> {
        self.items = Inventory::from_items(Self::KIND, items)?;
        Ok(())
    }
}

impl Codec for BrewingStand {
    const KIND: BlockKind = BlockKind::BrewingStand;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 7)?;
        Ok(Self {
            id,
            data,
            items: Inventory::new(),
        })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn describe(&self) -> Description {
        Description::of(self.id).with("bottles", self.bottles())
    }
}

/// Shulker boxes, one id per colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShulkerBox {
    id: u16,
    data: u8,
}

impl ShulkerBox {
    pub fn colour(&self) -> DyeColour {
        DyeColour::from_nibble(self.id.saturating_sub(219) as u8)
    }

    pub fn set_colour(&mut self, colour: DyeColour) {
        self.id = 219 + u8::from(colour) as u16;
    }

    pub fn direction(&self) -> Direction {
        SIX.read(self.data, 0..3)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        SIX.set(Self::KIND, &mut self.data, 0..3, direction)
    }
}

impl Codec for ShulkerBox {
    const KIND: BlockKind = BlockKind::ShulkerBox;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, SIX.contains(data))?;
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
        Description::of(self.id).with("facing", self.direction())
    }
}
