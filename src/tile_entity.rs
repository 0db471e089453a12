//! Auxiliary block state that does not fit in the data value: container
//! contents, sign text, head owners and commands.

use crate::{Block, BlockKind, Error, Result, SkullType};

/// A stack of items, as stored in container slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ItemStack {
    pub id: u16,
    pub damage: u16,
    pub count: u8,
}

impl ItemStack {
    /// The placeholder in slots that hold nothing.
    pub const EMPTY: ItemStack = ItemStack {
        id: 0,
        damage: 0,
        count: 0,
    };

    pub fn new(id: u16, damage: u16, count: u8) -> Self {
        Self { id, damage, count }
    }

    pub fn is_empty(&self) -> bool {
        self.id == 0 || self.count == 0
    }
}

/// A fixed number of item slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Inventory<const N: usize> {
    slots: [ItemStack; N],
}

impl<const N: usize> Inventory<N> {
    pub fn new() -> Self {
        Self {
            slots: [ItemStack::EMPTY; N],
        }
    }

    /// Fill the slots in order, padding with empty stacks. More items than
    /// slots is an error for the owning `kind`.
    pub fn from_items(kind: BlockKind, items: Vec<ItemStack>) -> Result<Self> {
        if items.len() > N {
            return Err(Error::TooManyItems {
                kind,
                slots: N,
                given: items.len(),
            });
        }

        let mut inv = Self::new();
        for (slot, item) in inv.slots.iter_mut().zip(items) {
            *slot = item;
        }
        Ok(inv)
    }

    pub fn slots(&self) -> &[ItemStack] {
        &self.slots
    }

    pub fn get(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot)
    }

    pub fn set(&mut self, slot: usize, item: ItemStack) -> Result<()> {
        match self.slots.get_mut(slot) {
            Some(s) => {
                *s = item;
                Ok(())
            }
            None => Err(Error::field("slot", slot as i64)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(ItemStack::is_empty)
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for Inventory<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Payloads that can be merged into a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileEntity {
    /// Container contents in slot order, empty slots included.
    Items(Vec<ItemStack>),
    /// Sign text, one entry per line.
    Text(Vec<String>),
    Head {
        skull_type: SkullType,
        /// Rotation on the 16 point rose, only used by heads on the floor.
        rotation: u8,
        owner: Option<String>,
    },
    Command {
        command: String,
        name: Option<String>,
    },
    /// What a flower pot holds.
    Plant(ItemStack),
}

/// Merge `payload` into `block`. On error the block is left unchanged.
pub fn attach(block: &mut Block, payload: TileEntity) -> Result<()> {
    match (block, payload) {
        (Block::Chest(b), TileEntity::Items(items)) => b.set_items(items),
        (Block::Dispenser(b), TileEntity::Items(items)) => b.set_items(items),
        (Block::Dropper(b), TileEntity::Items(items)) => b.set_items(items),
        (Block::Hopper(b), TileEntity::Items(items)) => b.set_items(items),
        (Block::BrewingStand(b), TileEntity::Items(items)) => b.set_items(items),
        (Block::Furnace(b), TileEntity::Items(items)) => b.set_items(items),
        (Block::StandingSign(b), TileEntity::Text(lines)) => b.set_lines(lines),
        (Block::WallSign(b), TileEntity::Text(lines)) => b.set_lines(lines),
        (
            Block::MobHead(b),
            TileEntity::Head {
                skull_type,
                rotation,
                owner,
            },
        ) => b.set_head(skull_type, rotation, owner),
        (Block::CommandBlock(b), TileEntity::Command { command, name }) => {
            b.set_command(command, name);
            Ok(())
        }
        (Block::FlowerPot(b), TileEntity::Plant(item)) => {
            b.set_planted(Some(item));
            Ok(())
        }
        (block, _) => Err(Error::TileEntityMismatch { kind: block.kind() }),
    }
}

/// Owned form of `attach`.
pub fn attach_tile_entity(mut block: Block, payload: TileEntity) -> Result<Block> {
    attach(&mut block, payload)?;
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_pads() {
        let inv = Inventory::<5>::from_items(BlockKind::Hopper, vec![ItemStack::new(1, 0, 64)])
            .unwrap();
        assert_eq!(5, inv.slots().len());
        assert_eq!(1, inv.slots()[0].id);
        assert!(inv.slots()[1..].iter().all(|s| *s == ItemStack::EMPTY));
    }

    #[test]
    fn inventory_rejects_overflow() {
        let items = vec![ItemStack::new(1, 0, 1); 6];
        assert!(matches!(
            Inventory::<5>::from_items(BlockKind::Hopper, items),
            Err(Error::TooManyItems {
                kind: BlockKind::Hopper,
                slots: 5,
                given: 6
            })
        ));
    }

    #[test]
    fn set_slot_out_of_range() {
        let mut inv = Inventory::<3>::new();
        inv.set(2, ItemStack::new(263, 0, 8)).unwrap();
        assert!(inv.set(3, ItemStack::EMPTY).is_err());
        assert!(!inv.is_empty());
    }

    #[test]
    fn mismatched_payload() {
        let mut block = Block::air();
        let res = attach(&mut block, TileEntity::Text(vec![]));
        assert!(matches!(
            res,
            Err(Error::TileEntityMismatch {
                kind: BlockKind::Generic
            })
        ));
    }
}
