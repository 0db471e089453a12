//! MCEdit/Schematica `.schematic` files: a box of legacy block ids and data
//! values plus tile entities, stored as (usually gzipped) NBT.

use std::io::Read;

use fastnbt::ByteArray;
use flate2::read::GzDecoder;
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::names::{block_id, block_name};
use crate::{
    create, Block, BlockKind, Direction, DirectionSet, Error, ItemStack, Result, SkullType,
    TileEntity,
};

/// The raw contents of a schematic file.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct Schematic {
    pub width: i16,
    pub height: i16,
    pub length: i16,

    #[serde(default = "alpha")]
    pub materials: String,

    /// Low 8 bits of each block id, indexed by `(y * length + z) * width + x`.
    pub blocks: ByteArray,

    /// Data value of each block, one per byte.
    pub data: ByteArray,

    /// High 4 bits of block ids, two blocks per byte. The block at an even
    /// index is in the low nibble.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_blocks: Option<ByteArray>,

    #[serde(default)]
    pub tile_entities: Vec<RawTileEntity>,
}

fn alpha() -> String {
    "Alpha".to_string()
}

/// A tile entity as stored in the file. Only the fields the codec knows how
/// to merge are kept.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RawTileEntity {
    pub id: String,
    pub x: i32,
    pub y: i32,
    pub z: i32,

    #[serde(rename = "Items", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<RawItem>,

    #[serde(rename = "Text1", default, skip_serializing_if = "Option::is_none")]
    pub text1: Option<String>,
    #[serde(rename = "Text2", default, skip_serializing_if = "Option::is_none")]
    pub text2: Option<String>,
    #[serde(rename = "Text3", default, skip_serializing_if = "Option::is_none")]
    pub text3: Option<String>,
    #[serde(rename = "Text4", default, skip_serializing_if = "Option::is_none")]
    pub text4: Option<String>,

    #[serde(rename = "SkullType", default, skip_serializing_if = "Option::is_none")]
    pub skull_type: Option<i8>,
    #[serde(rename = "Rot", default, skip_serializing_if = "Option::is_none")]
    pub rot: Option<i8>,
    /// Owner name in files from before 1.7.
    #[serde(rename = "ExtraType", default, skip_serializing_if = "Option::is_none")]
    pub extra_type: Option<String>,
    #[serde(rename = "Owner", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<RawOwner>,

    #[serde(rename = "Command", default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(rename = "CustomName", default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,

    /// Flower pot contents.
    #[serde(rename = "Item", default, skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemId>,
    #[serde(rename = "Data", default, skip_serializing_if = "Option::is_none")]
    pub item_data: Option<i32>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RawItem {
    #[serde(rename = "Slot")]
    pub slot: i8,
    pub id: ItemId,
    #[serde(rename = "Damage", default)]
    pub damage: i16,
    #[serde(rename = "Count")]
    pub count: i8,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RawOwner {
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Item ids are numeric in old files and namespaced names in newer ones.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ItemId {
    Numeric(i16),
    Named(String),
}

impl ItemId {
    fn resolve(&self) -> Option<u16> {
        match self {
            ItemId::Numeric(id) => u16::try_from(*id).ok(),
            ItemId::Named(name) => block_id(name),
        }
    }
}

impl Schematic {
    /// Parse a schematic from NBT, gzipped or not.
    pub fn from_bytes(bytes: &[u8]) -> Result<Schematic> {
        let schematic: Schematic = if bytes.starts_with(&[0x1f, 0x8b]) {
            let mut raw = vec![];
            GzDecoder::new(bytes).read_to_end(&mut raw)?;
            fastnbt::from_bytes(&raw)?
        } else {
            fastnbt::from_bytes(bytes)?
        };

        schematic.validate()?;
        Ok(schematic)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Schematic> {
        let mut bytes = vec![];
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Build a schematic from already separated ids and data values, all of
    /// length `width * height * length`.
    pub fn new(width: i16, height: i16, length: i16, ids: &[u16], data: &[u8]) -> Result<Self> {
        // Blocks plus AddBlocks hold 12 bits of id.
        if let Some(id) = ids.iter().find(|id| **id > 0xFFF) {
            return Err(Error::InvalidSchematic(format!(
                "block id {} does not fit in 12 bits",
                id
            )));
        }

        let needs_add = ids.iter().any(|id| *id > 0xFF);
        let add_blocks = needs_add.then(|| {
            let mut add = vec![0i8; (ids.len() + 1) / 2];
            for (i, id) in ids.iter().enumerate() {
                let high = ((id >> 8) & 0xF) as u8;
                let shift = if i % 2 == 0 { 0 } else { 4 };
                add[i / 2] = (add[i / 2] as u8 | (high << shift)) as i8;
            }
            ByteArray::new(add)
        });

        let schematic = Schematic {
            width,
            height,
            length,
            materials: alpha(),
            blocks: ByteArray::new(ids.iter().map(|id| *id as u8 as i8).collect()),
            data: ByteArray::new(data.iter().map(|d| *d as i8).collect()),
            add_blocks,
            tile_entities: vec![],
        };

        schematic.validate()?;
        Ok(schematic)
    }

    fn validate(&self) -> Result<()> {
        if self.width < 0 || self.height < 0 || self.length < 0 {
            return Err(Error::InvalidSchematic(format!(
                "negative size {}x{}x{}",
                self.width, self.height, self.length
            )));
        }

        let volume = self.volume();
        if self.blocks.len() != volume || self.data.len() != volume {
            return Err(Error::InvalidSchematic(format!(
                "expected {} blocks, found {} ids and {} data values",
                volume,
                self.blocks.len(),
                self.data.len()
            )));
        }

        if let Some(add) = &self.add_blocks {
            if add.len() < (volume + 1) / 2 {
                return Err(Error::InvalidSchematic(format!(
                    "AddBlocks holds {} bytes, {} needed",
                    add.len(),
                    (volume + 1) / 2
                )));
            }
        }

        Ok(())
    }

    pub fn volume(&self) -> usize {
        self.width as usize * self.height as usize * self.length as usize
    }

    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.length as usize + z) * self.width as usize + x
    }

    /// Block id and data value at `index`.
    pub fn raw_block(&self, index: usize) -> (u16, u8) {
        // Byte arrays are signed, -1 is id 255.
        let mut id = self.blocks[index] as u8 as u16;

        if let Some(add) = &self.add_blocks {
            let packed = add[index / 2] as u8;
            let high = if index % 2 == 0 {
                packed & 0x0F
            } else {
                (packed & 0xF0) >> 4
            };
            id += (high as u16) << 8;
        }

        (id, self.data[index] as u8)
    }

    /// Decode every block.
    ///
    /// Blocks whose data value makes no sense for their id are replaced by
    /// air and counted rather than failing the whole schematic. Tile entities
    /// are merged afterwards; one that cannot be merged is dropped on its own.
    ///
    /// Fails if the size no longer matches the block arrays.
    pub fn decode(&self) -> Result<DecodedSchematic> {
        self.validate()?;

        let decoded: Vec<(Block, bool)> = (0..self.volume())
            .into_par_iter()
            .map(|i| {
                let (id, data) = self.raw_block(i);
                match create(id, data) {
                    Ok(block) => (block, false),
                    Err(e) => {
                        debug!("block {} at index {}: {}", id, i, e);
                        (Block::air(), true)
                    }
                }
            })
            .collect();

        let faulty = decoded.iter().filter(|(_, faulty)| *faulty).count();
        let blocks = decoded.into_iter().map(|(b, _)| b).collect();

        let mut schematic = DecodedSchematic {
            width: self.width as usize,
            height: self.height as usize,
            length: self.length as usize,
            blocks,
            faulty,
            dropped_tile_entities: 0,
        };

        for te in &self.tile_entities {
            if let Err(e) = schematic.merge(te) {
                warn!(
                    "dropped {} tile entity at {},{},{}: {}",
                    te.id, te.x, te.y, te.z, e
                );
                schematic.dropped_tile_entities += 1;
            }
        }

        if faulty > 0 {
            warn!("{} faulty blocks replaced with air", faulty);
        }

        Ok(schematic)
    }
}

/// A schematic with every block decoded.
#[derive(Debug, Clone)]
pub struct DecodedSchematic {
    width: usize,
    height: usize,
    length: usize,
    blocks: Vec<Block>,
    faulty: usize,
    dropped_tile_entities: usize,
}

impl DecodedSchematic {
    /// Width (x), height (y) and length (z).
    pub fn size(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.length)
    }

    /// Number of blocks that failed to decode and were replaced with air.
    pub fn faulty_blocks(&self) -> usize {
        self.faulty
    }

    pub fn dropped_tile_entities(&self) -> usize {
        self.dropped_tile_entities
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    fn index(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        if x < self.width && y < self.height && z < self.length {
            Some((y * self.length + z) * self.width + x)
        } else {
            None
        }
    }

    pub fn block(&self, x: usize, y: usize, z: usize) -> Option<&Block> {
        self.index(x, y, z).map(|i| &self.blocks[i])
    }

    pub fn block_mut(&mut self, x: usize, y: usize, z: usize) -> Option<&mut Block> {
        self.index(x, y, z).map(move |i| &mut self.blocks[i])
    }

    fn merge(&mut self, te: &RawTileEntity) -> Result<()> {
        let pos = (
            usize::try_from(te.x),
            usize::try_from(te.y),
            usize::try_from(te.z),
        );
        let block = match pos {
            (Ok(x), Ok(y), Ok(z)) => self.block_mut(x, y, z),
            _ => None,
        };
        let block = match block {
            Some(b) => b,
            None => {
                return Err(Error::InvalidSchematic(
                    "tile entity outside of the schematic".to_string(),
                ))
            }
        };

        match payload_for(block.kind(), te) {
            Some(payload) => block.attach(payload),
            None => {
                debug!("ignoring {} tile entity on {:?}", te.id, block.kind());
                Ok(())
            }
        }
    }

    /// The horizontal neighbours the block at a position links up with, for
    /// blocks whose shape depends on their surroundings. `{None}` for
    /// everything else.
    pub fn connections(&self, x: usize, y: usize, z: usize) -> DirectionSet {
        let block = match self.block(x, y, z) {
            Some(b) if b.is_connectable() => b,
            _ => return DirectionSet::none(),
        };

        let neighbours = [
            (Direction::North, Some(x), z.checked_sub(1)),
            (Direction::South, Some(x), Some(z + 1)),
            (Direction::West, x.checked_sub(1), Some(z)),
            (Direction::East, Some(x + 1), Some(z)),
        ];

        neighbours
            .into_iter()
            .filter_map(|(d, nx, nz)| {
                let other = self.block(nx?, y, nz?)?;
                block.connects_to(other).then_some(d)
            })
            .collect()
    }

    /// One horizontal slice as text: a line per row of z, with the cache key
    /// of each block separated by tabs.
    pub fn layer_text(&self, y: usize) -> String {
        let mut out = String::new();
        for z in 0..self.length {
            let row: Vec<String> = (0..self.width)
                .filter_map(|x| {
                    self.block(x, y, z)
                        .map(|b| b.cache_key_with(&self.connections(x, y, z)))
                })
                .collect();
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        out
    }

    /// A copy rotated a quarter turn around the vertical axis. Width and
    /// length swap and every block is turned with it.
    pub fn turned(&self, clockwise: bool) -> DecodedSchematic {
        let (w, h, l) = (self.width, self.height, self.length);
        let mut blocks = vec![Block::air(); self.blocks.len()];

        for y in 0..h {
            for z in 0..l {
                for x in 0..w {
                    // Looking down with north up, clockwise takes north to
                    // east.
                    let (nx, nz) = if clockwise {
                        (l - 1 - z, x)
                    } else {
                        (z, w - 1 - x)
                    };
                    let from = (y * l + z) * w + x;
                    let to = (y * w + nz) * l + nx;
                    blocks[to] = self.blocks[from].turned(clockwise);
                }
            }
        }

        DecodedSchematic {
            width: l,
            height: h,
            length: w,
            blocks,
            faulty: self.faulty,
            dropped_tile_entities: self.dropped_tile_entities,
        }
    }

    /// Encode back into a schematic, tile entities included.
    pub fn to_schematic(&self) -> Result<Schematic> {
        let ids: Vec<u16> = self.blocks.iter().map(Block::id).collect();
        let data: Vec<u8> = self.blocks.iter().map(Block::data).collect();

        let size = |v: usize| {
            i16::try_from(v).map_err(|_| Error::InvalidSchematic(format!("size {} too big", v)))
        };
        let mut schematic = Schematic::new(
            size(self.width)?,
            size(self.height)?,
            size(self.length)?,
            &ids,
            &data,
        )?;

        for y in 0..self.height {
            for z in 0..self.length {
                for x in 0..self.width {
                    if let Some(te) = self.block(x, y, z).and_then(raw_tile_entity) {
                        schematic.tile_entities.push(RawTileEntity {
                            x: x as i32,
                            y: y as i32,
                            z: z as i32,
                            ..te
                        });
                    }
                }
            }
        }

        Ok(schematic)
    }
}

fn item_stack(item: &RawItem) -> Option<ItemStack> {
    match item.id.resolve() {
        Some(id) => Some(ItemStack::new(id, item.damage as u16, item.count as u8)),
        None => {
            debug!("unknown item {:?}", item.id);
            None
        }
    }
}

/// Container items laid out by slot, empty slots filled in.
fn slots(items: &[RawItem]) -> Vec<ItemStack> {
    let mut slots = vec![];
    for item in items {
        let slot = match usize::try_from(item.slot) {
            Ok(slot) => slot,
            Err(_) => continue,
        };
        if let Some(stack) = item_stack(item) {
            if slots.len() <= slot {
                slots.resize(slot + 1, ItemStack::EMPTY);
            }
            slots[slot] = stack;
        }
    }
    slots
}

fn payload_for(kind: BlockKind, te: &RawTileEntity) -> Option<TileEntity> {
    use BlockKind::*;

    match kind {
        Chest | Dispenser | Dropper | Hopper | BrewingStand | Furnace => {
            Some(TileEntity::Items(slots(&te.items)))
        }
        StandingSign | WallSign => {
            let lines = [&te.text1, &te.text2, &te.text3, &te.text4]
                .into_iter()
                .map(|t| t.clone().unwrap_or_default())
                .collect();
            Some(TileEntity::Text(lines))
        }
        MobHead => {
            let skull_type = te
                .skull_type
                .and_then(|t| SkullType::try_from(t as u8).ok())
                .unwrap_or(SkullType::Skeleton);
            let owner = te
                .owner
                .as_ref()
                .and_then(|o| o.name.clone())
                .or_else(|| te.extra_type.clone());
            Some(TileEntity::Head {
                skull_type,
                rotation: te.rot.unwrap_or(0) as u8,
                owner,
            })
        }
        CommandBlock => Some(TileEntity::Command {
            command: te.command.clone().unwrap_or_default(),
            name: te.custom_name.clone(),
        }),
        FlowerPot => {
            let id = te.item.as_ref()?.resolve()?;
            let damage = te.item_data.unwrap_or(0) as u16;
            Some(TileEntity::Plant(ItemStack::new(id, damage, 1)))
        }
        _ => None,
    }
}

fn raw_items(slots: &[ItemStack]) -> Vec<RawItem> {
    slots
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.is_empty())
        .map(|(slot, s)| RawItem {
            slot: slot as i8,
            id: ItemId::Numeric(s.id as i16),
            damage: s.damage as i16,
            count: s.count as i8,
        })
        .collect()
}

fn sign(id: &str, lines: &[String; 4]) -> RawTileEntity {
    RawTileEntity {
        id: id.to_string(),
        text1: Some(lines[0].clone()),
        text2: Some(lines[1].clone()),
        text3: Some(lines[2].clone()),
        text4: Some(lines[3].clone()),
        ..Default::default()
    }
}

/// The tile entity to write for a block, positioned at the origin.
fn raw_tile_entity(block: &Block) -> Option<RawTileEntity> {
    let container = |id: &str, slots: &[ItemStack]| RawTileEntity {
        id: id.to_string(),
        items: raw_items(slots),
        ..Default::default()
    };

    let te = match block {
        Block::Chest(b) => container("Chest", b.items().slots()),
        Block::Dispenser(b) => container("Trap", b.items().slots()),
        Block::Dropper(b) => container("Dropper", b.items().slots()),
        Block::Hopper(b) => container("Hopper", b.items().slots()),
        Block::BrewingStand(b) => container("Cauldron", b.items().slots()),
        Block::Furnace(b) => container("Furnace", b.items().slots()),
        Block::StandingSign(b) => sign("Sign", b.lines()),
        Block::WallSign(b) => sign("Sign", b.lines()),
        Block::MobHead(b) => RawTileEntity {
            id: "Skull".to_string(),
            skull_type: Some(u8::from(b.skull_type()) as i8),
            rot: Some(b.rotation() as i8),
            owner: b.owner().map(|name| RawOwner {
                name: Some(name.to_string()),
            }),
            ..Default::default()
        },
        Block::CommandBlock(b) => RawTileEntity {
            id: "Control".to_string(),
            command: Some(b.command().to_string()),
            custom_name: b.custom_name().map(str::to_string),
            ..Default::default()
        },
        Block::FlowerPot(b) => {
            let item = b.planted()?;
            RawTileEntity {
                id: "FlowerPot".to_string(),
                item: Some(ItemId::Numeric(item.id as i16)),
                item_data: Some(item.damage as i32),
                ..Default::default()
            }
        }
        _ => return None,
    };

    Some(te)
}

/// Count the blocks of each name, most common first.
pub fn block_histogram(blocks: &[Block]) -> Vec<(String, usize)> {
    let mut counts = std::collections::HashMap::new();
    for b in blocks {
        let name = match block_name(b.id()) {
            Some(name) => name.to_string(),
            None => format!("unknown_{}", b.id()),
        };
        *counts.entry(name).or_insert(0usize) += 1;
    }

    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}
