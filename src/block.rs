use std::fmt::Display;

use crate::blocks::*;
use crate::names::block_name;
use crate::{DirectionSet, Result, TileEntity};

/// The contract every block category implements: a validated decode of the
/// raw data value, its inverse, and a quarter turn expressed on the decoded
/// state.
pub trait Codec: Sized {
    const KIND: BlockKind;

    /// Decode a block id and data value. Data values that have no meaning for
    /// this category are an error, never clamped.
    fn decode(id: u16, data: u8) -> Result<Self>;

    fn id(&self) -> u16;

    /// The data value for the current state. Always accepted by `decode`.
    fn encode(&self) -> u8;

    /// Rotate by 90 degrees around the vertical axis. Blocks without a
    /// horizontal orientation are left as they are.
    fn turn(&mut self, _clockwise: bool) {}

    /// Describe the visual state, used to build cache keys.
    fn describe(&self) -> Description;
}

/// A block name plus the properties that determine how it looks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    name: String,
    properties: Vec<(&'static str, String)>,
}

impl Description {
    /// Start a description named after the legacy name of `id`.
    pub fn of(id: u16) -> Self {
        let name = match block_name(id) {
            Some(name) => format!("minecraft:{}", name),
            None => format!("minecraft:unknown_{}", id),
        };

        Self {
            name,
            properties: vec![],
        }
    }

    pub fn with(mut self, key: &'static str, value: impl Display) -> Self {
        self.properties.push((key, value.to_string()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl Display for Description {
    /// Formats as "name|prop1=val1,prop2=val2", properties ordered
    /// lexicographically so equal states always give equal strings.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut props: Vec<_> = self.properties.iter().collect();
        props.sort();

        write!(f, "{}|", self.name)?;
        let mut sep = "";
        for (k, v) in props {
            write!(f, "{}{}={}", sep, k, v)?;
            sep = ",";
        }
        Ok(())
    }
}

macro_rules! blocks {
    ($($kind:ident),* $(,)?) => {
        /// The category of a block, fixed when the block is created.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum BlockKind {
            $($kind,)*
        }

        /// A decoded block. Each variant holds the typed state of one
        /// category.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Block {
            $($kind($kind),)*
        }

        impl BlockKind {
            /// Decode `id` and `data` with this category's codec.
            pub fn decode(self, id: u16, data: u8) -> Result<Block> {
                match self {
                    $(BlockKind::$kind => $kind::decode(id, data).map(Block::$kind),)*
                }
            }
        }

        impl Block {
            pub fn kind(&self) -> BlockKind {
                match self {
                    $(Block::$kind(_) => BlockKind::$kind,)*
                }
            }

            pub fn id(&self) -> u16 {
                match self {
                    $(Block::$kind(b) => b.id(),)*
                }
            }

            /// The encoded data value.
            pub fn data(&self) -> u8 {
                match self {
                    $(Block::$kind(b) => b.encode(),)*
                }
            }

            pub fn turn(&mut self, clockwise: bool) {
                match self {
                    $(Block::$kind(b) => b.turn(clockwise),)*
                }
            }

            pub fn describe(&self) -> Description {
                match self {
                    $(Block::$kind(b) => b.describe(),)*
                }
            }
        }

        $(
            impl From<$kind> for Block {
                fn from(b: $kind) -> Block {
                    Block::$kind(b)
                }
            }
        )*
    };
}

blocks! {
    Generic,
    Variant,
    Colored,
    Liquid,
    Aged,
    Farmland,
    SnowLayer,
    Cake,
    Cauldron,
    Jukebox,
    StructureBlock,
    Sapling,
    Log,
    Leaves,
    Crops,
    Stem,
    NetherWart,
    Cocoa,
    Vine,
    HugeMushroom,
    DoublePlant,
    FlowerPot,
    Stair,
    Slab,
    Quartz,
    Pillar,
    Fence,
    Pane,
    Wall,
    Portal,
    Pumpkin,
    EndPortalFrame,
    Anvil,
    GlazedTerracotta,
    Ladder,
    EndRod,
    Bed,
    Door,
    Trapdoor,
    FenceGate,
    Rail,
    PoweredRail,
    RedstoneWire,
    Torch,
    RedstoneTorch,
    Lever,
    Button,
    PressurePlate,
    WeightedPressurePlate,
    Repeater,
    Comparator,
    DaylightSensor,
    RedstoneLamp,
    TripwireHook,
    Tripwire,
    Observer,
    Piston,
    PistonHead,
    Dispenser,
    Dropper,
    Hopper,
    CommandBlock,
    Chest,
    EnderChest,
    Furnace,
    BrewingStand,
    ShulkerBox,
    StandingSign,
    WallSign,
    StandingBanner,
    WallBanner,
    MobHead,
}

impl Block {
    /// Plain air, used in place of blocks that failed to decode.
    pub fn air() -> Block {
        Block::Generic(Generic::air())
    }

    pub fn is_air(&self) -> bool {
        self.id() == 0
    }

    /// A copy of this block turned by a quarter.
    pub fn turned(&self, clockwise: bool) -> Block {
        let mut b = self.clone();
        b.turn(clockwise);
        b
    }

    /// The key renderers cache sprites under. Blocks with the same key look
    /// the same, even when their data values differ.
    pub fn cache_key(&self) -> String {
        self.describe().to_string()
    }

    /// Like `cache_key`, but with the shape connectable blocks take from
    /// their neighbours. The shape of redstone wire, tripwire, fences, panes
    /// and walls is not stored in the data value, so it has to be supplied
    /// from the surrounding grid. Other blocks ignore `connections`.
    pub fn cache_key_with(&self, connections: &DirectionSet) -> String {
        if self.is_connectable() {
            self.describe()
                .with("connections", connections)
                .to_string()
        } else {
            self.cache_key()
        }
    }

    /// Blocks whose visual shape depends on their neighbours.
    pub fn is_connectable(&self) -> bool {
        matches!(
            self.kind(),
            BlockKind::RedstoneWire
                | BlockKind::Tripwire
                | BlockKind::Fence
                | BlockKind::Pane
                | BlockKind::Wall
        )
    }

    /// Whether a connectable block at a neighbouring position links up with
    /// this one.
    pub fn connects_to(&self, other: &Block) -> bool {
        use BlockKind::*;
        match self.kind() {
            RedstoneWire => matches!(
                other.kind(),
                RedstoneWire
                    | RedstoneTorch
                    | Lever
                    | Button
                    | PressurePlate
                    | WeightedPressurePlate
                    | Repeater
                    | Comparator
                    | DaylightSensor
                    | Observer
            ),
            Tripwire => matches!(other.kind(), Tripwire | TripwireHook),
            Fence => matches!(other.kind(), Fence | FenceGate),
            Pane | Wall => matches!(other.kind(), Pane | Wall),
            _ => false,
        }
    }

    /// Merge auxiliary tile entity data into the block.
    pub fn attach(&mut self, payload: TileEntity) -> Result<()> {
        crate::tile_entity::attach(self, payload)
    }
}
