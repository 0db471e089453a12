//! Dispatch from block id to the codec that understands its data value.

use crate::{Block, BlockKind, Result};

/// The category of block `id`. Ids without special behaviour, including ids
/// outside the vanilla range, are `Generic`.
pub fn kind_for(id: u16) -> BlockKind {
    use BlockKind::*;

    match id {
        1 | 3 | 5 | 12 | 19 | 24 | 31 | 38 | 97 | 98 | 168 | 179 => Variant,
        35 | 95 | 159 | 171 | 251 | 252 => Colored,
        6 => Sapling,
        8..=11 => Liquid,
        17 | 162 => Log,
        18 | 161 => Leaves,
        23 => Dispenser,
        26 => Bed,
        27 | 28 | 157 => PoweredRail,
        29 | 33 => Piston,
        34 => PistonHead,
        43 | 44 | 125 | 126 | 181 | 182 | 204 | 205 => Slab,
        50 => Torch,
        51 | 81 | 83 | 200 | 212 => Aged,
        53 | 67 | 108 | 109 | 114 | 128 | 134..=136 | 156 | 163 | 164 | 180 | 203 => Stair,
        54 | 146 => Chest,
        55 => RedstoneWire,
        59 | 141 | 142 | 207 => Crops,
        60 => Farmland,
        61 | 62 => Furnace,
        63 => StandingSign,
        64 | 71 | 193..=197 => Door,
        65 => Ladder,
        66 => Rail,
        68 => WallSign,
        69 => Lever,
        70 | 72 => PressurePlate,
        75 | 76 => RedstoneTorch,
        77 | 143 => Button,
        78 => SnowLayer,
        84 => Jukebox,
        85 | 113 | 188..=192 => Fence,
        86 | 91 => Pumpkin,
        90 => Portal,
        92 => Cake,
        93 | 94 => Repeater,
        96 | 167 => Trapdoor,
        99 | 100 => HugeMushroom,
        101 | 102 | 160 => Pane,
        104 | 105 => Stem,
        106 => Vine,
        107 | 183..=187 => FenceGate,
        115 => NetherWart,
        117 => BrewingStand,
        118 => Cauldron,
        120 => EndPortalFrame,
        123 | 124 => RedstoneLamp,
        127 => Cocoa,
        130 => EnderChest,
        131 => TripwireHook,
        132 => Tripwire,
        137 | 210 | 211 => CommandBlock,
        139 => Wall,
        140 => FlowerPot,
        144 => MobHead,
        145 => Anvil,
        147 | 148 => WeightedPressurePlate,
        149 | 150 => Comparator,
        151 | 178 => DaylightSensor,
        154 => Hopper,
        155 => Quartz,
        158 => Dropper,
        170 | 202 | 216 => Pillar,
        175 => DoublePlant,
        176 => StandingBanner,
        177 => WallBanner,
        198 => EndRod,
        218 => Observer,
        219..=234 => ShulkerBox,
        235..=250 => GlazedTerracotta,
        255 => StructureBlock,
        _ => Generic,
    }
}

/// Decode a block from its id and data value.
///
/// ```
/// use fastschem::{create, BlockKind};
///
/// let rail = create(66, 7).unwrap();
/// assert_eq!(BlockKind::Rail, rail.kind());
/// assert!(create(66, 10).is_err());
/// ```
pub fn create(id: u16, data: u8) -> Result<Block> {
    kind_for(id).decode(id, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_are_generic() {
        assert_eq!(BlockKind::Generic, kind_for(2));
        assert_eq!(BlockKind::Generic, kind_for(253));
        assert_eq!(BlockKind::Generic, kind_for(1000));

        let block = create(1000, 15).unwrap();
        assert_eq!((1000, 15), (block.id(), block.data()));
        assert!(create(1000, 16).is_err());
    }

    #[test]
    fn stairs_share_a_codec() {
        for id in [53, 67, 108, 109, 114, 128, 134, 135, 136, 156, 163, 164, 180, 203] {
            assert_eq!(BlockKind::Stair, kind_for(id));
        }
    }
}
