//! Blocks whose data value is a single number or flag.

use std::fmt::Display;

use bit_field::BitField;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use super::{check, check_field, DyeColour};
use crate::{BlockKind, Codec, Description, Error, Result};

/// A block with no interpretation of its data value. Every id without a
/// dedicated category decodes to this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generic {
    id: u16,
    data: u8,
}

impl Generic {
    pub fn air() -> Self {
        Self { id: 0, data: 0 }
    }
}

impl Codec for Generic {
    const KIND: BlockKind = BlockKind::Generic;

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
        let d = Description::of(self.id);
        if self.data == 0 {
            d
        } else {
            d.with("data", self.data)
        }
    }
}

/// Blocks whose data value picks one of a fixed list of sub-types, like the
/// stone types or the flower species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variant {
    id: u16,
    data: u8,
}

impl Variant {
    /// Names of the sub-types of `id`, indexed by data value.
    pub fn variants(id: u16) -> &'static [&'static str] {
        match id {
            1 => &[
                "stone",
                "granite",
                "smooth_granite",
                "diorite",
                "smooth_diorite",
                "andesite",
                "smooth_andesite",
            ],
            3 => &["dirt", "coarse_dirt", "podzol"],
            5 => &["oak", "spruce", "birch", "jungle", "acacia", "dark_oak"],
            12 => &["sand", "red_sand"],
            19 => &["dry", "wet"],
            24 | 179 => &["default", "chiseled", "smooth"],
            31 => &["dead_bush", "tall_grass", "fern"],
            38 => &[
                "poppy",
                "blue_orchid",
                "allium",
                "houstonia",
                "red_tulip",
                "orange_tulip",
                "white_tulip",
                "pink_tulip",
                "oxeye_daisy",
            ],
            97 => &[
                "stone",
                "cobblestone",
                "stone_brick",
                "mossy_brick",
                "cracked_brick",
                "chiseled_brick",
            ],
            98 => &["default", "mossy", "cracked", "chiseled"],
            168 => &["prismarine", "prismarine_bricks", "dark_prismarine"],
            _ => &[],
        }
    }

    pub fn variant(&self) -> u8 {
        self.data
    }

    pub fn variant_name(&self) -> &'static str {
        Self::variants(self.id)
            .get(self.data as usize)
            .copied()
            .unwrap_or("default")
    }

    pub fn set_variant(&mut self, variant: u8) -> Result<()> {
        let count = Self::variants(self.id).len();
        if (variant as usize) < count {
            self.data = variant;
            Ok(())
        } else {
            Err(Error::field("variant", variant))
        }
    }
}

impl Codec for Variant {
    const KIND: BlockKind = BlockKind::Variant;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, (data as usize) < Self::variants(id).len())?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn describe(&self) -> Description {
        Description::of(self.id).with("variant", self.variant_name())
    }
}

/// Wool, stained glass, stained clay, carpet and concrete: the whole data
/// value is the dye colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colored {
    id: u16,
    data: u8,
}

impl Colored {
    pub fn colour(&self) -> DyeColour {
        DyeColour::from_nibble(self.data)
    }

    pub fn set_colour(&mut self, colour: DyeColour) {
        self.data = colour.into();
    }
}

impl Codec for Colored {
    const KIND: BlockKind = BlockKind::Colored;

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
        Description::of(self.id).with("color", self.colour())
    }
}

/// Water and lava, flowing or still.
///
/// Bits 0-2 hold the level, bit 3 is set for falling liquid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Liquid {
    id: u16,
    data: u8,
}

impl Liquid {
    pub fn is_lava(&self) -> bool {
        self.id == 10 || self.id == 11
    }

    pub fn is_flowing(&self) -> bool {
        self.id == 8 || self.id == 10
    }

    /// Re-tag between the flowing and still ids, keeping the level bits.
    pub fn set_flowing(&mut self, flowing: bool) {
        self.id = match (self.is_lava(), flowing) {
            (false, true) => 8,
            (false, false) => 9,
            (true, true) => 10,
            (true, false) => 11,
        };
    }

    pub fn level(&self) -> u8 {
        self.data.get_bits(0..3)
    }

    pub fn set_level(&mut self, level: u8) -> Result<()> {
        let level = check_field("level", level, 7)?;
        self.data.set_bits(0..3, level);
        Ok(())
    }

    pub fn is_falling(&self) -> bool {
        self.data.get_bit(3)
    }

    pub fn set_falling(&mut self, falling: bool) {
        self.data.set_bit(3, falling);
    }
}

impl Codec for Liquid {
    const KIND: BlockKind = BlockKind::Liquid;

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
            .with("level", self.level())
            .with("falling", self.is_falling())
    }
}

/// Blocks that only store an age: fire, cactus, sugar cane, chorus flowers
/// and frosted ice. The maximum age depends on the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Aged {
    id: u16,
    data: u8,
}

impl Aged {
    pub fn max_age_for(id: u16) -> Option<u8> {
        match id {
            51 | 81 | 83 => Some(15),
            200 => Some(5),
            212 => Some(3),
            _ => None,
        }
    }

    pub fn max_age(&self) -> u8 {
        Self::max_age_for(self.id).unwrap_or(15)
    }

    pub fn age(&self) -> u8 {
        self.data
    }

    pub fn set_age(&mut self, age: u8) -> Result<()> {
        self.data = check_field("age", age, self.max_age())?;
        Ok(())
    }
}

impl Codec for Aged {
    const KIND: BlockKind = BlockKind::Aged;

    fn decode(id: u16, data: u8) -> Result<Self> {
        let max = Self::max_age_for(id).unwrap_or(15);
        check(Self::KIND, id, data, data <= max)?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn describe(&self) -> Description {
        // Fire, cactus and cane look the same at every age.
        match self.id {
            200 | 212 => Description::of(self.id).with("age", self.age()),
            _ => Description::of(self.id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Farmland {
    id: u16,
    data: u8,
}

impl Farmland {
    pub fn moisture(&self) -> u8 {
        self.data
    }

    pub fn set_moisture(&mut self, moisture: u8) -> Result<()> {
        self.data = check_field("moisture", moisture, 7)?;
        Ok(())
    }

    pub fn is_wet(&self) -> bool {
        self.data > 0
    }
}

impl Codec for Farmland {
    const KIND: BlockKind = BlockKind::Farmland;

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

    fn describe(&self) -> Description {
        Description::of(self.id).with("wet", self.is_wet())
    }
}

/// Snow layers, 1 to 8 layers stored as 0 to 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnowLayer {
    id: u16,
    data: u8,
}

impl SnowLayer {
    pub fn layers(&self) -> u8 {
        self.data + 1
    }

    pub fn set_layers(&mut self, layers: u8) -> Result<()> {
        if (1..=8).contains(&layers) {
            self.data = layers - 1;
            Ok(())
        } else {
            Err(Error::field("layers", layers))
        }
    }
}

impl Codec for SnowLayer {
    const KIND: BlockKind = BlockKind::SnowLayer;

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

    fn describe(&self) -> Description {
        Description::of(self.id).with("layers", self.layers())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cake {
    id: u16,
    data: u8,
}

impl Cake {
    pub fn bites(&self) -> u8 {
        self.data
    }

    pub fn set_bites(&mut self, bites: u8) -> Result<()> {
        self.data = check_field("bites", bites, 6)?;
        Ok(())
    }
}

impl Codec for Cake {
    const KIND: BlockKind = BlockKind::Cake;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 6)?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn describe(&self) -> Description {
        Description::of(self.id).with("bites", self.bites())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cauldron {
    id: u16,
    data: u8,
}

impl Cauldron {
    pub fn level(&self) -> u8 {
        self.data
    }

    pub fn set_level(&mut self, level: u8) -> Result<()> {
        self.data = check_field("level", level, 3)?;
        Ok(())
    }
}

impl Codec for Cauldron {
    const KIND: BlockKind = BlockKind::Cauldron;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 3)?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn describe(&self) -> Description {
        Description::of(self.id).with("level", self.level())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jukebox {
    id: u16,
    data: u8,
}

impl Jukebox {
    pub fn has_record(&self) -> bool {
        self.data == 1
    }

    pub fn set_has_record(&mut self, has_record: bool) {
        self.data = has_record as u8;
    }
}

impl Codec for Jukebox {
    const KIND: BlockKind = BlockKind::Jukebox;

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
        Description::of(self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum StructureMode {
    Save = 0,
    Load = 1,
    Corner = 2,
    Data = 3,
}

impl Display for StructureMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            StructureMode::Save => "save",
            StructureMode::Load => "load",
            StructureMode::Corner => "corner",
            StructureMode::Data => "data",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StructureBlock {
    id: u16,
    data: u8,
}

impl StructureBlock {
    pub fn mode(&self) -> StructureMode {
        StructureMode::try_from(self.data).unwrap_or(StructureMode::Save)
    }

    pub fn set_mode(&mut self, mode: StructureMode) {
        self.data = mode.into();
    }
}

impl Codec for StructureBlock {
    const KIND: BlockKind = BlockKind::StructureBlock;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, StructureMode::try_from(data).is_ok())?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn describe(&self) -> Description {
        Description::of(self.id).with("mode", self.mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_domain_follows_table() {
        assert!(Variant::decode(1, 6).is_ok());
        assert!(Variant::decode(1, 7).is_err());
        assert!(Variant::decode(38, 8).is_ok());
        assert!(Variant::decode(38, 9).is_err());

        let mut dirt = Variant::decode(3, 2).unwrap();
        assert_eq!("podzol", dirt.variant_name());
        assert!(dirt.set_variant(3).is_err());
        assert_eq!(2, dirt.encode());
    }

    #[test]
    fn liquid_retag_keeps_level() {
        let mut water = Liquid::decode(9, 0b1011).unwrap();
        water.set_flowing(true);
        assert_eq!(8, water.id());
        assert_eq!(0b1011, water.encode());
        water.set_flowing(false);
        assert_eq!(9, water.id());
    }

    #[test]
    fn liquid_level_does_not_touch_falling() {
        let mut lava = Liquid::decode(10, 8).unwrap();
        for level in 0..=7 {
            lava.set_level(level).unwrap();
            assert!(lava.is_falling());
            assert_eq!(level, lava.level());
        }
        assert!(lava.set_level(8).is_err());
    }

    #[test]
    fn aged_max_depends_on_id() {
        assert!(Aged::decode(51, 15).is_ok());
        assert!(Aged::decode(200, 5).is_ok());
        assert!(Aged::decode(200, 6).is_err());
        assert!(Aged::decode(212, 4).is_err());

        let mut ice = Aged::decode(212, 0).unwrap();
        assert!(matches!(
            ice.set_age(4),
            Err(Error::InvalidFieldValue { field: "age", value: 4 })
        ));
    }

    #[test]
    fn snow_layers_are_offset_by_one() {
        let mut snow = SnowLayer::decode(78, 0).unwrap();
        assert_eq!(1, snow.layers());
        snow.set_layers(8).unwrap();
        assert_eq!(7, snow.encode());
        assert!(snow.set_layers(0).is_err());
        assert!(snow.set_layers(9).is_err());
    }

    #[test]
    fn structure_modes() {
        let block = StructureBlock::decode(255, 3).unwrap();
        assert_eq!(StructureMode::Data, block.mode());
        assert!(StructureBlock::decode(255, 4).is_err());
    }
}
