use std::fmt::Display;

use bit_field::BitField;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use super::{check, check_field, TreeType, NESW, SWNE};
use crate::{Axis, BlockKind, Codec, Description, Direction, DirectionSet, Error, ItemStack, Result};

/// Block id and tree bits for the log/leaves families, which keep the first
/// four trees under one id and the later two under another.
fn tree_to_id(tree: TreeType, first: u16, second: u16) -> (u16, u8) {
    match tree {
        TreeType::Acacia => (second, 0),
        TreeType::DarkOak => (second, 1),
        t => (first, t.into()),
    }
}

fn tree_from_id(id: u16, second: u16, bits: u8) -> TreeType {
    match (id == second, bits) {
        (true, 0) => TreeType::Acacia,
        (true, _) => TreeType::DarkOak,
        (false, b) => TreeType::try_from(b).unwrap_or(TreeType::Oak),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sapling {
    id: u16,
    data: u8,
}

impl Sapling {
    pub fn tree(&self) -> TreeType {
        TreeType::try_from(self.data.get_bits(0..3)).unwrap_or(TreeType::Oak)
    }

    pub fn set_tree(&mut self, tree: TreeType) {
        self.data.set_bits(0..3, tree.into());
    }

    /// Saplings grow in two steps, the second one turns them into a tree.
    pub fn is_ready(&self) -> bool {
        self.data.get_bit(3)
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.data.set_bit(3, ready);
    }
}

impl Codec for Sapling {
    const KIND: BlockKind = BlockKind::Sapling;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 15 && data.get_bits(0..3) <= 5)?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn describe(&self) -> Description {
        Description::of(self.id).with("type", self.tree())
    }
}

/// Wood logs. Bits 0-1 select the tree, bits 2-3 the axis, with the fourth
/// value meaning bark on all sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Log {
    id: u16,
    data: u8,
}

impl Log {
    pub fn tree(&self) -> TreeType {
        tree_from_id(self.id, 162, self.data.get_bits(0..2))
    }

    /// Change the tree. Acacia and dark oak live under a different id, the
    /// axis bits are kept either way.
    pub fn set_tree(&mut self, tree: TreeType) {
        let (id, bits) = tree_to_id(tree, 17, 162);
        self.id = id;
        self.data.set_bits(0..2, bits);
    }

    /// The axis of the log, or `None` for bark on all six sides.
    pub fn axis(&self) -> Option<Axis> {
        match self.data.get_bits(2..4) {
            0 => Some(Axis::Y),
            1 => Some(Axis::X),
            2 => Some(Axis::Z),
            _ => None,
        }
    }

    pub fn set_axis(&mut self, axis: Option<Axis>) {
        let bits = match axis {
            Some(Axis::Y) => 0,
            Some(Axis::X) => 1,
            Some(Axis::Z) => 2,
            None => 3,
        };
        self.data.set_bits(2..4, bits);
    }
}

impl Codec for Log {
    const KIND: BlockKind = BlockKind::Log;

    fn decode(id: u16, data: u8) -> Result<Self> {
        let legal = match id {
            162 => data <= 15 && data.get_bits(0..2) <= 1,
            _ => data <= 15,
        };
        check(Self::KIND, id, data, legal)?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn turn(&mut self, _clockwise: bool) {
        self.set_axis(self.axis().map(Axis::rotated));
    }

    fn describe(&self) -> Description {
        let axis = match self.axis() {
            Some(axis) => axis.to_string(),
            None => "none".to_string(),
        };
        Description::of(self.id)
            .with("variant", self.tree())
            .with("axis", axis)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Leaves {
    id: u16,
    data: u8,
}

impl Leaves {
    pub fn tree(&self) -> TreeType {
        tree_from_id(self.id, 161, self.data.get_bits(0..2))
    }

    pub fn set_tree(&mut self, tree: TreeType) {
        let (id, bits) = tree_to_id(tree, 18, 161);
        self.id = id;
        self.data.set_bits(0..2, bits);
    }

    /// Placed by a player, never decays.
    pub fn is_permanent(&self) -> bool {
        self.data.get_bit(2)
    }

    pub fn set_permanent(&mut self, permanent: bool) {
        self.data.set_bit(2, permanent);
    }

    pub fn check_decay(&self) -> bool {
        self.data.get_bit(3)
    }

    pub fn set_check_decay(&mut self, check: bool) {
        self.data.set_bit(3, check);
    }
}

impl Codec for Leaves {
    const KIND: BlockKind = BlockKind::Leaves;

    fn decode(id: u16, data: u8) -> Result<Self> {
        let legal = match id {
            161 => data <= 15 && data.get_bits(0..2) <= 1,
            _ => data <= 15,
        };
        check(Self::KIND, id, data, legal)?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn describe(&self) -> Description {
        Description::of(self.id).with("variant", self.tree())
    }
}

/// Wheat, carrots, potatoes and beetroot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crops {
    id: u16,
    data: u8,
}

impl Crops {
    pub fn max_growth_for(id: u16) -> u8 {
        match id {
            207 => 3,
            _ => 7,
        }
    }

    pub fn growth(&self) -> u8 {
        self.data
    }

    pub fn set_growth(&mut self, growth: u8) -> Result<()> {
        self.data = check_field("growth", growth, Self::max_growth_for(self.id))?;
        Ok(())
    }

    pub fn is_ripe(&self) -> bool {
        self.data == Self::max_growth_for(self.id)
    }
}

impl Codec for Crops {
    const KIND: BlockKind = BlockKind::Crops;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= Self::max_growth_for(id))?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn describe(&self) -> Description {
        Description::of(self.id).with("age", self.growth())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StemFruit {
    Pumpkin,
    Melon,
}

impl StemFruit {
    pub fn id(self) -> u16 {
        match self {
            StemFruit::Pumpkin => 104,
            StemFruit::Melon => 105,
        }
    }

    pub fn from_id(id: u16) -> Option<StemFruit> {
        match id {
            104 => Some(StemFruit::Pumpkin),
            105 => Some(StemFruit::Melon),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stem {
    id: u16,
    data: u8,
}

impl Stem {
    pub fn fruit(&self) -> StemFruit {
        StemFruit::from_id(self.id).unwrap_or(StemFruit::Pumpkin)
    }

    pub fn set_fruit(&mut self, fruit: StemFruit) {
        self.id = fruit.id();
    }

    pub fn growth(&self) -> u8 {
        self.data
    }

    pub fn set_growth(&mut self, growth: u8) -> Result<()> {
        self.data = check_field("growth", growth, 7)?;
        Ok(())
    }
}

impl Codec for Stem {
    const KIND: BlockKind = BlockKind::Stem;

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
        Description::of(self.id).with("age", self.growth())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetherWart {
    id: u16,
    data: u8,
}

impl NetherWart {
    pub fn growth(&self) -> u8 {
        self.data
    }

    pub fn set_growth(&mut self, growth: u8) -> Result<()> {
        self.data = check_field("growth", growth, 3)?;
        Ok(())
    }
}

impl Codec for NetherWart {
    const KIND: BlockKind = BlockKind::NetherWart;

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
        Description::of(self.id).with("age", self.growth())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum PodSize {
    Small = 0,
    Medium = 1,
    Large = 2,
}

impl Display for PodSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PodSize::Small => "small",
            PodSize::Medium => "medium",
            PodSize::Large => "large",
        })
    }
}

/// Cocoa pods. Bits 0-1 give the direction (N, E, S, W), bits 2-3 the size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cocoa {
    id: u16,
    data: u8,
}

impl Cocoa {
    pub fn direction(&self) -> Direction {
        NESW.read(self.data, 0..2)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        NESW.set(Self::KIND, &mut self.data, 0..2, direction)
    }

    pub fn size(&self) -> PodSize {
        PodSize::try_from(self.data.get_bits(2..4)).unwrap_or(PodSize::Small)
    }

    pub fn set_size(&mut self, size: PodSize) {
        self.data.set_bits(2..4, size.into());
    }
}

impl Codec for Cocoa {
    const KIND: BlockKind = BlockKind::Cocoa;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 11)?;
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
            .with("age", self.size())
    }
}

const VINE_BITS: [(usize, Direction); 4] = [
    (0, Direction::South),
    (1, Direction::West),
    (2, Direction::North),
    (3, Direction::East),
];

/// Vines, one bit per side they hang on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vine {
    id: u16,
    data: u8,
}

impl Vine {
    pub fn directions(&self) -> DirectionSet {
        VINE_BITS
            .iter()
            .filter(|(bit, _)| self.data.get_bit(*bit))
            .map(|(_, d)| *d)
            .collect()
    }

    pub fn set_directions(&mut self, directions: &DirectionSet) -> Result<()> {
        let mut data = 0u8;
        for d in directions.iter().filter(|d| *d != Direction::None) {
            match VINE_BITS.iter().find(|(_, vd)| *vd == d) {
                Some((bit, _)) => {
                    data.set_bit(*bit, true);
                }
                None => return Err(Error::direction(Self::KIND, d)),
            }
        }
        self.data = data;
        Ok(())
    }
}

impl Codec for Vine {
    const KIND: BlockKind = BlockKind::Vine;

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
        let turned = self.directions().rotated(clockwise);
        // Cardinals rotate onto cardinals, so this cannot fail.
        let _ = self.set_directions(&turned);
    }

    fn describe(&self) -> Description {
        Description::of(self.id).with("sides", self.directions())
    }
}

/// Faces of a huge mushroom cap piece, indexed by data value 1 to 9.
const CAP_PIECES: [&[Direction]; 9] = {
    use Direction::*;
    [
        &[Up, North, West],
        &[Up, North],
        &[Up, North, East],
        &[Up, West],
        &[Up],
        &[Up, East],
        &[Up, South, West],
        &[Up, South],
        &[Up, South, East],
    ]
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MushroomPart {
    /// Pores on every side.
    Inside,
    /// Cap on top and on the sides given by `cap_faces`.
    Cap,
    Stem,
    CapAll,
    StemAll,
}

impl Display for MushroomPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MushroomPart::Inside => "inside",
            MushroomPart::Cap => "cap",
            MushroomPart::Stem => "stem",
            MushroomPart::CapAll => "all_outside",
            MushroomPart::StemAll => "all_stem",
        })
    }
}

/// Pieces of huge brown and red mushrooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HugeMushroom {
    id: u16,
    data: u8,
}

impl HugeMushroom {
    pub fn is_red(&self) -> bool {
        self.id == 100
    }

    pub fn set_red(&mut self, red: bool) {
        self.id = if red { 100 } else { 99 };
    }

    pub fn part(&self) -> MushroomPart {
        match self.data {
            0 => MushroomPart::Inside,
            1..=9 => MushroomPart::Cap,
            10 => MushroomPart::Stem,
            14 => MushroomPart::CapAll,
            _ => MushroomPart::StemAll,
        }
    }

    /// Set one of the parts that have no direction. Use `set_cap_faces` for
    /// the cap pieces.
    pub fn set_part(&mut self, part: MushroomPart) -> Result<()> {
        self.data = match part {
            MushroomPart::Inside => 0,
            MushroomPart::Stem => 10,
            MushroomPart::CapAll => 14,
            MushroomPart::StemAll => 15,
            MushroomPart::Cap => return Err(Error::field("part", 1)),
        };
        Ok(())
    }

    /// The faces covered with cap. `{None}` unless this is a cap piece.
    pub fn cap_faces(&self) -> DirectionSet {
        match self.data {
            1..=9 => DirectionSet::new(CAP_PIECES[self.data as usize - 1].iter().copied()),
            _ => DirectionSet::none(),
        }
    }

    /// Make this a cap piece covering `faces`. The set must be the top plus
    /// at most one side or one corner pair.
    pub fn set_cap_faces(&mut self, faces: &DirectionSet) -> Result<()> {
        let position = CAP_PIECES
            .iter()
            .position(|piece| DirectionSet::new(piece.iter().copied()) == *faces);

        match position {
            Some(i) => {
                self.data = i as u8 + 1;
                Ok(())
            }
            None => {
                let bad = faces
                    .iter()
                    .find(|d| !d.is_cardinal() && *d != Direction::Up)
                    .unwrap_or(Direction::None);
                Err(Error::direction(Self::KIND, bad))
            }
        }
    }
}

impl Codec for HugeMushroom {
    const KIND: BlockKind = BlockKind::HugeMushroom;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, matches!(data, 0..=10 | 14 | 15))?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn turn(&mut self, clockwise: bool) {
        if self.part() == MushroomPart::Cap {
            let turned = self.cap_faces().rotated(clockwise);
            // Rotating a valid piece gives another valid piece.
            let _ = self.set_cap_faces(&turned);
        }
    }

    fn describe(&self) -> Description {
        let d = Description::of(self.id).with("part", self.part());
        match self.part() {
            MushroomPart::Cap => d.with("faces", self.cap_faces()),
            _ => d,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum TallPlant {
    Sunflower = 0,
    Lilac = 1,
    DoubleGrass = 2,
    LargeFern = 3,
    RoseBush = 4,
    Peony = 5,
}

impl Display for TallPlant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TallPlant::Sunflower => "sunflower",
            TallPlant::Lilac => "syringa",
            TallPlant::DoubleGrass => "double_grass",
            TallPlant::LargeFern => "double_fern",
            TallPlant::RoseBush => "double_rose",
            TallPlant::Peony => "paeonia",
        })
    }
}

/// Two block tall plants. The lower half stores the plant, the upper half
/// sets bit 3 and keeps a facing in bits 0-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoublePlant {
    id: u16,
    data: u8,
}

impl DoublePlant {
    pub fn is_upper(&self) -> bool {
        self.data.get_bit(3)
    }

    /// The plant, known only for the lower half.
    pub fn plant(&self) -> Option<TallPlant> {
        if self.is_upper() {
            None
        } else {
            TallPlant::try_from(self.data).ok()
        }
    }

    pub fn set_lower(&mut self, plant: TallPlant) {
        self.data = plant.into();
    }

    pub fn set_upper(&mut self, facing: Direction) -> Result<()> {
        let mut data = 8;
        SWNE.set(Self::KIND, &mut data, 0..2, facing)?;
        self.data = data;
        Ok(())
    }

    /// Facing of the upper half, `None` for the lower half.
    pub fn facing(&self) -> Direction {
        if self.is_upper() {
            SWNE.read(self.data, 0..2)
        } else {
            Direction::None
        }
    }
}

impl Codec for DoublePlant {
    const KIND: BlockKind = BlockKind::DoublePlant;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, matches!(data, 0..=5 | 8..=11))?;
        Ok(Self { id, data })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn turn(&mut self, clockwise: bool) {
        if self.is_upper() {
            SWNE.turn(&mut self.data, 0..2, clockwise);
        }
    }

    fn describe(&self) -> Description {
        match self.plant() {
            Some(plant) => Description::of(self.id)
                .with("half", "lower")
                .with("variant", plant),
            None => Description::of(self.id).with("half", "upper"),
        }
    }
}

/// What a flower pot holds, by legacy data value.
const POT_CONTENTS: [&str; 14] = [
    "empty",
    "rose",
    "dandelion",
    "oak_sapling",
    "spruce_sapling",
    "birch_sapling",
    "jungle_sapling",
    "mushroom_red",
    "mushroom_brown",
    "cactus",
    "dead_bush",
    "fern",
    "acacia_sapling",
    "dark_oak_sapling",
];

/// Flower pots. Old worlds store the contents in the data value, newer ones in
/// the tile entity, which takes precedence when present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlowerPot {
    id: u16,
    data: u8,
    planted: Option<ItemStack>,
}

impl FlowerPot {
    pub fn contents(&self) -> &'static str {
        POT_CONTENTS[self.data as usize]
    }

    pub fn set_contents(&mut self, contents: u8) -> Result<()> {
        self.data = check_field("contents", contents, 13)?;
        Ok(())
    }

    pub fn planted(&self) -> Option<ItemStack> {
        self.planted
    }

    pub fn set_planted(&mut self, item: Option<ItemStack>) {
        self.planted = item.filter(|i| !i.is_empty());
    }
}

impl Codec for FlowerPot {
    const KIND: BlockKind = BlockKind::FlowerPot;

    fn decode(id: u16, data: u8) -> Result<Self> {
        check(Self::KIND, id, data, data <= 13)?;
        Ok(Self {
            id,
            data,
            planted: None,
        })
    }

    fn id(&self) -> u16 {
        self.id
    }

    fn encode(&self) -> u8 {
        self.data
    }

    fn describe(&self) -> Description {
        match self.planted {
            Some(item) => Description::of(self.id)
                .with("item", item.id)
                .with("item_data", item.damage),
            None => Description::of(self.id).with("contents", self.contents()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::{East, North, NorthEast, South, Up, West};

    #[test]
    fn log_retag_keeps_axis() {
        let mut log = Log::decode(17, 0b1010).unwrap();
        assert_eq!(TreeType::Birch, log.tree());
        assert_eq!(Some(Axis::Z), log.axis());

        log.set_tree(TreeType::DarkOak);
        assert_eq!(162, log.id());
        assert_eq!(0b1001, log.encode());

        log.set_tree(TreeType::Birch);
        assert_eq!(17, log.id());
        assert_eq!(0b1010, log.encode());
    }

    #[test]
    fn second_log_id_only_has_two_trees() {
        assert!(Log::decode(162, 0b0101).is_ok());
        assert!(Log::decode(162, 0b0110).is_err());
        assert!(Leaves::decode(161, 3).is_err());
    }

    #[test]
    fn log_axis_turns() {
        let mut log = Log::decode(17, 0b0100).unwrap();
        log.turn(true);
        assert_eq!(Some(Axis::Z), log.axis());
        let mut bark = Log::decode(17, 0b1100).unwrap();
        bark.turn(true);
        assert_eq!(0b1100, bark.encode());
    }

    #[test]
    fn cocoa_scenario() {
        let pod = Cocoa::decode(127, 11).unwrap();
        assert_eq!(PodSize::Large, pod.size());
        assert_eq!(West, pod.direction());
        assert_eq!(11, pod.encode());
        assert!(Cocoa::decode(127, 12).is_err());
    }

    #[test]
    fn cocoa_rejects_diagonal() {
        let mut pod = Cocoa::decode(127, 0).unwrap();
        assert!(matches!(
            pod.set_direction(NorthEast),
            Err(Error::UnsupportedDirection { .. })
        ));
        assert_eq!(0, pod.encode());
    }

    #[test]
    fn vine_sides() {
        let vine = Vine::decode(106, 0).unwrap();
        assert!(vine.directions().is_none());

        let mut vine = Vine::decode(106, 0b0101).unwrap();
        assert_eq!(DirectionSet::new([South, North]), vine.directions());
        vine.turn(true);
        assert_eq!(DirectionSet::new([West, East]), vine.directions());
        assert_eq!(0b1010, vine.encode());
    }

    #[test]
    fn mushroom_cap_turns_through_corners() {
        let mut cap = HugeMushroom::decode(99, 1).unwrap();
        cap.turn(true);
        assert_eq!(3, cap.encode());
        cap.turn(true);
        assert_eq!(9, cap.encode());
        cap.turn(true);
        assert_eq!(7, cap.encode());
        cap.turn(true);
        assert_eq!(1, cap.encode());

        let mut stem = HugeMushroom::decode(100, 10).unwrap();
        stem.turn(false);
        assert_eq!(10, stem.encode());
        assert!(HugeMushroom::decode(100, 11).is_err());
    }

    #[test]
    fn mushroom_rejects_bad_cap() {
        let mut cap = HugeMushroom::decode(99, 5).unwrap();
        assert!(cap
            .set_cap_faces(&DirectionSet::new([Up, North, South]))
            .is_err());
        assert_eq!(5, cap.encode());
    }

    #[test]
    fn double_plant_halves() {
        let lower = DoublePlant::decode(175, 4).unwrap();
        assert_eq!(Some(TallPlant::RoseBush), lower.plant());

        let mut upper = DoublePlant::decode(175, 10).unwrap();
        assert_eq!(None, upper.plant());
        assert_eq!(North, upper.facing());
        upper.turn(true);
        assert_eq!(11, upper.encode());
        assert!(DoublePlant::decode(175, 6).is_err());
    }

    #[test]
    fn crops_limits() {
        assert!(Crops::decode(59, 7).is_ok());
        assert!(Crops::decode(207, 4).is_err());
        let mut beet = Crops::decode(207, 3).unwrap();
        assert!(beet.is_ripe());
        assert!(beet.set_growth(4).is_err());
    }
}
