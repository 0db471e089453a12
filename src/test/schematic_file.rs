use std::io::Write;

use fastnbt::ByteArray;
use flate2::{write::GzEncoder, Compression};

use crate::{
    create, Block, BlockKind, Direction, DirectionSet, Error, ItemId, ItemStack, RawItem, RawOwner,
    RawTileEntity, Schematic,
};

fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(bytes).unwrap();
    enc.finish().unwrap()
}

fn round_trip(schematic: &Schematic) -> Schematic {
    let bytes = fastnbt::to_bytes(schematic).unwrap();
    Schematic::from_bytes(&gzip(&bytes)).unwrap()
}

fn item(slot: i8, id: ItemId, count: i8) -> RawItem {
    RawItem {
        slot,
        id,
        damage: 0,
        count,
    }
}

#[test]
fn gzipped_and_raw() {
    let s = Schematic::new(2, 1, 1, &[1, 4], &[3, 0]).unwrap();
    let raw = fastnbt::to_bytes(&s).unwrap();

    let plain = Schematic::from_bytes(&raw).unwrap();
    let zipped = Schematic::from_bytes(&gzip(&raw)).unwrap();
    assert_eq!((2, 1, 1), (zipped.width, zipped.height, zipped.length));
    assert_eq!(plain.raw_block(0), zipped.raw_block(0));
    assert_eq!((1, 3), zipped.raw_block(0));
    assert!(zipped.add_blocks.is_none());
}

#[test]
fn from_reader() {
    let s = Schematic::new(1, 1, 1, &[7], &[0]).unwrap();
    let bytes = gzip(&fastnbt::to_bytes(&s).unwrap());
    let read = Schematic::from_reader(bytes.as_slice()).unwrap();
    assert_eq!((7, 0), read.raw_block(0));
}

#[test]
fn index_order() {
    // 2 wide, 2 high, 3 long.
    let ids: Vec<u16> = (1..=12).collect();
    let data = vec![0; 12];
    let s = Schematic::new(2, 2, 3, &ids, &data).unwrap();

    assert_eq!(0, s.index(0, 0, 0));
    assert_eq!(1, s.index(1, 0, 0));
    assert_eq!(2, s.index(0, 0, 1));
    assert_eq!(6, s.index(0, 1, 0));
    assert_eq!(11, s.index(1, 1, 2));
}

#[test]
fn high_ids_use_add_blocks() {
    let s = Schematic::new(3, 1, 1, &[300, 1, 0x4FF], &[0, 0, 0]).unwrap();
    let s = round_trip(&s);

    let add = s.add_blocks.as_ref().unwrap();
    assert_eq!(2, add.len());
    assert_eq!(0x01, add[0] as u8);
    assert_eq!(0x04, add[1] as u8);

    assert_eq!((300, 0), s.raw_block(0));
    assert_eq!((1, 0), s.raw_block(1));
    assert_eq!((0x4FF, 0), s.raw_block(2));

    let decoded = s.decode().unwrap();
    assert_eq!(BlockKind::Generic, decoded.block(0, 0, 0).unwrap().kind());
    assert_eq!(300, decoded.block(0, 0, 0).unwrap().id());
}

#[test]
fn signed_bytes_are_unsigned_ids() {
    let s = Schematic::new(1, 1, 1, &[255], &[2]).unwrap();
    assert_eq!(-1, s.blocks[0]);
    assert_eq!((255, 2), s.raw_block(0));
    assert_eq!(BlockKind::StructureBlock, s.decode().unwrap().blocks()[0].kind());
}

#[test]
fn faulty_blocks_become_air() {
    // A rail with data 12, a ladder facing down and a good torch.
    let s = Schematic::new(3, 1, 1, &[66, 65, 50], &[12, 0, 5]).unwrap();
    let decoded = s.decode().unwrap();

    assert_eq!(2, decoded.faulty_blocks());
    assert!(decoded.block(0, 0, 0).unwrap().is_air());
    assert!(decoded.block(1, 0, 0).unwrap().is_air());
    assert_eq!(BlockKind::Torch, decoded.block(2, 0, 0).unwrap().kind());
}

#[test]
fn size_mismatch() {
    let mut s = Schematic::new(2, 1, 1, &[1, 1], &[0, 0]).unwrap();
    s.width = 3;
    let bytes = fastnbt::to_bytes(&s).unwrap();
    assert!(matches!(
        Schematic::from_bytes(&bytes),
        Err(Error::InvalidSchematic(_))
    ));
    assert!(matches!(s.decode(), Err(Error::InvalidSchematic(_))));

    s.width = 2;
    s.add_blocks = Some(ByteArray::new(vec![]));
    assert!(matches!(s.decode(), Err(Error::InvalidSchematic(_))));
}

#[test]
fn ids_wider_than_12_bits() {
    assert!(matches!(
        Schematic::new(1, 1, 1, &[5000], &[0]),
        Err(Error::InvalidSchematic(_))
    ));

    let s = Schematic::new(1, 1, 1, &[0xFFF], &[0]).unwrap();
    assert_eq!((0xFFF, 0), s.raw_block(0));

    let mut decoded = s.decode().unwrap();
    *decoded.block_mut(0, 0, 0).unwrap() = create(5000, 0).unwrap();
    assert!(matches!(
        decoded.to_schematic(),
        Err(Error::InvalidSchematic(_))
    ));
}

#[test]
fn not_nbt() {
    assert!(Schematic::from_bytes(&[1, 2, 3]).is_err());
    assert!(Schematic::from_bytes(&gzip(&[1, 2, 3])).is_err());
}

#[test]
fn tile_entities_merge() {
    let mut s = Schematic::new(4, 1, 1, &[54, 63, 144, 154], &[2, 0, 1, 0]).unwrap();
    s.tile_entities = vec![
        RawTileEntity {
            id: "Chest".to_string(),
            items: vec![
                item(0, ItemId::Numeric(264), 3),
                item(5, ItemId::Named("minecraft:stone".to_string()), 64),
                item(6, ItemId::Named("minecraft:not_a_block".to_string()), 1),
            ],
            ..Default::default()
        },
        RawTileEntity {
            id: "Sign".to_string(),
            x: 1,
            text1: Some("north".to_string()),
            text3: Some("sign".to_string()),
            ..Default::default()
        },
        RawTileEntity {
            id: "Skull".to_string(),
            x: 2,
            skull_type: Some(3),
            rot: Some(12),
            owner: Some(RawOwner {
                name: Some("Alex".to_string()),
            }),
            ..Default::default()
        },
        // A hopper only has 5 slots.
        RawTileEntity {
            id: "Hopper".to_string(),
            x: 3,
            items: vec![item(7, ItemId::Numeric(1), 1)],
            ..Default::default()
        },
    ];

    let decoded = round_trip(&s).decode().unwrap();
    assert_eq!(0, decoded.faulty_blocks());
    assert_eq!(1, decoded.dropped_tile_entities());

    match decoded.block(0, 0, 0).unwrap() {
        Block::Chest(c) => {
            let slots = c.items().slots();
            assert_eq!(ItemStack::new(264, 0, 3), slots[0]);
            assert_eq!(ItemStack::new(1, 0, 64), slots[5]);
            assert!(slots[1].is_empty());
            assert!(slots[6].is_empty());
        }
        b => panic!("expected a chest, got {:?}", b),
    }

    match decoded.block(1, 0, 0).unwrap() {
        Block::StandingSign(sign) => {
            assert_eq!(["north", "", "sign", ""], sign.lines().clone())
        }
        b => panic!("expected a sign, got {:?}", b),
    }

    match decoded.block(2, 0, 0).unwrap() {
        Block::MobHead(head) => {
            assert_eq!(Some("Alex"), head.owner());
            assert_eq!(Direction::East, head.direction());
        }
        b => panic!("expected a head, got {:?}", b),
    }

    match decoded.block(3, 0, 0).unwrap() {
        Block::Hopper(h) => assert!(h.items().is_empty()),
        b => panic!("expected a hopper, got {:?}", b),
    }
}

#[test]
fn tile_entity_outside_is_dropped() {
    let mut s = Schematic::new(1, 1, 1, &[54], &[2]).unwrap();
    s.tile_entities.push(RawTileEntity {
        id: "Chest".to_string(),
        x: 4,
        ..Default::default()
    });
    assert_eq!(1, s.decode().unwrap().dropped_tile_entities());
}

#[test]
fn fence_connections() {
    // Fence, fence, fence gate, stone, fence.
    let s = Schematic::new(5, 1, 1, &[85, 85, 107, 1, 85], &[0, 0, 0, 0, 0]).unwrap();
    let decoded = s.decode().unwrap();

    assert_eq!(
        DirectionSet::new([Direction::East]),
        decoded.connections(0, 0, 0)
    );
    assert_eq!(
        DirectionSet::new([Direction::West, Direction::East]),
        decoded.connections(1, 0, 0)
    );
    assert!(decoded.connections(2, 0, 0).is_none());
    assert!(decoded.connections(4, 0, 0).is_none());
}

#[test]
fn layer_text_rows() {
    let s = Schematic::new(2, 1, 2, &[1, 85, 0, 85], &[0, 0, 0, 0]).unwrap();
    let text = s.decode().unwrap().layer_text(0);
    let rows: Vec<_> = text.lines().collect();

    assert_eq!(2, rows.len());
    assert!(rows[0].starts_with("minecraft:stone|variant="));
    assert!(rows[0].ends_with("minecraft:fence|connections=south"));
    assert!(rows[1].starts_with("minecraft:air|\t"));
}

#[test]
fn turned_schematic() {
    // Oak stairs facing east next to stone, along x.
    let s = Schematic::new(2, 1, 1, &[53, 1], &[0, 0]).unwrap();
    let turned = s.decode().unwrap().turned(true);

    assert_eq!((1, 1, 2), turned.size());
    let stair = turned.block(0, 0, 0).unwrap();
    assert_eq!((53, 2), (stair.id(), stair.data()));
    assert_eq!(1, turned.block(0, 0, 1).unwrap().id());

    let back = turned.turned(false);
    assert_eq!(s.decode().unwrap().blocks(), back.blocks());
}

#[test]
fn re_encode() {
    let mut s = Schematic::new(3, 1, 1, &[61, 68, 400], &[3, 4, 0]).unwrap();
    s.tile_entities.push(RawTileEntity {
        id: "Furnace".to_string(),
        items: vec![item(2, ItemId::Numeric(263), 8)],
        ..Default::default()
    });
    s.tile_entities.push(RawTileEntity {
        id: "Sign".to_string(),
        x: 1,
        text2: Some("hi".to_string()),
        ..Default::default()
    });
    let decoded = s.decode().unwrap();

    let encoded = decoded.to_schematic().unwrap();
    assert_eq!(2, encoded.tile_entities.len());
    assert_eq!(400, encoded.raw_block(2).0);

    let again = round_trip(&encoded).decode().unwrap();
    assert_eq!(decoded.blocks(), again.blocks());
}
