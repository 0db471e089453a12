use crate::{attach_tile_entity, create, Block, BlockKind, Error, ItemStack, SkullType, TileEntity};

fn items(n: usize) -> Vec<ItemStack> {
    (0..n).map(|i| ItemStack::new(1 + i as u16, 0, 1)).collect()
}

#[test]
fn chest_with_too_many_items() {
    let chest = create(54, 2).unwrap();
    let res = attach_tile_entity(chest, TileEntity::Items(items(30)));
    assert!(matches!(
        res,
        Err(Error::TooManyItems {
            kind: BlockKind::Chest,
            slots: 27,
            given: 30
        })
    ));
}

#[test]
fn chest_pads_to_capacity() {
    let chest = create(54, 2).unwrap();
    let chest = attach_tile_entity(chest, TileEntity::Items(items(10))).unwrap();

    match chest {
        Block::Chest(c) => {
            let slots = c.items().slots();
            assert_eq!(27, slots.len());
            assert_eq!(10, slots[9].id);
            assert!(slots[10..].iter().all(|s| *s == ItemStack::EMPTY));
        }
        _ => panic!("expected a chest"),
    }
}

#[test]
fn capacities() {
    for (id, data, capacity) in [(23, 0, 9), (158, 0, 9), (154, 0, 5), (61, 2, 3), (117, 0, 4)] {
        let block = create(id, data).unwrap();
        assert!(attach_tile_entity(block.clone(), TileEntity::Items(items(capacity))).is_ok());
        assert!(
            attach_tile_entity(block, TileEntity::Items(items(capacity + 1))).is_err(),
            "id {}",
            id
        );
    }
}

#[test]
fn failed_merge_leaves_block() {
    let mut hopper = create(154, 0).unwrap();
    hopper.attach(TileEntity::Items(items(2))).unwrap();
    let before = hopper.clone();

    let err = hopper.attach(TileEntity::Items(items(6))).unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(before, hopper);
}

#[test]
fn sign_text() {
    let sign = create(63, 0).unwrap();
    let sign = attach_tile_entity(
        sign,
        TileEntity::Text(vec!["a".to_string(), "b".to_string()]),
    )
    .unwrap();

    match sign {
        Block::StandingSign(s) => assert_eq!(["a", "b", "", ""], s.lines().clone()),
        _ => panic!("expected a sign"),
    }

    let wall = create(68, 3).unwrap();
    let five = TileEntity::Text(vec![String::new(); 5]);
    assert!(matches!(
        attach_tile_entity(wall, five),
        Err(Error::WrongSlotCount { .. })
    ));
}

#[test]
fn head_owner() {
    let head = create(144, 1).unwrap();
    let head = attach_tile_entity(
        head,
        TileEntity::Head {
            skull_type: SkullType::Player,
            rotation: 12,
            owner: Some("Steve".to_string()),
        },
    )
    .unwrap();

    match &head {
        Block::MobHead(h) => {
            assert_eq!(SkullType::Player, h.skull_type());
            assert_eq!(Some("Steve"), h.owner());
            assert_eq!(crate::Direction::East, h.direction());
        }
        _ => panic!("expected a head"),
    }
    assert!(head.cache_key().contains("type=player"));
}

#[test]
fn head_rotation_out_of_range() {
    let head = create(144, 1).unwrap();
    let res = attach_tile_entity(
        head,
        TileEntity::Head {
            skull_type: SkullType::Zombie,
            rotation: 16,
            owner: None,
        },
    );
    assert!(matches!(res, Err(Error::InvalidFieldValue { .. })));
}

#[test]
fn command_and_pot() {
    let cmd = create(137, 0).unwrap();
    let cmd = attach_tile_entity(
        cmd,
        TileEntity::Command {
            command: "say hi".to_string(),
            name: Some(String::new()),
        },
    )
    .unwrap();
    match cmd {
        Block::CommandBlock(c) => {
            assert_eq!("say hi", c.command());
            assert_eq!(None, c.custom_name());
        }
        _ => panic!("expected a command block"),
    }

    let pot = create(140, 0).unwrap();
    let pot = attach_tile_entity(pot, TileEntity::Plant(ItemStack::new(38, 2, 1))).unwrap();
    match pot {
        Block::FlowerPot(p) => assert_eq!(Some(ItemStack::new(38, 2, 1)), p.planted()),
        _ => panic!("expected a flower pot"),
    }
}

#[test]
fn payload_for_wrong_block() {
    let furnace = create(61, 2).unwrap();
    let res = attach_tile_entity(furnace, TileEntity::Text(vec![]));
    assert!(matches!(
        res,
        Err(Error::TileEntityMismatch {
            kind: BlockKind::Furnace
        })
    ));
}
