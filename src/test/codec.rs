use std::collections::HashSet;

use crate::{create, kind_for, BlockKind, Codec, Door, Error, RedstoneTorch, Torch};

use super::all_legal_blocks;

#[test]
fn legal_values_round_trip() {
    for id in 0..=255u16 {
        for data in 0..=15u8 {
            match create(id, data) {
                Ok(block) => {
                    assert_eq!(id, block.id());
                    assert_eq!(data, block.data(), "id {} data {}", id, data);
                    assert_eq!(kind_for(id), block.kind());
                }
                Err(Error::DataOutOfRange { id: eid, data: edata }) => {
                    assert_eq!((id, data), (eid, edata));
                }
                Err(e) => panic!("id {} data {}: unexpected {}", id, data, e),
            }
        }
    }
}

#[test]
fn wide_values_rejected() {
    for id in 0..=255u16 {
        for data in 16..=255u8 {
            let res = create(id, data);
            assert!(
                matches!(res, Err(Error::DataOutOfRange { .. })),
                "id {} data {}",
                id,
                data
            );
        }
    }
}

#[test]
fn foreign_ids_rejected() {
    assert!(matches!(
        Door::decode(1, 0),
        Err(Error::DataOutOfRange { id: 1, data: 0 })
    ));
    assert!(BlockKind::Door.decode(1, 0).is_err());
    assert!(RedstoneTorch::decode(50, 1).is_err());
    assert!(Torch::decode(76, 1).is_err());
    assert!(BlockKind::Generic.decode(53, 0).is_err());

    let kinds: HashSet<BlockKind> = (0..=255u16).map(kind_for).collect();
    for id in 0..=255u16 {
        for kind in kinds.iter().filter(|k| **k != kind_for(id)) {
            for data in 0..=15u8 {
                assert!(
                    matches!(kind.decode(id, data), Err(Error::DataOutOfRange { .. })),
                    "{:?} accepted id {} data {}",
                    kind,
                    id,
                    data
                );
            }
        }
    }
}

#[test]
fn decode_errors_are_recoverable() {
    let err = create(66, 10).unwrap_err();
    assert!(err.is_recoverable());
}

#[test]
fn door_scenario() {
    let door = create(64, 0).unwrap();
    assert_eq!(BlockKind::Door, door.kind());
    assert_eq!(0, door.data());
}

#[test]
fn cache_keys_do_not_depend_on_data_alone() {
    // Cactus ignores its age when drawn.
    let young = create(81, 0).unwrap();
    let old = create(81, 15).unwrap();
    assert_eq!(young.cache_key(), old.cache_key());

    let wheat = create(59, 0).unwrap();
    let ripe = create(59, 7).unwrap();
    assert_ne!(wheat.cache_key(), ripe.cache_key());
}

#[test]
fn cache_keys_are_named() {
    for block in all_legal_blocks() {
        let key = block.cache_key();
        assert!(key.starts_with("minecraft:"), "{}", key);
        assert_eq!(key, block.describe().to_string());
    }
}

#[test]
fn connectable_keys_include_shape() {
    let wire = create(55, 3).unwrap();
    let plain = wire.cache_key();
    let shaped = wire.cache_key_with(&crate::DirectionSet::new([crate::Direction::North]));
    assert_ne!(plain, shaped);

    let stone = create(1, 0).unwrap();
    assert_eq!(
        stone.cache_key(),
        stone.cache_key_with(&crate::DirectionSet::new([crate::Direction::North]))
    );
}
