use crate::{
    Anvil, AnvilDamage, Axis, Bed, Cocoa, Codec, CommandBlock, CommandMode, Comparator,
    Direction, Dispenser, Door, EndPortalFrame, FenceGate, Hopper, Leaves, Lever, LeverMount,
    Liquid, Log, MobHead, Observer, Piston, PodSize, PoweredRail, RailShape, Repeater, Stair,
    Trapdoor, TreeType, Tripwire, TripwireHook,
};

const HORIZONTAL: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

const SIX_WAYS: [Direction; 6] = [
    Direction::Down,
    Direction::Up,
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

const TREES: [TreeType; 6] = [
    TreeType::Oak,
    TreeType::Spruce,
    TreeType::Birch,
    TreeType::Jungle,
    TreeType::Acacia,
    TreeType::DarkOak,
];

/// Run `set` on every legal state of block `id` and check that no bit outside
/// `mask` moved, and that the result still decodes.
fn only_touches<T: Codec>(id: u16, mask: u8, set: impl Fn(&mut T)) {
    let mut legal = 0;
    for data in 0..=15 {
        let mut block = match T::decode(id, data) {
            Ok(b) => b,
            Err(_) => continue,
        };
        set(&mut block);

        let after = block.encode();
        assert_eq!(
            data & !mask,
            after & !mask,
            "{:?} id {}: data {:#06b} became {:#06b}",
            T::KIND,
            id,
            data,
            after
        );
        assert!(T::decode(block.id(), after).is_ok(), "{:?} {}", T::KIND, after);
        legal += 1;
    }
    assert!(legal > 0, "no legal data for id {}", id);
}

/// `only_touches` for both values of a flag.
fn flag_touches<T: Codec>(id: u16, mask: u8, set: fn(&mut T, bool)) {
    for value in [false, true] {
        only_touches::<T>(id, mask, |b| set(b, value));
    }
}

#[test]
fn repeater_delay_keeps_facing() {
    for data in 0..=15 {
        let mut r = Repeater::decode(93, data).unwrap();
        let facing = r.direction();
        for delay in 1..=4 {
            r.set_delay(delay).unwrap();
            assert_eq!(facing, r.direction());
            assert_eq!(data & 0b11, r.encode() & 0b11);
            assert_eq!(delay, r.delay());
        }
    }
}

#[test]
fn repeater_facing_keeps_delay() {
    let mut r = Repeater::decode(93, 0b1100).unwrap();
    for d in HORIZONTAL {
        r.set_direction(d).unwrap();
        assert_eq!(4, r.delay());
        assert_eq!(d, r.direction());
    }
}

#[test]
fn door_open_is_one_bit() {
    for data in 0..=7 {
        let mut door = Door::decode(64, data).unwrap();
        door.set_open(true);
        assert_eq!(data | 0b100, door.encode());
        door.set_open(false);
        assert_eq!(data & !0b100, door.encode());
    }
}

#[test]
fn cocoa_size_keeps_facing() {
    for data in 0..=3 {
        let mut pod = Cocoa::decode(127, data).unwrap();
        for size in [PodSize::Small, PodSize::Medium, PodSize::Large] {
            pod.set_size(size);
            assert_eq!(data, pod.encode() & 0b11);
            assert_eq!(size, pod.size());
        }
    }

    let pod = Cocoa::decode(127, 11).unwrap();
    assert_eq!(PodSize::Large, pod.size());
    assert_eq!(Direction::West, pod.direction());
    assert_eq!(11, pod.encode());
}

#[test]
fn piston_extension_and_facing_independent() {
    let mut piston = Piston::decode(33, 2).unwrap();
    piston.set_extended(true);
    assert_eq!(10, piston.encode());

    piston.set_direction(Direction::Up).unwrap();
    assert!(piston.is_extended());
    assert_eq!(9, piston.encode());

    piston.set_extended(false);
    assert_eq!(Direction::Up, piston.direction());
    assert_eq!(1, piston.encode());
}

#[test]
fn stair_half_keeps_facing() {
    for data in 0..=3 {
        let mut stair = Stair::decode(53, data).unwrap();
        let facing = stair.direction();
        stair.set_upside_down(true);
        assert_eq!(facing, stair.direction());
        assert_eq!(data + 4, stair.encode());
    }
}

#[test]
fn flags_keep_other_fields() {
    flag_touches(69, 0b1000, Lever::set_thrown);
    flag_touches(26, 0b0100, Bed::set_occupied);
    flag_touches(26, 0b1000, Bed::set_head);
    flag_touches(149, 0b0100, Comparator::set_subtracting);
    flag_touches(149, 0b1000, Comparator::set_powered);
    flag_touches(149, 0, Comparator::set_lit);
    flag_touches(96, 0b0100, Trapdoor::set_open);
    flag_touches(96, 0b1000, Trapdoor::set_top);
    flag_touches(107, 0b0100, FenceGate::set_open);
    flag_touches(120, 0b0100, EndPortalFrame::set_eye);
    flag_touches(131, 0b0100, TripwireHook::set_connected);
    flag_touches(131, 0b1000, TripwireHook::set_activated);
    flag_touches(132, 0b0001, Tripwire::set_powered);
    flag_touches(132, 0b0010, Tripwire::set_suspended);
    flag_touches(132, 0b0100, Tripwire::set_attached);
    flag_touches(132, 0b1000, Tripwire::set_disarmed);
    flag_touches(18, 0b0100, Leaves::set_permanent);
    flag_touches(161, 0b1000, Leaves::set_check_decay);
    flag_touches(8, 0b1000, Liquid::set_falling);
    flag_touches(11, 0, Liquid::set_flowing);
    flag_touches(27, 0b1000, PoweredRail::set_powered);
    flag_touches(23, 0b1000, Dispenser::set_triggered);
    flag_touches(154, 0b1000, Hopper::set_disabled);
    flag_touches(137, 0b1000, CommandBlock::set_conditional);
    flag_touches(218, 0b1000, Observer::set_powered);
    flag_touches(144, 0b1000, MobHead::set_no_drop);
}

#[test]
fn directions_keep_other_fields() {
    for d in HORIZONTAL {
        only_touches(69, 0b0111, |l: &mut Lever| l.set_direction(LeverMount::Wall, d).unwrap());
        only_touches(26, 0b0011, |b: &mut Bed| b.set_direction(d).unwrap());
        only_touches(149, 0b0011, |c: &mut Comparator| c.set_direction(d).unwrap());
        only_touches(96, 0b0011, |t: &mut Trapdoor| t.set_direction(d).unwrap());
        only_touches(107, 0b0011, |g: &mut FenceGate| g.set_direction(d).unwrap());
        only_touches(145, 0b0011, |a: &mut Anvil| a.set_direction(d).unwrap());
        only_touches(120, 0b0011, |f: &mut EndPortalFrame| f.set_direction(d).unwrap());
        only_touches(131, 0b0011, |h: &mut TripwireHook| h.set_direction(d).unwrap());
        only_touches(144, 0b0111, |h: &mut MobHead| h.set_on_wall(d).unwrap());
        only_touches(144, 0b0111, |h: &mut MobHead| h.set_on_floor(d).unwrap());
        only_touches(27, 0b0111, |r: &mut PoweredRail| {
            r.set_shape(RailShape::Ascending, d).unwrap()
        });
    }

    for (mount, d) in [
        (LeverMount::Ground, Direction::South),
        (LeverMount::Ground, Direction::East),
        (LeverMount::Ceiling, Direction::South),
        (LeverMount::Ceiling, Direction::East),
    ] {
        only_touches(69, 0b0111, |l: &mut Lever| l.set_direction(mount, d).unwrap());
    }

    for d in [Direction::North, Direction::West] {
        only_touches(27, 0b0111, |r: &mut PoweredRail| {
            r.set_shape(RailShape::Flat, d).unwrap()
        });
    }

    for d in SIX_WAYS {
        only_touches(137, 0b0111, |c: &mut CommandBlock| c.set_direction(d).unwrap());
        only_touches(218, 0b0111, |o: &mut Observer| o.set_direction(d).unwrap());
        only_touches(23, 0b0111, |b: &mut Dispenser| b.set_direction(d).unwrap());
        if d != Direction::Up {
            only_touches(154, 0b0111, |h: &mut Hopper| h.set_direction(d).unwrap());
        }
    }
}

#[test]
fn values_keep_other_fields() {
    for damage in [
        AnvilDamage::Intact,
        AnvilDamage::SlightlyDamaged,
        AnvilDamage::VeryDamaged,
    ] {
        only_touches(145, 0b1100, |a: &mut Anvil| a.set_damage(damage));
    }

    for tree in TREES {
        only_touches(17, 0b0011, |l: &mut Log| l.set_tree(tree));
        only_touches(162, 0b0011, |l: &mut Log| l.set_tree(tree));
        only_touches(18, 0b0011, |l: &mut Leaves| l.set_tree(tree));
        only_touches(161, 0b0011, |l: &mut Leaves| l.set_tree(tree));
        only_touches(107, 0, |g: &mut FenceGate| g.set_tree(tree));
    }

    for axis in [Some(Axis::X), Some(Axis::Y), Some(Axis::Z), None] {
        only_touches(17, 0b1100, |l: &mut Log| l.set_axis(axis));
    }

    for level in 0..=7 {
        only_touches(9, 0b0111, |l: &mut Liquid| l.set_level(level).unwrap());
    }

    for mode in [CommandMode::Impulse, CommandMode::Repeating, CommandMode::Chain] {
        only_touches(137, 0, |c: &mut CommandBlock| c.set_mode(mode));
    }
}
