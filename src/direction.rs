use std::fmt::Display;

/// A compass direction, or one of the vertical directions.
///
/// The sixteen horizontal directions form a rose, starting at north and
/// going clockwise. Most blocks only use the four cardinal points, some also
/// use up and down. Signs, banners and mob heads use the full rose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    None,
    Up,
    Down,
    North,
    NorthNorthEast,
    NorthEast,
    EastNorthEast,
    East,
    EastSouthEast,
    SouthEast,
    SouthSouthEast,
    South,
    SouthSouthWest,
    SouthWest,
    WestSouthWest,
    West,
    WestNorthWest,
    NorthWest,
    NorthNorthWest,
}

const ROSE: [Direction; 16] = [
    Direction::North,
    Direction::NorthNorthEast,
    Direction::NorthEast,
    Direction::EastNorthEast,
    Direction::East,
    Direction::EastSouthEast,
    Direction::SouthEast,
    Direction::SouthSouthEast,
    Direction::South,
    Direction::SouthSouthWest,
    Direction::SouthWest,
    Direction::WestSouthWest,
    Direction::West,
    Direction::WestNorthWest,
    Direction::NorthWest,
    Direction::NorthNorthWest,
];

impl Direction {
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position of this direction on the 16 point rose, north being 0 and
    /// counting clockwise. `None` for the non-horizontal directions.
    pub fn rose_index(self) -> Option<u8> {
        ROSE.iter().position(|d| *d == self).map(|i| i as u8)
    }

    /// Inverse of `rose_index`, wrapping modulo 16.
    pub fn from_rose(index: u8) -> Direction {
        ROSE[(index % 16) as usize]
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::None => Direction::None,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            d => match d.rose_index() {
                Some(i) => Direction::from_rose(i + 8),
                None => d,
            },
        }
    }

    /// Turn a horizontal direction by 90 degrees. Vertical directions and
    /// `None` have no quarter turn; blocks that can face them decide for
    /// themselves what rotating means.
    pub fn rotate_quarter(self, clockwise: bool) -> Option<Direction> {
        let i = self.rose_index()?;
        let step = if clockwise { 4 } else { 12 };
        Some(Direction::from_rose(i + step))
    }

    pub fn is_cardinal(self) -> bool {
        Direction::CARDINALS.contains(&self)
    }

    pub fn is_horizontal(self) -> bool {
        self.rose_index().is_some()
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    fn name(self) -> &'static str {
        match self {
            Direction::None => "none",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::North => "north",
            Direction::NorthNorthEast => "north_north_east",
            Direction::NorthEast => "north_east",
            Direction::EastNorthEast => "east_north_east",
            Direction::East => "east",
            Direction::EastSouthEast => "east_south_east",
            Direction::SouthEast => "south_east",
            Direction::SouthSouthEast => "south_south_east",
            Direction::South => "south",
            Direction::SouthSouthWest => "south_south_west",
            Direction::SouthWest => "south_west",
            Direction::WestSouthWest => "west_south_west",
            Direction::West => "west",
            Direction::WestNorthWest => "west_north_west",
            Direction::NorthWest => "north_west",
            Direction::NorthNorthWest => "north_north_west",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of directions a multi-directional block covers, eg the sides a
/// vine hangs on. Never empty: the absence of any direction is the set
/// `{None}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectionSet(Vec<Direction>);

impl DirectionSet {
    pub fn none() -> Self {
        Self(vec![Direction::None])
    }

    /// Build a set, dropping duplicates. `None` is discarded when any real
    /// direction is present.
    pub fn new(dirs: impl IntoIterator<Item = Direction>) -> Self {
        let mut v: Vec<_> = dirs.into_iter().filter(|d| *d != Direction::None).collect();
        v.sort_unstable();
        v.dedup();

        if v.is_empty() {
            Self::none()
        } else {
            Self(v)
        }
    }

    pub fn is_none(&self) -> bool {
        self.0 == [Direction::None]
    }

    pub fn contains(&self, d: Direction) -> bool {
        self.0.contains(&d)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        // Always holds at least `None`.
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.0.iter().copied()
    }

    /// Turn every horizontal member by a quarter. Vertical members and
    /// `None` stay where they are.
    pub fn rotated(&self, clockwise: bool) -> Self {
        Self::new(
            self.iter()
                .map(|d| d.rotate_quarter(clockwise).unwrap_or(d)),
        )
    }
}

impl Display for DirectionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut sep = "";
        for d in self.iter() {
            write!(f, "{}{}", sep, d)?;
            sep = "+";
        }
        Ok(())
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Axis of pillar-like blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// East-west.
    X,
    Y,
    /// North-south.
    Z,
}

impl Axis {
    /// A quarter turn swaps the horizontal axes, Y is unaffected.
    pub fn rotated(self) -> Axis {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
            Axis::Y => Axis::Y,
        }
    }

    pub fn of(direction: Direction) -> Option<Axis> {
        match direction {
            Direction::Up | Direction::Down => Some(Axis::Y),
            Direction::East | Direction::West => Some(Axis::X),
            Direction::North | Direction::South => Some(Axis::Z),
            _ => None,
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rose_round_trips() {
        for i in 0..16 {
            assert_eq!(Some(i), Direction::from_rose(i).rose_index());
        }
        assert_eq!(None, Direction::Up.rose_index());
    }

    #[test]
    fn opposite() {
        assert_eq!(Direction::South, Direction::North.opposite());
        assert_eq!(Direction::SouthWest, Direction::NorthEast.opposite());
        assert_eq!(Direction::WestNorthWest, Direction::EastSouthEast.opposite());
        assert_eq!(Direction::Down, Direction::Up.opposite());
        assert_eq!(Direction::None, Direction::None.opposite());
    }

    #[test]
    fn quarter_turns() {
        assert_eq!(Some(Direction::East), Direction::North.rotate_quarter(true));
        assert_eq!(Some(Direction::West), Direction::North.rotate_quarter(false));
        assert_eq!(
            Some(Direction::SouthEast),
            Direction::NorthEast.rotate_quarter(true)
        );
        assert_eq!(
            Some(Direction::EastSouthEast),
            Direction::NorthNorthEast.rotate_quarter(true)
        );
        assert_eq!(None, Direction::Up.rotate_quarter(true));
        assert_eq!(None, Direction::None.rotate_quarter(false));
    }

    #[test]
    fn four_quarter_turns_is_identity() {
        for i in 0..16 {
            let d = Direction::from_rose(i);
            let mut r = d;
            for _ in 0..4 {
                r = r.rotate_quarter(true).unwrap();
            }
            assert_eq!(d, r);
            assert_eq!(
                Some(d),
                d.rotate_quarter(true).unwrap().rotate_quarter(false)
            );
        }
    }

    #[test]
    fn set_normalises() {
        let set = DirectionSet::new([
            Direction::West,
            Direction::None,
            Direction::North,
            Direction::West,
        ]);
        assert_eq!(2, set.len());
        assert!(!set.contains(Direction::None));

        let empty = DirectionSet::new([]);
        assert!(empty.is_none());
        assert_eq!("none", empty.to_string());
    }

    #[test]
    fn set_rotates_members() {
        let set = DirectionSet::new([Direction::Up, Direction::North, Direction::West]);
        let turned = set.rotated(true);
        assert_eq!(
            DirectionSet::new([Direction::Up, Direction::East, Direction::North]),
            turned
        );
    }
}
