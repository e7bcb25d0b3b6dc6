//! 2-D integer grid coordinates and the four cardinal directions.

use std::fmt;

/// A signed `(row, col)` grid coordinate.
///
/// `Position` hashes via an elegant pairing of its two axes remapped to the
/// naturals, so it can be used as a `HashMap`/`HashSet` key without the
/// overhead of hashing a `(i32, i32)` tuple through `SipHash`'s full
/// byte-oriented path.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The position one step away in `direction`.
    #[inline]
    pub fn moved(self, direction: Direction) -> Position {
        let (dr, dc) = direction.offset();
        Position::new(self.row + dr, self.col + dc)
    }

    /// Manhattan distance to `other`. Only meaningful as a lower bound —
    /// actual path distance depends on discovered walls.
    #[inline]
    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl std::hash::Hash for Position {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        elegant_pair(zigzag(self.row), zigzag(self.col)).hash(state);
    }
}

/// Map a signed integer to a unique unsigned one: 0, -1, 1, -2, 2, ... ->
/// 0, 1, 2, 3, 4, ...
#[inline]
fn zigzag(n: i32) -> u32 {
    if n >= 0 { 2 * n as u32 } else { 2 * (-n) as u32 - 1 }
}

/// Szudzik's elegant pairing function: bijects `(a, b): (u32, u32)` onto a
/// single `u64` with no collisions, avoiding `SipHash`'s per-byte mixing for
/// a value that is already two small integers.
///
/// Source: <http://szudzik.com/ElegantPairing.pdf>
#[inline]
fn elegant_pair(a: u32, b: u32) -> u64 {
    let (a, b) = (a as u64, b as u64);
    if a >= b { a * a + a + b } else { a + b * b }
}

/// The four cardinal directions the agent can move in.
///
/// Iteration order over all four (`Direction::ALL`) is fixed as
/// `[North, East, South, West]` — the planner's search primitives depend on
/// this exact order for deterministic results.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Fixed traversal order used by every search primitive.
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::East, Direction::South, Direction::West];

    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        };
        f.write_str(s)
    }
}
