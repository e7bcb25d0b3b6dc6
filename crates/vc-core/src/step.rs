//! The `Step` type — the planner's per-tick output.

use std::fmt;
use std::fmt::Write as _;

use crate::Direction;

/// Everything a planner may emit for one tick: a cardinal move, staying put
/// (to clean or charge), or declaring the mission finished.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    North,
    East,
    South,
    West,
    Stay,
    Finish,
}

impl Step {
    /// The single character used in the per-simulation output artifact
    /// (`N`, `E`, `S`, `W`, `s`, `F`).
    pub fn as_char(self) -> char {
        match self {
            Step::North => 'N',
            Step::East => 'E',
            Step::South => 'S',
            Step::West => 'W',
            Step::Stay => 's',
            Step::Finish => 'F',
        }
    }

    /// `true` for the four directional variants.
    #[inline]
    pub fn is_direction(self) -> bool {
        Direction::try_from(self).is_ok()
    }
}

impl From<Direction> for Step {
    fn from(d: Direction) -> Self {
        match d {
            Direction::North => Step::North,
            Direction::East => Step::East,
            Direction::South => Step::South,
            Direction::West => Step::West,
        }
    }
}

/// Only the four cardinal variants convert back to a `Direction`;
/// `Stay`/`Finish` carry no direction.
impl TryFrom<Step> for Direction {
    type Error = ();

    fn try_from(step: Step) -> Result<Self, Self::Error> {
        match step {
            Step::North => Ok(Direction::North),
            Step::East => Ok(Direction::East),
            Step::South => Ok(Direction::South),
            Step::West => Ok(Direction::West),
            Step::Stay | Step::Finish => Err(()),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.as_char())
    }
}
