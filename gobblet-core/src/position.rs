//! Checked board coordinates and reserve stack numbers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GameError;

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 4;

/// Number of reserve stacks each player starts with.
pub const RESERVE_STACKS: u8 = 3;

/// A cell on the 4x4 board. `x` is the column, `y` the row.
///
/// Layout (as rendered, row 3 on top):
/// ```text
///   3 | 12 13 14 15
///   2 |  8  9 10 11
///   1 |  4  5  6  7
///   0 |  0  1  2  3
///        0  1  2  3
/// ```
/// The numbers are the bit index used by the visibility masks.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 2]", into = "[u8; 2]")]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Create a coordinate, failing if either axis is outside 0-3.
    pub fn new(x: u8, y: u8) -> Result<Coord, GameError> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Ok(Coord { x, y })
        } else {
            Err(GameError::OutOfBounds { x, y })
        }
    }

    /// For tables of known-good coordinates.
    pub(crate) const fn at(x: u8, y: u8) -> Coord {
        Coord { x, y }
    }

    #[inline]
    pub fn x(self) -> u8 {
        self.x
    }

    #[inline]
    pub fn y(self) -> u8 {
        self.y
    }

    /// Bit index (0-15), row-major from the bottom-left corner.
    #[inline]
    pub fn index(self) -> usize {
        (self.y * BOARD_SIZE + self.x) as usize
    }

    /// Iterate over all 16 cells, row 0 first.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord { x, y }))
    }
}

impl TryFrom<[u8; 2]> for Coord {
    type Error = GameError;

    fn try_from([x, y]: [u8; 2]) -> Result<Self, Self::Error> {
        Coord::new(x, y)
    }
}

impl From<Coord> for [u8; 2] {
    fn from(c: Coord) -> Self {
        [c.x, c.y]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Parses `"x,y"`; spaces around either number are ignored.
impl FromStr for Coord {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason| GameError::Parse { input: s.to_string(), reason };
        let (x, y) = s.split_once(',').ok_or_else(|| parse_err("expected two numbers as x,y"))?;
        let x = x.trim().parse::<u8>().map_err(|_| parse_err("x is not a number"))?;
        let y = y.trim().parse::<u8>().map_err(|_| parse_err("y is not a number"))?;
        Coord::new(x, y)
    }
}

/// One of a player's three reserve stacks (0, 1 or 2).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ReserveIndex(u8);

impl ReserveIndex {
    pub fn new(idx: u8) -> Result<ReserveIndex, GameError> {
        if idx < RESERVE_STACKS {
            Ok(ReserveIndex(idx))
        } else {
            Err(GameError::InvalidOrigin(idx))
        }
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Iterate over the three stack numbers.
    pub fn all() -> impl Iterator<Item = ReserveIndex> {
        (0..RESERVE_STACKS).map(ReserveIndex)
    }
}

impl TryFrom<u8> for ReserveIndex {
    type Error = GameError;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        ReserveIndex::new(idx)
    }
}

impl From<ReserveIndex> for u8 {
    fn from(idx: ReserveIndex) -> Self {
        idx.0
    }
}

impl fmt::Display for ReserveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
