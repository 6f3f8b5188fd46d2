//! Move requests: where a piece comes from and where it goes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Coord, GameError, ReserveIndex};

/// Where the moved piece is taken from.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Top of one of the current player's reserve stacks.
    Reserve(ReserveIndex),
    /// The exposed piece of a board cell.
    BoardCell(Coord),
}

impl Origin {
    pub fn reserve(idx: u8) -> Result<Origin, GameError> {
        ReserveIndex::new(idx).map(Origin::Reserve)
    }

    pub fn cell(x: u8, y: u8) -> Result<Origin, GameError> {
        Coord::new(x, y).map(Origin::BoardCell)
    }
}

impl From<ReserveIndex> for Origin {
    fn from(idx: ReserveIndex) -> Self {
        Origin::Reserve(idx)
    }
}

impl From<Coord> for Origin {
    fn from(c: Coord) -> Self {
        Origin::BoardCell(c)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Reserve(idx) => write!(f, "{idx}"),
            Origin::BoardCell(c) => write!(f, "{c}"),
        }
    }
}

/// Parses a reserve stack number (`"2"`) or a board cell (`"1,3"`).
impl FromStr for Origin {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(',') {
            return s.parse::<Coord>().map(Origin::BoardCell);
        }
        let idx = s.trim().parse::<u8>().map_err(|_| GameError::Parse {
            input: s.to_string(),
            reason: "expected a stack number or x,y",
        })?;
        Origin::reserve(idx)
    }
}

/// A move in the game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Move {
    pub origin: Origin,
    pub destination: Coord,
}

impl Move {
    pub fn new(origin: impl Into<Origin>, destination: Coord) -> Move {
        Move { origin: origin.into(), destination }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            Origin::Reserve(idx) => write!(f, "reserve {idx} -> {}", self.destination),
            Origin::BoardCell(from) => write!(f, "{from} -> {}", self.destination),
        }
    }
}
