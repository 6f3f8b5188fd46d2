//! Players, piece sizes and the pieces themselves.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::GameError;

/// Player identifier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert from a player number (1 or 2).
    #[inline]
    pub fn from_number(n: u8) -> Option<Player> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The player number, 1 or 2.
    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based index for per-player arrays.
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize - 1
    }

    /// Both players, in turn order.
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::One, Player::Two].into_iter()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl Serialize for Player {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for Player {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = u8::deserialize(deserializer)?;
        Player::from_number(n).ok_or_else(|| D::Error::custom(format!("player must be 1 or 2, got {n}")))
    }
}

/// Piece size, smallest to largest.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Size {
    Tiny = 0,
    Small = 1,
    Medium = 2,
    Large = 3,
}

impl Size {
    /// Check if this size can cover another size. Equal sizes never stack.
    #[inline]
    pub fn can_gobble(self, other: Size) -> bool {
        (self as u8) > (other as u8)
    }

    /// Convert from index (0-3) to Size.
    #[inline]
    pub fn from_index(idx: u8) -> Option<Size> {
        match idx {
            0 => Some(Size::Tiny),
            1 => Some(Size::Small),
            2 => Some(Size::Medium),
            3 => Some(Size::Large),
            _ => None,
        }
    }

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Get all sizes as an iterator, smallest first.
    pub fn all() -> impl Iterator<Item = Size> {
        [Size::Tiny, Size::Small, Size::Medium, Size::Large].into_iter()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl Serialize for Size {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.index())
    }
}

impl<'de> Deserialize<'de> for Size {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = u8::deserialize(deserializer)?;
        Size::from_index(n).ok_or_else(|| D::Error::custom(format!("size must be 0-3, got {n}")))
    }
}

/// A gobblet: one player's piece of one size.
///
/// Pieces are plain values. Ordering for stacking purposes only looks at
/// size; use [`Piece::larger_than`] rather than `==` when the owner must be
/// ignored.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "PieceRecord")]
pub struct Piece {
    size: Size,
    owner: Player,
}

#[derive(Deserialize)]
struct PieceRecord {
    size: u8,
    owner: u8,
}

impl TryFrom<PieceRecord> for Piece {
    type Error = GameError;

    fn try_from(record: PieceRecord) -> Result<Self, Self::Error> {
        Piece::new(record.size, record.owner)
    }
}

impl Piece {
    /// Build a piece from raw numbers, e.g. as received from a caller.
    pub fn new(size: u8, owner: u8) -> Result<Piece, GameError> {
        match (Size::from_index(size), Player::from_number(owner)) {
            (Some(size), Some(owner)) => Ok(Piece { size, owner }),
            _ => Err(GameError::InvalidPiece { size, owner }),
        }
    }

    /// Build a piece from already-checked parts.
    #[inline]
    pub const fn of(size: Size, owner: Player) -> Piece {
        Piece { size, owner }
    }

    #[inline]
    pub fn size(self) -> Size {
        self.size
    }

    #[inline]
    pub fn owner(self) -> Player {
        self.owner
    }

    /// Strictly larger, whoever owns either piece.
    #[inline]
    pub fn larger_than(self, other: Piece) -> bool {
        self.size.can_gobble(other.size)
    }

    #[inline]
    pub fn same_size(self, other: Piece) -> bool {
        self.size == other.size
    }
}
