//! Error type shared by every fallible engine operation.

use thiserror::Error;

use crate::{Coord, Player, ReserveIndex, Size};

/// Why an operation on the game was refused.
///
/// Every variant is recoverable: the engine validates before it mutates, so
/// a returned error always means the game state is exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Size outside 0-3 or owner other than 1 or 2.
    #[error("invalid piece: size {size}, owner {owner} (size must be 0-3, owner 1 or 2)")]
    InvalidPiece { size: u8, owner: u8 },

    #[error("({x}, {y}) is outside the 4x4 board")]
    OutOfBounds { x: u8, y: u8 },

    /// Reserve stack number other than 0, 1 or 2.
    #[error("reserve stack {0} does not exist (expected 0, 1 or 2)")]
    InvalidOrigin(u8),

    #[error("there is no piece at {0}")]
    EmptyCell(Coord),

    #[error("reserve stack {0} is empty")]
    EmptyStack(ReserveIndex),

    #[error("player {player} cannot move a piece owned by player {owner}")]
    NotOwner { player: Player, owner: Player },

    /// The destination's top piece is not strictly smaller than the moved piece.
    #[error("a size {size} piece cannot cover the size {top} piece at {at}")]
    IllegalPlacement { at: Coord, size: Size, top: Size },

    #[error("the game is over, player {0} has won")]
    GameOver(Player),

    /// One placement completed a line for both players at once.
    #[error("this move would complete a line for both players")]
    AmbiguousWin,

    /// A starting layout or restored record breaks a board/reserve invariant.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("cannot read {input:?}: {reason}")]
    Parse { input: String, reason: &'static str },
}
