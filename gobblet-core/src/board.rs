//! The 4x4 board of piece stacks.
//!
//! Each cell holds every piece ever stacked there, bottom first. Only the top
//! piece is visible: it alone can be lifted, compared against when stacking,
//! or counted towards a line. Covered pieces are kept so that lifting the
//! piece above reveals them again.

use serde::{Deserialize, Serialize};

use crate::{Coord, GameError, Piece, Player, BOARD_SIZE};

const N: usize = BOARD_SIZE as usize;

/// Board state: one stack of pieces per cell, indexed `[y][x]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord")]
pub struct Board {
    cells: [[Vec<Piece>; N]; N],
}

#[derive(Deserialize)]
struct BoardRecord {
    cells: [[Vec<Piece>; N]; N],
}

impl TryFrom<BoardRecord> for Board {
    type Error = GameError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        let board = Board { cells: record.cells };
        for at in Coord::all() {
            if board.stack_at(at).windows(2).any(|pair| !pair[1].larger_than(pair[0])) {
                return Err(GameError::InvalidLayout(format!(
                    "stack at {at} must grow strictly from bottom to top"
                )));
            }
        }
        Ok(board)
    }
}

impl Board {
    /// The 10 winning lines: 4 rows, 4 columns, 2 diagonals.
    pub const WIN_LINES: [[Coord; 4]; 10] = [
        [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0), Coord::at(3, 0)], // Row 0
        [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1), Coord::at(3, 1)], // Row 1
        [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2), Coord::at(3, 2)], // Row 2
        [Coord::at(0, 3), Coord::at(1, 3), Coord::at(2, 3), Coord::at(3, 3)], // Row 3
        [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2), Coord::at(0, 3)], // Col 0
        [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2), Coord::at(1, 3)], // Col 1
        [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2), Coord::at(2, 3)], // Col 2
        [Coord::at(3, 0), Coord::at(3, 1), Coord::at(3, 2), Coord::at(3, 3)], // Col 3
        [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2), Coord::at(3, 3)], // Main diagonal
        [Coord::at(3, 0), Coord::at(2, 1), Coord::at(1, 2), Coord::at(0, 3)], // Anti-diagonal
    ];

    /// Bitmasks for [`Self::WIN_LINES`], bit `i` = cell with [`Coord::index`] `i`.
    const WIN_MASKS: [u16; 10] = [
        0x000F, // Row 0: cells 0-3
        0x00F0, // Row 1: cells 4-7
        0x0F00, // Row 2: cells 8-11
        0xF000, // Row 3: cells 12-15
        0x1111, // Col 0: cells 0,4,8,12
        0x2222, // Col 1
        0x4444, // Col 2
        0x8888, // Col 3
        0x8421, // Main diagonal: cells 0,5,10,15
        0x1248, // Anti-diagonal: cells 3,6,9,12
    ];

    /// Create a new empty board.
    #[inline]
    pub fn new() -> Board {
        Board::default()
    }

    /// The full stack at a cell, bottom first.
    #[inline]
    pub fn stack_at(&self, at: Coord) -> &[Piece] {
        &self.cells[at.y() as usize][at.x() as usize]
    }

    /// Get the top (visible) piece at a cell, or None if it is empty.
    #[inline]
    pub fn top_at(&self, at: Coord) -> Option<Piece> {
        self.stack_at(at).last().copied()
    }

    #[inline]
    pub fn is_empty(&self, at: Coord) -> bool {
        self.stack_at(at).is_empty()
    }

    /// Check if `piece` may be placed at `at`: the cell is empty or its top
    /// piece is strictly smaller, whoever owns it.
    #[inline]
    pub fn can_place(&self, at: Coord, piece: Piece) -> bool {
        self.check_placement(at, piece).is_ok()
    }

    /// [`Self::can_place`] with the reason for a refusal.
    pub fn check_placement(&self, at: Coord, piece: Piece) -> Result<(), GameError> {
        match self.top_at(at) {
            Some(top) if !piece.larger_than(top) => Err(GameError::IllegalPlacement {
                at,
                size: piece.size(),
                top: top.size(),
            }),
            _ => Ok(()),
        }
    }

    /// Push a piece onto a cell, covering the previous top piece.
    pub fn place(&mut self, at: Coord, piece: Piece) -> Result<(), GameError> {
        self.check_placement(at, piece)?;
        self.cells[at.y() as usize][at.x() as usize].push(piece);
        Ok(())
    }

    /// Pop the top piece of a cell, revealing the one beneath.
    pub fn remove_top(&mut self, at: Coord) -> Result<Piece, GameError> {
        self.cells[at.y() as usize][at.x() as usize]
            .pop()
            .ok_or(GameError::EmptyCell(at))
    }

    /// Count a player's pieces on the board by size, covered ones included.
    /// Returns `[tiny, small, medium, large]`.
    pub fn pieces_on_board(&self, player: Player) -> [u8; 4] {
        let mut counts = [0u8; 4];
        for at in Coord::all() {
            for piece in self.stack_at(at) {
                if piece.owner() == player {
                    counts[piece.size().index() as usize] += 1;
                }
            }
        }
        counts
    }

    // ========== Win Detection ==========

    /// Compute visibility masks for both players.
    /// Returns (p1_mask, p2_mask) where bit i is set if that player owns the top piece of cell i.
    pub fn visibility_masks(&self) -> (u16, u16) {
        let mut p1_mask = 0u16;
        let mut p2_mask = 0u16;

        for at in Coord::all() {
            match self.top_at(at).map(Piece::owner) {
                Some(Player::One) => p1_mask |= 1 << at.index(),
                Some(Player::Two) => p2_mask |= 1 << at.index(),
                None => {}
            }
        }

        (p1_mask, p2_mask)
    }

    fn player_mask(&self, player: Player) -> u16 {
        let (p1_mask, p2_mask) = self.visibility_masks();
        match player {
            Player::One => p1_mask,
            Player::Two => p2_mask,
        }
    }

    /// Check if the given player shows 4 in a row on top.
    pub fn has_won(&self, player: Player) -> bool {
        let mask = self.player_mask(player);
        Self::WIN_MASKS.iter().any(|&line| mask & line == line)
    }

    /// Get the first winning line for a player (rows, columns, then diagonals).
    pub fn winning_line(&self, player: Player) -> Option<[Coord; 4]> {
        let mask = self.player_mask(player);
        Self::WIN_MASKS
            .iter()
            .position(|&line| mask & line == line)
            .map(|i| Self::WIN_LINES[i])
    }

    /// The single player with a line, if any.
    ///
    /// Fails with `AmbiguousWin` when both players show a line at once.
    pub fn check_winner(&self) -> Result<Option<Player>, GameError> {
        let (p1_mask, p2_mask) = self.visibility_masks();
        let full = |mask: u16| Self::WIN_MASKS.iter().any(|&line| mask & line == line);

        match (full(p1_mask), full(p2_mask)) {
            (true, true) => Err(GameError::AmbiguousWin),
            (true, false) => Ok(Some(Player::One)),
            (false, true) => Ok(Some(Player::Two)),
            (false, false) => Ok(None),
        }
    }
}
